use leptos::prelude::*;

const STORY: [&str; 3] = [
    "Kashoe Chess Club was founded with a vision to combine the intellectual rigor of chess with faith-based values. Located in the heart of Nairobi, Kenya, we've created a nurturing environment where children can develop their chess skills while building strong moral foundations.",
    "Our club is more than just a place to learn chess. It's a community where young minds are encouraged to think critically, act with integrity, and grow in wisdom. We believe that the principles learned through chess (patience, strategy, and perseverance) are essential life skills that extend far beyond the board.",
    "Since our inception, we've helped hundreds of children discover the joy of chess while instilling values that will guide them throughout their lives. Whether a child is a complete beginner or an experienced player, Kashoe Chess Club provides the perfect environment for growth and learning.",
];

const PILLARS: [(&str, &str, &str); 4] = [
    ("🎯", "Our Mission", "To nurture young chess players through quality training, faith-based values, and a supportive community in Nairobi, Kenya."),
    ("♥", "Our Vision", "To be Kenya's leading chess club where children develop both intellectual excellence and strong character."),
    ("👥", "Our Values", "Integrity, excellence, faith, community, and continuous learning guide everything we do."),
    ("🏅", "Our Commitment", "Providing accessible, high-quality chess education to every child who wants to learn and grow."),
];

const OFFERINGS: [(&str, &str); 4] = [
    ("Structured Lessons", "Age-appropriate chess training from beginner to advanced levels, taught by experienced coaches."),
    ("Regular Tournaments", "Exciting competitions that help students apply their skills and build confidence."),
    ("Character Development", "Faith-based guidance that helps children develop integrity, patience, and good sportsmanship."),
    ("Community Events", "Fun activities, workshops, and social events that bring families together."),
];

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <section class="hero hero-about">
            <div class="container hero-content">
                <h1>"About Kashoe Chess Club"</h1>
                <p class="lead">"Nurturing young minds through chess and faith in Nairobi, Kenya"</p>
            </div>
        </section>

        <section class="section">
            <div class="container narrow">
                <h2 class="center">"Our Story"</h2>
                {STORY.into_iter().map(|paragraph| view! { <p class="story">{paragraph}</p> }).collect::<Vec<_>>()}
            </div>
        </section>

        <section class="section section-muted">
            <div class="container split">
                <img
                    class="rounded-image"
                    src="https://images.unsplash.com/photo-1763635031729-b3db264dd8c0"
                    alt="Child playing chess"
                />
                <img
                    class="rounded-image"
                    src="https://images.pexels.com/photos/7104222/pexels-photo-7104222.jpeg"
                    alt="Children at chess club"
                />
            </div>
        </section>

        <section class="section">
            <div class="container card-grid">
                {PILLARS
                    .into_iter()
                    .map(|(icon, title, text)| view! {
                        <div class="card feature">
                            <div class="feature-icon">{icon}</div>
                            <h3>{title}</h3>
                            <p>{text}</p>
                        </div>
                    })
                    .collect::<Vec<_>>()}
            </div>
        </section>

        <section class="section section-muted">
            <div class="container">
                <h2 class="center">"What We Offer"</h2>
                <div class="card-grid two">
                    {OFFERINGS
                        .into_iter()
                        .map(|(title, text)| view! {
                            <div class="card">
                                <h3 class="accent">{title}</h3>
                                <p>{text}</p>
                            </div>
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}
