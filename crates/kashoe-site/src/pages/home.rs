use leptos::prelude::*;

const FEATURES: [(&str, &str, &str); 4] = [
    ("👥", "Community", "Join a vibrant community of young chess enthusiasts"),
    ("♥", "Faith-Based", "Building character and values through chess"),
    ("📖", "Expert Training", "Learn from experienced coaches and mentors"),
    ("🏆", "Tournaments", "Regular competitions and exciting events"),
];

const EXPLORE: [(&str, &str, &str, &str); 3] = [
    ("/events", "📅", "Events", "Check out our upcoming tournaments and activities"),
    ("/shop", "🛍", "Shop", "Browse chess boards, clocks, and club merchandise"),
    ("/lessons", "📖", "Lessons", "Enroll in our expert-led chess training programs"),
];

/// Landing page.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <section class="hero hero-home">
            <div class="container hero-content">
                <span class="hero-mark">"♔"</span>
                <h1>"Welcome to Kashoe Chess Club"</h1>
                <p class="lead">"A faith-based chess club nurturing young minds in Nairobi, Kenya"</p>
                <div class="hero-actions">
                    <a href="/lessons" class="btn btn-accent">"Get Started"</a>
                    <a href="/about" class="btn btn-outline">"Learn More"</a>
                </div>
            </div>
        </section>

        <section class="section">
            <div class="container">
                <div class="section-heading">
                    <h2>"Why Join Kashoe?"</h2>
                    <p>"Discover the benefits of being part of our chess family"</p>
                </div>
                <div class="card-grid">
                    {FEATURES
                        .into_iter()
                        .map(|(icon, title, description)| view! {
                            <div class="card feature">
                                <div class="feature-icon">{icon}</div>
                                <h3>{title}</h3>
                                <p>{description}</p>
                            </div>
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>

        <section class="section section-muted">
            <div class="container split">
                <div>
                    <h2>"Chess for Every Child"</h2>
                    <p>
                        "At Kashoe Chess Club, we believe every child has the potential to excel. Through chess, we teach critical thinking, patience, and strategic planning while fostering a love for learning."
                    </p>
                    <p>
                        "Our faith-based approach ensures that children not only learn the game but also develop strong character and values that will serve them throughout their lives."
                    </p>
                    <a href="/about" class="btn btn-primary">"Read Our Story"</a>
                </div>
                <img
                    class="rounded-image"
                    src="https://images.unsplash.com/photo-1745556377753-9efffe9181ef"
                    alt="Children playing chess"
                />
            </div>
        </section>

        <section class="section">
            <div class="container">
                <div class="section-heading">
                    <h2>"Explore More"</h2>
                </div>
                <div class="card-grid three">
                    {EXPLORE
                        .into_iter()
                        .map(|(href, icon, title, description)| view! {
                            <a href=href class="card explore">
                                <div class="explore-icon">{icon}</div>
                                <h3>{title}</h3>
                                <p>{description}</p>
                            </a>
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>

        <section class="cta">
            <div class="container">
                <h2>"Ready to Join?"</h2>
                <p>"Start your chess journey with Kashoe Chess Club today!"</p>
                <a href="/contact" class="btn btn-light">"Contact Us"</a>
            </div>
        </section>
    }
}
