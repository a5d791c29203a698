use crate::components::{Field, TextArea};
use crate::config::SiteConfig;
use crate::toast::use_toasts;
use kashoe_commerce::catalog::LessonLevel;
use kashoe_commerce::checkout::{register_lesson, LessonForm, STUDENT_AGES};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;

const WHY_CHOOSE: [(&str, &str); 4] = [
    ("Experienced Coaches", "Learn from certified chess instructors with years of experience"),
    ("Small Class Sizes", "Personalized attention with limited students per session"),
    ("Faith-Based Values", "Character development alongside chess skills"),
    ("Flexible Scheduling", "Weekend and after-school options available"),
];

fn level_icon(level: LessonLevel) -> &'static str {
    match level {
        LessonLevel::Beginner => "📖",
        LessonLevel::Intermediate => "👥",
        LessonLevel::Advanced => "🏆",
    }
}

/// Lesson programmes and the registration form.
#[component]
pub fn LessonsPage() -> impl IntoView {
    view! {
        <section class="hero hero-lessons">
            <div class="container hero-content">
                <span class="hero-mark">"📖"</span>
                <h1>"Chess Lessons"</h1>
                <p class="lead">"Expert-led training programs for all skill levels"</p>
            </div>
        </section>

        <section class="section">
            <div class="container">
                <h2 class="center">"Our Programs"</h2>
                <div class="card-grid three">
                    {LessonLevel::ALL
                        .into_iter()
                        .map(|level| view! {
                            <div class=format!("card program program-{}", level.as_str().to_lowercase())>
                                <div class="feature-icon">{level_icon(level)}</div>
                                <h3>{level.as_str()}</h3>
                                <p class="muted">{level.description()}</p>
                                <ul class="checklist">
                                    {level
                                        .features()
                                        .iter()
                                        .map(|feature| view! { <li>"★ " {*feature}</li> })
                                        .collect::<Vec<_>>()}
                                </ul>
                            </div>
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>

        <section class="section section-muted">
            <div class="container narrow">
                <img
                    class="rounded-image"
                    src="https://images.pexels.com/photos/5477779/pexels-photo-5477779.jpeg"
                    alt="Colorful chess learning"
                />
            </div>
        </section>

        <section class="section">
            <div class="container narrow">
                <RegistrationForm/>
            </div>
        </section>

        <section class="section section-tinted">
            <div class="container narrow center">
                <h2>"Why Choose Kashoe Chess Lessons?"</h2>
                <div class="card-grid two">
                    {WHY_CHOOSE
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

#[component]
fn RegistrationForm() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let toasts = use_toasts();

    let student_name = RwSignal::new(String::new());
    let parent_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let age = RwSignal::new(String::new());
    let lesson_type = RwSignal::new(None::<LessonLevel>);
    let preferred_schedule = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let pending = RwSignal::new(false);

    let write_back = move |form: LessonForm| {
        student_name.try_set(form.student_name);
        parent_name.try_set(form.parent_name);
        email.try_set(form.email);
        phone.try_set(form.phone);
        age.try_set(form.age);
        lesson_type.try_set(form.lesson_type);
        preferred_schedule.try_set(form.preferred_schedule);
        message.try_set(form.message);
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }

        let api = config.api();
        let mut form = LessonForm {
            student_name: student_name.get_untracked(),
            parent_name: parent_name.get_untracked(),
            email: email.get_untracked(),
            phone: phone.get_untracked(),
            age: age.get_untracked(),
            lesson_type: lesson_type.get_untracked(),
            preferred_schedule: preferred_schedule.get_untracked(),
            message: message.get_untracked(),
        };
        pending.set(true);
        spawn_local(async move {
            match register_lesson(&api, &mut form).await {
                Ok(outcome) => {
                    toasts.success(outcome.message);
                    write_back(form);
                }
                Err(e) => toasts.error(e.user_message()),
            }
            pending.try_set(false);
        });
    };

    let min_age = STUDENT_AGES.start().to_string();
    let max_age = STUDENT_AGES.end().to_string();

    view! {
        <div class="card form-card">
            <div class="center">
                <h2>"Register for Lessons"</h2>
                <p class="muted">"Fill out the form below and we'll contact you to confirm your enrollment"</p>
            </div>

            <form class="form" on:submit=on_submit>
                <div class="form-row">
                    <Field id="student_name" label="Student Name *" value=student_name/>
                    <Field id="parent_name" label="Parent/Guardian Name *" value=parent_name/>
                </div>
                <div class="form-row">
                    <Field id="email" label="Email *" kind="email" value=email/>
                    <Field id="phone" label="Phone Number *" kind="tel" value=phone/>
                </div>
                <div class="form-row">
                    <div class="field">
                        <label for="age">"Student Age *"</label>
                        <input
                            id="age"
                            name="age"
                            type="number"
                            min=min_age
                            max=max_age
                            required
                            prop:value=move || age.get()
                            on:input=move |ev| age.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="field">
                        <label for="lesson_type">"Lesson Level *"</label>
                        <select
                            id="lesson_type"
                            name="lesson_type"
                            required
                            prop:value=move || lesson_type.get().map(|level| level.as_str()).unwrap_or("")
                            on:change=move |ev| lesson_type.set(event_target_value(&ev).parse().ok())
                        >
                            <option value="" disabled>"Select level"</option>
                            {LessonLevel::ALL
                                .into_iter()
                                .map(|level| view! { <option value=level.as_str()>{level.as_str()}</option> })
                                .collect::<Vec<_>>()}
                        </select>
                    </div>
                </div>
                <Field
                    id="preferred_schedule"
                    label="Preferred Schedule *"
                    placeholder="e.g., Weekends, After school on Tuesdays"
                    value=preferred_schedule
                />
                <TextArea
                    id="message"
                    label="Additional Information (Optional)"
                    placeholder="Any questions or special requirements?"
                    value=message
                />
                <button type="submit" class="btn btn-primary btn-block" disabled=move || pending.get()>
                    {move || if pending.get() { "Submitting..." } else { "Submit Registration" }}
                </button>
                <p class="muted center small">
                    "* All registrations are subject to admin approval. We'll contact you within 24-48 hours."
                </p>
            </form>
        </div>
    }
}
