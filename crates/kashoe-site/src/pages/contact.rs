use crate::components::{Field, TextArea};
use crate::config::SiteConfig;
use crate::toast::use_toasts;
use kashoe_commerce::checkout::{send_contact, ContactForm};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;

const CONTACT_CARDS: [(&str, &str, &str, &str); 3] = [
    (
        "📍",
        "Location",
        "Nairobi, Kenya",
        "We're located in the heart of Nairobi, serving the community with quality chess education.",
    ),
    (
        "✉",
        "Email",
        "info@kashoechess.club",
        "Send us an email anytime. We typically respond within 24 hours.",
    ),
    (
        "☎",
        "Phone",
        "+254 XXX XXX XXX",
        "Call us during business hours for immediate assistance.",
    ),
];

#[component]
pub fn ContactPage() -> impl IntoView {
    view! {
        <section class="hero hero-contact">
            <div class="container hero-content">
                <span class="hero-mark">"✉"</span>
                <h1>"Contact Us"</h1>
                <p class="lead">"Have questions? We'd love to hear from you!"</p>
            </div>
        </section>

        <section class="section">
            <div class="container split">
                <div class="contact-info">
                    {CONTACT_CARDS
                        .into_iter()
                        .map(|(icon, title, value, note)| view! {
                            <div class="card contact-card">
                                <div class="feature-icon">{icon}</div>
                                <div>
                                    <h3>{title}</h3>
                                    <p>{value}</p>
                                    <p class="muted small">{note}</p>
                                </div>
                            </div>
                        })
                        .collect::<Vec<_>>()}
                </div>
                <ContactFormCard/>
            </div>
        </section>

        <section class="section section-muted">
            <div class="container narrow center map-placeholder">
                <span class="hero-mark">"📍"</span>
                <h3>"Kashoe Chess Club"</h3>
                <p>"Nairobi, Kenya"</p>
            </div>
        </section>
    }
}

#[component]
fn ContactFormCard() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let toasts = use_toasts();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let subject = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let pending = RwSignal::new(false);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }

        let api = config.api();
        let mut form = ContactForm {
            name: name.get_untracked(),
            email: email.get_untracked(),
            phone: phone.get_untracked(),
            subject: subject.get_untracked(),
            message: message.get_untracked(),
        };
        pending.set(true);
        spawn_local(async move {
            match send_contact(&api, &mut form).await {
                Ok(outcome) => {
                    toasts.success(outcome.message);
                    name.try_set(form.name);
                    email.try_set(form.email);
                    phone.try_set(form.phone);
                    subject.try_set(form.subject);
                    message.try_set(form.message);
                }
                Err(e) => toasts.error(e.user_message()),
            }
            pending.try_set(false);
        });
    };

    view! {
        <div class="card form-card">
            <h2>"Send Us a Message"</h2>
            <form class="form" on:submit=on_submit>
                <Field id="name" label="Name *" value=name/>
                <div class="form-row">
                    <Field id="email" label="Email *" kind="email" value=email/>
                    <Field id="phone" label="Phone (Optional)" kind="tel" required=false value=phone/>
                </div>
                <Field id="subject" label="Subject *" value=subject/>
                <TextArea id="message" label="Message *" rows=6 required=true value=message/>
                <button type="submit" class="btn btn-primary btn-block" disabled=move || pending.get()>
                    {move || if pending.get() { "Sending..." } else { "Send Message" }}
                </button>
            </form>
        </div>
    }
}
