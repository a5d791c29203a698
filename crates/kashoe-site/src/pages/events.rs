use crate::config::SiteConfig;
use kashoe_commerce::catalog::{with_status, ClubEvent, EventStatus};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Upcoming and past club events.
#[component]
pub fn EventsPage() -> impl IntoView {
    let api = expect_context::<SiteConfig>().api();
    let events = RwSignal::new(None::<Vec<ClubEvent>>);

    spawn_local(async move {
        let loaded = match api.events(None).await {
            Ok(list) => list,
            Err(e) => {
                tracing::error!(error = %e, "Error fetching events");
                Vec::new()
            }
        };
        events.try_set(Some(loaded));
    });

    let upcoming = move || events.get().map(|list| with_status(&list, EventStatus::Upcoming));
    let past = move || {
        events
            .get()
            .map(|list| with_status(&list, EventStatus::Completed))
            .unwrap_or_default()
    };

    view! {
        <section class="hero hero-events">
            <div class="container hero-content">
                <span class="hero-mark">"📅"</span>
                <h1>"Events & Tournaments"</h1>
                <p class="lead">"Join us for exciting chess tournaments, workshops, and community events"</p>
            </div>
        </section>

        <section class="section">
            <div class="container">
                <h2 class="center">"Upcoming Events"</h2>
                {move || match upcoming() {
                    None => view! { <p class="center muted">"Loading events..."</p> }.into_any(),
                    Some(list) if list.is_empty() => view! {
                        <div class="empty-state">
                            <span class="empty-icon">"📅"</span>
                            <p>"No upcoming events at the moment."</p>
                            <p class="muted">"Check back soon for exciting tournaments and activities!"</p>
                        </div>
                    }
                    .into_any(),
                    Some(list) => view! {
                        <div class="card-grid three">
                            {list.into_iter().map(|event| view! { <EventCard event/> }).collect::<Vec<_>>()}
                        </div>
                    }
                    .into_any(),
                }}
            </div>
        </section>

        <Show when=move || !past().is_empty()>
            <section class="section section-muted">
                <div class="container">
                    <h2 class="center">"Past Events"</h2>
                    <div class="card-grid three">
                        {move || past().into_iter().map(|event| view! { <EventCard event past=true/> }).collect::<Vec<_>>()}
                    </div>
                </div>
            </section>
        </Show>

        <section class="cta">
            <div class="container">
                <h2>"Want to Host an Event?"</h2>
                <p>"Get in touch with us to organize a chess event at Kashoe Chess Club"</p>
                <a href="/contact" class="btn btn-light">"Contact Us"</a>
            </div>
        </section>
    }
}

#[component]
fn EventCard(event: ClubEvent, #[prop(default = false)] past: bool) -> impl IntoView {
    let date = event.date_display();
    let participants = event.participants_label();
    let status_class = format!("badge status-{}", event.status);

    view! {
        <div class="card event-card" class:past=past>
            {event.image_url.clone().map(|src| view! {
                <img src=src alt=event.title.clone() class="card-image"/>
            })}
            <div class="card-body">
                <div class="card-title-row">
                    <h3>{event.title.clone()}</h3>
                    {(!past).then(|| view! { <span class=status_class>{event.status.as_str()}</span> })}
                </div>
                <p class="muted">{event.description.clone()}</p>
                <p class="meta">"🕒 " {date}</p>
                <p class="meta">"📍 " {event.location.clone()}</p>
                {(!past)
                    .then_some(participants)
                    .flatten()
                    .map(|label| view! { <p class="meta">"👥 " {label}</p> })}
                {(!past).then(|| view! {
                    <a href="/contact" class="btn btn-primary btn-block">"Register for Event"</a>
                })}
            </div>
        </div>
    }
}
