//! Page chrome: header with navigation and cart, footer with newsletter form.

use crate::cart::use_cart;
use crate::components::CartSheet;
use crate::config::SiteConfig;
use crate::toast::use_toasts;
use kashoe_commerce::checkout::{subscribe_newsletter, NewsletterForm};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_location;

const NAV_LINKS: [(&str, &str); 6] = [
    ("Home", "/"),
    ("About Us", "/about"),
    ("Events", "/events"),
    ("Shop", "/shop"),
    ("Lessons", "/lessons"),
    ("Contact", "/contact"),
];

const SOCIAL_LINKS: [(&str, &str); 4] = [
    ("Facebook", "https://facebook.com"),
    ("Instagram", "https://instagram.com"),
    ("Twitter", "https://twitter.com"),
    ("YouTube", "https://youtube.com"),
];

#[component]
fn Logo(#[prop(default = false)] dark: bool) -> impl IntoView {
    view! {
        <a href="/" class="logo" class:logo-dark=dark>
            <span class="logo-mark">"♔"</span>
            <span class="logo-text">
                <span class="logo-name">"Kashoe"</span>
                <span class="logo-sub">"Chess Club"</span>
            </span>
        </a>
    }
}

#[component]
fn NavLinks(#[prop(optional)] on_navigate: Option<Callback<()>>) -> impl IntoView {
    let pathname = use_location().pathname;

    NAV_LINKS
        .into_iter()
        .map(|(name, path)| {
            let active = move || pathname.get() == path;
            view! {
                <a
                    href=path
                    class="nav-link"
                    class:active=active
                    on:click=move |_| {
                        if let Some(on_navigate) = on_navigate {
                            on_navigate.run(());
                        }
                    }
                >
                    {name}
                </a>
            }
        })
        .collect::<Vec<_>>()
}

#[component]
pub fn Header() -> impl IntoView {
    let cart = use_cart();
    let menu_open = RwSignal::new(false);
    let cart_open = RwSignal::new(false);

    view! {
        <header class="site-header">
            <div class="container header-row">
                <Logo/>

                <nav class="nav-desktop">
                    <NavLinks/>
                </nav>

                <div class="header-actions">
                    <button
                        class="icon-btn cart-button"
                        aria-label="Open cart"
                        on:click=move |_| cart_open.set(true)
                    >
                        "🛒"
                        <Show when=move || { cart.count() > 0 }>
                            <span class="badge cart-count">{move || cart.count()}</span>
                        </Show>
                    </button>
                    <button
                        class="icon-btn menu-button"
                        aria-label="Toggle menu"
                        on:click=move |_| menu_open.update(|open| *open = !*open)
                    >
                        {move || if menu_open.get() { "✕" } else { "☰" }}
                    </button>
                </div>
            </div>

            <Show when=move || menu_open.get()>
                <nav class="nav-mobile container">
                    <NavLinks on_navigate=Callback::new(move |_: ()| menu_open.set(false))/>
                </nav>
            </Show>
        </header>

        <CartSheet open=cart_open/>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <div class="container footer-grid">
                <div>
                    <Logo dark=true/>
                    <p>
                        "A faith-based chess club nurturing young minds through the beautiful game of chess in Nairobi, Kenya."
                    </p>
                </div>

                <div>
                    <h3>"Quick Links"</h3>
                    <ul>
                        {NAV_LINKS
                            .into_iter()
                            .map(|(name, path)| view! { <li><a href=path>{name}</a></li> })
                            .collect::<Vec<_>>()}
                    </ul>
                </div>

                <div>
                    <h3>"Contact Us"</h3>
                    <ul>
                        <li>"📍 Nairobi, Kenya"</li>
                        <li>"✉ info@kashoechess.club"</li>
                        <li>"☎ +254 XXX XXX XXX"</li>
                    </ul>
                </div>

                <div>
                    <h3>"Follow Us"</h3>
                    <div class="social-links">
                        {SOCIAL_LINKS
                            .into_iter()
                            .map(|(name, href)| view! {
                                <a href=href target="_blank" rel="noopener noreferrer">{name}</a>
                            })
                            .collect::<Vec<_>>()}
                    </div>
                    <p>"Stay connected with us on social media for updates, events, and chess tips!"</p>
                    <NewsletterSignup/>
                </div>
            </div>

            <div class="container footer-bottom">
                <p>"© Kashoe Chess Club. All rights reserved."</p>
                <p class="muted">"Nurturing young minds through chess in Nairobi, Kenya 🇰🇪"</p>
            </div>
        </footer>
    }
}

#[component]
fn NewsletterSignup() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let toasts = use_toasts();
    let email = RwSignal::new(String::new());
    let pending = RwSignal::new(false);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }

        let api = config.api();
        let mut form = NewsletterForm {
            email: email.get_untracked(),
        };
        pending.set(true);
        spawn_local(async move {
            match subscribe_newsletter(&api, &mut form).await {
                Ok(outcome) => {
                    email.try_set(form.email);
                    toasts.success(outcome.message);
                }
                Err(e) => toasts.error(e.user_message()),
            }
            pending.try_set(false);
        });
    };

    view! {
        <form class="newsletter" on:submit=on_submit>
            <label for="newsletter_email">"Club news in your inbox"</label>
            <div class="newsletter-row">
                <input
                    id="newsletter_email"
                    type="email"
                    placeholder="you@example.com"
                    required
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                <button type="submit" class="btn btn-primary" disabled=move || pending.get()>
                    {move || if pending.get() { "Subscribing..." } else { "Subscribe" }}
                </button>
            </div>
        </form>
    }
}
