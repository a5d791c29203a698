//! Application shell and routes.

use crate::cart::CartHandle;
use crate::components::{Footer, Header};
use crate::config::SiteConfig;
use crate::pages::{AboutPage, ContactPage, EventsPage, HomePage, LessonsPage, ShopPage};
use crate::toast::{Toaster, Toasts};
use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

// ============================================================================
// App Component
// ============================================================================

#[component]
pub fn App(config: SiteConfig) -> impl IntoView {
    provide_meta_context();
    CartHandle::provide(&config);
    Toasts::provide();
    provide_context(config);

    let fallback = || view! { <NotFound/> }.into_view();

    view! {
        <Meta name="description" content="Kashoe Chess Club - A faith-based chess club nurturing young minds in Nairobi, Kenya"/>
        <Title text="Kashoe Chess Club"/>

        <Router>
            <div class="app">
                <Header/>
                <main>
                    <Routes fallback>
                        <Route path=path!("/") view=HomePage/>
                        <Route path=path!("/about") view=AboutPage/>
                        <Route path=path!("/events") view=EventsPage/>
                        <Route path=path!("/shop") view=ShopPage/>
                        <Route path=path!("/lessons") view=LessonsPage/>
                        <Route path=path!("/contact") view=ContactPage/>
                    </Routes>
                </main>
                <Footer/>
                <Toaster/>
            </div>
        </Router>
    }
}

/// 404 page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"404"</h1>
            <p>"Page not found"</p>
            <a href="/" class="btn">"Back to Home"</a>
        </div>
    }
}
