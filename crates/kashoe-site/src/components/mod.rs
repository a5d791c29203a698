//! Shared components.

mod cart_sheet;
mod checkout_dialog;
mod layout;

pub use cart_sheet::CartSheet;
pub use checkout_dialog::CheckoutDialog;
pub use layout::{Footer, Header};

use leptos::prelude::*;

// ============================================================================
// Form Fields
// ============================================================================

/// Labelled single-line input bound to `value`.
#[component]
pub fn Field(
    id: &'static str,
    label: &'static str,
    value: RwSignal<String>,
    #[prop(default = "text")] kind: &'static str,
    #[prop(default = "")] placeholder: &'static str,
    #[prop(default = true)] required: bool,
) -> impl IntoView {
    view! {
        <div class="field">
            <label for=id>{label}</label>
            <input
                id=id
                name=id
                type=kind
                placeholder=placeholder
                required=required
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </div>
    }
}

/// Labelled multi-line input bound to `value`.
#[component]
pub fn TextArea(
    id: &'static str,
    label: &'static str,
    value: RwSignal<String>,
    #[prop(default = 4)] rows: u32,
    #[prop(default = "")] placeholder: &'static str,
    #[prop(default = false)] required: bool,
) -> impl IntoView {
    view! {
        <div class="field">
            <label for=id>{label}</label>
            <textarea
                id=id
                name=id
                rows=rows
                placeholder=placeholder
                required=required
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            ></textarea>
        </div>
    }
}

// ============================================================================
// Skeleton Components (Loading States)
// ============================================================================

#[component]
pub fn CardGridSkeleton(#[prop(default = 4)] cards: usize) -> impl IntoView {
    view! {
        <div class="card-grid">
            {(0..cards).map(|_| view! { <CardSkeleton/> }).collect::<Vec<_>>()}
        </div>
    }
}

#[component]
fn CardSkeleton() -> impl IntoView {
    view! {
        <div class="card">
            <div class="skeleton" style="width: 100%; height: 12rem;"></div>
            <div class="card-body">
                <div class="skeleton" style="width: 80%; height: 1.5rem; margin-bottom: 0.5rem;"></div>
                <div class="skeleton" style="width: 40%; height: 1.25rem;"></div>
            </div>
        </div>
    }
}
