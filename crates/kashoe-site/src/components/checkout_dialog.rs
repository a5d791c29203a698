//! Checkout form: places an order for the cart contents.

use crate::cart::use_cart;
use crate::components::Field;
use crate::config::SiteConfig;
use crate::toast::use_toasts;
use kashoe_commerce::checkout::{place_order, CheckoutForm};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn CheckoutDialog(open: RwSignal<bool>) -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let cart = use_cart();
    let toasts = use_toasts();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let pending = RwSignal::new(false);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }

        let api = config.api();
        let mut form = CheckoutForm {
            customer_name: name.get_untracked(),
            customer_email: email.get_untracked(),
            customer_phone: phone.get_untracked(),
        };
        pending.set(true);
        spawn_local(async move {
            match place_order(&api, &mut form, &cart).await {
                Ok(outcome) => {
                    toasts.success(outcome.message);
                    name.try_set(form.customer_name);
                    email.try_set(form.customer_email);
                    phone.try_set(form.customer_phone);
                    open.try_set(false);
                }
                Err(e) => toasts.error(e.user_message()),
            }
            pending.try_set(false);
        });
    };

    view! {
        <Show when=move || open.get()>
            <div class="overlay" on:click=move |_| open.set(false)></div>
            <div class="dialog" role="dialog" aria-modal="true" aria-labelledby="checkout-title">
                <div class="dialog-header">
                    <h2 id="checkout-title">"Checkout"</h2>
                    <p class="muted">
                        "Complete your order. You'll receive an M-Pesa payment prompt on your phone."
                    </p>
                </div>

                <form class="form" on:submit=on_submit.clone()>
                    <Field id="customer_name" label="Full Name" value=name/>
                    <Field id="customer_email" label="Email" kind="email" value=email/>
                    <Field
                        id="customer_phone"
                        label="Phone Number (M-Pesa)"
                        kind="tel"
                        placeholder="254XXXXXXXXX"
                        value=phone
                    />

                    <div class="total-box">
                        <span>"Total Amount:"</span>
                        <span class="total">{move || cart.total().display()}</span>
                    </div>

                    <button type="submit" class="btn btn-primary btn-block" disabled=move || pending.get()>
                        {move || if pending.get() { "Processing..." } else { "Place Order & Pay" }}
                    </button>
                </form>
            </div>
        </Show>
    }
}
