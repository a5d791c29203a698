//! Slide-over cart panel.

use crate::cart::use_cart;
use crate::components::CheckoutDialog;
use kashoe_commerce::cart::CartLineItem;
use leptos::prelude::*;

#[component]
pub fn CartSheet(open: RwSignal<bool>) -> impl IntoView {
    let cart = use_cart();
    let checkout_open = RwSignal::new(false);

    let proceed = move |_| {
        open.set(false);
        checkout_open.set(true);
    };

    view! {
        <Show when=move || open.get()>
            <div class="overlay" on:click=move |_| open.set(false)></div>
            <aside class="sheet" aria-label="Shopping Cart">
                <div class="sheet-header">
                    <h2>"Shopping Cart"</h2>
                    <button class="icon-btn" aria-label="Close cart" on:click=move |_| open.set(false)>
                        "✕"
                    </button>
                </div>

                <Show
                    when=move || !cart.is_empty()
                    fallback=|| view! {
                        <div class="sheet-empty">
                            <p>"Your cart is empty"</p>
                            <p class="muted">"Add some chess items to get started!"</p>
                        </div>
                    }
                >
                    <div class="sheet-items">
                        {move || cart.items().into_iter().map(|item| view! { <CartLine item/> }).collect_view()}
                    </div>

                    <div class="sheet-footer">
                        <hr/>
                        <div class="total-row">
                            <span>"Total:"</span>
                            <span class="total">{move || cart.total().display()}</span>
                        </div>
                        <button class="btn btn-primary btn-block" on:click=proceed>
                            "Proceed to Checkout"
                        </button>
                    </div>
                </Show>
            </aside>
        </Show>

        <CheckoutDialog open=checkout_open/>
    }
}

#[component]
fn CartLine(item: CartLineItem) -> impl IntoView {
    let cart = use_cart();
    let quantity = item.quantity;
    let decrease_id = item.id.clone();
    let increase_id = item.id.clone();
    let remove_id = item.id.clone();

    view! {
        <div class="cart-line">
            {item.image_url.clone().map(|src| view! {
                <img src=src alt=item.name.clone() class="cart-thumb"/>
            })}
            <div class="cart-line-body">
                <h4>{item.name.clone()}</h4>
                <p class="price">{item.price.display()}</p>
                <div class="quantity-controls">
                    <button
                        class="icon-btn"
                        aria-label="Decrease quantity"
                        on:click=move |_| cart.set_quantity(&decrease_id, quantity - 1)
                    >
                        "−"
                    </button>
                    <span class="quantity">{quantity}</span>
                    <button
                        class="icon-btn"
                        aria-label="Increase quantity"
                        on:click=move |_| cart.set_quantity(&increase_id, quantity + 1)
                    >
                        "+"
                    </button>
                    <button
                        class="icon-btn"
                        aria-label="Remove item"
                        on:click=move |_| cart.remove(&remove_id)
                    >
                        "🗑"
                    </button>
                </div>
            </div>
        </div>
    }
}
