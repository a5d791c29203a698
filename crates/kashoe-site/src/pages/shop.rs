use crate::cart::use_cart;
use crate::components::CardGridSkeleton;
use crate::config::SiteConfig;
use crate::toast::use_toasts;
use kashoe_commerce::cart::CartProduct;
use kashoe_commerce::catalog::{filter_by_category, Product, ProductCategory};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Product listing with category tabs.
#[component]
pub fn ShopPage() -> impl IntoView {
    let api = expect_context::<SiteConfig>().api();
    // `None` while loading.
    let products = RwSignal::new(None::<Vec<Product>>);
    let active = RwSignal::new(None::<ProductCategory>);

    spawn_local(async move {
        let loaded = match api.products(None).await {
            Ok(list) => list,
            Err(e) => {
                tracing::error!(error = %e, "Error fetching products");
                Vec::new()
            }
        };
        products.try_set(Some(loaded));
    });

    let visible = move || {
        products
            .get()
            .map(|list| filter_by_category(&list, active.get()))
    };

    view! {
        <section class="hero hero-shop">
            <div class="container hero-content">
                <span class="hero-mark">"🛒"</span>
                <h1>"Kashoe Chess Shop"</h1>
                <p class="lead">"Quality chess equipment, club merchandise, and lesson packages"</p>
            </div>
        </section>

        <section class="section">
            <div class="container">
                <div class="tabs" role="tablist">
                    <CategoryTab label="All" category=None active/>
                    {ProductCategory::ALL
                        .into_iter()
                        .map(|category| view! {
                            <CategoryTab label=category.tab_label() category=Some(category) active/>
                        })
                        .collect::<Vec<_>>()}
                </div>

                {move || match visible() {
                    None => view! {
                        <CardGridSkeleton/>
                        <p class="center muted">"Loading products..."</p>
                    }
                    .into_any(),
                    Some(list) if list.is_empty() => view! {
                        <div class="empty-state">
                            <span class="empty-icon">"📦"</span>
                            <p>"No products available in this category."</p>
                        </div>
                    }
                    .into_any(),
                    Some(list) => view! {
                        <div class="card-grid">
                            {list.into_iter().map(|product| view! { <ProductCard product/> }).collect::<Vec<_>>()}
                        </div>
                    }
                    .into_any(),
                }}
            </div>
        </section>

        <section class="section section-muted">
            <div class="container narrow center">
                <h2>"Shopping Information"</h2>
                <div class="card-grid three">
                    <div class="card">
                        <h3>"Secure Payment"</h3>
                        <p>"Pay securely with M-Pesa"</p>
                    </div>
                    <div class="card">
                        <h3>"Quality Guarantee"</h3>
                        <p>"Authentic chess equipment"</p>
                    </div>
                    <div class="card">
                        <h3>"Nairobi Delivery"</h3>
                        <p>"Fast delivery in Nairobi"</p>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn CategoryTab(
    label: &'static str,
    category: Option<ProductCategory>,
    active: RwSignal<Option<ProductCategory>>,
) -> impl IntoView {
    view! {
        <button
            role="tab"
            class="tab"
            class:active=move || active.get() == category
            on:click=move |_| active.set(category)
        >
            {label}
        </button>
    }
}

#[component]
fn ProductCard(product: Product) -> impl IntoView {
    let cart = use_cart();
    let toasts = use_toasts();

    let in_stock = product.in_stock();
    let stock_label = product.stock_label();
    let price = product.price_display();
    let badge = product.category.display_name();
    let cart_product = CartProduct::from(&product);

    let add_to_cart = move |_| {
        cart.add(cart_product.clone(), 1);
        toasts.success(format!("{} added to cart!", cart_product.name));
    };

    view! {
        <div class="card product-card">
            {match product.image_url.clone() {
                Some(src) => view! { <img src=src alt=product.name.clone() class="card-image"/> }.into_any(),
                None => view! { <div class="card-image placeholder">"📦"</div> }.into_any(),
            }}
            <div class="card-body">
                <div class="card-title-row">
                    <h3>{product.name.clone()}</h3>
                    <span class="badge badge-secondary">{badge}</span>
                </div>
                <p class="muted">{product.description.clone()}</p>
                <div class="price-row">
                    <span class="price">{price}</span>
                    <span class="badge" class:in-stock=in_stock class:out-of-stock=!in_stock>
                        {stock_label}
                    </span>
                </div>
            </div>
            <div class="card-footer">
                <button class="btn btn-primary btn-block" disabled=!in_stock on:click=add_to_cart>
                    "Add to Cart"
                </button>
            </div>
        </div>
    }
}
