use kashoe_site::{logging, App, SiteConfig};

fn main() {
    console_error_panic_hook::set_once();

    let config = SiteConfig::from_env();
    logging::init(&config.log_level);
    tracing::info!(api = %config.api_base_url, "Starting Kashoe Chess Club site");

    leptos::mount::mount_to_body(move || leptos::view! { <App config/> });
}
