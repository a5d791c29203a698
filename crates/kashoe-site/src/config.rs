//! Build-time site configuration.

use kashoe_commerce::cart::CART_STORAGE_KEY;
use kashoe_data::ClubApi;

/// Backend used when nothing else is configured (the dev server's port).
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8001";

/// Settings baked into the bundle at build time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    /// Scheme and host of the backend, without the `/api` suffix.
    pub api_base_url: String,
    /// `tracing` filter directive, e.g. `info` or `kashoe_commerce=debug`.
    pub log_level: String,
    /// `localStorage` key holding the cart snapshot.
    pub cart_storage_key: String,
}

impl SiteConfig {
    /// Read `KASHOE_BACKEND_URL` and `KASHOE_LOG` as they were when the bundle
    /// was compiled. Without a backend URL the page's own origin is used.
    pub fn from_env() -> Self {
        Self {
            api_base_url: resolve_backend_url(option_env!("KASHOE_BACKEND_URL"), window_origin()),
            log_level: option_env!("KASHOE_LOG")
                .filter(|level| !level.trim().is_empty())
                .unwrap_or("info")
                .to_string(),
            cart_storage_key: CART_STORAGE_KEY.to_string(),
        }
    }

    /// A client for the configured backend.
    pub fn api(&self) -> ClubApi {
        ClubApi::new(&self.api_base_url)
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_BACKEND_URL.to_string(),
            log_level: "info".to_string(),
            cart_storage_key: CART_STORAGE_KEY.to_string(),
        }
    }
}

fn resolve_backend_url(configured: Option<&str>, origin: Option<String>) -> String {
    configured
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .map(str::to_string)
        .or(origin)
        .unwrap_or_else(|| DEFAULT_BACKEND_URL.to_string())
        .trim_end_matches('/')
        .to_string()
}

#[cfg(target_arch = "wasm32")]
fn window_origin() -> Option<String> {
    web_sys::window()?.location().origin().ok()
}

#[cfg(not(target_arch = "wasm32"))]
fn window_origin() -> Option<String> {
    None
}
