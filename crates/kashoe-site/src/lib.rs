//! Kashoe Chess Club website.
//!
//! A client-rendered Leptos app:
//! - Informational pages (home, about, events, lessons, contact)
//! - Shop with a persisted cart and M-Pesa checkout
//! - Lesson registration, contact and newsletter forms posting to the club API

mod app;
pub mod cart;
mod components;
pub mod config;
pub mod logging;
mod pages;
pub mod toast;

pub use app::App;
pub use config::SiteConfig;
