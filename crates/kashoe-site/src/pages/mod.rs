//! Routed pages.

mod about;
mod contact;
mod events;
mod home;
mod lessons;
mod shop;

pub use about::AboutPage;
pub use contact::ContactPage;
pub use events::EventsPage;
pub use home::HomePage;
pub use lessons::LessonsPage;
pub use shop::ShopPage;
