//! Catalog module.
//!
//! Contains the shop products, club events and lesson programmes served
//! by the backend.

mod event;
mod lesson;
mod product;

pub use event::{long_date, with_status, ClubEvent, EventStatus, NewEvent};
pub use lesson::LessonLevel;
pub use product::{filter_by_category, NewProduct, Product, ProductCategory};
