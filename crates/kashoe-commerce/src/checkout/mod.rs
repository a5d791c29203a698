//! Checkout module.
//!
//! Contains the order, contact, lesson and newsletter payloads, the form
//! state behind them, and the flows that submit them.

mod flow;
mod forms;
mod order;
mod submission;

pub use flow::{
    place_order, register_lesson, send_contact, subscribe_newsletter, CartAccess, ClubGateway,
    SubmitError, SubmitOutcome, CONTACT_FAILED, CONTACT_SENT, LESSON_FAILED, LESSON_REGISTERED,
    NEWSLETTER_FAILED, NEWSLETTER_SUBSCRIBED, ORDER_FAILED, ORDER_PLACED,
};
pub use forms::{
    is_plausible_email, CheckoutForm, ContactForm, LessonForm, NewsletterForm, STUDENT_AGES,
};
pub use order::{Order, OrderItem, OrderRequest, OrderStatus};
pub use submission::{
    ContactMessage, ContactSubmission, LessonRegistration, LessonRegistrationRequest,
    NewsletterSignup, NewsletterSubscription, RegistrationStatus,
};
