//! Submission flows.
//!
//! Each flow validates a form, performs exactly one gateway call and does
//! the local bookkeeping: on success the cart and/or form are cleared, on
//! failure nothing local changes. There is no retry.

use crate::cart::CartState;
use crate::checkout::forms::{CheckoutForm, ContactForm, LessonForm, NewsletterForm};
use crate::checkout::order::{Order, OrderRequest};
use crate::checkout::submission::{
    ContactMessage, ContactSubmission, LessonRegistration, LessonRegistrationRequest,
    NewsletterSignup, NewsletterSubscription,
};
use crate::error::CommerceError;
use async_trait::async_trait;
use std::cell::RefCell;
use std::fmt;
use thiserror::Error;

pub const ORDER_PLACED: &str =
    "Order placed successfully! You will receive M-Pesa payment prompt shortly.";
pub const ORDER_FAILED: &str = "Failed to place order. Please try again.";
pub const CONTACT_SENT: &str = "Message sent successfully! We'll get back to you soon.";
pub const CONTACT_FAILED: &str = "Failed to send message. Please try again.";
pub const LESSON_REGISTERED: &str = "Registration submitted successfully! We'll contact you soon.";
pub const LESSON_FAILED: &str = "Failed to submit registration. Please try again.";
pub const NEWSLETTER_SUBSCRIBED: &str = "Thanks for subscribing to club news!";
pub const NEWSLETTER_FAILED: &str = "Failed to subscribe. Please try again.";

/// The backend calls the flows depend on.
///
/// Implemented by the HTTP client and by test fakes. Futures are not
/// `Send`: the browser runs them on its single thread.
///
/// `Ok` means the backend accepted the submission. The stored record is
/// `None` when the response body could not be read as one; that is still
/// a success.
#[async_trait(?Send)]
pub trait ClubGateway {
    type Error: fmt::Display;

    async fn place_order(&self, order: &OrderRequest) -> Result<Option<Order>, Self::Error>;

    async fn send_contact(
        &self,
        message: &ContactMessage,
    ) -> Result<Option<ContactSubmission>, Self::Error>;

    async fn register_lesson(
        &self,
        registration: &LessonRegistrationRequest,
    ) -> Result<Option<LessonRegistration>, Self::Error>;

    async fn subscribe_newsletter(
        &self,
        signup: &NewsletterSignup,
    ) -> Result<Option<NewsletterSubscription>, Self::Error>;
}

/// Shared access to the cart for flows that read and settle it.
///
/// Takes `&self` so a flow can hold it across an await point.
pub trait CartAccess {
    fn snapshot(&self) -> CartState;

    /// Remove the ordered lines, keeping anything added since `snapshot`.
    fn settle(&self, ordered: &CartState);
}

impl CartAccess for RefCell<CartState> {
    fn snapshot(&self) -> CartState {
        self.borrow().clone()
    }

    fn settle(&self, ordered: &CartState) {
        self.borrow_mut().settle(ordered);
    }
}

#[cfg(feature = "storage")]
impl<B: kashoe_cache::StorageBackend> CartAccess for RefCell<crate::cart::CartStore<B>> {
    fn snapshot(&self) -> CartState {
        self.borrow().snapshot()
    }

    fn settle(&self, ordered: &CartState) {
        self.borrow_mut().settle(ordered);
    }
}

/// Why a submission did not go through.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    /// Rejected before any network call.
    #[error("{0}")]
    Invalid(#[from] CommerceError),

    /// The call failed; carries the message to show the user.
    #[error("{0}")]
    Failed(&'static str),
}

impl SubmitError {
    /// Text for the failure toast.
    pub fn user_message(&self) -> String {
        match self {
            SubmitError::Invalid(CommerceError::EmptyCart) => "Your cart is empty".to_string(),
            SubmitError::Invalid(e) => e.to_string(),
            SubmitError::Failed(message) => message.to_string(),
        }
    }
}

/// A successful submission.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmitOutcome<T> {
    /// What the backend stored, when its reply could be read.
    pub record: Option<T>,
    /// Text for the success toast.
    pub message: &'static str,
}

/// Place an order for the cart contents.
///
/// On success the ordered lines leave the cart and the form is cleared.
/// Items added while the request was in flight stay in the cart.
pub async fn place_order<G, C>(
    gateway: &G,
    form: &mut CheckoutForm,
    cart: &C,
) -> Result<SubmitOutcome<Order>, SubmitError>
where
    G: ClubGateway + ?Sized,
    C: CartAccess + ?Sized,
{
    let ordered = cart.snapshot();
    let request = form.validate(&ordered)?;

    match gateway.place_order(&request).await {
        Ok(order) => {
            tracing::info!(
                order_id = ?order.as_ref().map(|o| o.id.as_str()),
                items = request.item_count(),
                total = %request.total_amount,
                "Order placed"
            );
            cart.settle(&ordered);
            form.reset();
            Ok(SubmitOutcome {
                record: order,
                message: ORDER_PLACED,
            })
        }
        Err(e) => {
            tracing::error!(error = %e, "Order error");
            Err(SubmitError::Failed(ORDER_FAILED))
        }
    }
}

/// Send a contact message. Clears the form on success.
pub async fn send_contact<G>(
    gateway: &G,
    form: &mut ContactForm,
) -> Result<SubmitOutcome<ContactSubmission>, SubmitError>
where
    G: ClubGateway + ?Sized,
{
    let message = form.validate()?;

    match gateway.send_contact(&message).await {
        Ok(record) => {
            tracing::info!(id = ?record.as_ref().map(|r| r.id.as_str()), "Contact message sent");
            form.reset();
            Ok(SubmitOutcome {
                record,
                message: CONTACT_SENT,
            })
        }
        Err(e) => {
            tracing::error!(error = %e, "Contact form error");
            Err(SubmitError::Failed(CONTACT_FAILED))
        }
    }
}

/// Register a student for lessons. Clears the form on success.
pub async fn register_lesson<G>(
    gateway: &G,
    form: &mut LessonForm,
) -> Result<SubmitOutcome<LessonRegistration>, SubmitError>
where
    G: ClubGateway + ?Sized,
{
    let registration = form.validate()?;

    match gateway.register_lesson(&registration).await {
        Ok(record) => {
            tracing::info!(
                id = ?record.as_ref().map(|r| r.id.as_str()),
                level = registration.lesson_type.as_str(),
                "Lesson registration submitted"
            );
            form.reset();
            Ok(SubmitOutcome {
                record,
                message: LESSON_REGISTERED,
            })
        }
        Err(e) => {
            tracing::error!(error = %e, "Registration error");
            Err(SubmitError::Failed(LESSON_FAILED))
        }
    }
}

/// Subscribe an address to the newsletter. Clears the form on success.
pub async fn subscribe_newsletter<G>(
    gateway: &G,
    form: &mut NewsletterForm,
) -> Result<SubmitOutcome<NewsletterSubscription>, SubmitError>
where
    G: ClubGateway + ?Sized,
{
    let signup = form.validate()?;

    match gateway.subscribe_newsletter(&signup).await {
        Ok(record) => {
            tracing::info!(id = ?record.as_ref().map(|r| r.id.as_str()), "Newsletter subscription");
            form.reset();
            Ok(SubmitOutcome {
                record,
                message: NEWSLETTER_SUBSCRIBED,
            })
        }
        Err(e) => {
            tracing::error!(error = %e, "Newsletter error");
            Err(SubmitError::Failed(NEWSLETTER_FAILED))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::CartProduct;
    use crate::catalog::LessonLevel;
    use crate::checkout::order::OrderStatus;
    use crate::checkout::submission::RegistrationStatus;
    use crate::ids::{OrderId, RegistrationId};
    use crate::money::Money;
    use futures::executor::block_on;
    use std::cell::Cell;
    use std::rc::Rc;

    /// Records calls and answers with a canned result.
    struct FakeGateway {
        fail: bool,
        /// Accept but reply with a body that is not a record.
        opaque: bool,
        calls: Cell<u32>,
        /// Runs while an order is "in flight".
        during_order: RefCell<Option<Box<dyn FnOnce()>>>,
    }

    impl FakeGateway {
        fn ok() -> Self {
            Self {
                fail: false,
                opaque: false,
                calls: Cell::new(0),
                during_order: RefCell::new(None),
            }
        }

        fn failing() -> Self {
            Self { fail: true, ..Self::ok() }
        }

        fn opaque() -> Self {
            Self { opaque: true, ..Self::ok() }
        }

        fn answer<T>(&self, value: T) -> Result<Option<T>, String> {
            self.calls.set(self.calls.get() + 1);
            if self.fail {
                Err("HTTP 500: Internal Server Error".to_string())
            } else if self.opaque {
                Ok(None)
            } else {
                Ok(Some(value))
            }
        }
    }

    #[async_trait(?Send)]
    impl ClubGateway for FakeGateway {
        type Error = String;

        async fn place_order(&self, order: &OrderRequest) -> Result<Option<Order>, String> {
            if let Some(hook) = self.during_order.borrow_mut().take() {
                hook();
            }
            self.answer(Order {
                id: OrderId::new("o-1"),
                customer_name: order.customer_name.clone(),
                customer_email: order.customer_email.clone(),
                customer_phone: order.customer_phone.clone(),
                items: order.items.clone(),
                total_amount: order.total_amount,
                status: OrderStatus::Pending,
                mpesa_reference: None,
            })
        }

        async fn send_contact(
            &self,
            message: &ContactMessage,
        ) -> Result<Option<ContactSubmission>, String> {
            self.answer(ContactSubmission {
                id: "c-1".into(),
                contact: message.clone(),
            })
        }

        async fn register_lesson(
            &self,
            registration: &LessonRegistrationRequest,
        ) -> Result<Option<LessonRegistration>, String> {
            self.answer(LessonRegistration {
                id: RegistrationId::new("r-1"),
                status: RegistrationStatus::Pending,
                request: registration.clone(),
            })
        }

        async fn subscribe_newsletter(
            &self,
            signup: &NewsletterSignup,
        ) -> Result<Option<NewsletterSubscription>, String> {
            self.answer(NewsletterSubscription {
                id: "n-1".into(),
                email: signup.email.clone(),
                is_active: true,
            })
        }
    }

    fn filled_cart() -> RefCell<CartState> {
        let mut cart = CartState::new();
        cart.add_item(
            CartProduct::new("1", "Professional Chess Board", Money::from_decimal(3500.0)),
            1,
        );
        cart.add_item(CartProduct::new("2", "Digital Chess Clock", Money::from_decimal(2800.0)), 2);
        RefCell::new(cart)
    }

    fn checkout_form() -> CheckoutForm {
        CheckoutForm {
            customer_name: "Amina".into(),
            customer_email: "amina@example.com".into(),
            customer_phone: "254712345678".into(),
        }
    }

    #[test]
    fn test_place_order_success_clears_cart_and_form() {
        let gateway = FakeGateway::ok();
        let cart = filled_cart();
        let mut form = checkout_form();

        let outcome = block_on(place_order(&gateway, &mut form, &cart)).unwrap();

        assert_eq!(outcome.message, ORDER_PLACED);
        let order = outcome.record.unwrap();
        assert_eq!(order.total_amount, Money::from_decimal(9100.0));
        assert_eq!(order.items.len(), 2);
        assert!(cart.borrow().is_empty());
        assert_eq!(form, CheckoutForm::default());
    }

    #[test]
    fn test_place_order_accepted_without_readable_record() {
        let gateway = FakeGateway::opaque();
        let cart = filled_cart();
        let mut form = checkout_form();

        let outcome = block_on(place_order(&gateway, &mut form, &cart)).unwrap();

        assert_eq!(outcome.message, ORDER_PLACED);
        assert!(outcome.record.is_none());
        assert!(cart.borrow().is_empty());
        assert_eq!(form, CheckoutForm::default());
    }

    #[test]
    fn test_place_order_keeps_items_added_in_flight() {
        let gateway = FakeGateway::ok();
        let cart = Rc::new(filled_cart());
        let during = Rc::clone(&cart);
        *gateway.during_order.borrow_mut() = Some(Box::new(move || {
            during
                .borrow_mut()
                .add_item(CartProduct::new("3", "Travel Chess Set", Money::from_decimal(1800.0)), 1);
            during
                .borrow_mut()
                .add_item(CartProduct::new("1", "Professional Chess Board", Money::from_decimal(3500.0)), 1);
        }));
        let mut form = checkout_form();

        let outcome = block_on(place_order(&gateway, &mut form, &*cart)).unwrap();

        assert_eq!(outcome.record.unwrap().items.len(), 2);
        let left: Vec<(String, i64)> = cart
            .borrow()
            .items()
            .iter()
            .map(|i| (i.id.to_string(), i.quantity))
            .collect();
        assert_eq!(left, vec![("1".to_string(), 1), ("3".to_string(), 1)]);
    }

    #[test]
    fn test_place_order_failure_preserves_state() {
        let gateway = FakeGateway::failing();
        let cart = filled_cart();
        let before = cart.borrow().clone();
        let mut form = checkout_form();

        let err = block_on(place_order(&gateway, &mut form, &cart)).unwrap_err();

        assert_eq!(err, SubmitError::Failed(ORDER_FAILED));
        assert_eq!(err.user_message(), ORDER_FAILED);
        assert_eq!(*cart.borrow(), before);
        assert_eq!(form, checkout_form());
        assert_eq!(gateway.calls.get(), 1);
    }

    #[test]
    fn test_place_order_empty_cart_makes_no_call() {
        let gateway = FakeGateway::ok();
        let cart = RefCell::new(CartState::new());
        let mut form = checkout_form();

        let err = block_on(place_order(&gateway, &mut form, &cart)).unwrap_err();

        assert_eq!(err, SubmitError::Invalid(CommerceError::EmptyCart));
        assert_eq!(gateway.calls.get(), 0);
        assert_eq!(form, checkout_form());
    }

    #[test]
    fn test_send_contact() {
        let gateway = FakeGateway::ok();
        let mut form = ContactForm {
            name: "Otieno".into(),
            email: "otieno@example.com".into(),
            phone: String::new(),
            subject: "Lessons".into(),
            message: "Do you teach adults?".into(),
        };

        let outcome = block_on(send_contact(&gateway, &mut form)).unwrap();
        assert_eq!(outcome.message, CONTACT_SENT);
        assert_eq!(form, ContactForm::default());
    }

    #[test]
    fn test_send_contact_failure_keeps_form() {
        let gateway = FakeGateway::failing();
        let mut form = ContactForm {
            name: "Otieno".into(),
            email: "otieno@example.com".into(),
            subject: "Lessons".into(),
            message: "Do you teach adults?".into(),
            ..Default::default()
        };
        let before = form.clone();

        let err = block_on(send_contact(&gateway, &mut form)).unwrap_err();
        assert_eq!(err.user_message(), CONTACT_FAILED);
        assert_eq!(form, before);
    }

    #[test]
    fn test_register_lesson() {
        let gateway = FakeGateway::ok();
        let mut form = LessonForm {
            student_name: "Baraka".into(),
            parent_name: "Wanjiru".into(),
            email: "wanjiru@example.com".into(),
            phone: "254700000000".into(),
            age: "7".into(),
            lesson_type: Some(LessonLevel::Beginner),
            preferred_schedule: "Saturday mornings".into(),
            message: String::new(),
        };

        let outcome = block_on(register_lesson(&gateway, &mut form)).unwrap();
        assert_eq!(outcome.message, LESSON_REGISTERED);
        assert_eq!(outcome.record.unwrap().request.age, 7);
        assert_eq!(form, LessonForm::default());
    }

    #[test]
    fn test_register_lesson_invalid_age_makes_no_call() {
        let gateway = FakeGateway::ok();
        let mut form = LessonForm {
            student_name: "Baraka".into(),
            parent_name: "Wanjiru".into(),
            email: "wanjiru@example.com".into(),
            phone: "254700000000".into(),
            age: "seven".into(),
            lesson_type: Some(LessonLevel::Beginner),
            preferred_schedule: "Saturday mornings".into(),
            message: String::new(),
        };

        let err = block_on(register_lesson(&gateway, &mut form)).unwrap_err();
        assert!(matches!(err, SubmitError::Invalid(CommerceError::InvalidAge(_))));
        assert_eq!(gateway.calls.get(), 0);
    }

    #[test]
    fn test_subscribe_newsletter() {
        let gateway = FakeGateway::ok();
        let mut form = NewsletterForm {
            email: "fan@example.com".into(),
        };
        let outcome = block_on(subscribe_newsletter(&gateway, &mut form)).unwrap();
        assert_eq!(outcome.record.unwrap().email, "fan@example.com");
        assert!(form.email.is_empty());

        let failing = FakeGateway::failing();
        let mut form = NewsletterForm {
            email: "fan@example.com".into(),
        };
        let err = block_on(subscribe_newsletter(&failing, &mut form)).unwrap_err();
        assert_eq!(err, SubmitError::Failed(NEWSLETTER_FAILED));
        assert_eq!(form.email, "fan@example.com");
    }
}
