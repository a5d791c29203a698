//! Form state for checkout, contact, lesson and newsletter forms.
//!
//! Each form holds the raw text the user typed. `validate` turns it into
//! the wire payload or reports the first problem; `reset` blanks it after
//! a successful submission.

use crate::cart::CartState;
use crate::catalog::LessonLevel;
use crate::checkout::order::OrderRequest;
use crate::checkout::submission::{ContactMessage, LessonRegistrationRequest, NewsletterSignup};
use crate::error::CommerceError;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// Ages the lesson programmes accept.
pub const STUDENT_AGES: RangeInclusive<u8> = 5..=18;

/// Checkout dialog fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutForm {
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
}

impl CheckoutForm {
    /// Validate the fields and build the order for `cart`.
    pub fn validate(&self, cart: &CartState) -> Result<OrderRequest, CommerceError> {
        let name = required("customer_name", &self.customer_name)?;
        let email = email("customer_email", &self.customer_email)?;
        let phone = required("customer_phone", &self.customer_phone)?;
        OrderRequest::from_cart(name, email, phone, cart)
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Contact page fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn validate(&self) -> Result<ContactMessage, CommerceError> {
        Ok(ContactMessage {
            name: required("name", &self.name)?,
            email: email("email", &self.email)?,
            phone: optional(&self.phone),
            subject: required("subject", &self.subject)?,
            message: required("message", &self.message)?,
        })
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Lesson registration fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LessonForm {
    pub student_name: String,
    pub parent_name: String,
    pub email: String,
    pub phone: String,
    /// Typed as text; must parse as a whole number within [`STUDENT_AGES`].
    pub age: String,
    pub lesson_type: Option<LessonLevel>,
    pub preferred_schedule: String,
    pub message: String,
}

impl LessonForm {
    pub fn validate(&self) -> Result<LessonRegistrationRequest, CommerceError> {
        let student_name = required("student_name", &self.student_name)?;
        let parent_name = required("parent_name", &self.parent_name)?;
        let email = email("email", &self.email)?;
        let phone = required("phone", &self.phone)?;
        let age = student_age(&self.age)?;
        let lesson_type = self
            .lesson_type
            .ok_or(CommerceError::MissingField("lesson_type"))?;
        let preferred_schedule = required("preferred_schedule", &self.preferred_schedule)?;

        Ok(LessonRegistrationRequest {
            student_name,
            parent_name,
            email,
            phone,
            age,
            lesson_type,
            preferred_schedule,
            message: optional(&self.message),
        })
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Footer newsletter field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsletterForm {
    pub email: String,
}

impl NewsletterForm {
    pub fn validate(&self) -> Result<NewsletterSignup, CommerceError> {
        Ok(NewsletterSignup {
            email: email("email", &self.email)?,
        })
    }

    pub fn reset(&mut self) {
        self.email.clear();
    }
}

fn required(field: &'static str, value: &str) -> Result<String, CommerceError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(CommerceError::MissingField(field));
    }
    Ok(value.to_string())
}

fn optional(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

fn email(field: &'static str, value: &str) -> Result<String, CommerceError> {
    let value = required(field, value)?;
    if is_plausible_email(&value) {
        Ok(value)
    } else {
        Err(CommerceError::InvalidEmail(value))
    }
}

/// `local@domain.tld` with no whitespace. The backend does the strict check.
pub fn is_plausible_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain
            .split_once('.')
            .is_some_and(|(host, _)| !host.is_empty())
        && !domain.ends_with('.')
}

fn student_age(value: &str) -> Result<u8, CommerceError> {
    let value = required("age", value)?;
    match value.parse::<u8>() {
        Ok(age) if STUDENT_AGES.contains(&age) => Ok(age),
        _ => Err(CommerceError::InvalidAge(value)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::CartProduct;
    use crate::money::Money;

    fn lesson_form() -> LessonForm {
        LessonForm {
            student_name: "Baraka".into(),
            parent_name: "Wanjiru".into(),
            email: "wanjiru@example.com".into(),
            phone: "254700000000".into(),
            age: "9".into(),
            lesson_type: Some(LessonLevel::Intermediate),
            preferred_schedule: "Weekends".into(),
            message: "  ".into(),
        }
    }

    #[test]
    fn test_email_shapes() {
        assert!(is_plausible_email("a@b.co"));
        assert!(is_plausible_email("first.last@mail.example.ke"));
        assert!(!is_plausible_email("no-at-sign"));
        assert!(!is_plausible_email("@b.co"));
        assert!(!is_plausible_email("a@b"));
        assert!(!is_plausible_email("a@.co"));
        assert!(!is_plausible_email("a@b.co."));
        assert!(!is_plausible_email("a b@c.co"));
        assert!(!is_plausible_email("a@b@c.co"));
    }

    #[test]
    fn test_checkout_form_validate() {
        let mut cart = CartState::new();
        cart.add_item(CartProduct::new("1", "Board", Money::from_decimal(3500.0)), 1);

        let form = CheckoutForm {
            customer_name: "  Amina ".into(),
            customer_email: "amina@example.com".into(),
            customer_phone: "254712345678".into(),
        };
        let order = form.validate(&cart).unwrap();
        assert_eq!(order.customer_name, "Amina");
        assert_eq!(order.total_amount, Money::from_decimal(3500.0));
    }

    #[test]
    fn test_checkout_form_missing_phone() {
        let mut cart = CartState::new();
        cart.add_item(CartProduct::new("1", "Board", Money::from_decimal(3500.0)), 1);
        let form = CheckoutForm {
            customer_name: "Amina".into(),
            customer_email: "amina@example.com".into(),
            customer_phone: String::new(),
        };
        assert_eq!(
            form.validate(&cart),
            Err(CommerceError::MissingField("customer_phone"))
        );
    }

    #[test]
    fn test_checkout_form_empty_cart() {
        let form = CheckoutForm {
            customer_name: "Amina".into(),
            customer_email: "amina@example.com".into(),
            customer_phone: "254712345678".into(),
        };
        assert_eq!(form.validate(&CartState::new()), Err(CommerceError::EmptyCart));
    }

    #[test]
    fn test_contact_form_optional_phone() {
        let form = ContactForm {
            name: "Otieno".into(),
            email: "otieno@example.com".into(),
            phone: " ".into(),
            subject: "Tournament".into(),
            message: "When is the next one?".into(),
        };
        let msg = form.validate().unwrap();
        assert!(msg.phone.is_none());
    }

    #[test]
    fn test_contact_form_bad_email() {
        let form = ContactForm {
            name: "Otieno".into(),
            email: "otieno".into(),
            subject: "Hi".into(),
            message: "Hello".into(),
            ..Default::default()
        };
        assert_eq!(
            form.validate(),
            Err(CommerceError::InvalidEmail("otieno".into()))
        );
    }

    #[test]
    fn test_lesson_form_validate() {
        let reg = lesson_form().validate().unwrap();
        assert_eq!(reg.age, 9);
        assert_eq!(reg.lesson_type, LessonLevel::Intermediate);
        assert!(reg.message.is_none());
    }

    #[test]
    fn test_lesson_form_age() {
        for bad in ["nine", "4", "19", "-3", "9.5"] {
            let form = LessonForm {
                age: bad.into(),
                ..lesson_form()
            };
            assert_eq!(form.validate(), Err(CommerceError::InvalidAge(bad.into())));
        }

        let form = LessonForm {
            age: String::new(),
            ..lesson_form()
        };
        assert_eq!(form.validate(), Err(CommerceError::MissingField("age")));
    }

    #[test]
    fn test_lesson_form_requires_level() {
        let form = LessonForm {
            lesson_type: None,
            ..lesson_form()
        };
        assert_eq!(form.validate(), Err(CommerceError::MissingField("lesson_type")));
    }

    #[test]
    fn test_reset() {
        let mut form = lesson_form();
        form.reset();
        assert_eq!(form, LessonForm::default());

        let mut news = NewsletterForm { email: "a@b.co".into() };
        news.reset();
        assert!(news.email.is_empty());
    }
}
