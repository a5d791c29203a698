//! Commerce error types.

use thiserror::Error;

/// Errors raised while validating data before it leaves the client.
///
/// Cart operations never fail; these errors only come out of form
/// validation and checkout preconditions.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommerceError {
    /// A required form field was left empty.
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// Email address is not shaped like one.
    #[error("Invalid email address: {0}")]
    InvalidEmail(String),

    /// Student age is not a whole number in range.
    #[error("Invalid age: {0}")]
    InvalidAge(String),

    /// Checkout attempted with nothing in the cart.
    #[error("Cart is empty")]
    EmptyCart,

    /// Unknown category, status or level string.
    #[error("Unknown {kind}: {value}")]
    UnknownVariant { kind: &'static str, value: String },
}

impl CommerceError {
    /// Name of the offending field, if the error is tied to one.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            CommerceError::MissingField(field) => Some(field),
            CommerceError::InvalidEmail(_) => Some("email"),
            CommerceError::InvalidAge(_) => Some("age"),
            CommerceError::EmptyCart | CommerceError::UnknownVariant { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            CommerceError::MissingField("customer_name").to_string(),
            "Missing required field: customer_name"
        );
        assert_eq!(CommerceError::EmptyCart.to_string(), "Cart is empty");
    }

    #[test]
    fn test_error_field() {
        assert_eq!(CommerceError::MissingField("subject").field(), Some("subject"));
        assert_eq!(CommerceError::InvalidAge("x".into()).field(), Some("age"));
        assert_eq!(CommerceError::EmptyCart.field(), None);
    }
}
