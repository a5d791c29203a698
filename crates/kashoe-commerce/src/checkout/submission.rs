//! Wire types for contact messages, lesson registrations and newsletter
//! sign-ups.

use crate::catalog::LessonLevel;
use crate::ids::RegistrationId;
use serde::{Deserialize, Serialize};

/// Payload for `POST /contact`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub subject: String,
    pub message: String,
}

/// A stored contact message, as echoed back by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactSubmission {
    pub id: String,
    #[serde(flatten)]
    pub contact: ContactMessage,
}

/// Payload for `POST /lessons/register`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LessonRegistrationRequest {
    pub student_name: String,
    pub parent_name: String,
    pub email: String,
    pub phone: String,
    pub age: u8,
    pub lesson_type: LessonLevel,
    pub preferred_schedule: String,
    #[serde(default)]
    pub message: Option<String>,
}

/// Review state of a lesson registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RegistrationStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

/// A lesson registration as returned by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LessonRegistration {
    pub id: RegistrationId,
    #[serde(default)]
    pub status: RegistrationStatus,
    #[serde(flatten)]
    pub request: LessonRegistrationRequest,
}

/// Payload for `POST /newsletter/subscribe`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewsletterSignup {
    pub email: String,
}

/// A newsletter subscription as returned by the backend.
///
/// Subscribing an address twice reactivates the existing record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewsletterSubscription {
    pub id: String,
    pub email: String,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}
