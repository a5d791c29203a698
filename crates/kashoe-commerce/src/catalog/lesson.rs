//! Lesson programmes offered by the club.

use crate::error::CommerceError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Skill level a student registers for.
///
/// Sent to the backend as its display name (`"Beginner"`), which is how the
/// registration form has always submitted it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LessonLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl LessonLevel {
    pub const ALL: [LessonLevel; 3] = [
        LessonLevel::Beginner,
        LessonLevel::Intermediate,
        LessonLevel::Advanced,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LessonLevel::Beginner => "Beginner",
            LessonLevel::Intermediate => "Intermediate",
            LessonLevel::Advanced => "Advanced",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            LessonLevel::Beginner => "Perfect for kids just starting their chess journey",
            LessonLevel::Intermediate => "For young players ready to advance their skills",
            LessonLevel::Advanced => "Competitive training for serious young players",
        }
    }

    /// Programme highlights, last entry is the age band.
    pub fn features(&self) -> &'static [&'static str] {
        match self {
            LessonLevel::Beginner => &[
                "Basic rules and movements",
                "Fun chess games",
                "Building confidence",
                "Ages 6-8",
            ],
            LessonLevel::Intermediate => &[
                "Strategic thinking",
                "Tactics and combinations",
                "Opening principles",
                "Ages 9-12",
            ],
            LessonLevel::Advanced => &[
                "Advanced strategies",
                "Tournament preparation",
                "Game analysis",
                "Ages 12+",
            ],
        }
    }
}

impl FromStr for LessonLevel {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LessonLevel::ALL
            .into_iter()
            .find(|level| level.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CommerceError::UnknownVariant {
                kind: "lesson level",
                value: s.to_string(),
            })
    }
}
