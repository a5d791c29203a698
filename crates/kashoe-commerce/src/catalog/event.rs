//! Club events and tournaments.

use crate::error::CommerceError;
use crate::ids::EventId;
use chrono::{DateTime, Datelike, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle status of an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    #[default]
    Upcoming,
    Ongoing,
    Completed,
    Cancelled,
}

impl EventStatus {
    pub const ALL: [EventStatus; 4] = [
        EventStatus::Upcoming,
        EventStatus::Ongoing,
        EventStatus::Completed,
        EventStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EventStatus::Upcoming => "upcoming",
            EventStatus::Ongoing => "ongoing",
            EventStatus::Completed => "completed",
            EventStatus::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for EventStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventStatus {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EventStatus::ALL
            .into_iter()
            .find(|st| st.as_str() == s.trim().to_lowercase())
            .ok_or_else(|| CommerceError::UnknownVariant {
                kind: "event status",
                value: s.to_string(),
            })
    }
}

/// An event as served by `GET /events`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClubEvent {
    pub id: EventId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(deserialize_with = "deserialize_event_date")]
    pub event_date: DateTime<Utc>,
    pub location: String,
    #[serde(default)]
    pub status: EventStatus,
    #[serde(default)]
    pub max_participants: Option<u32>,
    #[serde(default)]
    pub current_participants: u32,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl ClubEvent {
    /// Long date, e.g. "June 1st, 2025".
    pub fn date_display(&self) -> String {
        long_date(&self.event_date)
    }

    /// "12 / 30 participants" when the event has a cap.
    pub fn participants_label(&self) -> Option<String> {
        self.max_participants
            .map(|max| format!("{} / {} participants", self.current_participants, max))
    }

    /// Whether the event has reached its cap.
    pub fn is_full(&self) -> bool {
        self.max_participants
            .is_some_and(|max| self.current_participants >= max)
    }
}

/// Payload for `POST /events`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewEvent {
    pub title: String,
    pub description: String,
    pub event_date: DateTime<Utc>,
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_participants: Option<u32>,
}

/// Events with the given status, in the order received.
pub fn with_status(events: &[ClubEvent], status: EventStatus) -> Vec<ClubEvent> {
    events.iter().filter(|e| e.status == status).cloned().collect()
}

/// Format a date as "Month Dth, YYYY".
pub fn long_date(date: &DateTime<Utc>) -> String {
    let day = date.day();
    let suffix = match (day % 10, day % 100) {
        (1, n) if n != 11 => "st",
        (2, n) if n != 12 => "nd",
        (3, n) if n != 13 => "rd",
        _ => "th",
    };
    format!("{} {}{}, {}", date.format("%B"), day, suffix, date.year())
}

/// The backend emits both offset-aware and naive ISO 8601 timestamps; naive
/// ones are taken as UTC.
fn deserialize_event_date<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    if let Ok(date) = DateTime::parse_from_rfc3339(&raw) {
        return Ok(date.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(&raw, "%Y-%m-%dT%H:%M:%S%.f")
        .map(|naive| naive.and_utc())
        .map_err(serde::de::Error::custom)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn event(status: EventStatus) -> ClubEvent {
        ClubEvent {
            id: EventId::new("e1"),
            title: "Family Chess Day".into(),
            description: String::new(),
            event_date: Utc.with_ymd_and_hms(2025, 6, 1, 10, 0, 0).unwrap(),
            location: "Kashoe Chess Club, Nairobi".into(),
            status,
            max_participants: Some(40),
            current_participants: 12,
            image_url: None,
        }
    }

    #[test]
    fn test_event_from_naive_timestamp() {
        let json = r#"{
            "id": "e1",
            "title": "Chess Strategy Workshop",
            "description": "Openings",
            "event_date": "2025-06-08T14:30:00.123456",
            "location": "Kashoe Chess Club, Nairobi",
            "status": "upcoming",
            "max_participants": 20,
            "current_participants": 0
        }"#;

        let e: ClubEvent = serde_json::from_str(json).unwrap();
        assert_eq!(e.event_date.day(), 8);
        assert_eq!(e.status, EventStatus::Upcoming);
        assert!(e.image_url.is_none());
    }

    #[test]
    fn test_event_from_rfc3339_timestamp() {
        let json = r#"{
            "id": 7,
            "title": "Inter-School Championship",
            "event_date": "2025-07-01T09:00:00+03:00",
            "location": "Nairobi Community Center",
            "status": "completed"
        }"#;

        let e: ClubEvent = serde_json::from_str(json).unwrap();
        assert_eq!(e.id.as_str(), "7");
        assert_eq!(e.event_date, Utc.with_ymd_and_hms(2025, 7, 1, 6, 0, 0).unwrap());
        assert_eq!(e.current_participants, 0);
    }

    #[test]
    fn test_long_date_suffixes() {
        let d = |day| Utc.with_ymd_and_hms(2025, 3, day, 0, 0, 0).unwrap();
        assert_eq!(long_date(&d(1)), "March 1st, 2025");
        assert_eq!(long_date(&d(2)), "March 2nd, 2025");
        assert_eq!(long_date(&d(3)), "March 3rd, 2025");
        assert_eq!(long_date(&d(11)), "March 11th, 2025");
        assert_eq!(long_date(&d(22)), "March 22nd, 2025");
        assert_eq!(long_date(&d(13)), "March 13th, 2025");
    }

    #[test]
    fn test_participants_label() {
        let mut e = event(EventStatus::Upcoming);
        assert_eq!(e.participants_label().as_deref(), Some("12 / 40 participants"));
        assert!(!e.is_full());

        e.max_participants = None;
        assert!(e.participants_label().is_none());
    }

    #[test]
    fn test_with_status() {
        let events = vec![
            event(EventStatus::Upcoming),
            event(EventStatus::Completed),
            event(EventStatus::Upcoming),
        ];
        assert_eq!(with_status(&events, EventStatus::Upcoming).len(), 2);
        assert_eq!(with_status(&events, EventStatus::Cancelled).len(), 0);
    }

    #[test]
    fn test_status_parse() {
        assert_eq!("Ongoing".parse::<EventStatus>().unwrap(), EventStatus::Ongoing);
        assert!("postponed".parse::<EventStatus>().is_err());
    }
}
