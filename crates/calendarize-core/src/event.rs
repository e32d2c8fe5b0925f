//! Events consumed by the layout engine.
//!
//! The engine only needs a start, an end and an opaque status label. Host
//! applications either build [`Event`] values directly, implement
//! [`ToEvent`] on their own types, or go through [`EventRecord`] when the
//! data arrives as loosely typed JSON.

use std::cmp::Ordering;

use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, EventError};

/// A time-bound event with resolved wall-clock instants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    #[serde(default)]
    pub status: String,
}

impl Event {
    /// Create a new event
    pub fn new(start: NaiveDateTime, end: NaiveDateTime, status: impl Into<String>) -> Self {
        Self {
            start,
            end,
            status: status.into(),
        }
    }

    /// Check that the event does not end before it starts.
    ///
    /// Zero-length events (`end == start`) are valid.
    pub fn validate(&self) -> Result<(), EventError> {
        if self.end < self.start {
            return Err(EventError::EndBeforeStart {
                start: self.start,
                end: self.end,
            });
        }
        Ok(())
    }

    /// Get duration in minutes
    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }

    /// Chronological order: by start, then by end so shorter events come
    /// first when starts coincide.
    pub fn chronological_cmp(&self, other: &Self) -> Ordering {
        self.start
            .cmp(&other.start)
            .then_with(|| self.end.cmp(&other.end))
    }
}

/// Conversion from a host application's event type.
pub trait ToEvent {
    fn to_event(&self) -> Event;
}

impl ToEvent for Event {
    fn to_event(&self) -> Event {
        self.clone()
    }
}

/// Convert a collection of host events into the slice a layout borrows.
pub fn collect_events<'a, T, I>(items: I) -> Vec<Event>
where
    T: ToEvent + 'a,
    I: IntoIterator<Item = &'a T>,
{
    items.into_iter().map(ToEvent::to_event).collect()
}

/// Loosely typed event record, as produced by JSON APIs or key-value stores.
///
/// Accepts both `start`/`end` and `start_time`/`end_time` keys.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventRecord {
    #[serde(default, alias = "start_time")]
    pub start: Option<String>,
    #[serde(default, alias = "end_time")]
    pub end: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

impl TryFrom<EventRecord> for Event {
    type Error = EventError;

    fn try_from(record: EventRecord) -> Result<Self, Self::Error> {
        let start = required_timestamp("start", record.start.as_deref())?;
        let end = required_timestamp("end", record.end.as_deref())?;
        Ok(Event::new(start, end, record.status.unwrap_or_default()))
    }
}

fn required_timestamp(field: &str, value: Option<&str>) -> Result<NaiveDateTime, EventError> {
    let value = value.ok_or_else(|| EventError::MissingField {
        field: field.to_string(),
    })?;
    parse_timestamp(value).ok_or_else(|| EventError::InvalidTimestamp {
        field: field.to_string(),
        value: value.to_string(),
    })
}

/// Parse an RFC 3339 timestamp (keeping its wall-clock reading) or a naive
/// `YYYY-MM-DDTHH:MM[:SS]` timestamp.
pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.naive_local());
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
}

/// Parse a JSON array of event records into events.
///
/// # Errors
///
/// Returns an error if the JSON is not an array of records, or if any record
/// is missing a timestamp or carries an unparsable one.
pub fn events_from_json(json: &str) -> Result<Vec<Event>, CoreError> {
    let records: Vec<EventRecord> = serde_json::from_str(json)?;
    records
        .into_iter()
        .map(|r| Event::try_from(r).map_err(CoreError::from))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 6)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    #[test]
    fn test_validate_rejects_end_before_start() {
        let event = Event::new(at(10, 0), at(9, 0), "confirmed");
        assert_eq!(
            event.validate(),
            Err(EventError::EndBeforeStart {
                start: at(10, 0),
                end: at(9, 0)
            })
        );
    }

    #[test]
    fn test_validate_accepts_zero_length() {
        let event = Event::new(at(10, 0), at(10, 0), "");
        assert!(event.validate().is_ok());
        assert_eq!(event.duration_minutes(), 0);
    }

    #[test]
    fn test_chronological_cmp_breaks_ties_by_end() {
        let short = Event::new(at(9, 0), at(9, 30), "");
        let long = Event::new(at(9, 0), at(11, 0), "");
        let later = Event::new(at(9, 15), at(9, 20), "");
        assert_eq!(short.chronological_cmp(&long), Ordering::Less);
        assert_eq!(long.chronological_cmp(&later), Ordering::Less);
    }

    struct Booking {
        room: &'static str,
        from: NaiveDateTime,
        minutes: i64,
    }

    impl ToEvent for Booking {
        fn to_event(&self) -> Event {
            Event::new(self.from, self.from + chrono::Duration::minutes(self.minutes), self.room)
        }
    }

    #[test]
    fn test_collect_events_from_host_type() {
        let bookings = [
            Booking {
                room: "aurora",
                from: at(9, 0),
                minutes: 45,
            },
            Booking {
                room: "boreal",
                from: at(13, 30),
                minutes: 30,
            },
        ];
        let events = collect_events(&bookings);
        assert_eq!(events.len(), 2);
        assert_eq!(events[0], Event::new(at(9, 0), at(9, 45), "aurora"));
        assert_eq!(events[1].end, at(14, 0));
    }

    #[test]
    fn test_record_accepts_legacy_keys() {
        let json = r#"[{"start_time": "2024-03-06T09:00:00", "end_time": "2024-03-06T10:30", "status": "busy"}]"#;
        let events = events_from_json(json).unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].start, at(9, 0));
        assert_eq!(events[0].end, at(10, 30));
        assert_eq!(events[0].status, "busy");
    }

    #[test]
    fn test_record_keeps_wall_clock_of_rfc3339() {
        let json = r#"[{"start": "2024-03-06T09:00:00+02:00", "end": "2024-03-06T10:00:00+02:00"}]"#;
        let events = events_from_json(json).unwrap();
        assert_eq!(events[0].start, at(9, 0));
        assert_eq!(events[0].status, "");
    }

    #[test]
    fn test_record_missing_field() {
        let record = EventRecord {
            start: Some("2024-03-06T09:00:00".into()),
            ..Default::default()
        };
        assert_eq!(
            Event::try_from(record),
            Err(EventError::MissingField { field: "end".into() })
        );
    }

    #[test]
    fn test_record_invalid_timestamp() {
        let json = r#"[{"start": "tomorrow", "end": "2024-03-06T10:00:00"}]"#;
        let err = events_from_json(json).unwrap_err();
        assert!(matches!(
            err,
            CoreError::Event(EventError::InvalidTimestamp { .. })
        ));
    }
}
