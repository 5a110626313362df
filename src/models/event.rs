//! Clock punch events.
//!
//! This module defines the ClockEvent struct and EventKind enum for
//! representing single time-in or time-out punches against an employee
//! record.

use serde::{Deserialize, Serialize};
use tracing::warn;

/// The direction of a clock punch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    /// The employee clocked in.
    TimeIn,
    /// The employee clocked out.
    TimeOut,
}

/// A single clock punch, tagged with its date and encoded hour.
///
/// The `hour` field carries the clock time as an `HHMM` integer (e.g. `930`
/// for 9:30 AM, `1730` for 5:30 PM). It is `None` when the source timestamp
/// had no space separator or its hour fragment failed numeric coercion; such
/// degraded events are kept rather than rejected, and the absence flows
/// through wage arithmetic as a not-a-number result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClockEvent {
    /// Whether this punch is a time-in or a time-out.
    pub kind: EventKind,
    /// The date of the punch as `YYYY-MM-DD` text, compared by exact equality.
    pub date: String,
    /// The clock time in `HHMM` encoding, absent if the timestamp was malformed.
    pub hour: Option<u32>,
}

impl ClockEvent {
    /// Builds a punch event from a `"YYYY-MM-DD HHMM"` timestamp.
    ///
    /// The timestamp is split on its single space: the text before the space
    /// becomes the date, the text after it is numerically coerced into the
    /// hour. A timestamp with no space yields the whole string as the date
    /// and an absent hour.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_engine::models::{ClockEvent, EventKind};
    ///
    /// let event = ClockEvent::from_timestamp(EventKind::TimeIn, "2020-01-05 0930");
    /// assert_eq!(event.date, "2020-01-05");
    /// assert_eq!(event.hour, Some(930));
    ///
    /// let degraded = ClockEvent::from_timestamp(EventKind::TimeOut, "2020-01-05");
    /// assert_eq!(degraded.date, "2020-01-05");
    /// assert_eq!(degraded.hour, None);
    /// ```
    pub fn from_timestamp(kind: EventKind, timestamp: &str) -> Self {
        match timestamp.split_once(' ') {
            Some((date, hour_text)) => {
                let hour = hour_text.parse().ok();
                if hour.is_none() {
                    warn!(timestamp, "hour fragment failed numeric coercion");
                }
                Self {
                    kind,
                    date: date.to_string(),
                    hour,
                }
            }
            None => {
                warn!(timestamp, "timestamp has no space separator");
                Self {
                    kind,
                    date: timestamp.to_string(),
                    hour: None,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_timestamp_splits_date_and_hour() {
        let event = ClockEvent::from_timestamp(EventKind::TimeIn, "2020-01-05 0930");
        assert_eq!(event.kind, EventKind::TimeIn);
        assert_eq!(event.date, "2020-01-05");
        assert_eq!(event.hour, Some(930));
    }

    #[test]
    fn test_from_timestamp_coerces_leading_zeros() {
        let event = ClockEvent::from_timestamp(EventKind::TimeOut, "2020-01-05 0000");
        assert_eq!(event.hour, Some(0));

        let short = ClockEvent::from_timestamp(EventKind::TimeOut, "2020-01-05 800");
        assert_eq!(short.hour, Some(800));
    }

    #[test]
    fn test_from_timestamp_without_space_keeps_whole_string_as_date() {
        let event = ClockEvent::from_timestamp(EventKind::TimeIn, "2020-01-05");
        assert_eq!(event.date, "2020-01-05");
        assert_eq!(event.hour, None);
    }

    #[test]
    fn test_from_timestamp_with_unparsable_hour_degrades() {
        let event = ClockEvent::from_timestamp(EventKind::TimeIn, "2020-01-05 morning");
        assert_eq!(event.date, "2020-01-05");
        assert_eq!(event.hour, None);
    }

    #[test]
    fn test_event_kind_serialization() {
        assert_eq!(
            serde_json::to_string(&EventKind::TimeIn).unwrap(),
            "\"time_in\""
        );
        assert_eq!(
            serde_json::to_string(&EventKind::TimeOut).unwrap(),
            "\"time_out\""
        );
    }

    #[test]
    fn test_event_serialization_round_trip() {
        let event = ClockEvent::from_timestamp(EventKind::TimeOut, "2020-01-05 1730");
        let json = serde_json::to_string(&event).unwrap();
        let deserialized: ClockEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, deserialized);
    }
}
