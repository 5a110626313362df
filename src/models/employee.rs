//! Employee record model and construction.
//!
//! This module defines the EmployeeRecord struct, the RosterRow input shape
//! it is built from, and the chaining clock-in/clock-out recorders.

use serde::{Deserialize, Serialize};

use super::{ClockEvent, EventKind};

/// A raw roster row: the typed form of the 4-element input tuple
/// `(first name, family name, title, pay per hour)`.
///
/// Every field is optional because source rows may carry fewer than four
/// elements; missing trailing elements stay absent rather than defaulting.
/// The `From` conversions from tuple prefixes assign each field directly from
/// its position:
///
/// ```
/// use payroll_engine::models::RosterRow;
///
/// let full = RosterRow::from(("Gray", "Worm", "Commander", 25.0));
/// assert_eq!(full.pay_per_hour, Some(25.0));
///
/// let partial = RosterRow::from(("Gray", "Worm"));
/// assert_eq!(partial.title, None);
/// assert_eq!(partial.pay_per_hour, None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RosterRow {
    /// The worker's first name.
    pub first_name: Option<String>,
    /// The worker's family name.
    pub family_name: Option<String>,
    /// The worker's job title.
    pub title: Option<String>,
    /// The pay rate in currency units per hour.
    pub pay_per_hour: Option<f64>,
}

impl From<(&str,)> for RosterRow {
    fn from((first_name,): (&str,)) -> Self {
        Self {
            first_name: Some(first_name.to_string()),
            ..Self::default()
        }
    }
}

impl From<(&str, &str)> for RosterRow {
    fn from((first_name, family_name): (&str, &str)) -> Self {
        Self {
            first_name: Some(first_name.to_string()),
            family_name: Some(family_name.to_string()),
            ..Self::default()
        }
    }
}

impl From<(&str, &str, &str)> for RosterRow {
    fn from((first_name, family_name, title): (&str, &str, &str)) -> Self {
        Self {
            first_name: Some(first_name.to_string()),
            family_name: Some(family_name.to_string()),
            title: Some(title.to_string()),
            ..Self::default()
        }
    }
}

impl From<(&str, &str, &str, f64)> for RosterRow {
    fn from((first_name, family_name, title, pay_per_hour): (&str, &str, &str, f64)) -> Self {
        Self {
            first_name: Some(first_name.to_string()),
            family_name: Some(family_name.to_string()),
            title: Some(title.to_string()),
            pay_per_hour: Some(pay_per_hour),
        }
    }
}

/// One worker plus their accumulated clock events.
///
/// The two event sequences are independently append-only: nothing in the
/// system removes or reorders entries once recorded, and wage derivation
/// depends on that insertion order (the last event matching a date wins).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmployeeRecord {
    /// The worker's first name.
    pub first_name: Option<String>,
    /// The worker's family name.
    pub family_name: Option<String>,
    /// The worker's job title.
    pub title: Option<String>,
    /// The pay rate in currency units per hour.
    pub pay_per_hour: Option<f64>,
    /// Every time-in punch recorded for this worker, in insertion order.
    #[serde(default)]
    pub time_in_events: Vec<ClockEvent>,
    /// Every time-out punch recorded for this worker, in insertion order.
    #[serde(default)]
    pub time_out_events: Vec<ClockEvent>,
}

impl EmployeeRecord {
    /// Builds a record from a roster row, with both event sequences empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_engine::models::EmployeeRecord;
    ///
    /// let record = EmployeeRecord::from_row(("Loki", "Laufeyson", "HR Representative", 35.0));
    /// assert_eq!(record.first_name.as_deref(), Some("Loki"));
    /// assert_eq!(record.pay_per_hour, Some(35.0));
    /// assert!(record.time_in_events.is_empty());
    /// assert!(record.time_out_events.is_empty());
    /// ```
    pub fn from_row(row: impl Into<RosterRow>) -> Self {
        let row = row.into();
        Self {
            first_name: row.first_name,
            family_name: row.family_name,
            title: row.title,
            pay_per_hour: row.pay_per_hour,
            time_in_events: Vec::new(),
            time_out_events: Vec::new(),
        }
    }

    /// Builds one record per roster row, preserving row order.
    pub fn from_rows<R>(rows: impl IntoIterator<Item = R>) -> Vec<Self>
    where
        R: Into<RosterRow>,
    {
        rows.into_iter().map(Self::from_row).collect()
    }

    /// Records a time-in punch from a `"YYYY-MM-DD HHMM"` timestamp.
    ///
    /// Appends to `time_in_events` and returns the record for chaining.
    /// Malformed timestamps are recorded in degraded form, not rejected; see
    /// [`ClockEvent::from_timestamp`].
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_engine::models::EmployeeRecord;
    ///
    /// let mut record = EmployeeRecord::from_row(("Frodo", "Baggins", "Courier", 15.0));
    /// record
    ///     .clock_in("2020-01-05 0900")
    ///     .clock_out("2020-01-05 1730");
    /// assert_eq!(record.time_in_events.len(), 1);
    /// assert_eq!(record.time_out_events.len(), 1);
    /// ```
    pub fn clock_in(&mut self, timestamp: &str) -> &mut Self {
        self.time_in_events
            .push(ClockEvent::from_timestamp(EventKind::TimeIn, timestamp));
        self
    }

    /// Records a time-out punch from a `"YYYY-MM-DD HHMM"` timestamp.
    ///
    /// Appends to `time_out_events` and returns the record for chaining.
    pub fn clock_out(&mut self, timestamp: &str) -> &mut Self {
        self.time_out_events
            .push(ClockEvent::from_timestamp(EventKind::TimeOut, timestamp));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_record() -> EmployeeRecord {
        EmployeeRecord::from_row(("Thor", "Odinson", "Electrical Engineer", 45.0))
    }

    #[test]
    fn test_from_row_assigns_all_four_attributes_in_order() {
        let record = create_test_record();
        assert_eq!(record.first_name.as_deref(), Some("Thor"));
        assert_eq!(record.family_name.as_deref(), Some("Odinson"));
        assert_eq!(record.title.as_deref(), Some("Electrical Engineer"));
        assert_eq!(record.pay_per_hour, Some(45.0));
    }

    #[test]
    fn test_from_row_initializes_empty_event_sequences() {
        let record = create_test_record();
        assert!(record.time_in_events.is_empty());
        assert!(record.time_out_events.is_empty());
    }

    #[test]
    fn test_from_row_leaves_missing_trailing_attributes_absent() {
        let record = EmployeeRecord::from_row(("Thor", "Odinson"));
        assert_eq!(record.first_name.as_deref(), Some("Thor"));
        assert_eq!(record.family_name.as_deref(), Some("Odinson"));
        assert_eq!(record.title, None);
        assert_eq!(record.pay_per_hour, None);
    }

    #[test]
    fn test_from_rows_maps_each_row_in_order() {
        let records = EmployeeRecord::from_rows([
            ("Thor", "Odinson", "Electrical Engineer", 45.0),
            ("Loki", "Laufeyson", "HR Representative", 35.0),
        ]);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0], EmployeeRecord::from_row(("Thor", "Odinson", "Electrical Engineer", 45.0)));
        assert_eq!(records[1].first_name.as_deref(), Some("Loki"));
    }

    #[test]
    fn test_clock_in_appends_exactly_one_event() {
        let mut record = create_test_record();
        record.clock_in("2020-01-05 0900");
        assert_eq!(record.time_in_events.len(), 1);
        let event = record.time_in_events.last().unwrap();
        assert_eq!(event.kind, EventKind::TimeIn);
        assert_eq!(event.date, "2020-01-05");
        assert_eq!(event.hour, Some(900));
        assert!(record.time_out_events.is_empty());
    }

    #[test]
    fn test_clock_out_appends_exactly_one_event() {
        let mut record = create_test_record();
        record.clock_out("2020-01-05 1730");
        assert_eq!(record.time_out_events.len(), 1);
        let event = record.time_out_events.last().unwrap();
        assert_eq!(event.kind, EventKind::TimeOut);
        assert_eq!(event.hour, Some(1730));
        assert!(record.time_in_events.is_empty());
    }

    #[test]
    fn test_recorders_chain_and_preserve_insertion_order() {
        let mut record = create_test_record();
        record
            .clock_in("2020-01-05 0900")
            .clock_out("2020-01-05 1700")
            .clock_in("2020-01-06 0830")
            .clock_out("2020-01-06 1800");

        let dates: Vec<&str> = record
            .time_in_events
            .iter()
            .map(|e| e.date.as_str())
            .collect();
        assert_eq!(dates, ["2020-01-05", "2020-01-06"]);
    }

    #[test]
    fn test_record_serialization_round_trip() {
        let mut record = create_test_record();
        record.clock_in("2020-01-05 0900").clock_out("2020-01-05 1700");

        let json = serde_json::to_string(&record).unwrap();
        let deserialized: EmployeeRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, deserialized);
    }

    #[test]
    fn test_record_deserialization_defaults_event_sequences() {
        let json = r#"{
            "first_name": "Thor",
            "family_name": "Odinson",
            "title": "Electrical Engineer",
            "pay_per_hour": 45.0
        }"#;

        let record: EmployeeRecord = serde_json::from_str(json).unwrap();
        assert!(record.time_in_events.is_empty());
        assert!(record.time_out_events.is_empty());
    }
}
