//! Hours-worked derivation for a single date.

use crate::models::{ClockEvent, EmployeeRecord};

/// Finds the hour of the event matching `date`, scanning in insertion order.
///
/// Later matches overwrite earlier ones, so the last event for a date wins.
/// No match yields `0.0`; a match whose hour is absent yields NaN so the
/// degradation stays visible in the arithmetic downstream.
fn matched_hour(events: &[ClockEvent], date: &str) -> f64 {
    events.iter().fold(0.0, |acc, event| {
        if event.date == date {
            event.hour.map(f64::from).unwrap_or(f64::NAN)
        } else {
            acc
        }
    })
}

/// Returns the hours worked by an employee on the given date.
///
/// The time-in and time-out sequences are scanned independently for an event
/// matching the date; the result is `(time_out_hour - time_in_hour) * 0.01`
/// over the `HHMM`-encoded hours. The 0.01 factor converts the subtraction to
/// hours exactly only for on-the-hour punches (1700 − 0900 → 8.0, but
/// 1730 − 0900 → 8.3); the approximation is part of the engine's contract and
/// is kept as-is rather than replaced with true clock arithmetic.
///
/// A date with no match in one sequence contributes `0` for that side, which
/// can yield negative or inflated results; the value is passed through
/// unvalidated.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::hours_worked_on_date;
/// use payroll_engine::models::EmployeeRecord;
///
/// let mut record = EmployeeRecord::from_row(("Rowan", "Wickfield", "Baker", 10.0));
/// record.clock_in("2020-01-05 0900").clock_out("2020-01-05 1700");
/// assert_eq!(hours_worked_on_date(&record, "2020-01-05"), 8.0);
/// assert_eq!(hours_worked_on_date(&record, "2099-01-01"), 0.0);
/// ```
pub fn hours_worked_on_date(record: &EmployeeRecord, date: &str) -> f64 {
    let time_in_hour = matched_hour(&record.time_in_events, date);
    let time_out_hour = matched_hour(&record.time_out_events, date);
    (time_out_hour - time_in_hour) * 0.01
}
