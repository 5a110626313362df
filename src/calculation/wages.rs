//! Per-date and per-employee wage derivation.

use crate::calculation::hours_worked_on_date;
use crate::models::EmployeeRecord;

/// Returns the wages an employee earned on the given date.
///
/// Multiplies [`hours_worked_on_date`] by the record's pay rate. A record
/// with an absent pay rate yields NaN rather than an error.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::wages_earned_on_date;
/// use payroll_engine::models::EmployeeRecord;
///
/// let mut record = EmployeeRecord::from_row(("Rowan", "Wickfield", "Baker", 10.0));
/// record.clock_in("2020-01-05 0900").clock_out("2020-01-05 1700");
/// assert_eq!(wages_earned_on_date(&record, "2020-01-05"), 80.0);
/// ```
pub fn wages_earned_on_date(record: &EmployeeRecord, date: &str) -> f64 {
    hours_worked_on_date(record, date) * record.pay_per_hour.unwrap_or(f64::NAN)
}

/// Returns the total wages owed to one employee across all recorded dates.
///
/// Dates are taken from `time_in_events` in stored order, duplicates
/// included: a date punched in twice is summed twice. Time-out events whose
/// date never appears among the time-in events are not enumerated here at
/// all.
pub fn all_wages_for(record: &EmployeeRecord) -> f64 {
    record
        .time_in_events
        .iter()
        .fold(0.0, |total, event| {
            total + wages_earned_on_date(record, &event.date)
        })
}
