//! Roster-wide payroll aggregation.

use tracing::debug;

use crate::calculation::all_wages_for;
use crate::models::EmployeeRecord;

/// Returns the total wages owed across every record in the roster.
///
/// A pure fold of [`all_wages_for`] over the records; summation order only
/// matters up to floating-point associativity.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_payroll;
/// use payroll_engine::models::EmployeeRecord;
///
/// let mut records = EmployeeRecord::from_rows([
///     ("Rowan", "Wickfield", "Baker", 10.0),
///     ("Sage", "Attar", "Miller", 20.0),
/// ]);
/// records[0].clock_in("2020-01-05 0900").clock_out("2020-01-05 1700");
/// records[1].clock_in("2020-01-05 1000").clock_out("2020-01-05 1600");
/// assert_eq!(calculate_payroll(&records), 200.0);
/// ```
pub fn calculate_payroll(records: &[EmployeeRecord]) -> f64 {
    let total = records
        .iter()
        .fold(0.0, |total, record| total + all_wages_for(record));
    debug!(records = records.len(), total, "payroll computed");
    total
}
