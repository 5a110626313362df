//! Strict input checking layered above the permissive core.
//!
//! The core engine accepts anything and degrades silently; some callers
//! would rather reject bad punches at the door. These wrappers validate a
//! timestamp or record first and only then hand off to the core, leaving the
//! core's permissive contract untouched.

use chrono::NaiveDate;

use crate::error::{PayrollError, PayrollResult};
use crate::models::EmployeeRecord;

/// Checks that a timestamp is a well-formed `"YYYY-MM-DD HHMM"` string.
///
/// The date fragment must be a real calendar date and the hour fragment must
/// be 1 to 4 ASCII digits encoding a clock time no later than 2359 with
/// minutes below 60.
///
/// # Examples
///
/// ```
/// use payroll_engine::validate::validate_timestamp;
///
/// assert!(validate_timestamp("2020-01-05 0930").is_ok());
/// assert!(validate_timestamp("2020-01-05").is_err());
/// assert!(validate_timestamp("2020-01-05 2575").is_err());
/// ```
pub fn validate_timestamp(timestamp: &str) -> PayrollResult<()> {
    let Some((date, hour_text)) = timestamp.split_once(' ') else {
        return Err(PayrollError::MalformedTimestamp {
            value: timestamp.to_string(),
            message: "expected a single space between date and hour".to_string(),
        });
    };

    if NaiveDate::parse_from_str(date, "%Y-%m-%d").is_err() {
        return Err(PayrollError::InvalidDate {
            value: date.to_string(),
        });
    }

    if hour_text.is_empty()
        || hour_text.len() > 4
        || !hour_text.bytes().all(|b| b.is_ascii_digit())
    {
        return Err(PayrollError::InvalidHour {
            value: hour_text.to_string(),
            message: "expected 1 to 4 digits in HHMM encoding".to_string(),
        });
    }

    // The digit check above guarantees this parses.
    let hour: u32 = hour_text.parse().map_err(|_| PayrollError::InvalidHour {
        value: hour_text.to_string(),
        message: "expected 1 to 4 digits in HHMM encoding".to_string(),
    })?;
    if hour > 2359 {
        return Err(PayrollError::InvalidHour {
            value: hour_text.to_string(),
            message: "hour of day out of range".to_string(),
        });
    }
    if hour % 100 >= 60 {
        return Err(PayrollError::InvalidHour {
            value: hour_text.to_string(),
            message: "minutes out of range".to_string(),
        });
    }

    Ok(())
}

/// Checks that a record carries all four roster attributes and a usable pay rate.
pub fn validate_record(record: &EmployeeRecord) -> PayrollResult<()> {
    if record.first_name.is_none() {
        return Err(PayrollError::IncompleteRecord {
            field: "first_name",
        });
    }
    if record.family_name.is_none() {
        return Err(PayrollError::IncompleteRecord {
            field: "family_name",
        });
    }
    if record.title.is_none() {
        return Err(PayrollError::IncompleteRecord { field: "title" });
    }
    match record.pay_per_hour {
        None => Err(PayrollError::IncompleteRecord {
            field: "pay_per_hour",
        }),
        Some(rate) if !rate.is_finite() => Err(PayrollError::InvalidPayRate { value: rate }),
        Some(_) => Ok(()),
    }
}

/// Records a time-in punch, rejecting malformed timestamps.
///
/// On success, delegates to [`EmployeeRecord::clock_in`] and returns the
/// record for chaining.
pub fn clock_in_strict<'a>(
    record: &'a mut EmployeeRecord,
    timestamp: &str,
) -> PayrollResult<&'a mut EmployeeRecord> {
    validate_timestamp(timestamp)?;
    Ok(record.clock_in(timestamp))
}

/// Records a time-out punch, rejecting malformed timestamps.
///
/// On success, delegates to [`EmployeeRecord::clock_out`] and returns the
/// record for chaining.
pub fn clock_out_strict<'a>(
    record: &'a mut EmployeeRecord,
    timestamp: &str,
) -> PayrollResult<&'a mut EmployeeRecord> {
    validate_timestamp(timestamp)?;
    Ok(record.clock_out(timestamp))
}
