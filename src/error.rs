//! Error types for the strict validation layer.
//!
//! The core engine never errors: malformed input degrades to absent fields
//! and not-a-number results. These types exist for the [`crate::validate`]
//! layer, which rejects malformed input before it reaches the core.

use thiserror::Error;

/// Errors reported by the strict validation layer.
///
/// # Example
///
/// ```
/// use payroll_engine::error::PayrollError;
///
/// let error = PayrollError::MalformedTimestamp {
///     value: "2020-01-05T0900".to_string(),
///     message: "expected a single space between date and hour".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Malformed timestamp '2020-01-05T0900': expected a single space between date and hour"
/// );
/// ```
#[derive(Debug, Error)]
pub enum PayrollError {
    /// A timestamp did not match the `"YYYY-MM-DD HHMM"` shape.
    #[error("Malformed timestamp '{value}': {message}")]
    MalformedTimestamp {
        /// The offending timestamp.
        value: String,
        /// A description of what was wrong with it.
        message: String,
    },

    /// The date fragment of a timestamp was not a real calendar date.
    #[error("Invalid date '{value}': not a YYYY-MM-DD calendar date")]
    InvalidDate {
        /// The offending date fragment.
        value: String,
    },

    /// The hour fragment of a timestamp was not a valid HHMM clock time.
    #[error("Invalid hour '{value}': {message}")]
    InvalidHour {
        /// The offending hour fragment.
        value: String,
        /// A description of what was wrong with it.
        message: String,
    },

    /// An employee record was missing a required roster attribute.
    #[error("Incomplete employee record: missing {field}")]
    IncompleteRecord {
        /// The name of the missing attribute.
        field: &'static str,
    },

    /// An employee record carried a pay rate that is not a finite number.
    #[error("Invalid pay rate {value}")]
    InvalidPayRate {
        /// The offending rate.
        value: f64,
    },
}

/// A type alias for Results that return PayrollError.
pub type PayrollResult<T> = Result<T, PayrollError>;
