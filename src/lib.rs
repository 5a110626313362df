//! Payroll calculation engine for punch-clock time records.
//!
//! This crate builds employee records from tabular roster rows, records
//! time-in and time-out punch events against them, and derives hours worked
//! and wages owed per date, per employee, and across a whole roster.
//!
//! The core is deliberately permissive: malformed rows and timestamps degrade
//! to absent fields and not-a-number results rather than errors. Callers who
//! want malformed input rejected up front can use the [`validate`] module,
//! which layers strict checks on top of the same core.

#![warn(missing_docs)]

pub mod calculation;
pub mod error;
pub mod models;
pub mod validate;
