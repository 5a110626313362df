//! Wage derivation for the payroll engine.
//!
//! This module contains the calculation pipeline: hours worked on a date,
//! wages earned on a date, total wages for one employee, and the payroll
//! total across a whole roster. All functions are pure over borrowed records.

mod hours;
mod payroll;
mod wages;

pub use hours::hours_worked_on_date;
pub use payroll::calculate_payroll;
pub use wages::{all_wages_for, wages_earned_on_date};
