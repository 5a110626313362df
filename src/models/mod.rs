//! Core data models for the payroll engine.
//!
//! This module contains the employee record, the roster row it is built from,
//! and the clock punch events accumulated against it.

mod employee;
mod event;

pub use employee::{EmployeeRecord, RosterRow};
pub use event::{ClockEvent, EventKind};
