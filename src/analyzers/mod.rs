//! Letter grading and class reports.
//!
//! Builds on the aggregation functions in [`crate::stats`] to produce a
//! serializable summary of the roster, with letter grades for the class
//! and each student.

pub mod aggregate;
pub mod grade;
pub mod types;
