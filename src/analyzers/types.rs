//! Data types produced by the report builder.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Average and spread of one assignment across the class.
#[derive(Debug, Serialize)]
pub struct AssignmentSummary {
    pub assignment: usize,
    pub average: f64,
    pub stddev: f64,
}

/// One student's overall standing.
#[derive(Debug, Serialize)]
pub struct StudentSummary {
    pub name: String,
    pub average: f64,
    pub grade: String,
}

/// Class-wide score and letter grade.
#[derive(Debug, Serialize)]
pub struct ClassAggregate {
    pub average: f64,
    pub stddev: f64,
    pub grade: String,
}

/// Complete report for a roster, emitted by the `report` subcommand.
#[derive(Debug, Serialize)]
pub struct ClassReport {
    pub schema_version: u8,
    pub generated_at: DateTime<Utc>,
    pub student_count: usize,
    pub class: ClassAggregate,
    pub assignments: Vec<AssignmentSummary>,
    pub students: Vec<StudentSummary>,
    pub highest: Option<StudentSummary>,
    pub lowest: Option<StudentSummary>,
}
