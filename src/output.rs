//! Output formatting for grades, student rows and class reports.
//!
//! Every grade or average shown to the user carries exactly two decimals.

use std::io::Write;

use anyhow::Result;
use tracing::debug;

use crate::analyzers::types::ClassReport;
use crate::roster::Student;

/// Formats a grade or average with two decimal places.
pub fn score(value: f64) -> String {
    format!("{value:.2}")
}

/// Formats a list of grades as `90.00, 80.00, ...`.
pub fn grade_list(grades: &[f64]) -> String {
    grades
        .iter()
        .map(|g| score(*g))
        .collect::<Vec<_>>()
        .join(", ")
}

/// One line describing a student's grades and average.
pub fn student_line(student: &Student, average: f64) -> String {
    format!(
        "{}: {} | average {}",
        student.name,
        grade_list(&student.grades),
        score(average)
    )
}

/// Writes a [`ClassReport`] as JSON followed by a newline.
pub fn write_json<W: Write>(out: &mut W, report: &ClassReport, pretty: bool) -> Result<()> {
    debug!(students = report.student_count, pretty, "Writing JSON report");

    if pretty {
        serde_json::to_writer_pretty(&mut *out, report)?;
    } else {
        serde_json::to_writer(&mut *out, report)?;
    }
    writeln!(out)?;
    out.flush()?;

    Ok(())
}
