//! Roster loader for comma-separated grade files.
//!
//! Each line is `name,grade1,...,grade10`. Rows that do not carry a
//! non-empty name followed by ten numeric grades are dropped without
//! complaint; trailing fields past the tenth grade are ignored.

use std::collections::HashSet;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::{debug, error, warn};

use crate::roster::{ASSIGNMENT_COUNT, Roster, Student, is_valid_grade};

/// Loads the roster at `path`.
///
/// A missing or unreadable file is logged and yields an empty roster; the
/// caller decides how to end the session.
#[tracing::instrument(skip_all, fields(path = %path.display()))]
pub fn load_roster(path: &Path) -> Roster {
    match read_roster(path) {
        Ok(roster) => roster,
        Err(e) => {
            error!(error = %format!("{e:#}"), "Failed to read roster file");
            Roster::default()
        }
    }
}

/// Loads the roster for a session, or explains on `err` why there is none.
///
/// Returns `None` when the file is missing, unreadable or holds no valid
/// rows; the caller should then exit without starting a session.
pub fn load_session_roster<W: Write>(path: &Path, err: &mut W) -> Result<Option<Roster>> {
    let roster = load_roster(path);
    if roster.is_empty() {
        warn!(path = %path.display(), "No student records loaded");
        writeln!(
            err,
            "No valid student records could be loaded from {}. Exiting.",
            path.display()
        )?;
        return Ok(None);
    }
    Ok(Some(roster))
}

/// Reads and parses the roster at `path`, surfacing I/O failures.
pub fn read_roster(path: &Path) -> Result<Roster> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("reading roster file {}", path.display()))?;
    Ok(parse_roster(&content))
}

/// Parses roster text. Never fails: malformed rows are skipped.
pub fn parse_roster(content: &str) -> Roster {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .trim(Trim::All)
        .from_reader(content.as_bytes());

    let mut students = Vec::new();
    let mut skipped = 0usize;

    for result in reader.records() {
        match result.ok().as_ref().and_then(parse_record) {
            Some(student) => students.push(student),
            None => skipped += 1,
        }
    }

    debug!(students = students.len(), skipped, "Parsed roster");
    warn_duplicates(&students);

    Roster::new(students)
}

fn parse_record(record: &StringRecord) -> Option<Student> {
    if record.len() < ASSIGNMENT_COUNT + 1 {
        return None;
    }

    let name = record.get(0)?.trim();
    if name.is_empty() {
        return None;
    }

    let mut grades = [0.0; ASSIGNMENT_COUNT];
    for (slot, field) in grades.iter_mut().zip(record.iter().skip(1)) {
        let value: f64 = field.trim().parse().ok()?;
        if !is_valid_grade(value) {
            return None;
        }
        *slot = value;
    }

    Some(Student::new(name, grades))
}

fn warn_duplicates(students: &[Student]) {
    let mut seen = HashSet::new();
    for student in students {
        if !seen.insert(student.name.to_lowercase()) {
            warn!(
                student = %student.name,
                "Duplicate student name; lookups use the first occurrence"
            );
        }
    }
}
