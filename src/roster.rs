//! In-memory roster of students and their assignment grades.
//!
//! The roster is loaded once at startup and owned by whoever drives the
//! session. The only mutation is [`Roster::set_grade`], which overwrites a
//! single slot of a student's fixed-size grade array.

use thiserror::Error;

/// Number of graded assignments every student carries.
pub const ASSIGNMENT_COUNT: usize = 10;

/// Largest magnitude accepted for a grade, keeping every sum finite.
pub const GRADE_LIMIT: f64 = 1_000_000.0;

/// Recoverable errors caused by user input. The `Display` text is shown
/// to the user verbatim.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GradeError {
    #[error("No student named '{0}'")]
    UnknownStudent(String),

    #[error("Assignment number must be between 1 and {max}, got {0}", max = ASSIGNMENT_COUNT)]
    AssignmentOutOfRange(usize),

    #[error("'{0}' is not a valid assignment number")]
    InvalidAssignment(String),

    #[error("'{0}' is not a valid grade")]
    InvalidGrade(String),

    #[error("'{0}' is not a valid average")]
    InvalidAverage(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Student {
    pub name: String,
    pub grades: [f64; ASSIGNMENT_COUNT],
}

impl Student {
    pub fn new(name: impl Into<String>, grades: [f64; ASSIGNMENT_COUNT]) -> Self {
        Self {
            name: name.into(),
            grades,
        }
    }

    /// Case-insensitive exact name comparison.
    pub fn is_named(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.trim().to_lowercase()
    }
}

/// Insertion-ordered collection of students.
///
/// Duplicate names are allowed; every name-based lookup resolves to the
/// first match in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Roster {
    students: Vec<Student>,
}

impl Roster {
    pub fn new(students: Vec<Student>) -> Self {
        Self { students }
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    pub fn students(&self) -> &[Student] {
        &self.students
    }

    pub fn iter(&self) -> impl Iterator<Item = &Student> {
        self.students.iter()
    }

    /// Returns the first student whose name matches `name` case-insensitively.
    pub fn find(&self, name: &str) -> Option<&Student> {
        self.students.iter().find(|s| s.is_named(name))
    }

    fn find_mut(&mut self, name: &str) -> Option<&mut Student> {
        self.students.iter_mut().find(|s| s.is_named(name))
    }

    /// Overwrites one grade of the first student matching `name`.
    ///
    /// `assignment` is 1-based. Returns the grade that was replaced. On any
    /// error the roster is left untouched.
    pub fn set_grade(
        &mut self,
        name: &str,
        assignment: usize,
        value: f64,
    ) -> Result<f64, GradeError> {
        let student = self
            .find_mut(name)
            .ok_or_else(|| GradeError::UnknownStudent(name.trim().to_string()))?;

        if !(1..=ASSIGNMENT_COUNT).contains(&assignment) {
            return Err(GradeError::AssignmentOutOfRange(assignment));
        }
        if !is_valid_grade(value) {
            return Err(GradeError::InvalidGrade(value.to_string()));
        }

        let slot = &mut student.grades[assignment - 1];
        let previous = *slot;
        *slot = value;
        Ok(previous)
    }
}

/// Finite and within [`GRADE_LIMIT`] in magnitude.
pub fn is_valid_grade(value: f64) -> bool {
    value.is_finite() && value.abs() <= GRADE_LIMIT
}

/// Parses a 1-based assignment number typed by the user.
pub fn parse_assignment(input: &str) -> Result<usize, GradeError> {
    let trimmed = input.trim();
    let assignment: usize = trimmed
        .parse()
        .map_err(|_| GradeError::InvalidAssignment(trimmed.to_string()))?;

    if !(1..=ASSIGNMENT_COUNT).contains(&assignment) {
        return Err(GradeError::AssignmentOutOfRange(assignment));
    }
    Ok(assignment)
}

/// Parses a grade value. `NaN`, infinities and values beyond
/// [`GRADE_LIMIT`] are rejected.
pub fn parse_grade(input: &str) -> Result<f64, GradeError> {
    let trimmed = input.trim();
    match trimmed.parse::<f64>() {
        Ok(value) if is_valid_grade(value) => Ok(value),
        _ => Err(GradeError::InvalidGrade(trimmed.to_string())),
    }
}

/// Parses an average used as a range bound.
pub fn parse_average(input: &str) -> Result<f64, GradeError> {
    let trimmed = input.trim();
    match trimmed.parse::<f64>() {
        Ok(value) if is_valid_grade(value) => Ok(value),
        _ => Err(GradeError::InvalidAverage(trimmed.to_string())),
    }
}
