//! Menu-driven interactive session over a loaded [`Roster`].
//!
//! The shell shows the menu, reads a choice, runs the action and loops
//! until the user quits or input runs out. Input comes from an
//! [`InputSource`] and output goes to any [`Write`], so whole sessions can
//! be scripted in tests.
//!
//! Invalid menu choices and unknown student names are re-prompted without
//! limit; a blank name cancels back to the menu. Bad assignment numbers,
//! grades or range bounds abandon the current action.

mod menu;
mod source;

pub use menu::MenuChoice;
pub use source::{ConsoleSource, InputSource, ScriptedSource};

use std::io::Write;

use anyhow::Result;
use tracing::{debug, info};

use crate::analyzers::grade::grade;
use crate::output::{score, student_line};
use crate::roster::{
    ASSIGNMENT_COUNT, GradeError, Roster, parse_assignment, parse_average, parse_grade,
};
use crate::stats;

pub struct Shell<'r, S, W> {
    roster: &'r mut Roster,
    input: S,
    out: W,
}

impl<'r, S: InputSource, W: Write> Shell<'r, S, W> {
    pub fn new(roster: &'r mut Roster, input: S, out: W) -> Self {
        Self { roster, input, out }
    }

    /// Consumes the shell and hands back its output sink.
    pub fn into_output(self) -> W {
        self.out
    }

    /// Runs the menu loop until Quit is chosen or input is exhausted.
    pub fn run(&mut self) -> Result<()> {
        info!(students = self.roster.len(), "Interactive session started");

        loop {
            write!(self.out, "{}", menu::render())?;

            let choice = match self.read_choice()? {
                Some(choice) => choice,
                None => {
                    debug!("Input exhausted");
                    MenuChoice::Quit
                }
            };
            debug!(choice = choice.number(), action = choice.label(), "Menu choice");

            if choice == MenuChoice::Quit {
                writeln!(self.out, "Goodbye.")?;
                break;
            }
            self.dispatch(choice)?;
        }

        info!("Interactive session ended");
        Ok(())
    }

    fn dispatch(&mut self, choice: MenuChoice) -> Result<()> {
        match choice {
            MenuChoice::ListStudents => self.list_students(),
            MenuChoice::ClassAverage => {
                let avg = stats::class_average(self.roster);
                writeln!(self.out, "Class average: {}", score(avg))?;
                Ok(())
            }
            MenuChoice::AssignmentAverage => self.assignment_average(),
            MenuChoice::StudentAverage => self.student_average(),
            MenuChoice::Highest => {
                match stats::highest(self.roster) {
                    Some((s, avg)) => {
                        writeln!(self.out, "Highest average: {} ({})", s.name, score(avg))?
                    }
                    None => writeln!(self.out, "No students")?,
                }
                Ok(())
            }
            MenuChoice::Lowest => {
                match stats::lowest(self.roster) {
                    Some((s, avg)) => {
                        writeln!(self.out, "Lowest average: {} ({})", s.name, score(avg))?
                    }
                    None => writeln!(self.out, "No students")?,
                }
                Ok(())
            }
            MenuChoice::FilterByRange => self.filter_by_range(),
            MenuChoice::EditGrade => self.edit_grade(),
            MenuChoice::LetterGrades => self.letter_grades(),
            MenuChoice::Quit => Ok(()),
        }
    }

    fn prompt(&mut self, message: &str) -> Result<Option<String>> {
        write!(self.out, "{message}")?;
        self.out.flush()?;
        Ok(self.input.next_line()?)
    }

    fn read_choice(&mut self) -> Result<Option<MenuChoice>> {
        loop {
            let Some(line) = self.prompt("Enter choice (1-10): ")? else {
                return Ok(None);
            };
            if let Some(choice) = MenuChoice::parse(&line) {
                return Ok(Some(choice));
            }
            writeln!(
                self.out,
                "Invalid choice '{}'. Please enter a number from 1 to 10.",
                line.trim()
            )?;
        }
    }

    /// Prompts until an existing student is named. Returns the stored name,
    /// or `None` if the user cancels with a blank line or input ends.
    fn read_student(&mut self) -> Result<Option<String>> {
        loop {
            let Some(line) = self.prompt("Enter student name (blank to cancel): ")? else {
                return Ok(None);
            };
            let name = line.trim();
            if name.is_empty() {
                writeln!(self.out, "Cancelled.")?;
                return Ok(None);
            }
            if let Some(student) = self.roster.find(name) {
                return Ok(Some(student.name.clone()));
            }
            writeln!(
                self.out,
                "{}. Please try again.",
                GradeError::UnknownStudent(name.to_string())
            )?;
        }
    }

    /// Reads a single value with `parse`, reporting a failure instead of
    /// re-prompting.
    fn read_value<T>(
        &mut self,
        message: &str,
        parse: impl Fn(&str) -> Result<T, GradeError>,
    ) -> Result<Option<T>> {
        let Some(line) = self.prompt(message)? else {
            return Ok(None);
        };
        match parse(&line) {
            Ok(value) => Ok(Some(value)),
            Err(e) => {
                writeln!(self.out, "{e}")?;
                Ok(None)
            }
        }
    }

    fn list_students(&mut self) -> Result<()> {
        for student in self.roster.iter() {
            let avg = stats::student_average(student);
            writeln!(self.out, "{}", student_line(student, avg))?;
        }
        Ok(())
    }

    fn assignment_average(&mut self) -> Result<()> {
        let message = format!("Enter assignment number (1-{ASSIGNMENT_COUNT}): ");
        let Some(assignment) = self.read_value(&message, parse_assignment)? else {
            return Ok(());
        };

        let avg = stats::assignment_average(self.roster, assignment);
        writeln!(self.out, "Assignment {assignment} average: {}", score(avg))?;
        Ok(())
    }

    fn student_average(&mut self) -> Result<()> {
        let Some(name) = self.read_student()? else {
            return Ok(());
        };

        if let Some(student) = self.roster.find(&name) {
            let avg = stats::student_average(student);
            writeln!(self.out, "{}", student_line(student, avg))?;
        }
        Ok(())
    }

    fn filter_by_range(&mut self) -> Result<()> {
        let Some(min) = self.read_value("Enter minimum average: ", parse_average)? else {
            return Ok(());
        };
        let Some(max) = self.read_value("Enter maximum average: ", parse_average)? else {
            return Ok(());
        };
        if min > max {
            writeln!(
                self.out,
                "Minimum {} is greater than maximum {}.",
                score(min),
                score(max)
            )?;
            return Ok(());
        }

        let matches = stats::filter_by_range(self.roster, min, max);
        if matches.is_empty() {
            writeln!(
                self.out,
                "No students have an average between {} and {}.",
                score(min),
                score(max)
            )?;
            return Ok(());
        }

        writeln!(
            self.out,
            "Students with an average between {} and {}:",
            score(min),
            score(max)
        )?;
        for (student, avg) in matches {
            writeln!(self.out, "  {}: {}", student.name, score(avg))?;
        }
        Ok(())
    }

    fn edit_grade(&mut self) -> Result<()> {
        let Some(name) = self.read_student()? else {
            return Ok(());
        };
        if let Some(student) = self.roster.find(&name) {
            let avg = stats::student_average(student);
            writeln!(self.out, "{}", student_line(student, avg))?;
        }

        let message = format!("Enter assignment number (1-{ASSIGNMENT_COUNT}): ");
        let Some(assignment) = self.read_value(&message, parse_assignment)? else {
            return Ok(());
        };
        let Some(value) = self.read_value("Enter new grade: ", parse_grade)? else {
            return Ok(());
        };

        match self.roster.set_grade(&name, assignment, value) {
            Ok(previous) => {
                info!(student = %name, assignment, previous, value, "Grade updated");
                writeln!(
                    self.out,
                    "Updated {name} assignment {assignment}: {} -> {}",
                    score(previous),
                    score(value)
                )?;
            }
            Err(e) => writeln!(self.out, "{e}")?,
        }
        Ok(())
    }

    fn letter_grades(&mut self) -> Result<()> {
        for student in self.roster.iter() {
            let avg = stats::student_average(student);
            writeln!(self.out, "{}: {} ({})", student.name, score(avg), grade(avg))?;
        }
        let class_avg = stats::class_average(self.roster);
        writeln!(self.out, "Class: {} ({})", score(class_avg), grade(class_avg))?;
        Ok(())
    }
}
