//! Menu entries and choice parsing.

/// The ten menu actions, numbered as shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    ListStudents,
    ClassAverage,
    AssignmentAverage,
    StudentAverage,
    Highest,
    Lowest,
    FilterByRange,
    EditGrade,
    LetterGrades,
    Quit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 10] = [
        MenuChoice::ListStudents,
        MenuChoice::ClassAverage,
        MenuChoice::AssignmentAverage,
        MenuChoice::StudentAverage,
        MenuChoice::Highest,
        MenuChoice::Lowest,
        MenuChoice::FilterByRange,
        MenuChoice::EditGrade,
        MenuChoice::LetterGrades,
        MenuChoice::Quit,
    ];

    /// Parses a menu number typed by the user. Anything other than an
    /// integer in `1..=10` is rejected.
    pub fn parse(input: &str) -> Option<Self> {
        let number: usize = input.trim().parse().ok()?;
        Self::ALL.get(number.checked_sub(1)?).copied()
    }

    pub fn number(self) -> usize {
        Self::ALL
            .iter()
            .position(|c| *c == self)
            .map_or(0, |i| i + 1)
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::ListStudents => "List all students",
            MenuChoice::ClassAverage => "Class average",
            MenuChoice::AssignmentAverage => "Assignment average",
            MenuChoice::StudentAverage => "Student grades and average",
            MenuChoice::Highest => "Highest average",
            MenuChoice::Lowest => "Lowest average",
            MenuChoice::FilterByRange => "Students within an average range",
            MenuChoice::EditGrade => "Edit a grade",
            MenuChoice::LetterGrades => "Letter grades",
            MenuChoice::Quit => "Quit",
        }
    }
}

/// Renders the full menu, one numbered entry per line.
pub fn render() -> String {
    let mut menu = String::from("\n===== Gradebook =====\n");
    for choice in MenuChoice::ALL {
        menu.push_str(&format!("{}. {}\n", choice.number(), choice.label()));
    }
    menu
}
