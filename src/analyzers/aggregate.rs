use crate::analyzers::grade::grade;
use crate::analyzers::types::{AssignmentSummary, ClassAggregate, ClassReport, StudentSummary};
use crate::roster::{ASSIGNMENT_COUNT, Roster, Student};
use crate::stats::{
    assignment_grades, average, class_average, highest, lowest, stddev, student_average,
};
use chrono::Utc;

/// Summarises a [`Roster`] into a [`ClassReport`].
///
/// Computes the pooled class average and spread, per-assignment averages,
/// per-student averages with letter grades, and the highest and lowest
/// students.
pub fn build_report(roster: &Roster) -> ClassReport {
    let all_grades: Vec<f64> = roster.iter().flat_map(|s| s.grades).collect();
    let class_avg = class_average(roster);

    let assignments = (1..=ASSIGNMENT_COUNT)
        .map(|assignment| {
            let series = assignment_grades(roster, assignment);
            let avg = average(&series);
            AssignmentSummary {
                assignment,
                average: avg,
                stddev: stddev(&series, avg),
            }
        })
        .collect();

    let students = roster
        .iter()
        .map(|s| summarize(s, student_average(s)))
        .collect();

    ClassReport {
        schema_version: 1,
        generated_at: Utc::now(),
        student_count: roster.len(),
        class: ClassAggregate {
            average: class_avg,
            stddev: stddev(&all_grades, class_avg),
            grade: grade(class_avg),
        },
        assignments,
        students,
        highest: highest(roster).map(|(s, avg)| summarize(s, avg)),
        lowest: lowest(roster).map(|(s, avg)| summarize(s, avg)),
    }
}

pub fn summarize(student: &Student, average: f64) -> StudentSummary {
    StudentSummary {
        name: student.name.clone(),
        average,
        grade: grade(average),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster() -> Roster {
        Roster::new(vec![
            Student::new(
                "Alice",
                [90.0, 80.0, 70.0, 60.0, 50.0, 40.0, 30.0, 20.0, 10.0, 0.0],
            ),
            Student::new(
                "Bob",
                [10.0, 20.0, 30.0, 40.0, 50.0, 60.0, 70.0, 80.0, 90.0, 100.0],
            ),
            Student::new("Cara", [95.0; ASSIGNMENT_COUNT]),
        ])
    }

    #[test]
    fn test_build_report_summaries() {
        let report = build_report(&roster());

        assert_eq!(report.student_count, 3);
        assert_eq!(report.assignments.len(), ASSIGNMENT_COUNT);
        assert_eq!(report.assignments[0].assignment, 1);
        assert_eq!(report.assignments[0].average, 65.0);

        let names: Vec<_> = report.students.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Alice", "Bob", "Cara"]);
        assert_eq!(report.students[2].grade, "A");

        assert_eq!(report.highest.as_ref().unwrap().name, "Cara");
        // Alice averages 45, Bob 55.
        assert_eq!(report.lowest.as_ref().unwrap().name, "Alice");
    }

    #[test]
    fn test_build_report_empty_roster() {
        let report = build_report(&Roster::default());

        assert_eq!(report.student_count, 0);
        assert_eq!(report.class.average, 0.0);
        assert_eq!(report.class.grade, "F");
        assert!(report.students.is_empty());
        assert!(report.highest.is_none());
        assert!(report.lowest.is_none());
    }

    #[test]
    fn test_report_serializes_to_json() {
        let report = build_report(&roster());
        let value = serde_json::to_value(&report).unwrap();

        assert_eq!(value["student_count"], 3);
        assert_eq!(value["students"][0]["name"], "Alice");
        assert!(value["generated_at"].is_string());
    }
}
