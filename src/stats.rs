//! Pure aggregation functions over a [`Roster`].

use crate::roster::{Roster, Student};

/// Computes the arithmetic mean of a slice of values. Returns 0.0 for empty input.
pub fn average(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Computes the population standard deviation given a pre-computed mean.
/// Returns 0.0 for empty input.
pub fn stddev(values: &[f64], mean: f64) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / values.len() as f64;

    variance.sqrt()
}

/// Mean over the concatenation of every group, so larger groups weigh more.
pub fn pooled_average<'a, I>(groups: I) -> f64
where
    I: IntoIterator<Item = &'a [f64]>,
{
    let (sum, count) = groups
        .into_iter()
        .flatten()
        .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));

    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}

pub fn student_average(student: &Student) -> f64 {
    average(&student.grades)
}

/// Mean of every grade of every student, pooled together.
pub fn class_average(roster: &Roster) -> f64 {
    pooled_average(roster.iter().map(|s| &s.grades[..]))
}

/// Grades at 1-based `assignment` across the roster, in roster order.
pub fn assignment_grades(roster: &Roster, assignment: usize) -> Vec<f64> {
    let Some(index) = assignment.checked_sub(1) else {
        return Vec::new();
    };
    roster
        .iter()
        .filter_map(|s| s.grades.get(index).copied())
        .collect()
}

/// Mean of the grade at 1-based `assignment` across all students.
///
/// Students without that assignment are skipped, so an out-of-range index
/// yields 0.0.
pub fn assignment_average(roster: &Roster, assignment: usize) -> f64 {
    average(&assignment_grades(roster, assignment))
}

/// Student with the lowest average. Ties resolve to the earliest student.
pub fn lowest(roster: &Roster) -> Option<(&Student, f64)> {
    extreme_by(roster, |candidate, best| candidate < best)
}

/// Student with the highest average. Ties resolve to the earliest student.
pub fn highest(roster: &Roster) -> Option<(&Student, f64)> {
    extreme_by(roster, |candidate, best| candidate > best)
}

fn extreme_by(roster: &Roster, replaces: impl Fn(f64, f64) -> bool) -> Option<(&Student, f64)> {
    let mut best: Option<(&Student, f64)> = None;

    for student in roster.iter() {
        let avg = student_average(student);
        match best {
            Some((_, best_avg)) if !replaces(avg, best_avg) => {}
            _ => best = Some((student, avg)),
        }
    }

    best
}

/// Students whose average lies in `[min, max]`, in roster order.
pub fn filter_by_range(roster: &Roster, min: f64, max: f64) -> Vec<(&Student, f64)> {
    roster
        .iter()
        .map(|s| (s, student_average(s)))
        .filter(|(_, avg)| *avg >= min && *avg <= max)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::ASSIGNMENT_COUNT;

    fn flat(name: &str, grade: f64) -> Student {
        Student::new(name, [grade; ASSIGNMENT_COUNT])
    }

    fn ranked_roster() -> Roster {
        Roster::new(vec![
            flat("D", 65.0),
            flat("C", 70.0),
            flat("B", 85.0),
            flat("A-", 90.0),
            flat("A", 95.0),
        ])
    }

    #[test]
    fn test_average_with_empty_input() {
        assert_eq!(average(&[]), 0.0);
    }

    #[test]
    fn test_average_normal_values() {
        assert_eq!(average(&[1.0, 2.0, 3.0, 4.0]), 2.5);
        assert_eq!(average(&[42.0]), 42.0);
    }

    #[test]
    fn test_stddev() {
        assert_eq!(stddev(&[], 0.0), 0.0);
        assert_eq!(stddev(&[5.0, 5.0, 5.0], 5.0), 0.0);
        assert_eq!(stddev(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0], 5.0), 2.0);
    }

    #[test]
    fn test_pooled_average_weights_by_grade_count() {
        let groups: [&[f64]; 2] = [&[1.0, 2.0, 3.0], &[4.0]];

        let pooled = pooled_average(groups);

        assert_eq!(pooled, 2.5);
        assert_ne!(pooled, (2.0 + 4.0) / 2.0);
    }

    #[test]
    fn test_pooled_average_empty() {
        let groups: [&[f64]; 0] = [];
        assert_eq!(pooled_average(groups), 0.0);
    }

    #[test]
    fn test_class_average() {
        let roster = Roster::new(vec![flat("A", 80.0), flat("B", 60.0)]);
        assert_eq!(class_average(&roster), 70.0);
        assert_eq!(class_average(&Roster::default()), 0.0);
    }

    #[test]
    fn test_assignment_average() {
        let mut a = flat("A", 50.0);
        a.grades[2] = 100.0;
        let mut b = flat("B", 50.0);
        b.grades[2] = 80.0;
        let roster = Roster::new(vec![a, b]);

        assert_eq!(assignment_average(&roster, 3), 90.0);
        assert_eq!(assignment_average(&roster, 1), 50.0);
    }

    #[test]
    fn test_assignment_average_out_of_range() {
        let roster = ranked_roster();
        assert_eq!(assignment_average(&roster, 0), 0.0);
        assert_eq!(assignment_average(&roster, 11), 0.0);
    }

    #[test]
    fn test_lowest_and_highest() {
        let roster = ranked_roster();

        let (low, low_avg) = lowest(&roster).unwrap();
        let (high, high_avg) = highest(&roster).unwrap();

        assert_eq!(low.name, "D");
        assert_eq!(low_avg, 65.0);
        assert_eq!(high.name, "A");
        assert_eq!(high_avg, 95.0);
    }

    #[test]
    fn test_extremes_are_stable_on_ties() {
        let roster = Roster::new(vec![flat("First", 75.0), flat("Second", 75.0)]);

        assert_eq!(lowest(&roster).unwrap().0.name, "First");
        assert_eq!(highest(&roster).unwrap().0.name, "First");
    }

    #[test]
    fn test_extremes_on_empty_roster() {
        let roster = Roster::default();
        assert!(lowest(&roster).is_none());
        assert!(highest(&roster).is_none());
    }

    #[test]
    fn test_filter_by_range_is_inclusive_and_ordered() {
        let roster = ranked_roster();

        let names: Vec<_> = filter_by_range(&roster, 70.0, 90.0)
            .into_iter()
            .map(|(s, _)| s.name.as_str())
            .collect();

        assert_eq!(names, vec!["C", "B", "A-"]);
    }

    #[test]
    fn test_filter_by_range_no_matches() {
        let roster = ranked_roster();
        assert!(filter_by_range(&roster, 96.0, 100.0).is_empty());
        assert!(filter_by_range(&roster, 90.0, 70.0).is_empty());
    }
}
