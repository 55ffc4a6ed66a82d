use std::fs;

use gradebook::analyzers::aggregate::build_report;
use gradebook::parser::{load_roster, read_roster};
use gradebook::shell::{ConsoleSource, ScriptedSource, Shell};
use gradebook::stats::{class_average, filter_by_range, highest, lowest};

const CSV: &str = "Alice,90,80,70,60,50,40,30,20,10,0\nBob,10,20,30,40,50,60,70,80,90,100";

fn write_roster(dir: &tempfile::TempDir, content: &str) -> std::path::PathBuf {
    let path = dir.path().join("students.csv");
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_class_average_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_roster(&dir, CSV);

    let roster = load_roster(&path);

    assert_eq!(roster.len(), 2);
    assert_eq!(class_average(&roster), 50.0);
}

#[test]
fn test_malformed_row_is_skipped_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let content = "Alice,90,80,70,60,50,40,30,20,10,0\n\
                   Carol,1,2,3,4,5,6,7,8,9\n\
                   Bob,10,20,30,40,50,60,70,80,90,100\n";
    let path = write_roster(&dir, content);

    let roster = read_roster(&path).unwrap();

    assert_eq!(roster.len(), 2);
    assert!(roster.find("carol").is_none());
}

#[test]
fn test_missing_file_loads_nothing() {
    let dir = tempfile::tempdir().unwrap();

    let roster = load_roster(&dir.path().join("nope.csv"));

    assert!(roster.is_empty());
    assert!(highest(&roster).is_none());
    assert!(lowest(&roster).is_none());
}

#[test]
fn test_scripted_session_edits_and_queries() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_roster(&dir, CSV);
    let mut roster = load_roster(&path);

    let script = ScriptedSource::new([
        "2", // class average
        "8", "ALICE", "10", "100", // edit grade
        "2", "6", "10",
    ]);
    let mut shell = Shell::new(&mut roster, script, Vec::new());
    shell.run().unwrap();
    let output = String::from_utf8(shell.into_output()).unwrap();

    assert!(output.contains("Class average: 50.00"));
    assert!(output.contains("Updated Alice assignment 10: 0.00 -> 100.00"));
    assert!(output.contains("Class average: 55.00"));
    assert!(output.contains("Lowest average: Alice (55.00)"));

    assert_eq!(roster.find("alice").unwrap().grades[9], 100.0);
    // Edits never touch the file.
    assert_eq!(fs::read_to_string(&path).unwrap(), CSV);
}

#[test]
fn test_console_source_session() {
    let mut roster = gradebook::parser::parse_roster(CSV);
    let input = std::io::Cursor::new("7\n40\n60\n10\n");

    let mut shell = Shell::new(&mut roster, ConsoleSource::new(input), Vec::new());
    shell.run().unwrap();
    let output = String::from_utf8(shell.into_output()).unwrap();

    assert!(output.contains("  Alice: 45.00"));
    assert!(output.contains("  Bob: 55.00"));
    assert_eq!(filter_by_range(&roster, 40.0, 60.0).len(), 2);
}

#[test]
fn test_report_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_roster(&dir, CSV);
    let roster = load_roster(&path);

    let report = build_report(&roster);

    assert_eq!(report.class.average, 50.0);
    assert_eq!(report.class.grade, "F");
    assert_eq!(report.highest.unwrap().name, "Bob");
    assert_eq!(report.lowest.unwrap().name, "Alice");
}
