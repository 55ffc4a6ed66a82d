/// Converts a percentage score (0–100) into a letter grade.
///
/// | Range       | Grade |
/// |-------------|-------|
/// | >= 97       | A+    |
/// | >= 90       | A     |
/// | >= 80       | B     |
/// | >= 70       | C     |
/// | >= 60       | D     |
/// | < 60        | F     |
pub fn grade(score: f64) -> String {
    match score {
        s if s >= 97.0 => "A+".into(),
        s if s >= 90.0 => "A".into(),
        s if s >= 80.0 => "B".into(),
        s if s >= 70.0 => "C".into(),
        s if s >= 60.0 => "D".into(),
        _ => "F".into(),
    }
}
