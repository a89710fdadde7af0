//! Test utilities for report generation

use crate::app::models::StudentRecord;


/// The two students of the reference report
pub fn sample_records() -> Vec<StudentRecord> {
    vec![
        StudentRecord::new("S001", "Alice Smith", [85, 90, 78, 92]).unwrap(),
        StudentRecord::new("S002", "Bob Lee", [70, 65, 80, 75]).unwrap(),
    ]
}

/// Reference report text for [`sample_records`]
pub const SAMPLE_REPORT: &str = "\
Student Records Report
=====================

Student ID: S001
Name: Alice Smith
Grades: 85 90 78 92
Average: 86.25
Letter Grade: B
---------------------
Student ID: S002
Name: Bob Lee
Grades: 70 65 80 75
Average: 72.50
Letter Grade: C
---------------------
Class Statistics:
----------------
Total Students: 2
Class Average: 79.38
Grade Distribution:
A: 0
B: 1
C: 1
D: 0
F: 0
";
