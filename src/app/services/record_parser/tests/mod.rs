//! Test utilities for record parser testing
//!
//! Shared fixtures and helpers used across the parser test modules.

use std::io::Write;
use tempfile::NamedTempFile;

mod parser_tests;

/// Two well-formed records
pub fn create_sample_input() -> String {
    "S001, Alice Smith, 85, 90, 78, 92\nS002, Bob Lee, 70, 65, 80, 75".to_string()
}

/// Three lines where the middle one carries an out-of-range grade
pub fn create_input_with_invalid_grade() -> String {
    r#"S001,Alice,90,90,90,90
S002,Bob,70,101,80,75
S003,Carol,50,60,70,80"#
        .to_string()
}

/// Helper to create a temporary file with given content
pub fn create_temp_file(content: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    write!(temp_file, "{}", content).unwrap();
    temp_file
}
