//! Field parsing utilities for student record lines
//!
//! A line is split on commas, the id and name are trimmed, and exactly four
//! grade fields are parsed and range-checked. Anything after the fourth grade
//! is ignored.

use super::stats::LineDiagnostic;
use crate::app::models::StudentRecord;
use crate::constants::{
    FIELD_DELIMITER, FIRST_GRADE_FIELD, GRADE_COUNT, MAX_GRADE, MIN_FIELD_COUNT, MIN_GRADE,
};

/// Parse one 1-based input line into a record or the reason it was rejected
pub fn parse_record_line(
    line_number: usize,
    line: &str,
) -> std::result::Result<StudentRecord, LineDiagnostic> {
    let fields = split_fields(line);
    if fields.len() < MIN_FIELD_COUNT {
        return Err(LineDiagnostic::InvalidFormat {
            line: line_number,
            fields: fields.len(),
        });
    }

    let id = fields[0].trim();
    let name = fields[1].trim();

    let mut grades = [0; GRADE_COUNT];
    for (slot, value) in grades
        .iter_mut()
        .zip(&fields[FIRST_GRADE_FIELD..MIN_FIELD_COUNT])
    {
        *slot = parse_grade(line_number, line, value)?;
    }

    validate_grades(line_number, &grades)?;

    Ok(StudentRecord::from_valid_grades(id, name, grades))
}

/// Split a line into fields, dropping empty fields left by trailing commas
pub fn split_fields(line: &str) -> Vec<&str> {
    let mut fields: Vec<&str> = line.split(FIELD_DELIMITER).collect();
    while fields.last().is_some_and(|field| field.is_empty()) {
        fields.pop();
    }
    fields
}

/// Parse a single grade field as an integer
pub fn parse_grade(
    line_number: usize,
    raw_line: &str,
    value: &str,
) -> std::result::Result<i32, LineDiagnostic> {
    let trimmed = value.trim();
    trimmed
        .parse::<i32>()
        .map_err(|_| LineDiagnostic::ParseError {
            line: line_number,
            raw: raw_line.to_string(),
            value: trimmed.to_string(),
        })
}

/// Reject the first grade outside 0..=100
pub fn validate_grades(
    line_number: usize,
    grades: &[i32],
) -> std::result::Result<(), LineDiagnostic> {
    match grades
        .iter()
        .find(|grade| !(MIN_GRADE..=MAX_GRADE).contains(*grade))
    {
        Some(&grade) => Err(LineDiagnostic::InvalidGrade {
            line: line_number,
            grade,
        }),
        None => Ok(()),
    }
}
