//! Parsing statistics and result structures for record parsing
//!
//! Each input line ends up either as a record or as a [`LineDiagnostic`];
//! the two are accumulated side by side in a [`ParseResult`].

use crate::app::models::StudentRecord;
use crate::constants::{MAX_GRADE, MIN_FIELD_COUNT, MIN_GRADE};
use std::fmt;

/// Why one input line was rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineDiagnostic {
    /// Fewer fields than id, name and four grades
    InvalidFormat { line: usize, fields: usize },

    /// A grade field is not an integer
    ParseError {
        line: usize,
        raw: String,
        value: String,
    },

    /// A grade parsed but lies outside 0..=100
    InvalidGrade { line: usize, grade: i32 },
}

impl LineDiagnostic {
    /// 1-based number of the rejected line
    pub fn line(&self) -> usize {
        match self {
            Self::InvalidFormat { line, .. }
            | Self::ParseError { line, .. }
            | Self::InvalidGrade { line, .. } => *line,
        }
    }
}

impl fmt::Display for LineDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFormat { line, fields } => write!(
                f,
                "Invalid format at line {}: expected at least {} fields, found {}",
                line, MIN_FIELD_COUNT, fields
            ),
            Self::ParseError { line, raw, value } => write!(
                f,
                "Error parsing grade at line {}: '{}' is not a valid integer (line: \"{}\")",
                line, value, raw
            ),
            Self::InvalidGrade { line, grade } => write!(
                f,
                "Invalid grade at line {}: grade {} is outside valid range ({}-{})",
                line, grade, MIN_GRADE, MAX_GRADE
            ),
        }
    }
}

/// Parsing result with records and basic statistics
#[derive(Debug, Clone, Default)]
pub struct ParseResult {
    /// Successfully parsed records in input order
    pub records: Vec<StudentRecord>,

    pub stats: ParseStats,
}

/// Simple parsing statistics
#[derive(Debug, Clone, Default)]
pub struct ParseStats {
    /// Total number of lines encountered
    pub total_lines: usize,

    /// Number of records successfully parsed
    pub records_parsed: usize,

    /// Number of lines skipped due to errors
    pub lines_skipped: usize,

    /// One diagnostic per skipped line, in line order
    pub diagnostics: Vec<LineDiagnostic>,
}

impl ParseStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a skipped line
    pub fn add_diagnostic(&mut self, diagnostic: LineDiagnostic) {
        self.lines_skipped += 1;
        self.diagnostics.push(diagnostic);
    }

    /// Calculate success rate as a percentage
    pub fn success_rate(&self) -> f64 {
        if self.total_lines == 0 {
            0.0
        } else {
            (self.records_parsed as f64 / self.total_lines as f64) * 100.0
        }
    }

    /// True when no line was skipped
    pub fn is_clean(&self) -> bool {
        self.lines_skipped == 0
    }
}
