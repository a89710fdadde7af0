//! Core record parser implementation
//!
//! Reads an input file in full and feeds each line through
//! [`parse_record_line`], accumulating records and diagnostics.

use std::path::Path;
use tracing::{debug, info};

use super::field_parsers::parse_record_line;
use super::stats::{ParseResult, ParseStats};
use crate::{RecordsError, Result};

/// Parser for delimited student record files
///
/// Stateless: every call starts from empty statistics.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecordParser;

impl RecordParser {
    pub fn new() -> Self {
        Self
    }

    /// Parse a record file and return records with statistics
    ///
    /// Only a missing or unreadable file is an error; malformed lines are
    /// reported through [`ParseStats::diagnostics`].
    pub fn parse_file(&self, file_path: &Path) -> Result<ParseResult> {
        info!("Parsing student records file: {}", file_path.display());

        if !file_path.is_file() {
            return Err(RecordsError::input_not_found(file_path));
        }

        let bytes = std::fs::read(file_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                RecordsError::input_not_found(file_path)
            } else {
                RecordsError::io(
                    format!("Failed to read file {}: {}", file_path.display(), e),
                    e,
                )
            }
        })?;

        let content = String::from_utf8_lossy(&bytes);
        let result = self.parse_str(&content);

        info!(
            "Parsed {} records from {} lines ({} skipped)",
            result.stats.records_parsed, result.stats.total_lines, result.stats.lines_skipped
        );

        Ok(result)
    }

    /// Parse in-memory text, one record per line
    pub fn parse_str(&self, content: &str) -> ParseResult {
        self.parse_lines(content.lines())
    }

    /// Parse a sequence of lines, numbering them from 1
    pub fn parse_lines<I, S>(&self, lines: I) -> ParseResult
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut stats = ParseStats::new();
        let mut records = Vec::new();

        for (index, line) in lines.into_iter().enumerate() {
            let line_number = index + 1;
            stats.total_lines += 1;

            match parse_record_line(line_number, line.as_ref()) {
                Ok(record) => {
                    records.push(record);
                    stats.records_parsed += 1;
                }
                Err(diagnostic) => {
                    debug!("Skipped line {}: {}", line_number, diagnostic);
                    stats.add_diagnostic(diagnostic);
                }
            }
        }

        ParseResult { records, stats }
    }
}
