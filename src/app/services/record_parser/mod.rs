//! Record parser for delimited student grade files
//!
//! Turns raw text lines into validated [`StudentRecord`](crate::app::models::StudentRecord)s.
//! A malformed line never aborts the run: it is skipped and described by a
//! [`LineDiagnostic`], and parsing moves on to the next line.
//!
//! ## Architecture
//!
//! - [`parser`] - File reading and line iteration
//! - [`field_parsers`] - Splitting one line and validating its fields
//! - [`stats`] - Diagnostics, parse statistics and result structures
//!
//! ## Usage
//!
//! ```rust
//! use student_records::app::services::record_parser::RecordParser;
//!
//! let result = RecordParser::new().parse_str("S001, Alice, 85, 90, 78, 92\nbad line");
//!
//! assert_eq!(result.records.len(), 1);
//! assert_eq!(result.stats.lines_skipped, 1);
//! ```

pub mod field_parsers;
pub mod parser;
pub mod stats;

#[cfg(test)]
pub mod tests;

pub use field_parsers::parse_record_line;
pub use parser::RecordParser;
pub use stats::{LineDiagnostic, ParseResult, ParseStats};
