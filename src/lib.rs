//! Student Records Library
//!
//! Reads a comma-delimited file of student grade records, validates each line
//! and writes a fixed-format report with per-student averages, letter grades
//! and class statistics.
//!
//! This library provides tools for:
//! - Parsing and validating records line by line, skipping bad lines with diagnostics
//! - Computing class average and grade distribution in one pass
//! - Writing the report file all-or-nothing
//! - Layered configuration and a small interactive CLI

pub mod config;
pub mod constants;
pub mod error;
pub mod processor;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod record_parser;
        pub mod report;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
    pub mod input;
}

// Re-export commonly used types
pub use app::models::{LetterGrade, StudentRecord};
pub use app::services::record_parser::{LineDiagnostic, ParseResult, RecordParser};
pub use app::services::report::{ClassStatistics, render_report, write_report};
pub use config::Config;
pub use error::{RecordsError, Result};
pub use processor::{ProcessingSummary, process_student_records};
