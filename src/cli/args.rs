//! Command-line argument definitions for the student records processor
//!
//! Defines the CLI interface using the clap derive API.

use crate::{RecordsError, Result};
use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for the student records processor
///
/// Reads a comma-delimited file of student grades and writes a report with
/// per-student averages, letter grades and class statistics.
#[derive(Debug, Clone, Default, Parser)]
#[command(
    name = "student-records",
    version,
    about = "Validate student grade records and write a class statistics report",
    long_about = "Reads a text file with one student per line (id, name and four grades \
                  separated by commas), skips and reports malformed lines, and writes a \
                  fixed-format report with per-student averages, letter grades and class \
                  statistics. Missing file names are prompted for interactively."
)]
pub struct Args {
    /// Student records file to read
    ///
    /// One record per line: id, name, grade1, grade2, grade3, grade4.
    /// If not given here, in the config file or in STUDENT_RECORDS_INPUT,
    /// it is prompted for.
    #[arg(value_name = "INPUT", help = "Student records file to read")]
    pub input_path: Option<PathBuf>,

    /// Report file to write
    ///
    /// Replaced atomically when the run succeeds; never left half-written.
    #[arg(value_name = "OUTPUT", help = "Report file to write")]
    pub output_path: Option<PathBuf>,

    /// Path to configuration file
    ///
    /// TOML configuration file. If not specified, looks for
    /// <config dir>/student-records/config.toml
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        help = "Path to configuration file (TOML format)"
    )]
    pub config_file: Option<PathBuf>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    ///
    /// Only show errors. Overrides verbose settings.
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

impl Args {
    /// Validate the arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if let Some(config_file) = &self.config_file {
            if !config_file.is_file() {
                return Err(RecordsError::configuration(format!(
                    "Config file does not exist: {}",
                    config_file.display()
                )));
            }
        }

        Ok(())
    }

    /// Log level from flags, falling back to the configured level
    pub fn get_log_level<'a>(&self, configured: Option<&'a str>) -> &'a str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => configured.unwrap_or("warn"),
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Whether to print the run summary
    pub fn show_summary(&self) -> bool {
        !self.quiet
    }
}
