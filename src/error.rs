//! Error handling for student record processing.
//!
//! Per-line validation failures never surface here; they are collected as
//! [`LineDiagnostic`](crate::app::services::record_parser::LineDiagnostic)s by
//! the parser. The variants below are the fatal ones that abort a run.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RecordsError {
    /// Input path does not resolve to a readable regular file
    #[error("File not found: {path}")]
    InputNotFound { path: PathBuf },

    /// Read or write failure on an existing path
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Failed to parse config file {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// A record was constructed with data the parser would have rejected
    #[error("Invalid record: {message}")]
    InvalidRecord { message: String },
}

impl RecordsError {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create an input-not-found error
    pub fn input_not_found(path: impl Into<PathBuf>) -> Self {
        Self::InputNotFound { path: path.into() }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create an invalid record error
    pub fn invalid_record(message: impl Into<String>) -> Self {
        Self::InvalidRecord {
            message: message.into(),
        }
    }

    /// Operator-facing hint on how to recover from this error
    pub fn guidance(&self) -> &'static str {
        match self {
            Self::InputNotFound { .. } => {
                "Please check the file path and name, and ensure the file exists."
            }
            Self::Io { .. } => "Please check file permissions and ensure sufficient disk space.",
            Self::Configuration { .. } | Self::ConfigParse { .. } => {
                "Please check the command-line arguments and the configuration file."
            }
            Self::InvalidRecord { .. } => "Grades must be whole numbers between 0 and 100.",
        }
    }

    /// Process exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Configuration { .. } | Self::ConfigParse { .. } => 2,
            _ => 1,
        }
    }
}

impl From<std::io::Error> for RecordsError {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

pub type Result<T> = std::result::Result<T, RecordsError>;
