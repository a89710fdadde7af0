//! Application constants for the student records processor
//!
//! Field layout of the input format, grade bounds, letter thresholds and the
//! fixed text of the generated report.

// =============================================================================
// Input Format
// =============================================================================

/// Field separator for input lines
pub const FIELD_DELIMITER: char = ',';

/// Number of grade fields every record carries
pub const GRADE_COUNT: usize = 4;

/// Index of the first grade field (after id and name)
pub const FIRST_GRADE_FIELD: usize = 2;

/// Minimum number of fields a line must split into: id, name and four grades
pub const MIN_FIELD_COUNT: usize = FIRST_GRADE_FIELD + GRADE_COUNT;

/// Lowest valid grade (inclusive)
pub const MIN_GRADE: i32 = 0;

/// Highest valid grade (inclusive)
pub const MAX_GRADE: i32 = 100;

// =============================================================================
// Letter Grade Thresholds
// =============================================================================

/// Closed lower bounds on the average for each passing letter
pub mod thresholds {
    pub const A: f64 = 90.0;
    pub const B: f64 = 80.0;
    pub const C: f64 = 70.0;
    pub const D: f64 = 60.0;
}

// =============================================================================
// Report Layout
// =============================================================================

pub mod report {
    pub const TITLE: &str = "Student Records Report";
    pub const TITLE_DIVIDER: &str = "=====================";
    pub const STUDENT_DIVIDER: &str = "---------------------";
    pub const STATISTICS_TITLE: &str = "Class Statistics:";
    pub const STATISTICS_DIVIDER: &str = "----------------";
    pub const DISTRIBUTION_TITLE: &str = "Grade Distribution:";
}

// =============================================================================
// Environment and Configuration
// =============================================================================

/// Environment variable overriding the input path
pub const ENV_INPUT_PATH: &str = "STUDENT_RECORDS_INPUT";

/// Environment variable overriding the output path
pub const ENV_OUTPUT_PATH: &str = "STUDENT_RECORDS_OUTPUT";

/// Directory name under the user config directory
pub const CONFIG_DIR_NAME: &str = "student-records";

/// Default config file name
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Crate target used for the default log filter
pub const LOG_TARGET: &str = "student_records";
