//! End-to-end processing of one student records file.
//!
//! Read the whole input, parse it, then write the whole report. Nothing is
//! written until parsing has finished.

use crate::app::services::record_parser::{LineDiagnostic, RecordParser};
use crate::app::services::report::write_report;
use crate::{RecordsError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::info;

/// Processing statistics for one run
#[derive(Debug, Clone, Default)]
pub struct ProcessingSummary {
    pub records_written: usize,
    pub lines_read: usize,
    pub lines_skipped: usize,
    pub diagnostics: Vec<LineDiagnostic>,
    pub class_average: f64,
    pub output_path: PathBuf,
    pub processing_time_ms: u128,
}

/// Parse `input_path` and write the report to `output_path`
pub fn process_student_records(input_path: &Path, output_path: &Path) -> Result<ProcessingSummary> {
    let start_time = Instant::now();

    if is_same_file(input_path, output_path) {
        return Err(RecordsError::configuration(format!(
            "Output path must differ from input path: {}",
            input_path.display()
        )));
    }

    let parse_result = RecordParser::new().parse_file(input_path)?;
    let report = write_report(output_path, &parse_result.records)?;

    let summary = ProcessingSummary {
        records_written: parse_result.records.len(),
        lines_read: parse_result.stats.total_lines,
        lines_skipped: parse_result.stats.lines_skipped,
        diagnostics: parse_result.stats.diagnostics,
        class_average: report.statistics.class_average,
        output_path: report.output_path,
        processing_time_ms: start_time.elapsed().as_millis(),
    };

    info!(
        "Processed {} of {} lines in {}ms",
        summary.records_written, summary.lines_read, summary.processing_time_ms
    );

    Ok(summary)
}

/// True when both paths name the same file
///
/// Existing paths are compared after canonicalization so `./a.txt`, `a.txt`
/// and `sub/../a.txt` all match. Otherwise the paths are compared as written.
pub fn is_same_file(first: &Path, second: &Path) -> bool {
    if first == second {
        return true;
    }

    match (fs::canonicalize(first), fs::canonicalize(second)) {
        (Ok(first), Ok(second)) => first == second,
        _ => false,
    }
}
