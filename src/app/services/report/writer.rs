//! Report file writing
//!
//! The report is rendered in memory, written to a temporary file beside the
//! destination and renamed into place. A failed write leaves no partial
//! output file behind and does not touch an existing file at the destination.
//! A replaced report keeps its permissions; a new one gets the usual
//! umask-filtered mode of a freshly created file.

use super::renderer::Report;
use super::statistics::ClassStatistics;
use crate::app::models::StudentRecord;
use crate::{RecordsError, Result};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::{Builder, NamedTempFile};
use tracing::{debug, info};

/// Outcome of a successful report write
#[derive(Debug, Clone)]
pub struct ReportSummary {
    pub output_path: PathBuf,
    pub bytes_written: usize,
    pub statistics: ClassStatistics,
}

/// Render the report for `records` and write it to `output_path`
pub fn write_report(output_path: &Path, records: &[StudentRecord]) -> Result<ReportSummary> {
    let report = Report::new(records);
    let contents = report.to_string();

    let directory = output_path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    debug!(
        "Writing {} bytes via temporary file in {}",
        contents.len(),
        directory.display()
    );

    let mut temp_file = create_temp_file(directory, output_path).map_err(|e| {
        RecordsError::io(
            format!(
                "Failed to create temporary file in {}: {}",
                directory.display(),
                e
            ),
            e,
        )
    })?;

    temp_file
        .write_all(contents.as_bytes())
        .and_then(|_| temp_file.flush())
        .map_err(|e| {
            RecordsError::io(
                format!("Failed to write report for {}: {}", output_path.display(), e),
                e,
            )
        })?;

    // Dropping the PersistError removes the temporary file
    temp_file.persist(output_path).map_err(|e| {
        let message = format!(
            "Failed to move report into place at {}: {}",
            output_path.display(),
            e.error
        );
        RecordsError::io(message, e.error)
    })?;

    info!(
        "Wrote report for {} students to {}",
        report.statistics().total_students,
        output_path.display()
    );

    Ok(ReportSummary {
        output_path: output_path.to_path_buf(),
        bytes_written: contents.len(),
        statistics: report.statistics().clone(),
    })
}

/// Temporary file in `directory` with the permissions the report should end up with
fn create_temp_file(directory: &Path, output_path: &Path) -> io::Result<NamedTempFile> {
    let mut builder = Builder::new();
    builder.prefix(".student-records-");

    // The default 0600 would otherwise carry over to the report
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(fs::Permissions::from_mode(0o666));
    }

    let temp_file = builder.tempfile_in(directory)?;

    if let Some(existing) = fs::metadata(output_path).ok().filter(|m| m.is_file()) {
        temp_file.as_file().set_permissions(existing.permissions())?;
    }

    Ok(temp_file)
}
