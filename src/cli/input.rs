//! User input utilities for interactive CLI prompts
//!
//! Asks the operator for file names that were not supplied any other way.

use crate::{RecordsError, Result};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// Prompt on stdout and read a path from stdin
pub fn prompt_path(message: &str) -> Result<PathBuf> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    prompt_path_from(&mut stdin.lock(), &mut stdout.lock(), message)
}

/// Prompt on `output` and read one trimmed, non-empty line from `input`
pub fn prompt_path_from<R, W>(input: &mut R, output: &mut W, message: &str) -> Result<PathBuf>
where
    R: BufRead,
    W: Write,
{
    write!(output, "{}", message)
        .and_then(|_| output.flush())
        .map_err(|e| RecordsError::io("Failed to flush stdout".to_string(), e))?;

    let mut line = String::new();
    input
        .read_line(&mut line)
        .map_err(|e| RecordsError::io("Failed to read user input".to_string(), e))?;

    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Err(RecordsError::configuration("No file name entered"));
    }

    Ok(PathBuf::from(trimmed))
}
