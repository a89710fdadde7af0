//! Command implementation for the student records CLI
//!
//! This module contains the run workflow, logging setup and the console
//! summary printed after a run.

use crate::app::services::report::format_fixed_2;
use crate::cli::args::Args;
use crate::cli::input::prompt_path;
use crate::config::Config;
use crate::constants::LOG_TARGET;
use crate::processor::{ProcessingSummary, process_student_records};
use crate::{RecordsError, Result};
use colored::*;
use std::path::PathBuf;
use tracing::{debug, info};

/// Main command runner
///
/// 1. Validate arguments and load layered configuration
/// 2. Set up logging
/// 3. Prompt for any path still missing
/// 4. Parse the input and write the report
/// 5. Print a summary
pub fn run(args: Args) -> Result<ProcessingSummary> {
    args.validate()?;

    let mut config = load_configuration(&args)?;

    setup_logging(args.get_log_level(config.logging.level.as_deref()), args.quiet);
    debug!("Command line arguments: {:?}", args);
    debug!("Loaded configuration: {:?}", config);

    let (input_path, output_path) = resolve_paths(&mut config)?;
    info!(
        "Processing {} -> {}",
        input_path.display(),
        output_path.display()
    );

    let summary = process_student_records(&input_path, &output_path)?;

    if args.show_summary() {
        print_summary(&summary);
    }

    Ok(summary)
}

/// Set up structured logging on stderr
pub fn setup_logging(log_level: &str, quiet: bool) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{}={}", LOG_TARGET, log_level)));

    let result = if quiet {
        // Minimal logging for quiet mode
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .try_init()
    };

    match result {
        Ok(()) => debug!("Logging initialized at level: {}", log_level),
        Err(e) => debug!("Logging already initialized: {}", e),
    }
}

/// Load configuration using layered approach (file -> env -> args)
pub fn load_configuration(args: &Args) -> Result<Config> {
    let default_config_path = if args.config_file.is_none() {
        Config::default_config_path().ok()
    } else {
        None
    };

    let config_file = match &args.config_file {
        Some(path) => Some(path.as_path()),
        None => default_config_path
            .as_ref()
            .filter(|path| path.exists())
            .map(|path| path.as_path()),
    };

    let config = Config::load_layered(
        args.input_path.clone(),
        args.output_path.clone(),
        config_file,
    )?;

    config.validate()?;

    Ok(config)
}

/// Fill in missing paths interactively and re-validate
fn resolve_paths(config: &mut Config) -> Result<(PathBuf, PathBuf)> {
    if config.processing.input_path.is_none() {
        config.processing.input_path = Some(prompt_path("Enter input filename: ")?);
    }
    if config.processing.output_path.is_none() {
        config.processing.output_path = Some(prompt_path("Enter output filename: ")?);
    }

    config.validate()?;

    match (&config.processing.input_path, &config.processing.output_path) {
        (Some(input), Some(output)) => Ok((input.clone(), output.clone())),
        _ => Err(RecordsError::configuration(
            "Input and output paths are required",
        )),
    }
}

/// Print the run outcome to the console
pub fn print_summary(summary: &ProcessingSummary) {
    for diagnostic in &summary.diagnostics {
        eprintln!("  {} {}", "Skipped:".yellow(), diagnostic);
    }

    println!(
        "{} {}",
        "Student records processed successfully. Output written to".bright_green(),
        summary.output_path.display().to_string().bright_white().bold()
    );
    println!(
        "  {} {} of {} lines ({} skipped)",
        "Records:".bright_cyan(),
        summary.records_written.to_string().bright_white().bold(),
        summary.lines_read,
        summary.lines_skipped
    );
    println!(
        "  {} {}",
        "Class average:".bright_cyan(),
        class_average_text(summary)
    );
}

/// Class average as it appears in the report
fn class_average_text(summary: &ProcessingSummary) -> String {
    format_fixed_2(summary.class_average)
}
