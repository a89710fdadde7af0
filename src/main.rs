use clap::Parser;
use colored::*;
use std::process;
use student_records::cli::{args::Args, commands};

fn main() {
    let args = Args::parse();

    match commands::run(args) {
        Ok(_summary) => {
            // Summary has already been reported by the command
            process::exit(0);
        }
        Err(error) => {
            eprintln!("{} {}", "Error processing student records:".red().bold(), error);
            eprintln!("{}", error.guidance().yellow());
            process::exit(error.exit_code());
        }
    }
}
