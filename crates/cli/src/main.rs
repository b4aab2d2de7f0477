// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Submission validator binary entry point.

use std::process::ExitCode;

use clap::Parser;

use subcheck::cli::Cli;
use subcheck::config::Settings;
use subcheck::logging;
use subcheck::output::{print_error, print_warning, ReportWriter, RunError};

/// Configuration or output error (clap uses the same code for usage errors).
const EXIT_USAGE: u8 = 2;

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            print_error(&e);
            ExitCode::from(EXIT_USAGE)
        }
    }
}

/// Validate and print the report. Returns whether every check passed.
fn run(cli: &Cli) -> Result<bool, RunError> {
    let settings = Settings::from_cli(cli)?;
    if settings.submission.is_none() {
        print_warning("No submission file given (--submission or SUBCHECK_SUBMISSION)");
    }

    let report = settings.validator().validate();

    ReportWriter::new(std::io::stdout().lock(), cli.output_format)
        .quiet(cli.quiet)
        .write_report(&report)
        .map_err(RunError::Write)?;
    Ok(report.passed())
}
