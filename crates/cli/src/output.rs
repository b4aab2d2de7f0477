// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Report rendering for text and JSON modes, and stderr diagnostics.

use crate::cli::OutputFormat;
use crate::config::ConfigError;
use crate::validation::{CheckResult, Summary, ValidationReport};
use serde::Serialize;
use std::fmt::Display;
use std::io::{self, IsTerminal, Write};
use thiserror::Error;

/// Failures that stop the binary without a complete report on stdout.
#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Failed to write report: {0}")]
    Write(#[source] io::Error),
}

/// Severity of a message written to stderr next to the report.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Diagnostic {
    Error,
    Warning,
}

impl Diagnostic {
    fn label(self) -> &'static str {
        match self {
            Diagnostic::Error => "Error",
            Diagnostic::Warning => "Warning",
        }
    }

    // bold red / bold yellow
    fn ansi(self) -> &'static str {
        match self {
            Diagnostic::Error => "\x1b[1;31m",
            Diagnostic::Warning => "\x1b[1;33m",
        }
    }
}

/// Write `Label: msg`, colouring the label when `color` is set.
pub fn write_diagnostic<W: Write>(
    writer: &mut W,
    level: Diagnostic,
    msg: impl Display,
    color: bool,
) -> io::Result<()> {
    if color {
        writeln!(writer, "{}{}:\x1b[0m {}", level.ansi(), level.label(), msg)
    } else {
        writeln!(writer, "{}: {}", level.label(), msg)
    }
}

/// Report a fatal error on stderr.
pub fn print_error(err: &RunError) {
    print_diagnostic(Diagnostic::Error, err);
}

/// Report a non-fatal problem on stderr.
pub fn print_warning(msg: impl Display) {
    print_diagnostic(Diagnostic::Warning, msg);
}

fn print_diagnostic(level: Diagnostic, msg: impl Display) {
    let stderr = io::stderr();
    let color = stderr.is_terminal();
    // Nothing left to report to if stderr itself is gone.
    let _ = write_diagnostic(&mut stderr.lock(), level, msg, color);
}

/// JSON document written by `--output-format json`
#[derive(Debug, Serialize)]
pub struct JsonReport<'a> {
    pub passed: bool,
    pub summary: Summary,
    pub checks: &'a [CheckResult],
}

impl<'a> From<&'a ValidationReport> for JsonReport<'a> {
    fn from(report: &'a ValidationReport) -> Self {
        Self {
            passed: report.passed(),
            summary: report.summary(),
            checks: report.checks(),
        }
    }
}

/// Writes a [`ValidationReport`] in the configured format.
pub struct ReportWriter<W: Write> {
    writer: W,
    format: OutputFormat,
    quiet: bool,
}

impl<W: Write> ReportWriter<W> {
    pub fn new(writer: W, format: OutputFormat) -> Self {
        Self {
            writer,
            format,
            quiet: false,
        }
    }

    /// Skip passing checks in text output
    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    pub fn write_report(&mut self, report: &ValidationReport) -> io::Result<()> {
        match self.format {
            OutputFormat::Text => self.write_text(report),
            OutputFormat::Json => self.write_json(report),
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_text(&mut self, report: &ValidationReport) -> io::Result<()> {
        if self.quiet {
            for check in report.failures() {
                writeln!(self.writer, "{}", check)?;
            }
        } else {
            for check in report.checks() {
                writeln!(self.writer, "{}", check)?;
            }
        }
        writeln!(self.writer)?;
        writeln!(self.writer, "{}", report.summary())
    }

    fn write_json(&mut self, report: &ValidationReport) -> io::Result<()> {
        let json = serde_json::to_string_pretty(&JsonReport::from(report))
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        writeln!(self.writer, "{}", json)
    }
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
