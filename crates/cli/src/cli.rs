// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Validate a submission file against a reference test file
#[derive(Parser, Debug, Clone)]
#[command(name = "subcheck", version, about = "Validate a submission file against a reference test file")]
pub struct Cli {
    /// Reference/test file, relative to --root
    #[arg(long, value_name = "PATH", env = "SUBCHECK_REFERENCE")]
    pub reference: Option<PathBuf>,

    /// Submission file to validate
    #[arg(long, value_name = "PATH", env = "SUBCHECK_SUBMISSION")]
    pub submission: Option<PathBuf>,

    /// Project root the reference path is relative to (default: current directory)
    #[arg(long, value_name = "DIR", env = "SUBCHECK_ROOT")]
    pub root: Option<PathBuf>,

    /// TOML configuration file
    #[arg(long, value_name = "FILE", env = "SUBCHECK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub output_format: OutputFormat,

    /// Only print failing checks (text output)
    #[arg(short = 'q', long)]
    pub quiet: bool,

    /// Enable debug logging on stderr
    #[arg(short = 'v', long)]
    pub verbose: bool,
}

/// Report output format
#[derive(Clone, Copy, Debug, ValueEnum, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// One line per check plus a summary
    #[default]
    Text,
    /// Single JSON object
    Json,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
