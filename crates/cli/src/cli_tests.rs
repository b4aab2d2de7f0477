// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
use super::*;

#[test]
fn test_parse_defaults() {
    let cli = Cli::try_parse_from(["subcheck"]).unwrap();
    assert_eq!(cli.reference, None);
    assert_eq!(cli.submission, None);
    assert_eq!(cli.output_format, OutputFormat::Text);
    assert!(!cli.quiet);
    assert!(!cli.verbose);
}

#[test]
fn test_parse_paths() {
    let cli = Cli::try_parse_from([
        "subcheck",
        "--reference",
        "data/processed/test.csv",
        "--submission",
        "/tmp/submission.csv",
        "--root",
        "/project",
    ])
    .unwrap();
    assert_eq!(
        cli.reference,
        Some(PathBuf::from("data/processed/test.csv"))
    );
    assert_eq!(cli.submission, Some(PathBuf::from("/tmp/submission.csv")));
    assert_eq!(cli.root, Some(PathBuf::from("/project")));
}

#[test]
fn test_parse_output_format_json() {
    let cli = Cli::try_parse_from(["subcheck", "--output-format", "json"]).unwrap();
    assert_eq!(cli.output_format, OutputFormat::Json);
}

#[test]
fn test_parse_invalid_output_format() {
    assert!(Cli::try_parse_from(["subcheck", "--output-format", "xml"]).is_err());
}

#[test]
fn test_parse_short_flags() {
    let cli = Cli::try_parse_from(["subcheck", "-q", "-v"]).unwrap();
    assert!(cli.quiet);
    assert!(cli.verbose);
}

#[test]
fn test_parse_config() {
    let cli = Cli::try_parse_from(["subcheck", "--config", "subcheck.toml"]).unwrap();
    assert_eq!(cli.config, Some(PathBuf::from("subcheck.toml")));
}
