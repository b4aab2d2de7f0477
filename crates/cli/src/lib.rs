// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Submission validator
//!
//! Checks a semicolon-delimited submission file (`uid;type;request`) against
//! a reference test file: structure, empty values, uid uniqueness, HTTP
//! methods, request paths, row count and uid coverage.
//!
//! ```no_run
//! use std::path::Path;
//! use subcheck::validation::Validator;
//!
//! let validator = Validator::with_root(
//!     Path::new("."),
//!     Path::new("data/processed/test.csv"),
//!     Some("data/processed/submission.csv".into()),
//! );
//! for result in validator.run_all_validations() {
//!     println!("{}", result);
//! }
//! ```

pub mod cli;
pub mod config;
pub mod logging;
pub mod output;
pub mod validation;

/// Re-exported table types from the subcheck-table crate.
pub mod table {
    pub use subcheck_table::{parse_table, read_table, ReadError, Row, Table};
}

pub use validation::{CheckResult, ValidationReport, Validator};
