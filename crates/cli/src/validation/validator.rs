// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Submission validation against a reference test file.
//!
//! Checks run in a fixed order. File existence, readability and structure
//! failures stop the run; row-level and aggregate checks all run and may
//! each contribute failures.

use super::methods::{allowed_methods, is_valid_method};
use super::result::{CheckResult, ValidationReport};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use subcheck_table::{read_table, ReadError, Row, Table};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Number of columns every submission row must have.
pub const SUBMISSION_COLUMNS: usize = 3;

/// Submission header shape named in structure failures.
pub const SUBMISSION_SHAPE: &str = "uid;type;request";

/// Most uids listed in a missing/extra uid failure.
pub const MAX_LISTED_UIDS: usize = 5;

/// Stable check names.
pub mod check_names {
    pub const SUBMISSION_EXISTS: &str = "submission file existence check";
    pub const REFERENCE_EXISTS: &str = "reference file existence check";
    pub const STRUCTURE: &str = "file structure check";
    pub const ROW_COUNT: &str = "row count check";
    pub const COVERAGE: &str = "reference uid coverage check";
    pub const EXTRA_UIDS: &str = "extra uid check";
    pub const FILE_PROCESSING: &str = "file processing check";

    pub fn empty_values(row: usize) -> String {
        format!("empty values check (row {})", row)
    }

    pub fn uid_uniqueness(row: usize) -> String {
        format!("uid uniqueness check (row {})", row)
    }

    pub fn http_method(row: usize) -> String {
        format!("HTTP method check (row {})", row)
    }

    pub fn request_path(row: usize) -> String {
        format!("request path check (row {})", row)
    }
}

use check_names as names;

/// Errors that abort the content checks of a run.
///
/// These never escape [`Validator::run_all_validations`]; they are turned
/// into a failing [`names::FILE_PROCESSING`] result.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error(transparent)]
    Read(#[from] ReadError),
}

/// Validates a submission file against a reference test file.
#[derive(Clone, Debug)]
pub struct Validator {
    reference_path: PathBuf,
    submission_path: Option<PathBuf>,
}

impl Validator {
    /// Create a validator. `reference_path` is used as given.
    pub fn new(reference_path: impl Into<PathBuf>, submission_path: Option<PathBuf>) -> Self {
        Self {
            reference_path: reference_path.into(),
            submission_path,
        }
    }

    /// Create a validator whose reference path is relative to `root`.
    ///
    /// An absolute `reference_path` replaces `root`.
    pub fn with_root(root: &Path, reference_path: &Path, submission_path: Option<PathBuf>) -> Self {
        Self::new(root.join(reference_path), submission_path)
    }

    pub fn reference_path(&self) -> &Path {
        &self.reference_path
    }

    pub fn submission_path(&self) -> Option<&Path> {
        self.submission_path.as_deref()
    }

    /// Run every check and return the results in execution order.
    ///
    /// Never fails: missing files, unreadable files and malformed content are
    /// all reported as failing results.
    pub fn run_all_validations(&self) -> Vec<CheckResult> {
        let mut results = Vec::new();
        info!(
            reference = %self.reference_path.display(),
            submission = ?self.submission_path,
            "starting validation"
        );

        let submission_path = match self.submission_path.as_deref() {
            Some(path) if path.exists() => path,
            Some(path) => {
                warn!(path = %path.display(), "submission file not found");
                results.push(CheckResult::fail(
                    names::SUBMISSION_EXISTS,
                    format!("File {} not found", path.display()),
                ));
                return results;
            }
            None => {
                warn!("no submission file configured");
                results.push(CheckResult::fail(
                    names::SUBMISSION_EXISTS,
                    "No submission file path configured",
                ));
                return results;
            }
        };
        results.push(CheckResult::pass(names::SUBMISSION_EXISTS));

        if !self.reference_path.exists() {
            warn!(path = %self.reference_path.display(), "reference file not found");
            results.push(CheckResult::fail(
                names::REFERENCE_EXISTS,
                format!("File {} not found", self.reference_path.display()),
            ));
            return results;
        }
        results.push(CheckResult::pass(names::REFERENCE_EXISTS));

        if let Err(e) = self.check_contents(submission_path, &mut results) {
            warn!(error = %e, "file processing failed");
            results.push(CheckResult::fail(
                names::FILE_PROCESSING,
                format!("Failed to process files: {}", e),
            ));
        }

        let failed = results.iter().filter(|r| !r.passed()).count();
        info!(checks = results.len(), failed, "validation finished");
        results
    }

    /// Run all checks and wrap the results in a [`ValidationReport`].
    pub fn validate(&self) -> ValidationReport {
        ValidationReport::new(self.run_all_validations())
    }

    fn check_contents(
        &self,
        submission_path: &Path,
        results: &mut Vec<CheckResult>,
    ) -> Result<(), ValidationError> {
        let submission = read_table(submission_path)?;
        let reference = read_table(&self.reference_path)?;
        debug!(
            submission_rows = submission.len(),
            reference_rows = reference.len(),
            "files read"
        );

        if let Some(failure) = check_structure(&submission) {
            debug!("structure check failed, skipping remaining checks");
            results.push(failure);
            return Ok(());
        }
        results.push(CheckResult::pass(names::STRUCTURE));

        let reference_uids = reference_uids(&reference);
        let submission_rows = submission.data_rows();
        let submission_uids = check_rows(submission_rows, results);

        results.push(check_row_count(submission_rows.len(), reference_uids.len()));
        results.push(check_coverage(&reference_uids, &submission_uids));
        results.push(check_extra_uids(&reference_uids, &submission_uids));
        Ok(())
    }
}

/// Returns a failing structure result if the submission is empty or any row
/// (header included) has the wrong width.
fn check_structure(submission: &Table) -> Option<CheckResult> {
    if submission.is_empty() {
        return Some(CheckResult::fail(
            names::STRUCTURE,
            "Submission file is empty",
        ));
    }

    let (index, row) = submission
        .iter()
        .enumerate()
        .find(|(_, row)| row.width() != SUBMISSION_COLUMNS)?;
    Some(CheckResult::fail(
        names::STRUCTURE,
        format!(
            "Malformed file structure: expected {} columns ({}), row {} has {}",
            SUBMISSION_COLUMNS,
            SUBMISSION_SHAPE,
            index + 1,
            row.width()
        ),
    ))
}

/// Distinct first-column values of the reference data rows.
fn reference_uids(reference: &Table) -> BTreeSet<&str> {
    reference
        .data_rows()
        .iter()
        .filter_map(|row| row.get(0))
        .collect()
}

/// Per-row checks. Returns every non-empty uid seen.
///
/// Row numbers count the header as row 1.
fn check_rows<'a>(rows: &'a [Row], results: &mut Vec<CheckResult>) -> BTreeSet<&'a str> {
    let mut seen = BTreeSet::new();

    for (index, row) in rows.iter().enumerate() {
        let row_number = index + 2;
        let [uid, method, path] = row.cells() else {
            continue;
        };

        if uid.is_empty() || method.is_empty() || path.is_empty() {
            results.push(CheckResult::fail(
                names::empty_values(row_number),
                format!("Row {}: empty values found", row_number),
            ));
            continue;
        }

        if !seen.insert(uid.as_str()) {
            results.push(CheckResult::fail(
                names::uid_uniqueness(row_number),
                format!("Row {}: duplicate uid '{}'", row_number, uid),
            ));
        }

        if !is_valid_method(method) {
            results.push(CheckResult::fail(
                names::http_method(row_number),
                format!(
                    "Row {}: invalid HTTP method '{}'. Allowed values: {}",
                    row_number,
                    method,
                    allowed_methods()
                ),
            ));
        }

        if !path.starts_with('/') {
            results.push(CheckResult::fail(
                names::request_path(row_number),
                format!(
                    "Row {}: invalid request path '{}'. Path must start with '/'",
                    row_number, path
                ),
            ));
        }
    }

    seen
}

fn check_row_count(found: usize, expected: usize) -> CheckResult {
    if found == expected {
        CheckResult::pass(names::ROW_COUNT)
    } else {
        CheckResult::fail(
            names::ROW_COUNT,
            format!(
                "Wrong number of rows: expected {}, found {}",
                expected, found
            ),
        )
    }
}

fn check_coverage(reference: &BTreeSet<&str>, submission: &BTreeSet<&str>) -> CheckResult {
    let missing: Vec<&str> = reference.difference(submission).copied().collect();
    if missing.is_empty() {
        CheckResult::pass(names::COVERAGE)
    } else {
        CheckResult::fail(
            names::COVERAGE,
            format!("Missing records for uid: {}", list_uids(&missing)),
        )
    }
}

fn check_extra_uids(reference: &BTreeSet<&str>, submission: &BTreeSet<&str>) -> CheckResult {
    let extra: Vec<&str> = submission.difference(reference).copied().collect();
    if extra.is_empty() {
        CheckResult::pass(names::EXTRA_UIDS)
    } else {
        CheckResult::fail(
            names::EXTRA_UIDS,
            format!(
                "Extra uids not present in reference file: {}",
                list_uids(&extra)
            ),
        )
    }
}

/// Join the first [`MAX_LISTED_UIDS`] of `uids` (already sorted), adding
/// `...` when some were left out.
fn list_uids(uids: &[&str]) -> String {
    let shown = uids[..uids.len().min(MAX_LISTED_UIDS)].join(", ");
    if uids.len() > MAX_LISTED_UIDS {
        format!("{}...", shown)
    } else {
        shown
    }
}

#[cfg(test)]
#[path = "validator_tests.rs"]
mod tests;
