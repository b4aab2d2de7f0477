// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Check results and the report that collects them.

use serde::Serialize;
use std::fmt;

/// Outcome of one named check. `detail` is present only on failure.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CheckResult {
    name: String,
    passed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    detail: Option<String>,
}

impl CheckResult {
    /// A passing result
    pub fn pass(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            passed: true,
            detail: None,
        }
    }

    /// A failing result with a diagnostic message
    pub fn fail(name: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            passed: false,
            detail: Some(detail.into()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn passed(&self) -> bool {
        self.passed
    }

    pub fn detail(&self) -> Option<&str> {
        self.detail.as_deref()
    }
}

impl fmt::Display for CheckResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.detail {
            None => write!(f, "PASS {}", self.name),
            Some(detail) => write!(f, "FAIL {}: {}", self.name, detail),
        }
    }
}

/// Pass/fail counts for a report
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} checks, {} passed, {} failed",
            self.total, self.passed, self.failed
        )
    }
}

/// Ordered results of one validation run, in execution order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidationReport {
    checks: Vec<CheckResult>,
}

impl ValidationReport {
    pub fn new(checks: Vec<CheckResult>) -> Self {
        Self { checks }
    }

    pub fn checks(&self) -> &[CheckResult] {
        &self.checks
    }

    /// True when the run produced results and none of them failed
    pub fn passed(&self) -> bool {
        !self.checks.is_empty() && self.checks.iter().all(CheckResult::passed)
    }

    /// Failing results, in execution order
    pub fn failures(&self) -> impl Iterator<Item = &CheckResult> {
        self.checks.iter().filter(|c| !c.passed())
    }

    pub fn summary(&self) -> Summary {
        let passed = self.checks.iter().filter(|c| c.passed()).count();
        Summary {
            total: self.checks.len(),
            passed,
            failed: self.checks.len() - passed,
        }
    }
}

#[cfg(test)]
#[path = "result_tests.rs"]
mod tests;
