// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

//! Shared helpers for binary-level tests.

#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub const REFERENCE_FILE: &str = "test.csv";
pub const SUBMISSION_FILE: &str = "submission.csv";

/// A temporary project directory holding a reference and a submission file.
pub struct Project {
    pub dir: TempDir,
}

impl Project {
    pub fn new(reference: &str, submission: &str) -> Self {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(REFERENCE_FILE), reference).unwrap();
        fs::write(dir.path().join(SUBMISSION_FILE), submission).unwrap();
        Self { dir }
    }

    /// Reference with uids 1..=3 and a submission that matches it.
    pub fn valid() -> Self {
        Self::new(
            "uid;question\n1;a\n2;b\n3;c\n",
            "uid;type;request\n1;GET;/a\n2;POST;/b\n3;DELETE;/c\n",
        )
    }

    pub fn root(&self) -> PathBuf {
        self.dir.path().to_path_buf()
    }

    pub fn submission(&self) -> PathBuf {
        self.dir.path().join(SUBMISSION_FILE)
    }

    /// `--root`, `--reference` and `--submission` arguments for this project
    pub fn args(&self) -> Vec<String> {
        vec![
            "--root".to_string(),
            self.root().display().to_string(),
            "--reference".to_string(),
            REFERENCE_FILE.to_string(),
            "--submission".to_string(),
            self.submission().display().to_string(),
        ]
    }
}

/// Path to the subcheck binary built for this test run
pub fn subcheck_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_subcheck"))
}
