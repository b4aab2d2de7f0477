// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

//! Exit codes: 0 when every check passes, 1 on any failing check, 2 on
//! configuration errors.

mod common;

use assert_cmd::Command;
use common::{subcheck_bin, Project};
use predicates::prelude::*;

fn subcheck() -> Command {
    let mut cmd = Command::new(subcheck_bin());
    for var in [
        "SUBCHECK_REFERENCE",
        "SUBCHECK_SUBMISSION",
        "SUBCHECK_ROOT",
        "SUBCHECK_CONFIG",
    ] {
        cmd.env_remove(var);
    }
    cmd
}

#[test]
fn test_valid_submission_exits_zero() {
    let project = Project::valid();

    subcheck()
        .args(project.args())
        .assert()
        .success()
        .stdout(predicate::str::contains("6 checks, 6 passed, 0 failed"));
}

#[test]
fn test_missing_uid_exits_one() {
    let project = Project::new(
        "uid;question\n1;a\n2;b\n3;c\n",
        "uid;type;request\n1;GET;/a\n2;GET;/b\n",
    );

    subcheck()
        .args(project.args())
        .assert()
        .code(1)
        .stdout(predicate::str::contains(
            "FAIL row count check: Wrong number of rows: expected 3, found 2",
        ))
        .stdout(predicate::str::contains(
            "FAIL reference uid coverage check: Missing records for uid: 3",
        ));
}

#[test]
fn test_missing_submission_file_exits_one() {
    let project = Project::valid();
    let missing = project.dir.path().join("nope.csv");

    subcheck()
        .args([
            "--root",
            project.dir.path().to_str().unwrap(),
            "--reference",
            "test.csv",
            "--submission",
            missing.to_str().unwrap(),
        ])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("FAIL submission file existence check"))
        .stdout(predicate::str::contains("1 checks, 0 passed, 1 failed"));
}

#[test]
fn test_no_submission_warns_and_fails() {
    let project = Project::valid();

    subcheck()
        .args([
            "--root",
            project.dir.path().to_str().unwrap(),
            "--reference",
            "test.csv",
        ])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Warning: No submission file given"))
        .stdout(predicate::str::contains("1 checks, 0 passed, 1 failed"));
}

#[test]
fn test_no_reference_is_a_usage_error() {
    subcheck()
        .assert()
        .code(2)
        .stderr(predicate::str::contains("No reference file given"));
}

#[test]
fn test_unknown_flag_is_a_usage_error() {
    subcheck().arg("--bogus").assert().code(2);
}

#[test]
fn test_environment_variables_configure_run() {
    let project = Project::valid();

    subcheck()
        .env("SUBCHECK_ROOT", project.dir.path())
        .env("SUBCHECK_REFERENCE", "test.csv")
        .env("SUBCHECK_SUBMISSION", project.submission())
        .assert()
        .success();
}
