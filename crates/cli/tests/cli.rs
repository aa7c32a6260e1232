// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

//! Binary-level tests for flag handling and the pre-wait tool check.
//!
//! The capture tool probe runs before any waiting, so a missing tool must
//! fail fast with exit code 1. None of these tests wait on the schedule.

use assert_cmd::Command;
use predicates::prelude::*;

fn aircheck() -> Command {
    Command::cargo_bin("aircheck").unwrap()
}

#[test]
fn test_help_documents_test_mode() {
    aircheck()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--test"));
}

#[test]
fn test_version_flag() {
    aircheck()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("aircheck"));
}

#[test]
fn test_unknown_flag_is_a_usage_error() {
    aircheck().arg("--bogus").assert().failure().code(2);
}

#[test]
fn test_missing_tool_exits_1_before_waiting() {
    aircheck()
        .env("PATH", "")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_missing_tool_exits_1_in_test_mode_too() {
    aircheck()
        .arg("--test")
        .env("PATH", "")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("ffmpeg"));
}
