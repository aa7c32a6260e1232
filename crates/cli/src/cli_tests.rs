// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn test_parse_defaults_to_production_mode() {
    let cli = Cli::try_parse_from(["aircheck"]).unwrap();
    assert!(!cli.test);
}

#[test]
fn test_parse_test_flag() {
    let cli = Cli::try_parse_from(["aircheck", "--test"]).unwrap();
    assert!(cli.test);
}

#[test]
fn test_rejects_unknown_flag() {
    assert!(Cli::try_parse_from(["aircheck", "--station"]).is_err());
}

#[test]
fn test_rejects_positional_argument() {
    assert!(Cli::try_parse_from(["aircheck", "mafra"]).is_err());
}

#[test]
fn test_exit_codes() {
    assert_eq!(exit_codes::SUCCESS, 0);
    assert_eq!(exit_codes::ERROR, 1);
    assert_eq!(exit_codes::INTERRUPTED, 130);
}
