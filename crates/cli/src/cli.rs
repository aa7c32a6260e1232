// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing.

use clap::Parser;

/// Scheduled off-air recorder
#[derive(Parser, Debug)]
#[command(
    name = "aircheck",
    version,
    about = "Record Radio do Concelho de Mafra off the air at its scheduled time"
)]
pub struct Cli {
    /// Test mode: record one minute, starting two minutes from now
    #[arg(long)]
    pub test: bool,
}

/// Process exit codes.
pub mod exit_codes {
    /// Recording completed, or the operator declined an immediate start
    pub const SUCCESS: i32 = 0;
    /// Capture tool missing, capture failed, or an I/O error
    pub const ERROR: i32 = 1;
    /// Interrupted by the operator (Ctrl+C)
    pub const INTERRUPTED: i32 = 130;
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
