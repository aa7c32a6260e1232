// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Scheduled off-air recorder for Rádio do Concelho de Mafra (105.6 MHz).
//!
//! Waits until the station's air time (or a short lead offset in test mode),
//! then drives `ffmpeg` to capture a fixed-duration MP3 of the live stream to
//! a timestamped file, reporting countdown and progress to the operator.

pub mod cli;
pub mod interrupt;
pub mod output;
pub mod prompt;
pub mod recorder;
pub mod schedule;
pub mod station;
pub mod time;
