// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Station parameters and output file naming.

use chrono::{DateTime, Local};

/// Station display name.
pub const NAME: &str = "Rádio do Concelho de Mafra (105.6 MHz)";

/// Live stream URL.
pub const STREAM_URL: &str = "https://centova.radio.com.pt/proxy/551?mp=/stream";

/// Air time of the recorded programme, local time (hour, minute).
pub const AIR_TIME: (u32, u32) = (10, 0);

/// Production capture length in seconds (one hour).
pub const BROADCAST_SECS: u64 = 3600;

/// Test-mode lead before capture starts, in minutes.
pub const TEST_LEAD_MINUTES: i64 = 2;

/// Test-mode capture length in seconds.
pub const TEST_RECORD_SECS: u64 = 60;

/// MP3 bitrate handed to the encoder.
pub const MP3_BITRATE: &str = "192k";

/// Output sample rate in Hz.
pub const SAMPLE_RATE_HZ: u32 = 44_100;

/// Output channel count (stereo).
pub const CHANNELS: u32 = 2;

const FILE_STEM: &str = "radio_mafra";

/// Timestamped output filename for a capture starting at `at`.
///
/// Test-mode files carry a `TEST_` prefix so they are easy to spot and
/// delete. Second-resolution timestamps make collisions a non-issue.
pub fn output_filename(at: DateTime<Local>, test_mode: bool) -> String {
    let prefix = if test_mode { "TEST_" } else { "" };
    format!("{prefix}{FILE_STEM}_{}.mp3", at.format("%Y%m%d_%H%M%S"))
}

#[cfg(test)]
#[path = "station_tests.rs"]
mod tests;
