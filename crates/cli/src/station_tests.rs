// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use chrono::TimeZone;

fn at(h: u32, m: u32, s: u32) -> DateTime<Local> {
    Local.with_ymd_and_hms(2026, 3, 9, h, m, s).unwrap()
}

#[test]
fn production_filename_carries_timestamp() {
    let name = output_filename(at(10, 0, 0), false);
    assert_eq!(name, "radio_mafra_20260309_100000.mp3");
}

#[test]
fn test_filename_carries_prefix() {
    let name = output_filename(at(9, 2, 0), true);
    assert_eq!(name, "TEST_radio_mafra_20260309_090200.mp3");
}

#[test]
fn filenames_differ_at_second_resolution() {
    let a = output_filename(at(10, 0, 0), false);
    let b = output_filename(at(10, 0, 1), false);
    assert_ne!(a, b);
}

#[test]
fn encoding_parameters_are_the_broadcast_preset() {
    assert_eq!(MP3_BITRATE, "192k");
    assert_eq!(SAMPLE_RATE_HZ, 44_100);
    assert_eq!(CHANNELS, 2);
    assert_eq!(BROADCAST_SECS, 3600);
    assert_eq!(AIR_TIME, (10, 0));
}
