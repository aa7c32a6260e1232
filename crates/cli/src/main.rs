// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! aircheck binary entry point.

use std::io;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use aircheck::cli::{exit_codes, Cli};
use aircheck::interrupt::InterruptFlag;
use aircheck::output::{
    format_clock, format_duration, format_size, print_error, print_warning, StatusLine,
};
use aircheck::prompt;
use aircheck::recorder::{Outcome, RecordJob, Recorder};
use aircheck::schedule::{wait_until, AirTimeToday, Schedule, WaitOutcome};
use aircheck::station;
use aircheck::time::{Clock, ClockHandle};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let divider = "=".repeat(50);
    println!("{divider}");
    if cli.test {
        println!("TEST MODE - {}", station::NAME);
        println!("{divider}");
        println!(
            "This is a test: recording {} starting in {} minutes",
            format_duration(station::TEST_RECORD_SECS),
            station::TEST_LEAD_MINUTES
        );
    } else {
        println!("AIRCHECK - {}", station::NAME);
        println!("{divider}");
    }
    println!();

    let recorder = Recorder::new();
    if let Err(e) = recorder.check().await {
        print_error(&e);
        eprintln!("Install it first, e.g. apt install ffmpeg or brew install ffmpeg");
        std::process::exit(exit_codes::ERROR);
    }
    println!("{} found", recorder.program().display());

    let clock = ClockHandle::system();

    let now = clock.now_local();
    let schedule = if cli.test {
        Some(Schedule::lead(now, station::TEST_LEAD_MINUTES))
    } else {
        let (hour, minute) = station::AIR_TIME;
        match Schedule::today_at(now, hour, minute) {
            AirTimeToday::Upcoming(schedule) => Some(schedule),
            AirTimeToday::Elapsed { target } => {
                print_warning(format_args!(
                    "{} has already passed today (current time: {})",
                    format_clock(target),
                    format_clock(now)
                ));
                let stdin = io::stdin();
                let confirmed = prompt::confirm(
                    &mut stdin.lock(),
                    &mut io::stdout(),
                    "Start recording immediately?",
                )?;
                if !confirmed {
                    println!("Recording cancelled.");
                    return Ok(());
                }
                None
            }
        }
    };

    // From here on Ctrl+C is cooperative: the wait and capture loops poll
    // the flag and unwind cleanly instead of dying mid-kill.
    let interrupt = InterruptFlag::register();

    if let Some(schedule) = schedule {
        let now = clock.now_local();
        let wait_secs = schedule.remaining_secs(now);
        println!("Current time: {}", format_clock(now));
        println!("Recording scheduled for: {}", format_clock(schedule.target()));
        println!(
            "Waiting {} minutes and {} seconds...",
            wait_secs / 60,
            wait_secs % 60
        );

        let mut countdown = StatusLine::new(io::stdout());
        match wait_until(&clock, &schedule, &interrupt, &mut countdown).await? {
            WaitOutcome::Reached => {}
            WaitOutcome::Interrupted => {
                println!("Cancelled while waiting; nothing recorded.");
                std::process::exit(exit_codes::INTERRUPTED);
            }
        }
    }

    let duration_secs = if cli.test {
        station::TEST_RECORD_SECS
    } else {
        station::BROADCAST_SECS
    };
    let started_at = clock.now_local();
    let job = RecordJob {
        stream_url: station::STREAM_URL.to_string(),
        duration: Duration::from_secs(duration_secs),
        output: PathBuf::from(station::output_filename(started_at, cli.test)),
    };

    let rule = "-".repeat(50);
    println!("Starting recording...");
    println!("Station: {}", station::NAME);
    println!("Stream: {}", job.stream_url);
    println!("Duration: {}", format_duration(duration_secs));
    println!("Output: {}", job.output.display());
    println!("{rule}");
    println!("Recording started at: {}", format_clock(started_at));
    println!(
        "Recording will end at: {}",
        format_clock(started_at + chrono::Duration::seconds(duration_secs as i64))
    );
    println!("{rule}");

    let mut progress = StatusLine::new(io::stdout());
    match recorder.record(&job, &clock, &interrupt, &mut progress).await {
        Ok(Outcome::Completed { bytes }) => {
            println!("{divider}");
            println!("Recording completed successfully");
            println!("File: {}", job.output.display());
            println!("Size: {}", format_size(bytes));
            println!("{divider}");
            Ok(())
        }
        Ok(Outcome::Failed { detail }) => {
            print_error(format_args!("recording failed: {}", detail));
            std::process::exit(exit_codes::ERROR);
        }
        Ok(Outcome::Interrupted { partial_bytes }) => {
            println!("Recording interrupted by user");
            match partial_bytes {
                Some(bytes) => println!(
                    "Partial recording saved: {} ({})",
                    job.output.display(),
                    format_size(bytes)
                ),
                None => println!("No partial file was written."),
            }
            std::process::exit(exit_codes::INTERRUPTED);
        }
        Err(e) => {
            print_error(&e);
            std::process::exit(exit_codes::ERROR);
        }
    }
}
