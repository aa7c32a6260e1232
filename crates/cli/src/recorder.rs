// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Capture execution: spawning and supervising the external tool.
//!
//! The tool enforces the capture duration itself (`-t`); this module only
//! polls the child's liveness, keeps the operator informed, and classifies
//! the result from the exit code and the file left on disk.

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Duration;

use thiserror::Error;
use tokio::io::AsyncReadExt;
use tokio::process::Command;

use crate::interrupt::InterruptFlag;
use crate::output::{format_remaining, StatusLine};
use crate::station;
use crate::time::Clock;

/// A single capture request handed to the external tool.
#[derive(Clone, Debug)]
pub struct RecordJob {
    pub stream_url: String,
    pub duration: Duration,
    pub output: PathBuf,
}

/// Terminal classification of a capture run. Never retried.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The tool exited zero; size of the output file on disk.
    Completed { bytes: u64 },
    /// The tool exited non-zero; its diagnostic output.
    Failed { detail: String },
    /// The operator interrupted; size of the partial file, if one exists.
    Interrupted { partial_bytes: Option<u64> },
}

#[derive(Debug, Error)]
pub enum RecorderError {
    #[error("capture tool '{0}' not found")]
    MissingTool(String),

    #[error("failed to spawn capture process: {0}")]
    Spawn(io::Error),

    #[error("I/O error while monitoring capture: {0}")]
    Monitor(io::Error),

    #[error("failed to read output file size: {0}")]
    OutputStat(io::Error),
}

/// Drives the external capture tool.
#[derive(Clone, Debug)]
pub struct Recorder {
    program: PathBuf,
}

impl Default for Recorder {
    fn default() -> Self {
        Self {
            program: PathBuf::from("ffmpeg"),
        }
    }
}

impl Recorder {
    /// Recorder driving the stock `ffmpeg` from PATH.
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorder driving a specific tool binary (tests substitute a script).
    pub fn with_program(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Verify the capture tool is invokable.
    ///
    /// Runs `<tool> -version` once. Called before any waiting so a missing
    /// install fails fast instead of after the countdown.
    pub async fn check(&self) -> Result<(), RecorderError> {
        let status = Command::new(&self.program)
            .arg("-version")
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await;
        match status {
            Ok(s) if s.success() => Ok(()),
            Ok(_) => Err(RecorderError::MissingTool(self.program_name())),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                Err(RecorderError::MissingTool(self.program_name()))
            }
            Err(e) => Err(RecorderError::Spawn(e)),
        }
    }

    /// Run one capture to completion, failure, or interruption.
    ///
    /// Polls the child every second for sub-minute jobs, every five seconds
    /// otherwise, overwriting `status` with percent complete and remaining
    /// time. On interrupt the child is killed and the partial file, if any,
    /// is reported as a salvageable result.
    pub async fn record<C, W>(
        &self,
        job: &RecordJob,
        clock: &C,
        interrupt: &InterruptFlag,
        status: &mut StatusLine<W>,
    ) -> Result<Outcome, RecorderError>
    where
        C: Clock + ?Sized,
        W: Write,
    {
        let duration_secs = job.duration.as_secs();
        let mut child = Command::new(&self.program)
            .arg("-y")
            .args(["-hide_banner", "-loglevel", "error"])
            .args(["-i", &job.stream_url])
            .args(["-t", &duration_secs.to_string()])
            .args(["-acodec", "libmp3lame"])
            .args(["-ab", station::MP3_BITRATE])
            .args(["-ar", &station::SAMPLE_RATE_HZ.to_string()])
            .args(["-ac", &station::CHANNELS.to_string()])
            .arg(&job.output)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| match e.kind() {
                io::ErrorKind::NotFound => RecorderError::MissingTool(self.program_name()),
                _ => RecorderError::Spawn(e),
            })?;

        // Drain stderr as it arrives so a chatty tool can never fill the
        // pipe and stall the capture. The buffer is consulted on failure.
        let stderr_task = child.stderr.take().map(|mut err| {
            tokio::spawn(async move {
                let mut buf = String::new();
                let _ = err.read_to_string(&mut buf).await;
                buf
            })
        });

        let started = clock.now_millis();
        let poll = if duration_secs < 60 {
            Duration::from_secs(1)
        } else {
            Duration::from_secs(5)
        };

        loop {
            if let Some(exit) = child.try_wait().map_err(RecorderError::Monitor)? {
                status.clear().map_err(RecorderError::Monitor)?;
                if exit.success() {
                    let bytes = std::fs::metadata(&job.output)
                        .map_err(RecorderError::OutputStat)?
                        .len();
                    return Ok(Outcome::Completed { bytes });
                }
                let mut detail = match stderr_task {
                    Some(task) => task.await.unwrap_or_default().trim().to_string(),
                    None => String::new(),
                };
                if detail.is_empty() {
                    detail = format!("capture tool exited with {}", exit);
                }
                return Ok(Outcome::Failed { detail });
            }

            let elapsed = ((clock.now_millis() - started) / 1000).max(0) as u64;
            let remaining = duration_secs.saturating_sub(elapsed);
            let progress = if duration_secs == 0 {
                100.0
            } else {
                (elapsed as f64 / duration_secs as f64 * 100.0).min(100.0)
            };
            status
                .update(&format!(
                    "recording: {:.1}% complete, {} remaining",
                    progress,
                    format_remaining(remaining)
                ))
                .map_err(RecorderError::Monitor)?;

            if interrupt.sleep_unless_raised(clock, poll).await {
                let _ = child.kill().await;
                status.clear().map_err(RecorderError::Monitor)?;
                let partial_bytes = std::fs::metadata(&job.output).ok().map(|m| m.len());
                return Ok(Outcome::Interrupted { partial_bytes });
            }
        }
    }

    fn program_name(&self) -> String {
        self.program.display().to_string()
    }
}

#[cfg(test)]
#[path = "recorder_tests.rs"]
mod tests;
