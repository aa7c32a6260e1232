// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Deadline computation and the poll-until-deadline waiter.
//!
//! The waiter never sleeps through the whole wait in one shot: it recomputes
//! the remaining time from the clock each iteration, so a suspended process
//! or a stepped clock cannot leave it sleeping past the target, and the
//! operator can cancel between whole-second sleep slices.

use std::io::{self, Write};
use std::time::Duration;

use chrono::{DateTime, Local, Timelike};

use crate::interrupt::InterruptFlag;
use crate::output::{format_remaining, StatusLine};
use crate::time::Clock;

/// The single wall-clock instant at which capture should begin.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Schedule {
    target: DateTime<Local>,
}

/// Result of planning today's air-time target.
#[derive(Clone, Copy, Debug)]
pub enum AirTimeToday {
    /// The air time is still ahead; wait for it.
    Upcoming(Schedule),
    /// The air time already passed today. The caller decides whether to
    /// start immediately; the target is never rolled to the next day.
    Elapsed { target: DateTime<Local> },
}

/// Result of a wait operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WaitOutcome {
    Reached,
    Interrupted,
}

impl Schedule {
    /// Plan a target at today's `hour:minute:00`.
    ///
    /// An instant exactly equal to now counts as elapsed.
    pub fn today_at(now: DateTime<Local>, hour: u32, minute: u32) -> AirTimeToday {
        let target = now
            .with_hour(hour)
            .and_then(|t| t.with_minute(minute))
            .map(zero_seconds)
            .unwrap_or(now);
        if target > now {
            AirTimeToday::Upcoming(Self { target })
        } else {
            AirTimeToday::Elapsed { target }
        }
    }

    /// Plan a target `minutes` from now, with seconds zeroed.
    pub fn lead(now: DateTime<Local>, minutes: i64) -> Self {
        Self {
            target: zero_seconds(now + chrono::Duration::minutes(minutes)),
        }
    }

    /// The target instant.
    pub fn target(&self) -> DateTime<Local> {
        self.target
    }

    /// Whole seconds until the target, clamped at zero.
    pub fn remaining_secs(&self, now: DateTime<Local>) -> i64 {
        (self.target - now).num_seconds().max(0)
    }
}

/// Zero the seconds and sub-second fields of an instant.
fn zero_seconds(t: DateTime<Local>) -> DateTime<Local> {
    t.with_second(0)
        .and_then(|t| t.with_nanosecond(0))
        .unwrap_or(t)
}

/// Block until the schedule's target instant is reached or the operator
/// interrupts, updating `status` with a countdown.
///
/// Coarse 10 s updates while more than a minute remains, 1 s updates below
/// that. Returns `Reached` only once the clock is at or past the target.
pub async fn wait_until<C, W>(
    clock: &C,
    schedule: &Schedule,
    interrupt: &InterruptFlag,
    status: &mut StatusLine<W>,
) -> io::Result<WaitOutcome>
where
    C: Clock + ?Sized,
    W: Write,
{
    loop {
        if interrupt.is_raised() {
            status.clear()?;
            return Ok(WaitOutcome::Interrupted);
        }

        let now = clock.now_local();
        if now >= schedule.target {
            status.clear()?;
            return Ok(WaitOutcome::Reached);
        }

        let remaining = schedule.remaining_secs(now) as u64;
        status.update(&format!("{} remaining...", format_remaining(remaining)))?;

        let nap = if remaining > 60 {
            Duration::from_secs(10)
        } else {
            Duration::from_secs(1)
        };
        if interrupt.sleep_unless_raised(clock, nap).await {
            status.clear()?;
            return Ok(WaitOutcome::Interrupted);
        }
    }
}

#[cfg(test)]
#[path = "schedule_tests.rs"]
mod tests;
