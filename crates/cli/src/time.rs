// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Time abstraction for deterministic testing.
//!
//! This module provides a `Clock` trait and `FakeClock` implementation that
//! allows tests to drive the wait and monitor loops without wall-clock
//! delays.

use std::future::Future;
use std::pin::Pin;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Local, Utc};

/// Clock trait for time abstraction
pub trait Clock: Send + Sync {
    /// Get current time as milliseconds since epoch
    fn now_millis(&self) -> i64;

    /// Sleep for a duration
    fn sleep(&self, duration: Duration) -> Pin<Box<dyn Future<Output = ()> + Send + '_>>;

    /// Get current wall-clock time in the local timezone
    fn now_local(&self) -> DateTime<Local> {
        DateTime::<Utc>::from_timestamp_millis(self.now_millis())
            .unwrap_or_default()
            .with_timezone(&Local)
    }
}

/// Real clock using system time
#[derive(Clone, Debug, Default)]
pub struct SystemClock;

impl SystemClock {
    /// Create a new system clock
    pub fn new() -> Self {
        Self
    }
}

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        Utc::now().timestamp_millis()
    }

    fn sleep(&self, duration: Duration) -> Pin<Box<dyn Future<Output = ()> + Send + '_>> {
        Box::pin(tokio::time::sleep(duration))
    }
}

/// Fake clock for testing with controllable time
#[derive(Clone, Debug)]
pub struct FakeClock {
    /// Current time in milliseconds
    current_millis: Arc<AtomicI64>,

    /// Whether to auto-advance on sleep
    auto_advance: bool,
}

impl FakeClock {
    /// Create a new fake clock starting at a given time
    pub fn new(start_millis: i64) -> Self {
        Self {
            current_millis: Arc::new(AtomicI64::new(start_millis)),
            auto_advance: true,
        }
    }

    /// Create a fake clock starting at a local wall-clock instant
    pub fn at(start: DateTime<Local>) -> Self {
        Self::new(start.timestamp_millis())
    }

    /// Set whether sleep auto-advances time
    pub fn set_auto_advance(&mut self, auto_advance: bool) {
        self.auto_advance = auto_advance;
    }

    /// Advance time by a duration
    pub fn advance(&self, duration: Duration) {
        self.current_millis
            .fetch_add(duration.as_millis() as i64, Ordering::SeqCst);
    }

    /// Advance time by seconds
    pub fn advance_secs(&self, secs: i64) {
        self.current_millis
            .fetch_add(secs * 1000, Ordering::SeqCst);
    }

    /// Set absolute time
    pub fn set(&self, millis: i64) {
        self.current_millis.store(millis, Ordering::SeqCst);
    }

    /// Check if auto-advance is enabled
    pub fn auto_advance(&self) -> bool {
        self.auto_advance
    }
}

impl Default for FakeClock {
    fn default() -> Self {
        Self::new(0)
    }
}

impl Clock for FakeClock {
    fn now_millis(&self) -> i64 {
        self.current_millis.load(Ordering::SeqCst)
    }

    fn sleep(&self, duration: Duration) -> Pin<Box<dyn Future<Output = ()> + Send + '_>> {
        if self.auto_advance {
            self.advance(duration);
        }
        // No actual sleep - return immediately
        Box::pin(async {})
    }
}

/// Clock handle that can be either real or fake
#[derive(Clone)]
pub enum ClockHandle {
    System(SystemClock),
    Fake(FakeClock),
}

impl ClockHandle {
    /// Create a system clock handle
    pub fn system() -> Self {
        Self::System(SystemClock)
    }

    /// Create a fake clock handle at a local wall-clock instant
    pub fn fake_at(start: DateTime<Local>) -> Self {
        Self::Fake(FakeClock::at(start))
    }

    /// Get as fake clock for manipulation (returns None for system clock)
    pub fn as_fake(&self) -> Option<&FakeClock> {
        match self {
            Self::Fake(f) => Some(f),
            Self::System(_) => None,
        }
    }

    /// Check if this is a system clock
    pub fn is_system(&self) -> bool {
        matches!(self, Self::System(_))
    }
}

impl Clock for ClockHandle {
    fn now_millis(&self) -> i64 {
        match self {
            Self::System(c) => c.now_millis(),
            Self::Fake(c) => c.now_millis(),
        }
    }

    fn sleep(&self, duration: Duration) -> Pin<Box<dyn Future<Output = ()> + Send + '_>> {
        match self {
            Self::System(c) => c.sleep(duration),
            Self::Fake(c) => c.sleep(duration),
        }
    }
}

impl Default for ClockHandle {
    fn default() -> Self {
        Self::system()
    }
}

#[cfg(test)]
#[path = "time_tests.rs"]
mod tests;
