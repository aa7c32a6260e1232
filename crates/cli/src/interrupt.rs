// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Cooperative Ctrl+C handling.
//!
//! SIGINT sets a flag instead of killing the process; the wait and monitor
//! loops poll it between sleeps and unwind on their own terms (stop waiting,
//! or kill the capture child and report the partial file).

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crate::time::Clock;

/// Shared interrupt flag raised by SIGINT.
#[derive(Clone, Debug, Default)]
pub struct InterruptFlag {
    raised: Arc<AtomicBool>,
}

impl InterruptFlag {
    /// Create an unraised flag, not hooked to any signal.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a flag and hook it to SIGINT.
    ///
    /// On platforms without signal-hook support, Ctrl+C keeps its default
    /// disposition and terminates the process directly.
    pub fn register() -> Self {
        let flag = Self::new();
        #[cfg(unix)]
        {
            if let Err(e) =
                signal_hook::flag::register(signal_hook::consts::SIGINT, Arc::clone(&flag.raised))
            {
                crate::output::print_warning(format_args!(
                    "Failed to install Ctrl+C handler: {}",
                    e
                ));
            }
        }
        flag
    }

    /// Raise the flag.
    pub fn raise(&self) {
        self.raised.store(true, Ordering::SeqCst);
    }

    /// Check whether the flag has been raised.
    pub fn is_raised(&self) -> bool {
        self.raised.load(Ordering::SeqCst)
    }

    /// Cancellable sleep: sleep for `total`, sliced into whole-second steps
    /// with the flag checked between each.
    ///
    /// Returns true if the flag was raised before the sleep completed.
    pub async fn sleep_unless_raised<C: Clock + ?Sized>(&self, clock: &C, total: Duration) -> bool {
        let mut left = total;
        while !left.is_zero() {
            if self.is_raised() {
                return true;
            }
            let step = left.min(Duration::from_secs(1));
            clock.sleep(step).await;
            left -= step;
        }
        self.is_raised()
    }
}

#[cfg(test)]
#[path = "interrupt_tests.rs"]
mod tests;
