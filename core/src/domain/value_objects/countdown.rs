//! Resend countdown.
//!
//! The countdown holds no thread or timer of its own. An external scheduler
//! calls [`Countdown::tick`] once per second while a code is pending; the
//! countdown only applies the decrement and the boundary check.

use serde::{Deserialize, Serialize};

use idv_shared::config::DEFAULT_COUNTDOWN_SECONDS;

/// Seconds-based countdown that gates code resends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Countdown {
    duration_seconds: u32,
    remaining_seconds: u32,
    expired: bool,
}

impl Countdown {
    /// Create a started countdown of `duration_seconds`
    pub fn new(duration_seconds: u32) -> Self {
        let mut countdown = Self {
            duration_seconds,
            remaining_seconds: 0,
            expired: false,
        };
        countdown.start();
        countdown
    }

    /// Set remaining to the full duration and clear the expired flag
    pub fn start(&mut self) {
        self.remaining_seconds = self.duration_seconds;
        self.expired = self.duration_seconds == 0;
    }

    /// Restart the countdown (used when a code is resent)
    pub fn reset(&mut self) {
        self.start();
    }

    /// Advance by one second.
    ///
    /// Returns `true` only for the tick that made the countdown expire.
    pub fn tick(&mut self) -> bool {
        if self.remaining_seconds == 0 {
            return false;
        }
        self.remaining_seconds -= 1;
        if self.remaining_seconds == 0 {
            self.expired = true;
            return true;
        }
        false
    }

    pub fn remaining_seconds(&self) -> u32 {
        self.remaining_seconds
    }

    pub fn duration_seconds(&self) -> u32 {
        self.duration_seconds
    }

    pub fn is_expired(&self) -> bool {
        self.expired
    }

    /// Remaining time as `M:SS`
    pub fn format(&self) -> String {
        format!("{}:{:02}", self.remaining_seconds / 60, self.remaining_seconds % 60)
    }
}

impl Default for Countdown {
    fn default() -> Self {
        Self::new(DEFAULT_COUNTDOWN_SECONDS)
    }
}
