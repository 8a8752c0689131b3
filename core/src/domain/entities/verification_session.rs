//! Verification session entity.
//!
//! A session exists exactly while a code is pending confirmation. It owns the
//! resolved phone number, so "a phone has been resolved" and "a session
//! exists" cannot disagree.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::value_objects::{Countdown, MobilePhone, VerificationMethod};

/// Pending verification: a code was dispatched and awaits confirmation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationSession {
    /// Unique identifier for the session
    pub id: Uuid,

    /// Method that produced the phone number
    pub method: VerificationMethod,

    /// Phone number the code was sent to
    pub resolved_phone: MobilePhone,

    /// When the latest code was dispatched
    pub code_sent_at: DateTime<Utc>,

    /// When the resend window of the latest code closes
    pub expiry_deadline: DateTime<Utc>,

    /// Countdown gating resends
    pub countdown: Countdown,

    /// Number of resends performed
    pub resend_count: u32,

    /// Number of rejected code submissions
    pub failed_attempts: u32,

    /// Dispatcher message id of the latest code
    pub last_message_id: String,
}

impl VerificationSession {
    /// Creates a session for a code that was just dispatched
    pub fn new(
        method: VerificationMethod,
        resolved_phone: MobilePhone,
        countdown_seconds: u32,
        message_id: String,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            method,
            resolved_phone,
            code_sent_at: now,
            expiry_deadline: now + Duration::seconds(i64::from(countdown_seconds)),
            countdown: Countdown::new(countdown_seconds),
            resend_count: 0,
            failed_attempts: 0,
            last_message_id: message_id,
        }
    }

    /// Whether the countdown has run out and a new code may be requested
    pub fn resend_available(&self) -> bool {
        self.countdown.is_expired()
    }

    /// Advance the countdown; returns `true` when this tick expired it
    pub fn tick(&mut self) -> bool {
        self.countdown.tick()
    }

    /// Record a resent code and restart the countdown
    pub fn record_resend(&mut self, message_id: String) {
        let now = Utc::now();
        self.countdown.reset();
        self.code_sent_at = now;
        self.expiry_deadline =
            now + Duration::seconds(i64::from(self.countdown.duration_seconds()));
        self.resend_count += 1;
        self.last_message_id = message_id;
    }

    pub fn record_failed_attempt(&mut self) {
        self.failed_attempts += 1;
    }

    /// Consume the session once its code was accepted
    pub fn complete(self) -> CompletedVerification {
        CompletedVerification {
            session_id: self.id,
            method: self.method,
            verified_phone: self.resolved_phone,
            verified_at: Utc::now(),
            resend_count: self.resend_count,
            failed_attempts: self.failed_attempts,
        }
    }
}

/// Result of a successful verification, handed to the completion hook
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletedVerification {
    pub session_id: Uuid,
    pub method: VerificationMethod,
    pub verified_phone: MobilePhone,
    pub verified_at: DateTime<Utc>,
    pub resend_count: u32,
    pub failed_attempts: u32,
}
