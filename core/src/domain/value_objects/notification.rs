//! Notifications handed to the presentation layer.

use serde::{Deserialize, Serialize};

use idv_shared::types::Language;

use crate::errors::{localize, VerificationError};

/// Category of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    Success,
    ValidationError,
    PhoneNotFound,
    CodeMismatch,
    CodeFormat,
    TransportError,
}

impl From<&VerificationError> for NotificationKind {
    fn from(error: &VerificationError) -> Self {
        match error {
            VerificationError::InvalidNationalId | VerificationError::InvalidMobilePhone => {
                NotificationKind::ValidationError
            }
            VerificationError::PhoneNotFound => NotificationKind::PhoneNotFound,
            VerificationError::InvalidCodeFormat => NotificationKind::CodeFormat,
            VerificationError::CodeMismatch => NotificationKind::CodeMismatch,
            VerificationError::Transport(_) => NotificationKind::TransportError,
        }
    }
}

/// A localized message describing the outcome of an event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
}

impl Notification {
    /// Success notification from bilingual title and message
    pub fn success(title: &str, message: &str, language: Language) -> Self {
        Self {
            kind: NotificationKind::Success,
            title: localize(title, language),
            message: localize(message, language),
        }
    }

    /// Error notification describing `error`
    pub fn from_error(error: &VerificationError, language: Language) -> Self {
        Self {
            kind: NotificationKind::from(error),
            title: localize(error.title(), language),
            message: localize(&error.to_string(), language),
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind != NotificationKind::Success
    }
}
