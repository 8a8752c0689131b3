//! Events, states and snapshots of the verification flow

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{Notification, VerificationMethod};

/// Stage of the verification flow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlowState {
    SelectingMethod,
    AwaitingCode,
    Completed,
}

/// User intents and timer ticks delivered to the flow
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", content = "value", rename_all = "snake_case")]
pub enum FlowEvent {
    SelectMethod(VerificationMethod),
    UpdateIdInput(String),
    UpdatePhoneInput(String),
    SendCode,
    SubmitCode(String),
    ResendCode,
    Back,
    /// Countdown step from the schedule with the given epoch
    Tick(u64),
}

/// Phone number shown next to a valid national ID before a code is sent
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "phone", rename_all = "snake_case")]
pub enum PhonePreview {
    /// Display-formatted number registered for the ID
    Found(String),
    NotFound,
}

/// Read-only projection of the flow for rendering
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowSnapshot {
    pub state: FlowState,
    pub method: VerificationMethod,
    /// Current input of the selected method, as displayed
    pub formatted_id_or_phone: String,
    /// Number associated with the typed ID (ID method only)
    pub id_phone_preview: Option<PhonePreview>,
    /// Phone the code was sent to, middle group redacted
    pub masked_resolved_phone: Option<String>,
    pub remaining_seconds: Option<u32>,
    /// Remaining time as `M:SS`
    pub remaining_display: Option<String>,
    pub resend_available: bool,
    /// Inline notice shown until the user edits the form
    pub notice: Option<Notification>,
}
