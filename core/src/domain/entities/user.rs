//! Signed-in user shown in the top bar.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Session of a user who passed the login gate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSession {
    /// Unique identifier for the session
    pub id: Uuid,

    /// Username entered at login
    pub username: String,

    /// Timestamp when the user logged in
    pub logged_in_at: DateTime<Utc>,
}

impl UserSession {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            username: username.into(),
            logged_in_at: Utc::now(),
        }
    }
}
