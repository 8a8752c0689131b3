//! Credential check capability

use async_trait::async_trait;

use crate::domain::value_objects::Credentials;
use crate::errors::CapabilityError;

/// Checks a username and password
#[async_trait]
pub trait AuthService: Send + Sync {
    /// `Ok(true)` if the credentials are accepted
    async fn check_credentials(&self, credentials: &Credentials) -> Result<bool, CapabilityError>;
}
