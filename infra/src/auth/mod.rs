//! Auth Module
//!
//! Credential check for the login gate.

use async_trait::async_trait;

use idv_core::domain::value_objects::Credentials;
use idv_core::errors::CapabilityError;
use idv_core::services::auth::AuthService;

/// Accepts one username and password pair
#[derive(Clone)]
pub struct StaticCredentials {
    username: String,
    password: String,
}

impl StaticCredentials {
    pub fn new(username: &str, password: &str) -> Self {
        Self {
            username: username.to_string(),
            password: password.to_string(),
        }
    }
}

impl Default for StaticCredentials {
    fn default() -> Self {
        Self::new("admin", "Test.1234")
    }
}

#[async_trait]
impl AuthService for StaticCredentials {
    async fn check_credentials(&self, credentials: &Credentials) -> Result<bool, CapabilityError> {
        Ok(credentials.username == self.username && credentials.password == self.password)
    }
}
