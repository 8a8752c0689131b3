//! Login credentials.

use idv_shared::validation::{validators, Validate, ValidationErrors};

/// Maximum length of username and password fields
pub const MAX_CREDENTIAL_LENGTH: usize = 30;

/// Username and password submitted to the login gate
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl Validate for Credentials {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        for (field, value) in [("username", &self.username), ("password", &self.password)] {
            if !validators::not_empty(value) {
                errors.add_error(field, format!("{} is required", field), "REQUIRED");
            } else if !validators::length_between(value, 1, MAX_CREDENTIAL_LENGTH) {
                errors.add_error(
                    field,
                    format!("{} must be at most {} characters", field, MAX_CREDENTIAL_LENGTH),
                    "TOO_LONG",
                );
            }
        }

        if errors.has_errors() {
            Err(errors)
        } else {
            Ok(())
        }
    }
}
