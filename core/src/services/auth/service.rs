//! Login gate implementation

use std::sync::Arc;

use idv_shared::types::Language;
use idv_shared::validation::Validate;

use crate::domain::entities::UserSession;
use crate::domain::value_objects::{Credentials, Notification};
use crate::errors::{localize, AuthError, DomainResult};

use super::traits::AuthService;

/// Shown when the user asks to recover a forgotten password
pub const PASSWORD_RECOVERY_HINT: &str = "Please contact the administrator to recover your access | Por favor, comunicate con el administrador para recuperar tu acceso.";

/// Gate that must be passed before the verification flow is shown
pub struct LoginGate<A: AuthService> {
    /// Credential check capability
    auth_service: Arc<A>,
    /// Language of notifications
    language: Language,
    /// Currently signed-in user, if any
    current: Option<UserSession>,
}

impl<A: AuthService> LoginGate<A> {
    pub fn new(auth_service: Arc<A>, language: Language) -> Self {
        Self {
            auth_service,
            language,
            current: None,
        }
    }

    /// Validate the form fields and check the credentials.
    ///
    /// On success the user session is stored and a welcome notification
    /// returned.
    pub async fn login(&mut self, credentials: Credentials) -> DomainResult<Notification> {
        if let Err(errors) = credentials.validate() {
            tracing::debug!(fields = %errors, event = "login_input_invalid");
            return Err(AuthError::InvalidInput(errors).into());
        }

        let accepted = self
            .auth_service
            .check_credentials(&credentials)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, event = "credential_check_error", "Credential check failed");
                AuthError::Transport(e)
            })?;

        if !accepted {
            tracing::warn!(
                username = %credentials.username,
                event = "login_failed",
                "Invalid username or password"
            );
            return Err(AuthError::InvalidCredentials.into());
        }

        let session = UserSession::new(credentials.username);
        tracing::info!(
            username = %session.username,
            session_id = %session.id,
            event = "login_success",
            "User logged in"
        );
        self.current = Some(session);

        Ok(Notification::success(
            "Access granted | Acceso exitoso",
            "Welcome to the system | Bienvenido al sistema",
            self.language,
        ))
    }

    /// Sign the current user out
    pub fn logout(&mut self) -> DomainResult<UserSession> {
        let session = self.current.take().ok_or(AuthError::NotAuthenticated)?;
        tracing::info!(
            username = %session.username,
            session_id = %session.id,
            event = "logout",
            "User logged out"
        );
        Ok(session)
    }

    pub fn current_user(&self) -> Option<&UserSession> {
        self.current.as_ref()
    }

    pub fn is_logged_in(&self) -> bool {
        self.current.is_some()
    }

    /// Password recovery is handled by an administrator, not by the system
    pub fn password_recovery_hint(&self) -> String {
        localize(PASSWORD_RECOVERY_HINT, self.language)
    }
}
