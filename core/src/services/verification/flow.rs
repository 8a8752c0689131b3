//! Verification flow controller

use std::sync::Arc;

use idv_shared::phone::sanitize_phone_input;
use idv_shared::validation::{is_valid_code, sanitize_id_input};

use crate::domain::entities::{CompletedVerification, VerificationSession};
use crate::domain::value_objects::{
    MobilePhone, NationalId, Notification, PhoneResolution, VerificationMethod,
};
use crate::errors::VerificationError;

use super::config::VerificationFlowConfig;
use super::traits::{CodeDispatcher, CodeVerifier, DirectoryLookup, TickScheduler};
use super::types::{FlowEvent, FlowSnapshot, FlowState, PhonePreview};

/// Callback invoked once when a code is accepted
pub type CompletionHook = Box<dyn FnMut(&CompletedVerification) + Send>;

/// Method selection form; survives back navigation
#[derive(Debug, Clone, Default)]
struct MethodForm {
    method: VerificationMethod,
    id_input: String,
    phone_input: String,
    /// Directory answer for `id_input`, once it is a valid ID
    id_preview: Option<PhoneResolution>,
}

#[derive(Debug)]
enum Stage {
    SelectingMethod,
    AwaitingCode(VerificationSession),
    Completed(CompletedVerification),
}

/// State machine driving method selection, code dispatch and confirmation
///
/// All methods take `&mut self`: the owner serializes user events and timer
/// ticks, so the flow never needs locking. Failures are returned as
/// [`VerificationError`] values and the flow stays where it was.
pub struct VerificationFlow<D: DirectoryLookup, V: CodeVerifier, S: CodeDispatcher> {
    /// Phone lookup for the ID method
    directory: Arc<D>,
    /// Code acceptance check
    verifier: Arc<V>,
    /// Code delivery
    dispatcher: Arc<S>,
    /// Periodic trigger for countdown ticks
    ticker: Box<dyn TickScheduler>,
    /// Generation of the current schedule; ticks from older ones are dropped
    tick_epoch: u64,
    config: VerificationFlowConfig,
    form: MethodForm,
    stage: Stage,
    /// Inline notice, cleared when the user edits the form
    notice: Option<Notification>,
    on_complete: Option<CompletionHook>,
}

impl<D: DirectoryLookup, V: CodeVerifier, S: CodeDispatcher> VerificationFlow<D, V, S> {
    /// Create a flow in the `SelectingMethod` state
    pub fn new(
        directory: Arc<D>,
        verifier: Arc<V>,
        dispatcher: Arc<S>,
        ticker: Box<dyn TickScheduler>,
        config: VerificationFlowConfig,
    ) -> Self {
        Self {
            directory,
            verifier,
            dispatcher,
            ticker,
            tick_epoch: 0,
            config,
            form: MethodForm::default(),
            stage: Stage::SelectingMethod,
            notice: None,
            on_complete: None,
        }
    }

    /// Register the callback run when verification completes
    pub fn with_completion_hook(
        mut self,
        hook: impl FnMut(&CompletedVerification) + Send + 'static,
    ) -> Self {
        self.on_complete = Some(Box::new(hook));
        self
    }

    // Queries

    pub fn state(&self) -> FlowState {
        match self.stage {
            Stage::SelectingMethod => FlowState::SelectingMethod,
            Stage::AwaitingCode(_) => FlowState::AwaitingCode,
            Stage::Completed(_) => FlowState::Completed,
        }
    }

    pub fn method(&self) -> VerificationMethod {
        self.form.method
    }

    pub fn session(&self) -> Option<&VerificationSession> {
        match &self.stage {
            Stage::AwaitingCode(session) => Some(session),
            _ => None,
        }
    }

    pub fn completed(&self) -> Option<&CompletedVerification> {
        match &self.stage {
            Stage::Completed(completed) => Some(completed),
            _ => None,
        }
    }

    pub fn notice(&self) -> Option<&Notification> {
        self.notice.as_ref()
    }

    pub fn is_ticking(&self) -> bool {
        self.ticker.is_active()
    }

    /// Epoch a tick must carry to be applied
    pub fn tick_epoch(&self) -> u64 {
        self.tick_epoch
    }

    /// Build a read-only projection for the presentation layer
    pub fn snapshot(&self) -> FlowSnapshot {
        let formatted_id_or_phone = match self.form.method {
            VerificationMethod::Id => self.form.id_input.clone(),
            VerificationMethod::Phone => self.form.phone_input.clone(),
        };
        let session = self.session();
        let id_phone_preview = match (self.form.method, &self.form.id_preview) {
            (VerificationMethod::Id, Some(PhoneResolution::Found(phone))) => {
                Some(PhonePreview::Found(phone.formatted()))
            }
            (VerificationMethod::Id, Some(PhoneResolution::NotFound)) => {
                Some(PhonePreview::NotFound)
            }
            _ => None,
        };

        FlowSnapshot {
            state: self.state(),
            method: self.form.method,
            formatted_id_or_phone,
            id_phone_preview,
            masked_resolved_phone: session.map(|s| s.resolved_phone.masked()),
            remaining_seconds: session.map(|s| s.countdown.remaining_seconds()),
            remaining_display: session.map(|s| s.countdown.format()),
            resend_available: session.map_or(false, |s| s.resend_available()),
            notice: self.notice.clone(),
        }
    }

    // Events

    /// Deliver an event; failures come back as error notifications.
    ///
    /// Returns `None` when the event produced no message (input edits,
    /// ticks, ignored events).
    pub async fn dispatch(&mut self, event: FlowEvent) -> Option<Notification> {
        let result = match event {
            FlowEvent::SelectMethod(method) => {
                self.select_method(method);
                Ok(None)
            }
            FlowEvent::UpdateIdInput(raw) => {
                self.update_id_input(&raw);
                self.refresh_id_preview().await;
                Ok(None)
            }
            FlowEvent::UpdatePhoneInput(raw) => {
                self.update_phone_input(&raw);
                Ok(None)
            }
            FlowEvent::SendCode => self.send_code().await,
            FlowEvent::SubmitCode(raw) => self.submit_code(&raw).await,
            FlowEvent::ResendCode => self.resend_code().await,
            FlowEvent::Back => {
                self.back();
                Ok(None)
            }
            FlowEvent::Tick(epoch) => {
                if epoch == self.tick_epoch {
                    self.tick();
                } else {
                    tracing::trace!(epoch, current = self.tick_epoch, event = "stale_tick");
                }
                Ok(None)
            }
        };

        match result {
            Ok(notification) => notification,
            Err(error) => Some(Notification::from_error(&error, self.config.language)),
        }
    }

    /// Choose the input path; clears the inline notice
    pub fn select_method(&mut self, method: VerificationMethod) {
        if !matches!(self.stage, Stage::SelectingMethod) {
            tracing::debug!(event = "select_method_ignored", state = ?self.state());
            return;
        }
        self.form.method = method;
        self.notice = None;
    }

    /// Store national ID input (digits only, at most 8); clears the inline notice
    pub fn update_id_input(&mut self, raw: &str) {
        if !matches!(self.stage, Stage::SelectingMethod) {
            tracing::debug!(event = "id_input_ignored", state = ?self.state());
            return;
        }
        self.form.id_input = sanitize_id_input(raw);
        self.form.id_preview = None;
        self.notice = None;
    }

    /// Look up the number associated with the typed ID for display.
    ///
    /// Does nothing until the input is a valid ID. A failed lookup leaves no
    /// preview; `send_code` reports the failure.
    pub async fn refresh_id_preview(&mut self) {
        if !matches!(self.stage, Stage::SelectingMethod) {
            return;
        }
        let Ok(id) = NationalId::parse(&self.form.id_input) else {
            return;
        };

        self.form.id_preview = match self.directory.resolve_phone(&id).await {
            Ok(resolution) => Some(resolution),
            Err(e) => {
                tracing::warn!(error = %e, event = "id_preview_failed", "Directory lookup failed");
                None
            }
        };
    }

    /// Store phone input (forced `09` prefix, display-formatted); clears the inline notice
    pub fn update_phone_input(&mut self, raw: &str) {
        if !matches!(self.stage, Stage::SelectingMethod) {
            tracing::debug!(event = "phone_input_ignored", state = ?self.state());
            return;
        }
        self.form.phone_input = sanitize_phone_input(raw);
        self.notice = None;
    }

    /// Validate the selected input, resolve the phone and dispatch a code.
    ///
    /// On success the flow moves to `AwaitingCode` and the countdown starts.
    pub async fn send_code(&mut self) -> Result<Option<Notification>, VerificationError> {
        if !matches!(self.stage, Stage::SelectingMethod) {
            tracing::debug!(event = "send_code_ignored", state = ?self.state());
            return Ok(None);
        }

        let method = self.form.method;
        let phone = match self.resolve_target_phone().await {
            Ok(phone) => phone,
            Err(error) => {
                tracing::warn!(
                    method = %method,
                    error_code = error.error_code(),
                    event = "send_code_rejected",
                    "Verification code was not sent"
                );
                if error == VerificationError::PhoneNotFound {
                    self.notice = Some(Notification::from_error(&error, self.config.language));
                }
                return Err(error);
            }
        };

        let message_id = self.dispatch_code(&phone).await?;
        let masked = phone.masked();
        let session =
            VerificationSession::new(method, phone, self.config.countdown_seconds, message_id);

        tracing::info!(
            phone = %masked,
            method = %method,
            session_id = %session.id,
            event = "code_sent",
            "Verification code sent"
        );

        self.stage = Stage::AwaitingCode(session);
        self.notice = None;
        self.start_ticking();

        Ok(Some(Notification::success(
            "Code sent | Código enviado",
            &format!(
                "A verification code was sent to {masked} | Se ha enviado un código de verificación al número {masked}"
            ),
            self.config.language,
        )))
    }

    /// Check a submitted code; an accepted code completes the flow
    pub async fn submit_code(&mut self, raw: &str) -> Result<Option<Notification>, VerificationError> {
        let phone = match &self.stage {
            Stage::AwaitingCode(session) => session.resolved_phone.clone(),
            _ => {
                tracing::debug!(event = "submit_code_ignored", state = ?self.state());
                return Ok(None);
            }
        };

        if !is_valid_code(raw) {
            tracing::warn!(
                code_length = raw.len(),
                event = "invalid_code_format",
                "Invalid verification code format provided"
            );
            return Err(self.inline_error(VerificationError::InvalidCodeFormat));
        }

        let accepted = self.verifier.verify(&phone, raw).await.map_err(|e| {
            tracing::error!(
                phone = %phone.masked(),
                error = %e,
                event = "code_verification_error",
                "Code verifier failed"
            );
            VerificationError::Transport(e)
        })?;

        if !accepted {
            if let Stage::AwaitingCode(session) = &mut self.stage {
                session.record_failed_attempt();
                tracing::warn!(
                    phone = %phone.masked(),
                    session_id = %session.id,
                    failed_attempts = session.failed_attempts,
                    event = "code_mismatch",
                    "Verification code rejected"
                );
            }
            return Err(self.inline_error(VerificationError::CodeMismatch));
        }

        self.stop_ticking();
        self.notice = None;

        let Stage::AwaitingCode(session) = std::mem::replace(&mut self.stage, Stage::SelectingMethod)
        else {
            return Ok(None);
        };
        let completed = session.complete();

        tracing::info!(
            phone = %completed.verified_phone.masked(),
            session_id = %completed.session_id,
            event = "verification_completed",
            "Verification code accepted"
        );

        if let Some(hook) = self.on_complete.as_mut() {
            hook(&completed);
        }
        self.stage = Stage::Completed(completed);

        Ok(Some(Notification::success(
            "Verification successful | Verificación exitosa",
            "Your number has been verified | Su número ha sido verificado correctamente",
            self.config.language,
        )))
    }

    /// Send a new code once the countdown has run out; a no-op before that
    pub async fn resend_code(&mut self) -> Result<Option<Notification>, VerificationError> {
        let phone = match &self.stage {
            Stage::AwaitingCode(session) if session.resend_available() => {
                session.resolved_phone.clone()
            }
            Stage::AwaitingCode(session) => {
                tracing::debug!(
                    remaining_seconds = session.countdown.remaining_seconds(),
                    event = "resend_not_available"
                );
                return Ok(None);
            }
            _ => {
                tracing::debug!(event = "resend_ignored", state = ?self.state());
                return Ok(None);
            }
        };

        let message_id = self.dispatch_code(&phone).await?;

        if let Stage::AwaitingCode(session) = &mut self.stage {
            session.record_resend(message_id);
            tracing::info!(
                phone = %phone.masked(),
                session_id = %session.id,
                resend_count = session.resend_count,
                event = "code_resent",
                "Verification code resent"
            );
        }
        self.notice = None;
        self.start_ticking();

        Ok(Some(Notification::success(
            "Code resent | Código reenviado",
            "A new verification code was sent to your number | Se ha enviado un nuevo código de verificación a su número",
            self.config.language,
        )))
    }

    /// Leave code confirmation; discards the session and stops the countdown
    pub fn back(&mut self) {
        if let Stage::AwaitingCode(session) = &self.stage {
            tracing::info!(session_id = %session.id, event = "verification_abandoned");
            self.stop_ticking();
            self.stage = Stage::SelectingMethod;
            self.notice = None;
        } else {
            tracing::debug!(event = "back_ignored", state = ?self.state());
        }
    }

    /// One-second countdown step; ignored outside `AwaitingCode`
    ///
    /// Applies unconditionally. Scheduled ticks go through
    /// [`dispatch`](Self::dispatch), which drops those of an earlier epoch.
    pub fn tick(&mut self) {
        let Stage::AwaitingCode(session) = &mut self.stage else {
            tracing::trace!(event = "orphan_tick");
            return;
        };

        if !session.tick() {
            return;
        }
        tracing::debug!(session_id = %session.id, event = "resend_available");
        self.stop_ticking();
    }

    // Helpers

    async fn resolve_target_phone(&self) -> Result<MobilePhone, VerificationError> {
        match self.form.method {
            VerificationMethod::Phone => MobilePhone::parse(&self.form.phone_input),
            VerificationMethod::Id => {
                let id = NationalId::parse(&self.form.id_input)?;
                let resolution = self.directory.resolve_phone(&id).await.map_err(|e| {
                    tracing::error!(error = %e, event = "directory_lookup_error", "Directory lookup failed");
                    VerificationError::Transport(e)
                })?;
                match resolution {
                    PhoneResolution::Found(phone) => Ok(phone),
                    PhoneResolution::NotFound => Err(VerificationError::PhoneNotFound),
                }
            }
        }
    }

    async fn dispatch_code(&self, phone: &MobilePhone) -> Result<String, VerificationError> {
        self.dispatcher.dispatch(phone).await.map_err(|e| {
            tracing::error!(
                phone = %phone.masked(),
                error = %e,
                event = "code_dispatch_failed",
                "Failed to send verification code"
            );
            VerificationError::Transport(e)
        })
    }

    fn start_ticking(&mut self) {
        self.tick_epoch += 1;
        self.ticker.schedule(self.tick_epoch);
    }

    // Ticks already queued for the old epoch become stale
    fn stop_ticking(&mut self) {
        self.tick_epoch += 1;
        self.ticker.cancel();
    }

    fn inline_error(&mut self, error: VerificationError) -> VerificationError {
        self.notice = Some(Notification::from_error(&error, self.config.language));
        error
    }
}

impl<D: DirectoryLookup, V: CodeVerifier, S: CodeDispatcher> Drop for VerificationFlow<D, V, S> {
    fn drop(&mut self) {
        self.ticker.cancel();
    }
}
