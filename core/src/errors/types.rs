//! Domain-specific error types for the login gate and the verification flow
//!
//! Every message is bilingual (`"English | Español"`); use
//! [`localize`] to pick one side for display.

use idv_shared::types::Language;
use idv_shared::validation::ValidationErrors;
use thiserror::Error;

/// Failure of a backend capability (directory, verifier, dispatcher, credential check)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{service} unavailable: {reason}")]
pub struct CapabilityError {
    /// Capability that failed, for logs
    pub service: &'static str,
    /// Provider-specific reason, for logs
    pub reason: String,
}

impl CapabilityError {
    pub fn new(service: &'static str, reason: impl Into<String>) -> Self {
        Self {
            service,
            reason: reason.into(),
        }
    }
}

/// Authentication-related errors with bilingual messages
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AuthError {
    #[error("Invalid username or password, please try again | Usuario o contraseña inválido, intente nuevamente")]
    InvalidCredentials,

    #[error("Please fill in the required fields: {0} | Complete los campos requeridos: {0}")]
    InvalidInput(ValidationErrors),

    #[error("No user is signed in | No hay una sesión iniciada")]
    NotAuthenticated,

    #[error("Authentication service unavailable, please try again | Servicio de autenticación no disponible, intente nuevamente")]
    Transport(#[source] CapabilityError),
}

/// Verification flow errors with bilingual messages
#[derive(Error, Debug, Clone, PartialEq)]
pub enum VerificationError {
    #[error("The national ID must have 8 digits | La cédula de identidad debe tener 8 dígitos.")]
    InvalidNationalId,

    #[error("The mobile number must have the format 09X XXX XXX | El número de celular debe tener el formato 09X XXX XXX.")]
    InvalidMobilePhone,

    #[error("We could not find a phone number for this national ID. Please check the number or enter your mobile number instead | No encontramos un número de teléfono asociado a esta cédula. Por favor, verifique el número o utilice la opción de ingresar celular.")]
    PhoneNotFound,

    #[error("The code must have 6 digits | El código debe tener 6 dígitos")]
    InvalidCodeFormat,

    #[error("The code entered is not valid. Please try again | El código ingresado no es válido. Intente nuevamente.")]
    CodeMismatch,

    #[error("Service temporarily unavailable, please try again | Servicio no disponible temporalmente, intente nuevamente")]
    Transport(#[source] CapabilityError),
}

impl VerificationError {
    /// Bilingual notification title for this error
    pub fn title(&self) -> &'static str {
        match self {
            VerificationError::InvalidNationalId | VerificationError::InvalidMobilePhone => {
                "Validation error | Error de validación"
            }
            VerificationError::PhoneNotFound => "Phone not found | Teléfono no encontrado",
            VerificationError::InvalidCodeFormat => "Invalid code format | Formato de código inválido",
            VerificationError::CodeMismatch => "Invalid code | Código inválido",
            VerificationError::Transport(_) => "Service unavailable | Servicio no disponible",
        }
    }

    /// Stable code for programmatic handling and logs
    pub fn error_code(&self) -> &'static str {
        match self {
            VerificationError::InvalidNationalId => "INVALID_NATIONAL_ID",
            VerificationError::InvalidMobilePhone => "INVALID_MOBILE_PHONE",
            VerificationError::PhoneNotFound => "PHONE_NOT_FOUND",
            VerificationError::InvalidCodeFormat => "INVALID_CODE_FORMAT",
            VerificationError::CodeMismatch => "CODE_MISMATCH",
            VerificationError::Transport(_) => "TRANSPORT_ERROR",
        }
    }
}

/// Extract English message from bilingual string
pub fn extract_english_message(message: &str) -> String {
    match message.split_once(" | ") {
        Some((english, _)) => english.to_string(),
        None => message.to_string(),
    }
}

/// Extract Spanish message from bilingual string
pub fn extract_spanish_message(message: &str) -> String {
    match message.split_once(" | ") {
        Some((_, spanish)) => spanish.to_string(),
        None => message.to_string(),
    }
}

/// Pick the side of a bilingual string matching `language`
pub fn localize(message: &str, language: Language) -> String {
    match language {
        Language::English => extract_english_message(message),
        Language::Spanish => extract_spanish_message(message),
    }
}
