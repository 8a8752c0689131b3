//! Parsing of terminal input into flow events and session actions

use idv_core::domain::value_objects::{Credentials, VerificationMethod};
use idv_core::services::verification::FlowEvent;

/// One line of user input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Forwarded to the verification flow
    Flow(FlowEvent),
    /// Print the current flow state
    Status,
    /// Print the current flow state as JSON
    Json,
    Help,
    Logout,
    Quit,
}

/// Parse a command line; `None` for unknown or incomplete commands
pub fn parse_command(line: &str) -> Option<Command> {
    let line = line.trim();
    let (name, arg) = match line.split_once(char::is_whitespace) {
        Some((name, arg)) => (name, arg.trim()),
        None => (line, ""),
    };

    let command = match name.to_lowercase().as_str() {
        "method" | "metodo" => {
            let method = arg.parse::<VerificationMethod>().ok()?;
            Command::Flow(FlowEvent::SelectMethod(method))
        }
        "id" | "cedula" => Command::Flow(FlowEvent::UpdateIdInput(arg.to_string())),
        "phone" | "celular" => Command::Flow(FlowEvent::UpdatePhoneInput(arg.to_string())),
        "send" | "enviar" => Command::Flow(FlowEvent::SendCode),
        "code" | "codigo" if !arg.is_empty() => {
            Command::Flow(FlowEvent::SubmitCode(arg.to_string()))
        }
        "resend" | "reenviar" => Command::Flow(FlowEvent::ResendCode),
        "back" | "volver" => Command::Flow(FlowEvent::Back),
        "status" | "estado" => Command::Status,
        "json" => Command::Json,
        "help" | "ayuda" | "?" => Command::Help,
        "logout" | "salir" => Command::Logout,
        "quit" | "exit" => Command::Quit,
        _ => return None,
    };
    Some(command)
}

/// Build login credentials from the two prompt lines.
///
/// Only the username is trimmed; the password is checked exactly as typed.
pub fn credentials_from_input(username: &str, password: String) -> Credentials {
    Credentials::new(username.trim(), password)
}

/// Whether the username line asks for password recovery help
pub fn is_recovery_request(username: &str) -> bool {
    matches!(username.trim().to_lowercase().as_str(), "forgot" | "olvide")
}
