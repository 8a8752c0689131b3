//! Text rendering of flow snapshots and notifications

use idv_core::domain::value_objects::{Notification, VerificationMethod};
use idv_core::services::verification::{FlowSnapshot, FlowState, PhonePreview};
use idv_shared::types::Language;

pub fn render_notification(notification: &Notification) -> String {
    let marker = if notification.is_error() { "!" } else { "*" };
    format!("[{}] {}: {}", marker, notification.title, notification.message)
}

pub fn render_snapshot(snapshot: &FlowSnapshot, language: Language) -> String {
    let mut lines = Vec::new();

    match snapshot.state {
        FlowState::SelectingMethod => {
            let (label, placeholder) = match snapshot.method {
                VerificationMethod::Id => (
                    language.select("National ID", "Cédula de identidad"),
                    "12345678",
                ),
                VerificationMethod::Phone => (
                    language.select("Mobile phone", "Número de celular"),
                    "09X XXX XXX",
                ),
            };
            let value = if snapshot.formatted_id_or_phone.is_empty() {
                placeholder
            } else {
                snapshot.formatted_id_or_phone.as_str()
            };
            lines.push(language.select("Verify identity", "Verificar identidad").to_string());
            lines.push(format!("  {}: {}", label, value));
            match &snapshot.id_phone_preview {
                Some(PhonePreview::Found(phone)) => lines.push(format!(
                    "  {}: {}",
                    language.select("Associated phone", "Celular asociado"),
                    phone
                )),
                Some(PhonePreview::NotFound) => lines.push(format!(
                    "  {}: {}",
                    language.select("Associated phone", "Celular asociado"),
                    language.select("Not found", "No encontrado")
                )),
                None => {}
            }
        }
        FlowState::AwaitingCode => {
            lines.push(language.select("Enter the code", "Ingresá el código").to_string());
            if let Some(phone) = &snapshot.masked_resolved_phone {
                lines.push(format!("  {} {}", language.select("Sent to", "Enviado a"), phone));
            }
            if snapshot.resend_available {
                lines.push(format!(
                    "  {}",
                    language.select("You can resend the code", "Podés reenviar el código")
                ));
            } else if let Some(remaining) = &snapshot.remaining_display {
                lines.push(format!(
                    "  {} {}",
                    language.select("Resend available in", "Reenviar disponible en"),
                    remaining
                ));
            }
        }
        FlowState::Completed => {
            lines.push(
                language
                    .select("Identity verified", "Identidad verificada")
                    .to_string(),
            );
        }
    }

    if let Some(notice) = &snapshot.notice {
        lines.push(format!("  {}", render_notification(notice)));
    }

    lines.join("\n")
}

pub fn help_text(language: Language) -> &'static str {
    language.select(
        "Commands: method id|phone, id <number>, phone <number>, send, code <code>, \
         resend, back, status, json, logout, quit",
        "Comandos: metodo cedula|celular, cedula <número>, celular <número>, enviar, \
         codigo <código>, reenviar, volver, estado, json, salir, quit",
    )
}
