//! Terminal front end for the identity verification flow
//!
//! Asks for credentials, then runs the verification flow until the user logs
//! out or quits. Countdown ticks arrive on a channel alongside stdin lines.

mod commands;
mod logging;
mod render;

use std::io::Write;

use anyhow::Context;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader, Lines};
use tokio::sync::mpsc;
use tracing::info;

use idv_core::errors::localize;
use idv_core::services::auth::LoginGate;
use idv_core::services::verification::{FlowEvent, VerificationFlow, VerificationFlowConfig};
use idv_infra::{MockServices, StaticCredentials, TokioTicker};
use idv_shared::config::AppConfig;
use idv_shared::types::Language;

use commands::{credentials_from_input, is_recovery_request, parse_command, Command};
use render::{help_text, render_notification, render_snapshot};

/// How a phase of the session ended
enum Outcome {
    Continue,
    Logout,
    Quit,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = idv_infra::load_config().context("failed to load configuration")?;
    logging::init_logging(&config.logging).context("failed to initialize logging")?;

    let services = MockServices::from_config(
        &config.mock_backend,
        config.environment.is_development(),
    )
    .context("failed to initialize mocked services")?;

    info!(
        environment = %config.environment,
        language = %config.language,
        countdown_seconds = config.verification.countdown_seconds,
        "Starting identity verification"
    );

    let language = config.language;
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut gate = LoginGate::new(services.auth.clone(), language);

    loop {
        if let Outcome::Quit = login(&mut gate, &mut lines, language).await? {
            break;
        }

        match run_flow(&config, &services, &mut lines).await? {
            Outcome::Quit => break,
            Outcome::Logout | Outcome::Continue => {
                if let Err(e) = gate.logout() {
                    println!("{}", localize(&e.to_string(), language));
                }
            }
        }
    }

    info!("Session ended");
    Ok(())
}

fn prompt(text: &str) -> anyhow::Result<()> {
    print!("{} ", text);
    std::io::stdout().flush()?;
    Ok(())
}

/// Ask for credentials until the gate accepts them
async fn login<R>(
    gate: &mut LoginGate<StaticCredentials>,
    lines: &mut Lines<R>,
    language: Language,
) -> anyhow::Result<Outcome>
where
    R: AsyncBufRead + Unpin,
{
    while !gate.is_logged_in() {
        println!(
            "{}",
            language.select(
                "Sign in (type 'forgot' as username for help)",
                "Iniciar sesión (escribí 'olvide' como usuario para ayuda)"
            )
        );

        prompt(language.select("Username:", "Usuario:"))?;
        let Some(username) = lines.next_line().await? else {
            return Ok(Outcome::Quit);
        };
        if is_recovery_request(&username) {
            println!("{}", gate.password_recovery_hint());
            continue;
        }

        prompt(language.select("Password:", "Contraseña:"))?;
        let Some(password) = lines.next_line().await? else {
            return Ok(Outcome::Quit);
        };

        match gate.login(credentials_from_input(&username, password)).await {
            Ok(notification) => println!("{}", render_notification(&notification)),
            Err(e) => println!("[!] {}", localize(&e.to_string(), language)),
        }
    }

    Ok(Outcome::Continue)
}

/// Drive one verification flow from stdin commands and ticker events
async fn run_flow<R>(
    config: &AppConfig,
    services: &MockServices,
    lines: &mut Lines<R>,
) -> anyhow::Result<Outcome>
where
    R: AsyncBufRead + Unpin,
{
    let language = config.language;
    let (sender, mut ticks) = mpsc::channel::<FlowEvent>(8);

    let mut flow = VerificationFlow::new(
        services.directory.clone(),
        services.verifier.clone(),
        services.dispatcher.clone(),
        Box::new(TokioTicker::new(sender)),
        VerificationFlowConfig::from(config),
    )
    .with_completion_hook(|completed| {
        info!(
            session_id = %completed.session_id,
            method = %completed.method,
            phone = %completed.verified_phone.masked(),
            resend_count = completed.resend_count,
            failed_attempts = completed.failed_attempts,
            event = "identity_verified",
            "Identity verified"
        );
    });

    println!("{}", help_text(language));
    println!("{}", render_snapshot(&flow.snapshot(), language));

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else {
                    return Ok(Outcome::Quit);
                };
                if line.trim().is_empty() {
                    continue;
                }

                match parse_command(&line) {
                    Some(Command::Flow(event)) => {
                        let before = flow.state();
                        if let Some(notification) = flow.dispatch(event).await {
                            println!("{}", render_notification(&notification));
                        }
                        if flow.state() != before {
                            println!("{}", render_snapshot(&flow.snapshot(), language));
                        }
                    }
                    Some(Command::Status) => {
                        println!("{}", render_snapshot(&flow.snapshot(), language));
                    }
                    Some(Command::Json) => {
                        println!("{}", serde_json::to_string_pretty(&flow.snapshot())?);
                    }
                    Some(Command::Help) => println!("{}", help_text(language)),
                    Some(Command::Logout) => return Ok(Outcome::Logout),
                    Some(Command::Quit) => return Ok(Outcome::Quit),
                    None => println!(
                        "{} {}",
                        language.select("Unknown command.", "Comando desconocido."),
                        help_text(language)
                    ),
                }
            }
            Some(event) = ticks.recv() => {
                let was_available = flow.snapshot().resend_available;
                flow.dispatch(event).await;
                if !was_available && flow.snapshot().resend_available {
                    println!(
                        "{}",
                        language.select("You can now resend the code.", "Ya podés reenviar el código.")
                    );
                }
            }
        }
    }
}
