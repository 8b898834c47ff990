// src/main.rs
use clap::Parser;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use recruit_console::common::safe_token_log;
use recruit_console::http::{ErrorLogger, History, UnauthorizedRedirect};
use recruit_console::{ApiClient, ClientConfig, Session};

// ============================================================================
// MODULE IMPORTS
// ============================================================================

mod cli;

use cli::{App, Cli, TerminalNotifier};

// ============================================================================
// MAIN APPLICATION ENTRY POINT
// ============================================================================

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let app = match build_app(&cli).await {
        Ok(app) => app,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            return ExitCode::FAILURE;
        }
    };

    match app.run(cli.command).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if app.session_expired().await {
                eprintln!("Session expired. Sign in again and set RECRUIT_API_TOKEN.");
            } else if app.notifier.latest().is_none() {
                // nothing was toasted, so say what went wrong here
                eprintln!("Error: {:#}", e);
            }
            debug!(error = ?e, "Command failed");
            ExitCode::FAILURE
        }
    }
}

// ============================================================================
// WIRING
// ============================================================================

async fn build_app(cli: &Cli) -> anyhow::Result<App> {
    let config = cli.apply_overrides(ClientConfig::from_env());

    let session = Session::new();
    if let Some(token) = &config.token {
        session.set_token(token.clone()).await;
        info!(api_url = %config.api_url, token = %safe_token_log(token), "Using bearer token");
    } else {
        info!(api_url = %config.api_url, "No bearer token configured");
    }
    session.set_role(config.role.clone()).await;

    let history = History::new("/");
    let api = ApiClient::new(&config, session)?
        .with_interceptor(Arc::new(UnauthorizedRedirect::new(
            Arc::new(history.clone()),
            config.login_path.clone(),
        )))
        .with_interceptor(Arc::new(ErrorLogger));

    Ok(App {
        notifier: Arc::new(TerminalNotifier::new(config.toast_ttl())),
        config,
        api,
        history,
    })
}
