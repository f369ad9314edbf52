//! # tokamak-consoled: Tokamak console daemon
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Parse configuration (config file, env vars)
//! - Initialise `tracing` with the configured filter
//! - Construct the fetcher selected by `[backend]` (Tokamak API or fixtures)
//! - Construct the console service, applying per-view overrides
//! - Build the axum router with the configured theme and settle timeout
//! - Bind to a TCP port and serve
//! - Handle graceful shutdown (SIGTERM/SIGINT)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer; no domain logic belongs here.

mod config;

use std::error::Error;

use tokamak_console_adapter_fixtures::FixtureFetcher;
use tokamak_console_adapter_http_axum::render::HtmlRenderer;
use tokamak_console_adapter_http_axum::router;
use tokamak_console_adapter_http_axum::state::AppState;
use tokamak_console_adapter_tokamak_http::TokamakClient;
use tokamak_console_app::ports::ConsoleFetcher;
use tokamak_console_app::services::console_service::ConsoleService;
use tracing_subscriber::EnvFilter;

use crate::config::{BackendKind, Config};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&config.logging.filter)?)
        .init();

    match config.backend.kind {
        BackendKind::Tokamak => {
            tracing::info!(endpoint = %config.tokamak.endpoint, "using tokamak backend");
            let client = TokamakClient::new(&config.tokamak)?;
            serve(&config, client).await
        }
        BackendKind::Fixtures => {
            tracing::info!(
                latency_ms = config.fixtures.latency_ms,
                failing = ?config.fixtures.fail,
                "using fixture backend"
            );
            serve(&config, FixtureFetcher::from_config(&config.fixtures)).await
        }
    }
}

async fn serve<F: ConsoleFetcher>(config: &Config, fetcher: F) -> Result<(), Box<dyn Error>> {
    let console = config
        .views
        .empty_policy_overrides()
        .fold(ConsoleService::new(fetcher), |console, (kind, policy)| {
            tracing::info!(resource = %kind, ?policy, "overriding empty-state policy");
            console.with_empty_policy(kind, policy)
        });

    let state = AppState::new(console)
        .with_renderer(HtmlRenderer::new(config.theme.to_theme()))
        .with_settle_timeout(config.server.settle_timeout());
    let app = router::build(state);

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(%bind_addr, "tokamak-consoled listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("tokamak-consoled stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("shutdown signal received");
}
