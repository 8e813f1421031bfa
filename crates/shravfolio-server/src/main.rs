//! Shravfolio server: portfolio content, the guided assistant and the chat
//! endpoint over HTTP.
//!
//! On startup it:
//!
//! 1. Reads configuration from the environment (see [`shravfolio_sdk::AppConfig`]).
//! 2. Builds the project catalog (repository listing, AI enrichment,
//!    keyword categorisation, static fallback; first success wins).
//! 3. Serves the routes listed in [`app`].

mod app;
mod error;
mod sessions;

use std::sync::Arc;

use clap::Parser;
use shravfolio_sdk::{AppConfig, Catalog, load_catalog};
use tracing::{info, warn};

use crate::app::{AppState, router};
use crate::sessions::SessionStore;

/// Portfolio HTTP service.
#[derive(Parser, Debug)]
#[command(name = "shravfolio-server", about = "Shravfolio portfolio HTTP service")]
struct Args {
    /// Listen port (overrides `FOLIO_PORT`).
    #[arg(long)]
    port: Option<u16>,

    /// Skip every network call and serve the static fallback projects.
    #[arg(long)]
    offline: bool,

    /// Account whose repositories are listed (overrides `GITHUB_USERNAME`).
    #[arg(long)]
    username: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialise structured logging (controlled via RUST_LOG env var).
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let mut config = AppConfig::from_env();
    if let Some(port) = args.port {
        config.listen_port = port;
    }
    if let Some(username) = args.username {
        config.github_username = username;
    }

    let gemini = match config.gemini_client() {
        Ok(client) => {
            info!(model = %client.model(), "chat backend configured");
            Some(client)
        }
        Err(e) => {
            warn!(error = %e, "no chat backend, answering from the offline FAQ");
            None
        }
    };

    let catalog = if args.offline {
        Catalog::offline()
    } else {
        load_catalog(
            &config.github_client(),
            gemini.as_ref(),
            &config.github_username,
        )
        .await
    };
    for line in &catalog.log {
        info!(target: "catalog", "{line}");
    }

    let sessions = SessionStore::with_limits(config.session_ttl, config.max_sessions);
    info!(
        ttl_secs = config.session_ttl.as_secs(),
        max = config.max_sessions,
        "assistant session limits"
    );
    let app = router(Arc::new(AppState::new(catalog, gemini, sessions)));

    let addr = format!("0.0.0.0:{}", config.listen_port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!(address = %addr, "portfolio service listening");
    axum::serve(listener, app).await?;
    Ok(())
}
