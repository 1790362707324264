//! dialbook — phonebook HTTP service.
//!
//! Serves contact CRUD and search over REST, backed by a local `SQLite`
//! database.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;
use dialbook::AppState;
use dialbook_core::ContactRepository;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Command-line options.
#[derive(Debug, Parser)]
#[command(name = "dialbook", about = "Phonebook HTTP service", version)]
struct Args {
    /// Address to listen on.
    #[arg(long, env = "DIALBOOK_BIND", default_value = "127.0.0.1:8080")]
    bind: SocketAddr,

    /// Path to the SQLite database. Defaults to the user data directory.
    #[arg(long, env = "DIALBOOK_DATABASE")]
    database: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "dialbook=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    let db_path = match args.database {
        Some(path) => path,
        None => default_database_path(),
    };
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    info!("Opening contact database at {}", db_path.display());
    let contacts = ContactRepository::new(&db_path.to_string_lossy()).await?;

    let app = dialbook::router(AppState::new(contacts));
    let listener = tokio::net::TcpListener::bind(args.bind).await?;
    info!("Listening on {}", args.bind);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Shut down");
    Ok(())
}

/// Database location under the user data directory.
fn default_database_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("dialbook")
        .join("contacts.db")
}

/// Resolves when ctrl-c is received.
async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {err}");
    }
}
