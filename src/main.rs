//! A no-cache static file server for local development.
//!
//! Features:
//! - Serves static files from a directory over plain HTTP
//! - Stamps cache-suppression headers on every response so browsers
//!   always re-fetch assets on reload
//! - Detailed logging with color-coded request IDs
//! - Clean shutdown on Ctrl+C

use fresh_rs::{app, cli::Cli, state::AppState};
use std::{process::ExitCode, sync::Arc};
use tokio::net::TcpListener;
use tracing::{Level, info};

/// Main entry point that configures and runs the server
///
/// Sets up:
/// - Structured logging
/// - Root directory validation
/// - Static file serving with cache suppression
/// - Graceful shutdown on interrupt
#[tokio::main]
async fn main() -> ExitCode {
    // Initialize structured logging with INFO level as default
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    let args: Cli = argh::from_env();

    let root_dir = match args.root.canonicalize() {
        Ok(dir) if dir.is_dir() => dir,
        Ok(dir) => {
            eprintln!("error: {} is not a directory", dir.display());
            return ExitCode::FAILURE;
        }
        Err(err) => {
            eprintln!(
                "error: cannot access root directory {}: {}",
                args.root.display(),
                err
            );
            return ExitCode::FAILURE;
        }
    };

    let state = Arc::new(AppState {
        root_dir: root_dir.clone(),
    });

    let listener = match TcpListener::bind(args.bind).await {
        Ok(listener) => listener,
        Err(err) => {
            eprintln!("error: cannot bind {}: {}", args.bind, err);
            return ExitCode::FAILURE;
        }
    };

    // Log startup information
    info!("Serving {} at http://{}", root_dir.display(), args.bind);
    info!("No-cache headers enabled for development");

    // Start the server; runs until interrupted
    if let Err(err) = axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        eprintln!("error: server failed: {}", err);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

/// Resolves when the operator interrupts the process (Ctrl+C)
async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {}", err);
    }
}
