//! Library root for `homework-bot`.
//!
//! Homework-bot watches the review status of Practicum homework submissions:
//! - Polls the homework statuses API on a fixed interval
//! - Validates the payload and maps status codes to human-readable verdicts
//! - Sends a Telegram message whenever a status changes
//! - Reports failures to the same chat without repeating the same error
//!
//! The API client and the notifier are traits with a default implementation
//! each, so the poll loop can be driven entirely by mocks in tests.

pub mod base;
pub mod interaction;
pub mod prelude;
pub mod runtime;
pub mod service;

use base::{config::Config, types::Void};
use tokio::{signal, sync::broadcast};
use tracing::{info, warn};

/// Public async entry for the binary crate.
///
/// Sets up the services and runs the poll loop until Ctrl-C or SIGTERM:
/// - Creates the runtime context with the API client and notifier
/// - Wires Ctrl-C and SIGTERM to the loop's shutdown channel
/// - Runs the poll loop
pub async fn start(config: Config) -> Void {
    info!("Starting homework-bot ...");

    // Initialize the runtime.
    let runtime = runtime::Runtime::new(config)?;

    // Forward Ctrl-C / SIGTERM to the poll loop.
    let (shutdown_tx, shutdown_rx) = broadcast::channel(1);
    tokio::spawn(async move {
        match shutdown_signal().await {
            Ok(name) => {
                info!("Received {}", name);
                let _ = shutdown_tx.send(());
            }
            Err(e) => {
                // Keep the sender alive so the loop runs until the process is killed.
                warn!("Unable to listen for shutdown signals: {}", e);
                std::future::pending::<()>().await;
                drop(shutdown_tx);
            }
        }
    });

    // Start the runtime.
    runtime.start(shutdown_rx).await?;

    Ok(())
}

/// Resolves with the signal's name once Ctrl-C (or, on unix, SIGTERM) arrives.
pub async fn shutdown_signal() -> std::io::Result<&'static str> {
    #[cfg(unix)]
    {
        let mut terminate = signal::unix::signal(signal::unix::SignalKind::terminate())?;

        tokio::select! {
            result = signal::ctrl_c() => result.map(|_| "Ctrl-C"),
            _ = terminate.recv() => Ok("SIGTERM"),
        }
    }

    #[cfg(not(unix))]
    {
        signal::ctrl_c().await.map(|_| "Ctrl-C")
    }
}
