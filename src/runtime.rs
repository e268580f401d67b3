//! Runtime services and the poll loop for the homework-bot.

use std::{sync::Arc, time::Duration};

use tokio::sync::broadcast;

use crate::{
    base::clock::{Clock, Sleeper, SystemClock, TokioSleeper},
    interaction::{
        cycle::{self, CycleOutcome},
        state::LoopState,
    },
    prelude::*,
    service::{api::ApiClient, notifier::Notifier},
};

/// Runtime service context.
///
/// This struct holds the configuration, the API client, the notifier and the
/// time sources. Every member is trivially cloneable, so tests can assemble one
/// from mocks directly.
#[derive(Clone)]
pub struct Runtime {
    /// The configuration for the application.
    pub config: Config,
    /// The homework API client.
    pub api: ApiClient,
    /// The notifier for the destination chat.
    pub notifier: Notifier,
    /// Source of the initial `from_date`.
    pub clock: Arc<dyn Clock>,
    /// Waits between poll cycles.
    pub sleeper: Arc<dyn Sleeper>,
}

impl Runtime {
    /// Create a new runtime instance.
    #[instrument(skip_all)]
    pub fn new(config: Config) -> Res<Self> {
        // Initialize the API client.
        let api = ApiClient::practicum(&config)?;

        // Initialize the notifier.
        let notifier = Notifier::telegram(&config)?;

        Ok(Self {
            config,
            api,
            notifier,
            clock: Arc::new(SystemClock),
            sleeper: Arc::new(TokioSleeper),
        })
    }

    /// Poll until a shutdown signal arrives (or its sender is dropped).
    ///
    /// Shutdown is only observed while sleeping, so a cycle in flight always completes.
    pub async fn start(&self, mut shutdown: broadcast::Receiver<()>) -> Void {
        let interval = Duration::from_secs(self.config.retry_period_secs);
        let mut state = LoopState::new(self.clock.now());

        info!(endpoint = %self.config.endpoint, interval = ?interval, from_date = state.next_from_timestamp(), "Starting poll loop");

        loop {
            let outcome = cycle::poll_once(&mut state, &self.config, &self.api, &self.notifier).await;

            if outcome == CycleOutcome::Failed {
                debug!("Retrying after {:?}", interval);
            }

            tokio::select! {
                _ = self.sleeper.sleep(interval) => {}
                _ = shutdown.recv() => {
                    info!("Shutting down poll loop");
                    break;
                }
            }
        }

        Ok(())
    }
}
