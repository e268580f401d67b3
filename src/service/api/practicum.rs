//! Practicum homework statuses API over `reqwest`.

use std::{sync::Arc, time::Duration};

use async_trait::async_trait;
use reqwest::{Client, StatusCode, header::AUTHORIZATION};
use serde_json::Value;
use tracing::{debug, error, instrument};

use crate::base::{
    config::Config,
    error::FetchError,
    types::{Res, Timestamp},
};

use super::{ApiClient, GenericHomeworkApi};

// Extra methods on `ApiClient` applied by the practicum implementation.

impl ApiClient {
    /// Creates a new Practicum API client.
    pub fn practicum(config: &Config) -> Res<Self> {
        let client = PracticumApi::new(config)?;
        Ok(Self { inner: Arc::new(client) })
    }
}

// Specific implementations.

/// Practicum API client implementation.
///
/// The underlying `reqwest::Client` is built once and reused for every poll.
#[derive(Clone)]
pub struct PracticumApi {
    client: Client,
    endpoint: String,
    token: String,
}

impl PracticumApi {
    /// Create a new Practicum API client.
    #[instrument(name = "PracticumApi::new", skip_all)]
    pub fn new(config: &Config) -> Res<Self> {
        let client = Client::builder().timeout(Duration::from_secs(config.request_timeout_secs)).build()?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            token: config.practicum_token.clone(),
        })
    }

    fn fail(&self, err: FetchError) -> FetchError {
        error!(endpoint = %self.endpoint, "{}", err);
        err
    }
}

#[async_trait]
impl GenericHomeworkApi for PracticumApi {
    #[instrument(skip(self))]
    async fn fetch(&self, from_date: Timestamp) -> Result<Value, FetchError> {
        debug!(endpoint = %self.endpoint, "Requesting homework statuses");

        let response = self
            .client
            .get(&self.endpoint)
            .header(AUTHORIZATION, format!("OAuth {}", self.token))
            .query(&[("from_date", from_date)])
            .send()
            .await
            .map_err(|e| {
                self.fail(FetchError::Unreachable {
                    endpoint: self.endpoint.clone(),
                    message: e.to_string(),
                })
            })?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(self.fail(FetchError::UnexpectedStatus { status: status.as_u16() }));
        }

        response.json::<Value>().await.map_err(|e| self.fail(FetchError::Decode { message: e.to_string() }))
    }
}
