pub mod practicum;

use std::{ops::Deref, sync::Arc};

use async_trait::async_trait;
use serde_json::Value;

use crate::base::{error::FetchError, types::Timestamp};

// Traits.

/// Generic homework API trait that clients must implement.
///
/// Implementations return the decoded JSON document untouched; shape checks
/// are the validator's job.
#[async_trait]
pub trait GenericHomeworkApi: Send + Sync + 'static {
    /// Fetch homework statuses changed since `from_date`.
    async fn fetch(&self, from_date: Timestamp) -> Result<Value, FetchError>;
}

// Structs.

/// Homework API client for the application.
///
/// It is designed to be trivially cloneable, allowing it to be passed around
/// without the need for `Arc` or `Mutex`.
#[derive(Clone)]
pub struct ApiClient {
    inner: Arc<dyn GenericHomeworkApi>,
}

impl Deref for ApiClient {
    type Target = dyn GenericHomeworkApi;

    fn deref(&self) -> &Self::Target {
        &*self.inner
    }
}

impl ApiClient {
    pub fn new(inner: Arc<dyn GenericHomeworkApi>) -> Self {
        Self { inner }
    }
}
