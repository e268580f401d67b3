pub mod telegram;

use std::{ops::Deref, sync::Arc};

use async_trait::async_trait;

use crate::base::{error::NotifyError, types::Receipt};

// Traits.

/// Generic notifier trait that clients must implement.
///
/// One call delivers exactly one message to the configured chat; callers are
/// responsible for not sending duplicates.
#[async_trait]
pub trait GenericNotifier: Send + Sync + 'static {
    /// Send a text message to the configured chat.
    async fn notify(&self, text: &str) -> Result<Receipt, NotifyError>;
}

// Structs.

/// Notifier for the application.
///
/// It is designed to be trivially cloneable, allowing it to be passed around
/// without the need for `Arc` or `Mutex`.
#[derive(Clone)]
pub struct Notifier {
    inner: Arc<dyn GenericNotifier>,
}

impl Deref for Notifier {
    type Target = dyn GenericNotifier;

    fn deref(&self) -> &Self::Target {
        &*self.inner
    }
}

impl Notifier {
    pub fn new(inner: Arc<dyn GenericNotifier>) -> Self {
        Self { inner }
    }
}
