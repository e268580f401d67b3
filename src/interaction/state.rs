//! What the poll loop has already seen and reported.

use crate::base::types::{StatusUpdate, Timestamp};

/// Mutable state of the poll loop, owned exclusively by it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoopState {
    last_status: Option<String>,
    last_name: Option<String>,
    last_error: Option<String>,
    pending_error: Option<String>,
    next_from_timestamp: Timestamp,
}

impl LoopState {
    /// Starts tracking from `from` (usually "now").
    pub fn new(from: Timestamp) -> Self {
        Self {
            next_from_timestamp: from,
            ..Default::default()
        }
    }

    pub fn last_status(&self) -> Option<&str> {
        self.last_status.as_deref()
    }

    pub fn last_name(&self) -> Option<&str> {
        self.last_name.as_deref()
    }

    /// The last error text reported (or attempted) to the chat.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// An error report whose delivery failed and that is still owed to the chat.
    pub fn pending_error(&self) -> Option<&str> {
        self.pending_error.as_deref()
    }

    /// The `from_date` to use for the next fetch.
    pub fn next_from_timestamp(&self) -> Timestamp {
        self.next_from_timestamp
    }

    /// Whether `update` differs from the last reported `(status, name)` pair.
    pub fn is_changed(&self, update: &StatusUpdate) -> bool {
        self.last_status.as_deref() != Some(update.status.as_str()) || self.last_name.as_deref() != Some(update.name.as_str())
    }

    /// Remembers `update` as delivered.
    pub fn record_status(&mut self, update: &StatusUpdate) {
        self.last_status = Some(update.status.clone());
        self.last_name = Some(update.name.clone());
    }

    /// Registers an error text; returns `true` if it differs from the last one and should be reported.
    pub fn record_error(&mut self, message: &str) -> bool {
        if self.last_error.as_deref() == Some(message) {
            return false;
        }

        self.last_error = Some(message.to_string());
        true
    }

    pub fn set_pending_error(&mut self, message: String) {
        self.pending_error = Some(message);
    }

    pub fn take_pending_error(&mut self) -> Option<String> {
        self.pending_error.take()
    }

    /// Closes a successful cycle: the error streak ends and the timestamp moves forward.
    ///
    /// The timestamp never moves backwards, even if the server reports an older `current_date`.
    pub fn record_success(&mut self, current_date: Option<Timestamp>) {
        self.last_error = None;

        if let Some(date) = current_date {
            self.next_from_timestamp = self.next_from_timestamp.max(date);
        }
    }
}

// Tests.
