//! Typed errors for startup and for a single poll cycle.

use thiserror::Error;

/// Failures while talking to the homework API.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("endpoint {endpoint} is unreachable: {message}")]
    Unreachable { endpoint: String, message: String },

    #[error("API responded with status {status}")]
    UnexpectedStatus { status: u16 },

    #[error("failed to decode API response as JSON: {message}")]
    Decode { message: String },
}

/// Failure to deliver a notification to the chat.
#[derive(Debug, Error)]
#[error("failed to send message to chat {chat_id}: {message}")]
pub struct NotifyError {
    pub chat_id: i64,
    pub message: String,
}

/// Everything that can go wrong within one poll cycle.
///
/// None of these are fatal: the poll loop reports them and tries again after sleeping.
#[derive(Debug, Error)]
pub enum CycleError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("invalid API response: {0}")]
    InvalidResponse(String),

    #[error("homework record has no `{0}` field")]
    MissingField(&'static str),

    #[error("unknown homework status `{0}`")]
    UnknownStatus(String),

    #[error(transparent)]
    Notify(#[from] NotifyError),
}

impl CycleError {
    /// Short, stable name of the error kind for structured logs.
    pub fn kind(&self) -> &'static str {
        match self {
            CycleError::Fetch(_) => "fetch",
            CycleError::InvalidResponse(_) => "invalid_response",
            CycleError::MissingField(_) => "missing_field",
            CycleError::UnknownStatus(_) => "unknown_status",
            CycleError::Notify(_) => "notify",
        }
    }
}

/// Fatal configuration problems, only raised at startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("required setting `{0}` is missing or empty")]
    Missing(&'static str),

    #[error("invalid setting `{field}`: {message}")]
    Invalid { field: &'static str, message: String },

    #[error("failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),
}

impl ConfigError {
    pub(crate) fn invalid(field: &'static str, message: impl Into<String>) -> Self {
        Self::Invalid { field, message: message.into() }
    }
}
