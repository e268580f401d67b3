use serde_json::{Map, Value};

pub type Err = anyhow::Error;
pub type Res<T> = Result<T, Err>;
pub type Void = Res<()>;

/// Unix timestamp in seconds, as used by `from_date` and `current_date`.
pub type Timestamp = i64;

/// A single homework record as reported by the API.
///
/// Kept as raw JSON so that absent fields surface as typed errors in the extractor.
pub type HomeworkRecord = Map<String, Value>;

/// A validated API payload.
#[derive(Debug, Clone, PartialEq)]
pub struct PollResponse {
    /// Records in the order the API returned them (newest first).
    pub homeworks: Vec<HomeworkRecord>,
    /// The server-side marker to use as the next `from_date`.
    pub current_date: Option<Timestamp>,
}

/// The displayable status of one homework.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusUpdate {
    pub name: String,
    pub status: String,
    pub message: String,
}

/// Delivery receipt for a sent notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Receipt {
    pub message_id: i32,
}
