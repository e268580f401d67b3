//! Turns a homework record into a displayable status.

use std::collections::HashMap;

use tracing::error;

use crate::base::{
    error::CycleError,
    types::{HomeworkRecord, StatusUpdate},
    verdicts,
};

/// Maps the record's `status` to its verdict and formats the chat message.
pub fn extract_status(record: &HomeworkRecord, verdicts: &HashMap<String, String>) -> Result<StatusUpdate, CycleError> {
    let name = string_field(record, "homework_name")?;
    let status = string_field(record, "status")?;

    let Some(verdict) = verdicts.get(status) else {
        let err = CycleError::UnknownStatus(status.to_string());
        error!("{}", err);
        return Err(err);
    };

    Ok(StatusUpdate {
        name: name.to_string(),
        status: status.to_string(),
        message: verdicts::status_message(name, verdict),
    })
}

fn string_field<'a>(record: &'a HomeworkRecord, key: &'static str) -> Result<&'a str, CycleError> {
    record.get(key).and_then(|v| v.as_str()).ok_or_else(|| {
        let err = CycleError::MissingField(key);
        error!("{}", err);
        err
    })
}

// Tests.
