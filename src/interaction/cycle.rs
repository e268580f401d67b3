//! One fetch → validate → extract → notify pass.

use tracing::{debug, error, info, instrument, warn};

use crate::{
    base::{
        config::Config,
        error::CycleError,
        types::{StatusUpdate, Timestamp},
        verdicts,
    },
    service::{api::ApiClient, notifier::Notifier},
};

use super::{state::LoopState, status::extract_status, validate::validate};

/// What a poll cycle ended up doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleOutcome {
    /// The API reported no homework records.
    NoUpdates,
    /// The newest record matched the last reported status.
    Unchanged,
    /// This many status notifications were delivered.
    Notified(usize),
    /// The cycle failed; the error was logged and possibly reported.
    Failed,
}

/// Runs a single poll cycle against `state`.
///
/// Never fails: errors are logged, reported to the chat unless they repeat the
/// previous report, and leave `next_from_timestamp` untouched.
#[instrument(skip_all, fields(from_date = state.next_from_timestamp()))]
pub async fn poll_once(state: &mut LoopState, config: &Config, api: &ApiClient, notifier: &Notifier) -> CycleOutcome {
    match poll_once_internal(state, config, api, notifier).await {
        Ok((outcome, current_date)) => {
            state.record_success(current_date);
            debug!(next_from_date = state.next_from_timestamp(), ?outcome, "Poll cycle finished");
            outcome
        }
        Err(err) => {
            report_error(state, notifier, &err).await;
            CycleOutcome::Failed
        }
    }
}

async fn poll_once_internal(state: &mut LoopState, config: &Config, api: &ApiClient, notifier: &Notifier) -> Result<(CycleOutcome, Option<Timestamp>), CycleError> {
    let payload = api.fetch(state.next_from_timestamp()).await?;
    let response = validate(payload, config.strict_current_date)?;

    if response.homeworks.is_empty() {
        info!("Status not updated: no homework records since last check.");
        return Ok((CycleOutcome::NoUpdates, response.current_date));
    }

    // Extract everything up front so a bad record aborts the cycle before anything is sent.
    let updates = response
        .homeworks
        .iter()
        .map(|record| extract_status(record, &config.homework_verdicts))
        .collect::<Result<Vec<StatusUpdate>, _>>()?;

    // The API lists newest first; the newest record alone decides whether anything changed.
    let Some((latest, older)) = updates.split_first() else {
        return Ok((CycleOutcome::NoUpdates, response.current_date));
    };

    if !state.is_changed(latest) {
        info!(homework = %latest.name, status = %latest.status, "{}", latest.message);
        return Ok((CycleOutcome::Unchanged, response.current_date));
    }

    flush_pending_error(state, notifier).await;

    // Send oldest first so the chat reads chronologically and the newest lands last.
    for update in older.iter().rev().chain(std::iter::once(latest)) {
        let receipt = notifier.notify(&update.message).await?;
        info!(homework = %update.name, status = %update.status, message_id = receipt.message_id, "Status change reported.");
    }

    state.record_status(latest);

    Ok((CycleOutcome::Notified(updates.len()), response.current_date))
}

/// Delivers an error report that could not be sent earlier.
async fn flush_pending_error(state: &mut LoopState, notifier: &Notifier) {
    let Some(pending) = state.take_pending_error() else {
        return;
    };

    match notifier.notify(&pending).await {
        Ok(_) => debug!("Delivered pending error report."),
        Err(e) => {
            warn!("Pending error report is still undeliverable: {}", e);
            state.set_pending_error(pending);
        }
    }
}

/// Logs `err` and sends it to the chat unless the same text was the last one reported.
async fn report_error(state: &mut LoopState, notifier: &Notifier, err: &CycleError) {
    let message = verdicts::failure_message(err);
    error!(kind = err.kind(), "{}", message);

    if !state.record_error(&message) {
        debug!("Same error already reported; not notifying again.");
        return;
    }

    match notifier.notify(&message).await {
        Ok(_) => {
            // The fresh report supersedes anything still owed.
            state.take_pending_error();
        }
        Err(e) => {
            error!("Failed to report error to chat: {}", e);
            state.set_pending_error(message);
        }
    }
}
