//! Default verdict texts and notification message formats.

use std::{collections::HashMap, fmt::Display};

/// Verdict for the `approved` status.
pub const APPROVED_VERDICT: &str = "Работа проверена: ревьюеру всё понравилось. Ура!";

/// Verdict for the `reviewing` status.
pub const REVIEWING_VERDICT: &str = "Работа взята на проверку ревьюером.";

/// Verdict for the `rejected` status.
pub const REJECTED_VERDICT: &str = "Работа проверена: у ревьюера есть замечания.";

/// The built-in status-to-verdict table.
pub fn default_verdicts() -> HashMap<String, String> {
    [("approved", APPROVED_VERDICT), ("reviewing", REVIEWING_VERDICT), ("rejected", REJECTED_VERDICT)]
        .into_iter()
        .map(|(status, verdict)| (status.to_string(), verdict.to_string()))
        .collect()
}

/// The chat message announcing a status change.
pub fn status_message(homework_name: &str, verdict: &str) -> String {
    format!("Изменился статус проверки работы \"{homework_name}\". {verdict}")
}

/// The chat message (and log line) reporting a failed poll cycle.
pub fn failure_message(error: &impl Display) -> String {
    format!("Сбой в работе программы: {error}")
}
