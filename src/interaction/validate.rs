//! Shape checks for the homework statuses payload.

use serde_json::Value;
use tracing::error;

use crate::base::{error::CycleError, types::PollResponse};

/// Checks that `payload` is a mapping with a `homeworks` list and projects it into a [`PollResponse`].
///
/// `current_date` is optional unless `strict` is set; when present it must be an integer.
pub fn validate(payload: Value, strict: bool) -> Result<PollResponse, CycleError> {
    let mut map = match payload {
        Value::Object(map) => map,
        other => return Err(invalid(format!("expected a JSON object, got {}", json_type(&other)))),
    };

    let homeworks = match map.remove("homeworks") {
        Some(Value::Array(items)) => items,
        Some(other) => return Err(invalid(format!("`homeworks` must be a list, got {}", json_type(&other)))),
        None => return Err(invalid("`homeworks` key is missing")),
    };

    let current_date = match map.remove("current_date") {
        Some(value) => Some(value.as_i64().ok_or_else(|| invalid(format!("`current_date` must be an integer, got {}", json_type(&value))))?),
        None if strict => return Err(invalid("`current_date` key is missing")),
        None => None,
    };

    let homeworks = homeworks
        .into_iter()
        .map(|item| match item {
            Value::Object(record) => Ok(record),
            other => Err(invalid(format!("homework record must be an object, got {}", json_type(&other)))),
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(PollResponse { homeworks, current_date })
}

fn invalid(message: impl Into<String>) -> CycleError {
    let message = message.into();
    error!("{}", message);
    CycleError::InvalidResponse(message)
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}

// Tests.

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_valid_payload_is_projected() {
        let payload = json!({
            "homeworks": [{"homework_name": "proj1", "status": "reviewing"}],
            "current_date": 1000,
        });

        let response = validate(payload, true).unwrap();

        assert_eq!(response.current_date, Some(1000));
        assert_eq!(response.homeworks.len(), 1);
        assert_eq!(response.homeworks[0]["homework_name"], "proj1");
    }

    #[test]
    fn test_malformed_payloads_are_rejected() {
        let payloads = [
            json!([]),
            json!("homeworks"),
            json!(null),
            json!({"current_date": 1000}),
            json!({"homeworks": {"homework_name": "proj1"}, "current_date": 1000}),
            json!({"homeworks": "proj1", "current_date": 1000}),
            json!({"homeworks": ["proj1"], "current_date": 1000}),
            json!({"homeworks": [], "current_date": "yesterday"}),
        ];

        for payload in payloads {
            let result = validate(payload.clone(), false);
            assert!(matches!(result, Err(CycleError::InvalidResponse(_))), "payload {payload} should be rejected");
        }
    }

    #[test]
    fn test_current_date_is_only_required_in_strict_mode() {
        let payload = json!({"homeworks": []});

        let lenient = validate(payload.clone(), false).unwrap();
        assert_eq!(lenient.current_date, None);
        assert!(lenient.homeworks.is_empty());

        assert!(matches!(validate(payload, true), Err(CycleError::InvalidResponse(_))));
    }
}
