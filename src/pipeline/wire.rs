//! Envelope handling shared by every endpoint.
//!
//! Responses carry a boolean `success`; failures carry an `error` string that
//! is shown to the user verbatim.

use serde::de::DeserializeOwned;
use serde_json::Value;

use super::service::ServiceError;

/// Decode a 2xx body and require `success: true`.
pub(crate) fn parse_success(body: &str) -> Result<Value, ServiceError> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return Err(ServiceError::InvalidResponse("Empty response body".into()));
    }
    let value: Value = serde_json::from_str(trimmed)
        .map_err(|err| ServiceError::InvalidResponse(format!("{err}: {}", excerpt(trimmed))))?;
    if value.get("success").and_then(Value::as_bool) == Some(true) {
        return Ok(value);
    }
    match error_message(&value) {
        Some(message) => Err(ServiceError::Rejected(message)),
        None => Err(ServiceError::InvalidResponse(
            "Response did not report success".into(),
        )),
    }
}

/// Turn an error-status body into the message shown to the user.
pub(crate) fn status_error(code: u16, body: &str) -> ServiceError {
    let from_body = serde_json::from_str::<Value>(body.trim())
        .ok()
        .as_ref()
        .and_then(error_message);
    match from_body {
        Some(message) => ServiceError::Rejected(message),
        None if body.trim().is_empty() => ServiceError::Rejected(format!("HTTP {code}")),
        None => ServiceError::Rejected(format!("HTTP {code}: {}", excerpt(body.trim()))),
    }
}

/// Pull one required field out of a success envelope.
pub(crate) fn field<T: DeserializeOwned>(envelope: &Value, name: &str) -> Result<T, ServiceError> {
    let value = envelope
        .get(name)
        .cloned()
        .ok_or_else(|| ServiceError::InvalidResponse(format!("Missing `{name}` in response")))?;
    serde_json::from_value(value)
        .map_err(|err| ServiceError::InvalidResponse(format!("Invalid `{name}`: {err}")))
}

/// Pull an optional field; absent or null becomes `None`.
pub(crate) fn optional_field<T: DeserializeOwned>(
    envelope: &Value,
    name: &str,
) -> Result<Option<T>, ServiceError> {
    match envelope.get(name) {
        None | Some(Value::Null) => Ok(None),
        Some(_) => field(envelope, name).map(Some),
    }
}

fn error_message(value: &Value) -> Option<String> {
    value
        .get("error")
        .and_then(Value::as_str)
        .or_else(|| value.get("message").and_then(Value::as_str))
        .map(str::to_string)
}

fn excerpt(text: &str) -> String {
    const MAX_CHARS: usize = 200;
    if text.chars().count() <= MAX_CHARS {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(MAX_CHARS).collect();
    cut.push('…');
    cut
}
