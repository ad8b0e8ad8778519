//! Error taxonomy for backend calls.
//!
//! Every failure maps to a short user-facing message; nothing here is
//! fatal to the caller.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The backend base URL could not be parsed.
    #[error("invalid backend URL: {0}")]
    BadUrl(#[from] url::ParseError),

    /// Transport-level failure: connect, timeout, TLS.
    #[error("request to backend failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-2xx response; `detail` carries the backend's message when the
    /// body had one.
    #[error("backend returned {status}: {detail}")]
    Status {
        status: reqwest::StatusCode,
        detail: String,
    },

    /// The body did not match the expected shape.
    #[error("could not decode backend response: {0}")]
    Decode(#[source] serde_json::Error),
}

impl ApiError {
    /// Short message suitable for direct display.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::BadUrl(_) => "Backend address is not a valid URL".to_string(),
            ApiError::Transport(e) if e.is_timeout() => {
                "Request timed out. Please try again.".to_string()
            }
            ApiError::Transport(e) if e.is_connect() => "Backend is not available".to_string(),
            ApiError::Transport(_) => "Request failed. Please try again.".to_string(),
            ApiError::Status { detail, .. } if !detail.is_empty() => detail.clone(),
            ApiError::Status { .. } => "Request failed. Please try again.".to_string(),
            ApiError::Decode(_) => "Received an invalid response from the backend".to_string(),
        }
    }
}

/// Pull a human-readable message out of an error body.
///
/// The backend reports `{"detail": "..."}"`, or a list of
/// `{"msg": "..."}` objects for validation failures.
pub(crate) fn extract_detail(body: &str) -> String {
    let Ok(value) = serde_json::from_str::<serde_json::Value>(body) else {
        return String::new();
    };
    match value.get("detail") {
        Some(serde_json::Value::String(s)) => s.clone(),
        Some(serde_json::Value::Array(items)) => items
            .iter()
            .map(|item| match item.get("msg").and_then(|m| m.as_str()) {
                Some(msg) => msg.to_string(),
                None => item.to_string(),
            })
            .collect::<Vec<_>>()
            .join(", "),
        Some(other) => other.to_string(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_detail_string() {
        assert_eq!(
            extract_detail(r#"{"detail": "Simulation not ready"}"#),
            "Simulation not ready"
        );
    }

    #[test]
    fn test_extract_detail_validation_list() {
        let body = r#"{"detail": [{"msg": "field required"}, {"msg": "value out of range"}]}"#;
        assert_eq!(extract_detail(body), "field required, value out of range");
    }

    #[test]
    fn test_extract_detail_absent_or_invalid() {
        assert_eq!(extract_detail("not json"), "");
        assert_eq!(extract_detail(r#"{"error": "nope"}"#), "");
    }
}
