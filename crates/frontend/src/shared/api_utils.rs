//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs and reading error bodies.

use crate::system::auth::storage;
use serde::Deserialize;

/// Port of the backend when it is served next to the dashboard
const BACKEND_PORT: u16 = 8000;

/// Get the base URL for API requests
///
/// Uses the compile-time `BACKEND_URL` variable when it is set, otherwise
/// constructs the URL from the current window location with the backend port.
///
/// # Returns
/// - API base URL like "http://localhost:8000" or "https://example.com:8000"
/// - Empty string if window is not available
pub fn api_base() -> String {
    if let Some(url) = option_env!("BACKEND_URL") {
        return url.trim_end_matches('/').to_string();
    }

    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, BACKEND_PORT)
}

/// Build a full API URL from a path
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/api/v1/search-source-connectors/");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Value for the `Authorization` header, if the user is signed in
pub fn bearer_header() -> Option<String> {
    storage::get_access_token().map(|token| format!("Bearer {}", token))
}

#[derive(Deserialize)]
struct ErrorBody {
    detail: Option<serde_json::Value>,
}

/// Extract a human readable reason from an error response body.
///
/// The backend reports failures as `{"detail": "..."}`; validation failures
/// come as `{"detail": [{"msg": "..."}, ...]}`.
pub fn error_detail(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    match parsed.detail? {
        serde_json::Value::String(s) if !s.trim().is_empty() => Some(s),
        serde_json::Value::Array(items) => {
            let messages: Vec<String> = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(|m| m.as_str()))
                .map(str::to_string)
                .collect();
            if messages.is_empty() {
                None
            } else {
                Some(messages.join("; "))
            }
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_detail_string() {
        assert_eq!(
            error_detail(r#"{"detail": "Connector already exists"}"#),
            Some("Connector already exists".to_string())
        );
    }

    #[test]
    fn test_error_detail_validation_list() {
        let body = r#"{"detail": [{"loc": ["body", "name"], "msg": "field required"}, {"msg": "bad type"}]}"#;
        assert_eq!(
            error_detail(body),
            Some("field required; bad type".to_string())
        );
    }

    #[test]
    fn test_error_detail_missing() {
        assert_eq!(error_detail(r#"{"detail": ""}"#), None);
        assert_eq!(error_detail(r#"{"error": "x"}"#), None);
        assert_eq!(error_detail("<html>502</html>"), None);
        assert_eq!(error_detail(r#"{"detail": []}"#), None);
    }
}
