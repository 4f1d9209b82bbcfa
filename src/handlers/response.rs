use std::collections::HashMap;

use serde_json::json;

/// Simplified HTTP response. Only the four constructors below produce one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub status: u16,
    pub body: String,
    pub headers: HashMap<String, String>,
}

impl Response {
    /// 200 with a JSON body
    pub fn ok(body: impl Into<String>) -> Self {
        let mut headers = HashMap::new();
        headers.insert("content-type".to_string(), "application/json".to_string());
        Self {
            status: 200,
            body: body.into(),
            headers,
        }
    }

    pub fn not_found() -> Self {
        Self {
            status: 404,
            body: r#"{"error": "not found"}"#.to_string(),
            headers: HashMap::new(),
        }
    }

    pub fn unauthorized(message: &str) -> Self {
        Self::error(401, message)
    }

    pub fn internal_error(message: &str) -> Self {
        Self::error(500, message)
    }

    fn error(status: u16, message: &str) -> Self {
        Self {
            status,
            body: json!({ "error": message }).to_string(),
            headers: HashMap::new(),
        }
    }

    pub fn content_type(&self) -> Option<&str> {
        self.headers.get("content-type").map(String::as_str)
    }
}
