use std::collections::HashMap;
use std::str::Utf8Error;

use serde_json::Value;
use thiserror::Error;

/// Why a request body could not be read as JSON
#[derive(Debug, Error)]
pub enum BodyError {
    #[error("Empty request body")]
    Empty,

    #[error("Request body is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] Utf8Error),

    #[error("{0}")]
    InvalidJson(#[from] serde_json::Error),
}

/// Simplified HTTP request.
///
/// Header names are stored lowercased so every lookup is case-insensitive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Request {
    pub method: String,
    pub path: String,
    headers: HashMap<String, String>,
    pub body: Option<String>,
    undecodable_body: Option<Utf8Error>,
}

impl Request {
    pub fn new(method: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            path: path.into(),
            headers: HashMap::new(),
            body: None,
            undecodable_body: None,
        }
    }

    pub fn with_header(mut self, name: &str, value: impl Into<String>) -> Self {
        self.insert_header(name, value);
        self
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self.undecodable_body = None;
        self
    }

    /// Set the body from raw bytes. An empty payload leaves no body; bytes
    /// that are not UTF-8 are kept out of `body` and reported by [`json`](Self::json).
    pub fn set_body_bytes(&mut self, bytes: Vec<u8>) {
        self.body = None;
        self.undecodable_body = None;
        if bytes.is_empty() {
            return;
        }
        match String::from_utf8(bytes) {
            Ok(body) => self.body = Some(body),
            Err(err) => self.undecodable_body = Some(err.utf8_error()),
        }
    }

    pub fn insert_header(&mut self, name: &str, value: impl Into<String>) {
        self.headers.insert(name.to_ascii_lowercase(), value.into());
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(&name.to_ascii_lowercase()).map(String::as_str)
    }

    pub fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    pub fn content_type(&self) -> Option<&str> {
        self.header("content-type")
    }

    /// Parse the body as JSON. An absent or empty body is an error.
    pub fn json(&self) -> Result<Value, BodyError> {
        if let Some(err) = self.undecodable_body {
            return Err(err.into());
        }
        match self.body.as_deref() {
            None | Some("") => Err(BodyError::Empty),
            Some(body) => Ok(serde_json::from_str(body)?),
        }
    }
}
