use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// A create-user body that is valid JSON but not an object
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Expected a JSON object, got {0}")]
pub struct NotAnObject(pub &'static str);

/// Fields read from a create-user body. A missing field binds as `null`;
/// any other value is passed through as given.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewUser {
    #[serde(default)]
    pub username: Value,
    #[serde(default)]
    pub email: Value,
}

impl NewUser {
    pub fn from_value(data: &Value) -> Result<Self, NotAnObject> {
        let Value::Object(fields) = data else {
            return Err(NotAnObject(kind(data)));
        };

        let field = |name: &str| fields.get(name).cloned().unwrap_or(Value::Null);
        Ok(Self {
            username: field("username"),
            email: field("email"),
        })
    }

    /// Positional parameters for the insert statement
    pub fn params(&self) -> [Value; 2] {
        [self.username.clone(), self.email.clone()]
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
