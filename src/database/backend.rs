use async_trait::async_trait;
use serde_json::{json, Value};

use super::{DatabaseError, Row};

/// Source of rows behind a [`DatabaseConnection`](super::DatabaseConnection).
///
/// The connection enforces lifecycle preconditions before calling into the
/// backend, so implementations only see statements from a live connection.
#[async_trait]
pub trait QueryBackend: Send + Sync {
    /// Run a statement that returns rows
    async fn fetch(&self, sql: &str, params: &[Value]) -> Result<Vec<Row>, DatabaseError>;

    /// Run a statement and return the affected row count
    async fn execute(&self, sql: &str, params: &[Value]) -> Result<u64, DatabaseError>;
}

/// Backend that answers every statement without touching a server.
#[derive(Debug, Default, Clone, Copy)]
pub struct SimulatedBackend;

#[async_trait]
impl QueryBackend for SimulatedBackend {
    async fn fetch(&self, _sql: &str, _params: &[Value]) -> Result<Vec<Row>, DatabaseError> {
        let mut row = Row::new();
        row.insert("result".to_string(), json!("ok"));
        Ok(vec![row])
    }

    async fn execute(&self, _sql: &str, _params: &[Value]) -> Result<u64, DatabaseError> {
        Ok(1)
    }
}
