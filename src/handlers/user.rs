use serde_json::{json, Value};

use super::{Request, Response};
use crate::database::DatabaseConnection;
use crate::error::ApiError;
use crate::models::NewUser;

const SELECT_USER: &str = "SELECT * FROM users WHERE id = $1";
const INSERT_USER: &str = "INSERT INTO users (username, email) VALUES ($1, $2)";

/// GET /api/user - Fetch the row of the authenticated subject
pub async fn get_user(db: &DatabaseConnection, user_id: &str) -> Result<Response, ApiError> {
    let rows = db.query(SELECT_USER, &[Value::String(user_id.to_string())]).await?;

    let Some(row) = rows.into_iter().next() else {
        return Err(ApiError::NotFound);
    };

    Ok(Response::ok(serde_json::to_string(&row)?))
}

/// POST /api/user - Create a user from the JSON body
///
/// A body that cannot be parsed is reported as `{"error": ...}` inside a
/// 200 response rather than as a client error. Callers depend on this.
/// Valid JSON that is not an object is a 500 and nothing is inserted.
pub async fn create_user(db: &DatabaseConnection, request: &Request) -> Result<Response, ApiError> {
    let data = match request.json() {
        Ok(data) => data,
        Err(err) => return Ok(Response::ok(json!({ "error": err.to_string() }).to_string())),
    };

    let new_user = NewUser::from_value(&data).map_err(|err| {
        tracing::error!("Rejected create-user body: {}", err);
        ApiError::internal_server_error("Invalid user payload")
    })?;
    let affected = db.execute_with_retry(INSERT_USER, &new_user.params()).await?;

    Ok(Response::ok(json!({ "created": affected }).to_string()))
}
