use super::Response;

/// GET /api/health - Liveness check. Never touches the database.
pub fn health() -> Response {
    Response::ok(r#"{"status": "healthy"}"#)
}
