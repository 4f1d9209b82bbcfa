use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    extract::{Request as HttpRequest, State},
    http::{header::HeaderName, HeaderValue, StatusCode},
    response::{IntoResponse, Json, Response as HttpResponse},
    Router,
};
use serde_json::json;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::handlers::{Request, RequestHandler, Response};

/// Shared state for the HTTP adapter
#[derive(Clone)]
pub struct AppState {
    pub handler: Arc<RequestHandler>,
    pub max_body_bytes: usize,
}

/// Router that hands every HTTP request to the dispatcher.
///
/// Routing lives in the dispatcher's own table, so the whole surface is a
/// single fallback.
pub fn app(state: AppState) -> Router {
    Router::new()
        .fallback(dispatch)
        .with_state(state)
        // Global middleware
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

async fn dispatch(State(state): State<AppState>, request: HttpRequest) -> HttpResponse {
    let (parts, body) = request.into_parts();

    let bytes = match to_bytes(body, state.max_body_bytes).await {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::warn!("Rejected request body: {}", e);
            return (
                StatusCode::PAYLOAD_TOO_LARGE,
                Json(json!({ "error": "request body too large" })),
            )
                .into_response();
        }
    };

    let mut request = Request::new(parts.method.as_str(), parts.uri.path());
    for (name, value) in &parts.headers {
        if let Ok(value) = value.to_str() {
            request.insert_header(name.as_str(), value);
        }
    }
    request.set_body_bytes(bytes.to_vec());

    state.handler.handle(&request).await.into_response()
}

impl IntoResponse for Response {
    fn into_response(self) -> HttpResponse {
        let Response { status, body, headers } = self;
        let status = StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let mut response = HttpResponse::new(Body::from(body));
        *response.status_mut() = status;
        for (name, value) in &headers {
            if let (Ok(name), Ok(value)) = (HeaderName::try_from(name.as_str()), HeaderValue::from_str(value)) {
                response.headers_mut().insert(name, value);
            }
        }
        response
    }
}
