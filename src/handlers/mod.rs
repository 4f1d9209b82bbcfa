// handlers/mod.rs - Authenticated dispatch
//
// Every request is authenticated first, then routed through a static
// (method, path) table. Whatever happens below `handle`, the caller gets
// one of the canonical responses back.

pub mod health;
pub mod request;
pub mod response;
pub mod user;

pub use request::{BodyError, Request};
pub use response::Response;

use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures::FutureExt;
use tracing::{debug, error, warn};

use crate::auth::{AuthError, Claims, JwtValidator, TokenValidator};
use crate::config::AppConfig;
use crate::database::DatabaseConnection;
use crate::error::ApiError;

/// Handler behaviors bound in the route table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Health,
    GetUser,
    CreateUser,
}

const ROUTES: &[(&str, &str, Route)] = &[
    ("GET", "/api/health", Route::Health),
    ("GET", "/api/user", Route::GetUser),
    ("POST", "/api/user", Route::CreateUser),
];

impl Route {
    /// Look up the route key `(uppercased method, exact path)`
    pub fn resolve(method: &str, path: &str) -> Option<Route> {
        let method = method.to_uppercase();
        ROUTES
            .iter()
            .find(|(m, p, _)| *m == method && *p == path)
            .map(|(_, _, route)| *route)
    }
}

/// Dispatches authenticated requests against a shared database connection.
pub struct RequestHandler {
    jwt_secret: String,
    db: Arc<DatabaseConnection>,
    validator: Arc<dyn TokenValidator>,
}

impl RequestHandler {
    pub fn new(config: &AppConfig, db: Arc<DatabaseConnection>) -> Self {
        Self {
            jwt_secret: config.security.jwt_secret.clone(),
            db,
            validator: Arc::new(JwtValidator::default()),
        }
    }

    pub fn with_validator(mut self, validator: Arc<dyn TokenValidator>) -> Self {
        self.validator = validator;
        self
    }

    pub fn database(&self) -> &DatabaseConnection {
        &self.db
    }

    /// Authenticate, route and run a request. Never fails.
    ///
    /// Requests that fail authentication are answered before routing and
    /// never reach the database.
    pub async fn handle(&self, request: &Request) -> Response {
        let claims = match self.authenticate(request) {
            Ok(claims) => claims,
            Err(err) => {
                warn!(reason = err.reason().as_str(), "Auth failed: {}", err);
                return ApiError::from(err).into_response();
            }
        };

        let Some(route) = Route::resolve(&request.method, &request.path) else {
            debug!(method = %request.method, path = %request.path, "No route matched");
            return Response::not_found();
        };

        let outcome = AssertUnwindSafe(self.dispatch(route, request, &claims))
            .catch_unwind()
            .await;

        match outcome {
            Ok(Ok(response)) => response,
            Ok(Err(err)) => err.into_response(),
            Err(_) => {
                error!(?route, "Handler panicked");
                ApiError::internal_server_error("Internal server error").into_response()
            }
        }
    }

    fn authenticate(&self, request: &Request) -> Result<Claims, AuthError> {
        let header = request.header("authorization").unwrap_or_default();
        if header.is_empty() {
            return Err(AuthError::malformed("Missing Authorization header"));
        }
        self.validator.validate(header, &self.jwt_secret)
    }

    async fn dispatch(&self, route: Route, request: &Request, claims: &Claims) -> Result<Response, ApiError> {
        match route {
            Route::Health => Ok(health::health()),
            Route::GetUser => user::get_user(&self.db, &claims.sub).await,
            Route::CreateUser => user::create_user(&self.db, request).await,
        }
    }
}

/// Build a handler and process a single request
pub async fn handle_request(request: &Request, config: &AppConfig, db: Arc<DatabaseConnection>) -> Response {
    RequestHandler::new(config, db).handle(request).await
}
