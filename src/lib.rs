pub mod auth;
pub mod cli;
pub mod config;
pub mod database;
pub mod error;
pub mod handlers;
pub mod models;
pub mod server;

pub use database::{ConnectionPool, DatabaseConnection, DatabaseError};
pub use handlers::{handle_request, Request, RequestHandler, Response};
