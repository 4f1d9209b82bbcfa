pub mod backend;
pub mod connection;
pub mod pool;

pub use backend::{QueryBackend, SimulatedBackend};
pub use connection::{redact_target, DatabaseConnection, DatabaseError, Row, ScopedConnection};
pub use pool::ConnectionPool;
