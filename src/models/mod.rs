pub mod role;
pub mod user;

pub use role::{Role, UnknownRole};
pub use user::{NewUser, NotAnObject};
