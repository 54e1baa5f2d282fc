pub mod cookies;
pub mod jwt;
pub mod password;
mod registration;
pub mod routes;
pub mod session;
pub mod validation;

pub use routes::routes;
pub use session::{SessionUser, session_gate};
