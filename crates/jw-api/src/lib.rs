pub mod auth;
pub mod config;
pub mod error;
pub mod extract;
pub mod image_host;
pub mod lesson;
pub mod metrics;
pub mod middleware;
pub mod practice;
pub mod router;
pub mod state;
pub mod tracing;
pub mod tutorial;
pub mod user;
pub mod validation;
pub mod word;

pub use config::ApiConfig;
pub use state::ApiState;
