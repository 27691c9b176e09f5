pub mod auth;
pub mod config;
pub mod error;
pub mod identity;
pub mod observability;
pub mod routes;
pub mod server;

pub use config::Config;
pub use routes::AppState;
pub use server::app;
