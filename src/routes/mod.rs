use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};

use crate::auth::TokenService;
use crate::config::Config;
use crate::error::AppError;

mod auth;
mod docs;
mod health;
mod profile;

pub use auth::{LOGOUT_MESSAGE, REGISTER_MESSAGE};

#[derive(Clone)]
pub struct AppState {
    pub tokens: Arc<TokenService>,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            tokens: Arc::new(TokenService::new(&config.jwt)),
        }
    }
}

pub async fn fallback() -> AppError {
    AppError::NotFound
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/", get(docs::page))
        .route("/api-documentation", get(docs::page))
        .route("/login", post(auth::login))
        .route("/register", post(auth::register))
        .route("/logout", post(auth::logout))
        .route("/profile", get(profile::page))
        .fallback(fallback)
        .with_state(app_state)
}
