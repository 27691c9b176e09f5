use axum::{Json, extract::State};
use serde::Serialize;
use serde_json::{Value, json};
use tracing::info;

use crate::error::AppError;
use crate::identity;
use crate::routes::AppState;

pub const REGISTER_MESSAGE: &str = "Registration successful";
pub const LOGOUT_MESSAGE: &str = "Logout successful. Please clear the token on client side.";

#[derive(Serialize)]
pub struct LoginResponse {
    success: bool,
    username: &'static str,
    token: String,
}

/// POST /login - Issue a token for a random mock user
///
/// Credentials are not checked; any request body is ignored.
pub async fn login(State(state): State<AppState>) -> Result<Json<LoginResponse>, AppError> {
    let username = identity::pick_random();
    let token = state.tokens.issue(username)?;

    info!(
        username,
        expires_in = state.tokens.lifetime_seconds(),
        "token issued"
    );

    Ok(Json(LoginResponse {
        success: true,
        username,
        token,
    }))
}

/// POST /register - Always succeeds, nothing is stored
pub async fn register() -> Json<Value> {
    Json(json!({ "success": true, "message": REGISTER_MESSAGE }))
}

/// POST /logout - Tokens are not tracked, so the client just forgets its own
pub async fn logout() -> Json<Value> {
    Json(json!({ "success": true, "message": LOGOUT_MESSAGE }))
}
