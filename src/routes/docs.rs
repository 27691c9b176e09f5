use askama::Template;
use axum::{extract::State, response::Html};

use crate::error::AppError;
use crate::routes::{AppState, LOGOUT_MESSAGE, REGISTER_MESSAGE};

#[derive(Template)]
#[template(path = "docs.html")]
pub struct DocsTemplate {
    pub version: &'static str,
    pub token_lifetime_seconds: u64,
    pub register_message: &'static str,
    pub logout_message: &'static str,
}

/// GET / and GET /api-documentation - Human readable API reference
pub async fn page(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let template = DocsTemplate {
        version: env!("CARGO_PKG_VERSION"),
        token_lifetime_seconds: state.tokens.lifetime_seconds(),
        register_message: REGISTER_MESSAGE,
        logout_message: LOGOUT_MESSAGE,
    };

    template
        .render()
        .map(Html)
        .map_err(|e| AppError::InternalError(format!("failed to render docs page: {e}")))
}
