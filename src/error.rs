use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::auth::TokenError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Access token required")]
    MissingToken,

    #[error("Invalid or expired token")]
    InvalidOrExpiredToken,

    #[error("Not found")]
    NotFound,

    #[error("Internal server error")]
    InternalError(String),
}

impl From<TokenError> for AppError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::Missing => AppError::MissingToken,
            TokenError::InvalidOrExpired => AppError::InvalidOrExpiredToken,
            TokenError::Signing(_) | TokenError::Clock => AppError::InternalError(err.to_string()),
        }
    }
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::MissingToken => StatusCode::UNAUTHORIZED,
            AppError::InvalidOrExpiredToken => StatusCode::FORBIDDEN,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let AppError::InternalError(msg) = &self {
            tracing::error!("Internal error: {}", msg);
        }

        (self.status_code(), Json(json!({ "error": self.to_string() }))).into_response()
    }
}
