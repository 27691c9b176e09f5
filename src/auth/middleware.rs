//! Bearer token extraction for protected routes

use axum::{
    extract::FromRequestParts,
    http::{HeaderMap, header::AUTHORIZATION, request::Parts},
};
use tracing::{debug, warn};

use crate::error::AppError;
use crate::routes::AppState;

/// Identity of the caller, taken from a verified bearer token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthUser {
    pub username: String,
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = match bearer_token(&parts.headers) {
            BearerToken::Present(token) => token,
            BearerToken::Absent => {
                warn!(path = %parts.uri.path(), "missing access token");
                return Err(AppError::MissingToken);
            }
            BearerToken::Unreadable => {
                warn!(path = %parts.uri.path(), "access token is not valid utf-8");
                return Err(AppError::InvalidOrExpiredToken);
            }
        };

        let username = state.tokens.verify(token).map_err(|e| {
            warn!(path = %parts.uri.path(), error = %e, "access token rejected");
            AppError::from(e)
        })?;

        debug!(username = %username, "request authenticated");

        Ok(AuthUser { username })
    }
}

/// Outcome of reading the token out of an `Authorization` header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BearerToken<'a> {
    /// No header, or no second field in it
    Absent,
    Present(&'a str),
    /// A second field exists but its bytes are not UTF-8
    Unreadable,
}

/// Token part of an `Authorization: Bearer <token>` header.
///
/// The token is the second space separated field; the scheme word itself is
/// not checked. The header is split as raw bytes so a token with non-ASCII
/// bytes still counts as present.
pub fn bearer_token(headers: &HeaderMap) -> BearerToken<'_> {
    let Some(value) = headers.get(AUTHORIZATION) else {
        return BearerToken::Absent;
    };

    match value.as_bytes().split(|b| *b == b' ').nth(1) {
        None | Some([]) => BearerToken::Absent,
        Some(raw) => std::str::from_utf8(raw)
            .map(BearerToken::Present)
            .unwrap_or(BearerToken::Unreadable),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn test_bearer_token_extracted() {
        let headers = headers_with("Bearer abc.def.ghi");
        assert_eq!(bearer_token(&headers), BearerToken::Present("abc.def.ghi"));
    }

    #[test]
    fn test_no_header_means_no_token() {
        assert_eq!(bearer_token(&HeaderMap::new()), BearerToken::Absent);
    }

    #[test]
    fn test_scheme_without_token() {
        assert_eq!(bearer_token(&headers_with("Bearer")), BearerToken::Absent);
        assert_eq!(bearer_token(&headers_with("Bearer ")), BearerToken::Absent);
    }

    #[test]
    fn test_second_field_used_regardless_of_scheme() {
        assert_eq!(
            bearer_token(&headers_with("Token xyz")),
            BearerToken::Present("xyz")
        );
    }

    #[test]
    fn test_non_utf8_token_is_unreadable() {
        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_bytes(b"Bearer caf\xe9").unwrap(),
        );

        assert_eq!(bearer_token(&headers), BearerToken::Unreadable);
    }

    #[test]
    fn test_non_ascii_utf8_token_is_present() {
        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_bytes("Bearer café".as_bytes()).unwrap(),
        );

        assert_eq!(bearer_token(&headers), BearerToken::Present("café"));
    }
}
