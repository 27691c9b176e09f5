#![allow(dead_code)]

use axum::{
    Router,
    body::Body,
    http::{Request, Response, StatusCode},
};
use http_body_util::BodyExt;
use mockauth::config::{Config, JwtConfig, ObservabilityConfig, ServerConfig};
use tower::ServiceExt;

pub const TEST_SECRET: &str = "test_secret_key_minimum_32_characters_long";

pub fn test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 3000,
        },
        jwt: JwtConfig {
            secret: TEST_SECRET.to_string(),
            expiration_seconds: 3600,
        },
        observability: ObservabilityConfig::default(),
    }
}

pub fn test_app() -> Router {
    mockauth::app(&test_config())
}

pub async fn send(app: &Router, request: Request<Body>) -> Response<Body> {
    app.clone().oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response<Body>) -> (StatusCode, serde_json::Value) {
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = serde_json::from_slice(&bytes).expect("response body is json");
    (status, value)
}

pub async fn body_text(response: Response<Body>) -> (StatusCode, String) {
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

pub fn post(uri: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn get_with_auth(uri: &str, authorization: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .header("Authorization", authorization)
        .body(Body::empty())
        .unwrap()
}

/// Log in through the API and return (username, token)
pub async fn login(app: &Router) -> (String, String) {
    let (status, body) = body_json(send(app, post("/login")).await).await;
    assert_eq!(status, StatusCode::OK);

    (
        body["username"].as_str().unwrap().to_string(),
        body["token"].as_str().unwrap().to_string(),
    )
}
