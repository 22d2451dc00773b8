//! Shared helpers for integration tests

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    response::Response,
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use bookshelf_server::{
    api,
    config::{AppConfig, DatabaseConfig},
    repository::Repository,
    AppState,
};

pub const TEST_SECRET: &str = "test-secret";

/// Fresh in-memory database with migrations applied
pub async fn test_state() -> AppState {
    // One connection, since every in-memory SQLite connection is its own database
    let database = DatabaseConfig {
        url: "sqlite::memory:".to_string(),
        max_connections: 1,
        min_connections: 1,
    };
    let repository = Repository::connect(&database)
        .await
        .expect("Failed to open in-memory database");
    repository.migrate().await.expect("Failed to run migrations");

    let mut config = AppConfig::default();
    config.database = database;
    config.auth.jwt_secret = TEST_SECRET.to_string();

    AppState::new(&config, repository)
}

pub async fn test_app() -> Router {
    api::router(test_state().await)
}

pub async fn send_raw(app: &Router, request: Request<Body>) -> Response {
    app.clone()
        .oneshot(request)
        .await
        .expect("Failed to send request")
}

/// Send a request and decode the JSON body (Null when empty)
pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = send_raw(app, request).await;

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, body)
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn post_json_with_token(uri: &str, body: Value, token: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn token_request(username: &str, password: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/token")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(format!("username={}&password={}", username, password)))
        .unwrap()
}

/// Register a user and return its id
pub async fn register(app: &Router, username: &str, password: &str) -> i64 {
    let (status, body) = send(
        app,
        post_json("/register", json!({"username": username, "password": password})),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "register failed: {}", body);
    body["id"].as_i64().expect("No user ID")
}

/// Obtain a bearer token through the token endpoint
pub async fn login(app: &Router, username: &str, password: &str) -> String {
    let (status, body) = send(app, token_request(username, password)).await;
    assert_eq!(status, StatusCode::OK, "login failed: {}", body);
    body["access_token"].as_str().expect("No token in response").to_string()
}

/// Create an author and a book, returning the book id
pub async fn create_book(app: &Router, title: &str) -> i64 {
    let (_, author) = send(app, post_json("/authors", json!({"name": "Leo Tolstoy"}))).await;
    let (status, book) = send(
        app,
        post_json(
            "/books",
            json!({"title": title, "year": 1869, "author_id": author["id"]}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "create book failed: {}", book);
    book["id"].as_i64().expect("No book ID")
}
