#![allow(dead_code)]

use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode},
};
use http_body_util::BodyExt;
use sea_orm::DatabaseConnection;
use serde_json::Value;
use tower::ServiceExt;

use student_management::app::create_app;
use student_management::config::{Config, DEFAULT_CORS_ALLOWED_ORIGINS};
use student_management::database::connect_database;

/// Fresh, migrated in-memory database per call.
pub async fn test_db() -> DatabaseConnection {
    connect_database("sqlite::memory:")
        .await
        .expect("in-memory database")
}

pub fn test_config() -> Config {
    Config {
        port: 0,
        swagger_enabled: true,
        log_level: "debug".to_string(),
        database_url: "sqlite::memory:".to_string(),
        cors_allowed_origins: DEFAULT_CORS_ALLOWED_ORIGINS.to_string(),
        app_env: "test".to_string(),
    }
}

pub async fn test_app() -> Router {
    create_app(test_db().await, &test_config())
}

pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header("content-type", "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };

    (status, json)
}
