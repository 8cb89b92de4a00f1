use axum::{
    body::Body,
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use bytes::Bytes;
use http::{Method, StatusCode};
use http_body_util::{BodyExt, LengthLimitError, Limited};
use serde_json::Value;
use std::time::Instant;

use crate::state::AppState;

/// Same ceiling as axum's default body limit for extractors.
pub const MAX_LOGGED_BODY_BYTES: usize = 2 * 1024 * 1024;

fn should_ignore_path(path: &str) -> bool {
    matches!(path, "/health" | "/health/") || path.starts_with("/swagger-ui")
}

/// Only mutating calls carry a body worth logging.
fn should_log_body(method: &Method) -> bool {
    matches!(method.as_str(), "POST" | "PUT")
}

fn body_as_json(bytes: &[u8]) -> Value {
    serde_json::from_slice::<Value>(bytes).unwrap_or_else(|_| Value::Object(serde_json::Map::new()))
}

pub async fn http_logger(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> std::result::Result<impl IntoResponse, (StatusCode, String)> {
    let start_time = Instant::now();

    let method = req.method().clone();
    let uri = req.uri().clone();
    let path = uri.path().to_owned();
    let x_request_id = req
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_owned();

    if should_ignore_path(&path) || method == Method::OPTIONS {
        return Ok(next.run(req).await);
    }

    let log_body = should_log_body(&method);

    let (req, req_body) = if log_body {
        let (parts, body) = req.into_parts();
        let bytes = buffer_request_body(body).await?;
        let json = body_as_json(&bytes);
        (Request::from_parts(parts, Body::from(bytes)), json)
    } else {
        (req, Value::Object(serde_json::Map::new()))
    };

    let mut response = next.run(req).await;

    let latency = start_time.elapsed();
    let status = response.status();

    let res_body = if log_body {
        let (parts, body) = response.into_parts();
        let bytes = buffer_body("response", body).await?;
        let json = body_as_json(&bytes);
        response = Response::from_parts(parts, Body::from(bytes));
        json
    } else {
        Value::Object(serde_json::Map::new())
    };

    if status.is_server_error() {
        tracing::error!(
            method = %method,
            path = %path,
            x_request_id = %x_request_id,
            status = status.as_u16(),
            latency_ms = latency.as_millis(),
            res_body = %res_body,
            app_env = %state.app_env,
            "HTTP request failed"
        );
    } else {
        tracing::info!(
            method = %method,
            path = %path,
            x_request_id = %x_request_id,
            status = status.as_u16(),
            latency_ms = latency.as_millis(),
            req_body = %req_body,
            res_body = %res_body,
            app_env = %state.app_env,
            "HTTP request completed"
        );
    }

    Ok(response)
}

/// Buffers at most `MAX_LOGGED_BODY_BYTES`; anything larger is rejected with 413.
async fn buffer_request_body(body: Body) -> std::result::Result<Bytes, (StatusCode, String)> {
    match Limited::new(body, MAX_LOGGED_BODY_BYTES).collect().await {
        Ok(collected) => Ok(collected.to_bytes()),
        Err(err) if err.downcast_ref::<LengthLimitError>().is_some() => Err((
            StatusCode::PAYLOAD_TOO_LARGE,
            format!("request body exceeds {MAX_LOGGED_BODY_BYTES} bytes"),
        )),
        Err(err) => Err((
            StatusCode::BAD_REQUEST,
            format!("failed to read request body: {err}"),
        )),
    }
}

pub async fn buffer_body<B>(
    direction: &str,
    body: B,
) -> std::result::Result<Bytes, (StatusCode, String)>
where
    B: BodyExt,
    B::Error: std::fmt::Display,
{
    let bytes = match body.collect().await {
        Ok(collected) => collected.to_bytes(),
        Err(err) => {
            return Err((
                StatusCode::BAD_REQUEST,
                format!("failed to read {direction} body: {err}"),
            ));
        }
    };

    Ok(bytes)
}
