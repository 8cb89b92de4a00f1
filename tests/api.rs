mod common;

use axum::{
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use serde_json::{Value, json};
use tower::ServiceExt;

use common::{send, test_app};
use student_management::middleware::http_logger::MAX_LOGGED_BODY_BYTES;

#[tokio::test]
async fn student_lifecycle_over_http() {
    let app = test_app().await;

    let (status, subject) = send(
        &app,
        Method::POST,
        "/api/subjects",
        Some(json!({ "Subject_key": "MATH101", "Subject_name": "Mathematics" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert!(subject["_id"].is_string());

    let (status, student) = send(
        &app,
        Method::POST,
        "/api/students",
        Some(json!({
            "Student_key": "S1",
            "Student_name": "Alice",
            "Subject_key": "MATH101",
            "Grade": "60",
            "Remarks": "PASS"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(student["Remarks"], "FAIL", "client remarks must be ignored");
    assert!(student.get("createdAt").is_some());
    let student_id = student["_id"].as_str().unwrap().to_string();

    let (status, updated) = send(
        &app,
        Method::PUT,
        &format!("/api/students/{student_id}"),
        Some(json!({ "Grade": "90" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["Grade"], "90");
    assert_eq!(updated["Remarks"], "PASS");
    assert_eq!(updated["Student_name"], "Alice");

    let (status, listed) = send(&app, Method::GET, "/api/students", None).await;
    assert_eq!(status, StatusCode::OK);
    let listed = listed.as_array().unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0]["_id"], student_id.as_str());

    let (status, fetched) = send(&app, Method::GET, &format!("/api/students/{student_id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["Remarks"], "PASS");

    let (status, body) = send(&app, Method::DELETE, &format!("/api/students/{student_id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Student deleted successfully");

    let (status, body) = send(&app, Method::DELETE, &format!("/api/students/{student_id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Student not found");

    let (_, listed) = send(&app, Method::GET, "/api/students", None).await;
    assert_eq!(listed, json!([]));
}

#[tokio::test]
async fn numeric_grade_in_json_is_accepted() {
    let app = test_app().await;

    let (status, student) = send(
        &app,
        Method::POST,
        "/api/students",
        Some(json!({
            "Student_key": "S1",
            "Student_name": "Alice",
            "Subject_key": "MATH101",
            "Grade": 75
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(student["Grade"], "75");
    assert_eq!(student["Remarks"], "PASS");
}

#[tokio::test]
async fn validation_failures_return_bad_request() {
    let app = test_app().await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/students",
        Some(json!({ "Student_key": "S1", "Student_name": "Alice", "Subject_key": "MATH101" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "`Grade` is required");

    let (status, _) = send(
        &app,
        Method::POST,
        "/api/students",
        Some(json!({
            "Student_key": "S1",
            "Student_name": "Alice",
            "Subject_key": "MATH101",
            "Grade": "abc"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(
        &app,
        Method::POST,
        "/api/subjects",
        Some(json!({ "Subject_key": "MATH101" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, listed) = send(&app, Method::GET, "/api/students", None).await;
    assert_eq!(listed, json!([]));
}

#[tokio::test]
async fn malformed_json_returns_bad_request() {
    let app = test_app().await;

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/api/subjects")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("{ not json"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn oversized_body_is_rejected_before_the_handler() {
    let app = test_app().await;
    let oversized = vec![b' '; MAX_LOGGED_BODY_BYTES + 1];

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/api/subjects")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(oversized))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    let (_, listed) = send(&app, Method::GET, "/api/subjects", None).await;
    assert_eq!(listed, json!([]));
}

#[tokio::test]
async fn unknown_and_invalid_ids_return_not_found() {
    let app = test_app().await;
    let missing = uuid::Uuid::new_v4();

    let (status, body) = send(
        &app,
        Method::PUT,
        &format!("/api/subjects/{missing}"),
        Some(json!({ "Subject_name": "Physics" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Subject not found");

    let (status, _) = send(&app, Method::DELETE, "/api/subjects/not-an-id", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, Method::GET, "/api/students/12345", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn subject_delete_returns_confirmation() {
    let app = test_app().await;

    let (_, subject) = send(
        &app,
        Method::POST,
        "/api/subjects",
        Some(json!({ "Subject_key": "CS101", "Subject_name": "Programming" })),
    )
    .await;
    let subject_id = subject["_id"].as_str().unwrap().to_string();

    let (status, updated) = send(
        &app,
        Method::PUT,
        &format!("/api/subjects/{subject_id}"),
        Some(json!({ "Subject_key": "CS102" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["Subject_key"], "CS102");
    assert_eq!(updated["Subject_name"], "Programming");

    let (status, body) = send(&app, Method::DELETE, &format!("/api/subjects/{subject_id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Subject deleted successfully");
}

#[tokio::test]
async fn cors_preflight_allows_listed_origin_only() {
    let app = test_app().await;

    let preflight = |origin: &'static str| {
        Request::builder()
            .method(Method::OPTIONS)
            .uri("/api/students")
            .header(header::ORIGIN, origin)
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
            .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
            .body(Body::empty())
            .unwrap()
    };

    let response = app.clone().oneshot(preflight("http://localhost:3000")).await.unwrap();
    assert_eq!(
        response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "http://localhost:3000"
    );
    let methods = response
        .headers()
        .get(header::ACCESS_CONTROL_ALLOW_METHODS)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(methods.contains("DELETE"));
    assert!(!methods.contains("PATCH"));

    let response = app.clone().oneshot(preflight("https://evil.example")).await.unwrap();
    assert!(response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).is_none());
}

#[tokio::test]
async fn health_and_openapi_are_served() {
    let app = test_app().await;

    let (status, body) = send(&app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");

    let (status, doc): (StatusCode, Value) =
        send(&app, Method::GET, "/api-docs/openapi.json", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(doc["paths"].get("/api/students").is_some());
    assert!(doc["paths"].get("/api/subjects/{subject_id}").is_some());
}
