use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post, put},
};
use axum_extra::extract::WithRejection;

use super::dto::{CreateStudentRequest, StudentResponse, UpdateStudentRequest};
use crate::error::AppError;
use crate::routes::dto::MessageResponse;
use crate::routes::parse_record_id;
use crate::services::{StudentFields, StudentService};
use crate::state::AppState;

pub fn create_route() -> Router<AppState> {
    Router::new()
        .route("/api/students", post(create_student))
        .route("/api/students", get(get_all_students))
        .route("/api/students/{student_id}", get(get_student))
        .route("/api/students/{student_id}", put(update_student))
        .route("/api/students/{student_id}", delete(delete_student))
}

/// Create a new student; remarks are derived from the grade
#[utoipa::path(
    post,
    path = "/api/students",
    request_body = CreateStudentRequest,
    responses(
        (status = 201, description = "Student created", body = StudentResponse),
        (status = 400, description = "Missing required field or non-numeric grade", body = MessageResponse),
        (status = 500, description = "Internal server error", body = MessageResponse)
    ),
    tag = "Students"
)]
pub async fn create_student(
    State(state): State<AppState>,
    WithRejection(Json(payload), _): WithRejection<Json<CreateStudentRequest>, AppError>,
) -> Result<(StatusCode, Json<StudentResponse>), AppError> {
    let student_service = StudentService::new(&state.db);

    let student = student_service
        .create(StudentFields {
            student_key: payload.student_key,
            student_name: payload.student_name,
            subject_key: payload.subject_key,
            grade: payload.grade,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(student.into())))
}

/// Get all students
#[utoipa::path(
    get,
    path = "/api/students",
    responses(
        (status = 200, description = "Students retrieved", body = Vec<StudentResponse>),
        (status = 500, description = "Internal server error", body = MessageResponse)
    ),
    tag = "Students"
)]
pub async fn get_all_students(
    State(state): State<AppState>,
) -> Result<Json<Vec<StudentResponse>>, AppError> {
    let students = StudentService::new(&state.db).list().await?;

    Ok(Json(students.into_iter().map(StudentResponse::from).collect()))
}

/// Get student by ID
#[utoipa::path(
    get,
    path = "/api/students/{student_id}",
    params(
        ("student_id" = String, Path, description = "Student ID")
    ),
    responses(
        (status = 200, description = "Student retrieved", body = StudentResponse),
        (status = 404, description = "Student not found", body = MessageResponse),
        (status = 500, description = "Internal server error", body = MessageResponse)
    ),
    tag = "Students"
)]
pub async fn get_student(
    State(state): State<AppState>,
    Path(student_id): Path<String>,
) -> Result<Json<StudentResponse>, AppError> {
    let student_id = parse_record_id(&student_id, "Student")?;
    let student = StudentService::new(&state.db).get(student_id).await?;

    Ok(Json(student.into()))
}

/// Update student; remarks are recomputed when the grade changes
#[utoipa::path(
    put,
    path = "/api/students/{student_id}",
    params(
        ("student_id" = String, Path, description = "Student ID")
    ),
    request_body = UpdateStudentRequest,
    responses(
        (status = 200, description = "Student updated", body = StudentResponse),
        (status = 400, description = "Empty field or non-numeric grade", body = MessageResponse),
        (status = 404, description = "Student not found", body = MessageResponse),
        (status = 500, description = "Internal server error", body = MessageResponse)
    ),
    tag = "Students"
)]
pub async fn update_student(
    State(state): State<AppState>,
    Path(student_id): Path<String>,
    WithRejection(Json(payload), _): WithRejection<Json<UpdateStudentRequest>, AppError>,
) -> Result<Json<StudentResponse>, AppError> {
    let student_id = parse_record_id(&student_id, "Student")?;
    let student_service = StudentService::new(&state.db);

    let updated = student_service
        .update(
            student_id,
            StudentFields {
                student_key: payload.student_key,
                student_name: payload.student_name,
                subject_key: payload.subject_key,
                grade: payload.grade,
            },
        )
        .await?;

    Ok(Json(updated.into()))
}

/// Delete student
#[utoipa::path(
    delete,
    path = "/api/students/{student_id}",
    params(
        ("student_id" = String, Path, description = "Student ID")
    ),
    responses(
        (status = 200, description = "Student deleted", body = MessageResponse),
        (status = 404, description = "Student not found", body = MessageResponse),
        (status = 500, description = "Internal server error", body = MessageResponse)
    ),
    tag = "Students"
)]
pub async fn delete_student(
    State(state): State<AppState>,
    Path(student_id): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    let student_id = parse_record_id(&student_id, "Student")?;

    StudentService::new(&state.db).delete(student_id).await?;

    Ok(Json(MessageResponse::new("Student deleted successfully")))
}
