use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post, put},
};
use axum_extra::extract::WithRejection;

use super::dto::{CreateSubjectRequest, SubjectResponse, UpdateSubjectRequest};
use crate::error::AppError;
use crate::routes::dto::MessageResponse;
use crate::routes::parse_record_id;
use crate::services::{SubjectFields, SubjectService};
use crate::state::AppState;

pub fn create_route() -> Router<AppState> {
    Router::new()
        .route("/api/subjects", post(create_subject))
        .route("/api/subjects", get(get_all_subjects))
        .route("/api/subjects/{subject_id}", get(get_subject))
        .route("/api/subjects/{subject_id}", put(update_subject))
        .route("/api/subjects/{subject_id}", delete(delete_subject))
}

/// Create a new subject
#[utoipa::path(
    post,
    path = "/api/subjects",
    request_body = CreateSubjectRequest,
    responses(
        (status = 201, description = "Subject created", body = SubjectResponse),
        (status = 400, description = "Missing required field", body = MessageResponse),
        (status = 500, description = "Internal server error", body = MessageResponse)
    ),
    tag = "Subjects"
)]
pub async fn create_subject(
    State(state): State<AppState>,
    WithRejection(Json(payload), _): WithRejection<Json<CreateSubjectRequest>, AppError>,
) -> Result<(StatusCode, Json<SubjectResponse>), AppError> {
    let subject_service = SubjectService::new(&state.db);

    let subject = subject_service
        .create(SubjectFields {
            subject_key: payload.subject_key,
            subject_name: payload.subject_name,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(subject.into())))
}

/// Get all subjects
#[utoipa::path(
    get,
    path = "/api/subjects",
    responses(
        (status = 200, description = "Subjects retrieved", body = Vec<SubjectResponse>),
        (status = 500, description = "Internal server error", body = MessageResponse)
    ),
    tag = "Subjects"
)]
pub async fn get_all_subjects(
    State(state): State<AppState>,
) -> Result<Json<Vec<SubjectResponse>>, AppError> {
    let subjects = SubjectService::new(&state.db).list().await?;

    Ok(Json(subjects.into_iter().map(SubjectResponse::from).collect()))
}

/// Get subject by ID
#[utoipa::path(
    get,
    path = "/api/subjects/{subject_id}",
    params(
        ("subject_id" = String, Path, description = "Subject ID")
    ),
    responses(
        (status = 200, description = "Subject retrieved", body = SubjectResponse),
        (status = 404, description = "Subject not found", body = MessageResponse),
        (status = 500, description = "Internal server error", body = MessageResponse)
    ),
    tag = "Subjects"
)]
pub async fn get_subject(
    State(state): State<AppState>,
    Path(subject_id): Path<String>,
) -> Result<Json<SubjectResponse>, AppError> {
    let subject_id = parse_record_id(&subject_id, "Subject")?;
    let subject = SubjectService::new(&state.db).get(subject_id).await?;

    Ok(Json(subject.into()))
}

/// Update subject key and/or name
#[utoipa::path(
    put,
    path = "/api/subjects/{subject_id}",
    params(
        ("subject_id" = String, Path, description = "Subject ID")
    ),
    request_body = UpdateSubjectRequest,
    responses(
        (status = 200, description = "Subject updated", body = SubjectResponse),
        (status = 400, description = "Empty field", body = MessageResponse),
        (status = 404, description = "Subject not found", body = MessageResponse),
        (status = 500, description = "Internal server error", body = MessageResponse)
    ),
    tag = "Subjects"
)]
pub async fn update_subject(
    State(state): State<AppState>,
    Path(subject_id): Path<String>,
    WithRejection(Json(payload), _): WithRejection<Json<UpdateSubjectRequest>, AppError>,
) -> Result<Json<SubjectResponse>, AppError> {
    let subject_id = parse_record_id(&subject_id, "Subject")?;
    let subject_service = SubjectService::new(&state.db);

    let updated = subject_service
        .update(
            subject_id,
            SubjectFields {
                subject_key: payload.subject_key,
                subject_name: payload.subject_name,
            },
        )
        .await?;

    Ok(Json(updated.into()))
}

/// Delete subject. Students referencing its key are kept.
#[utoipa::path(
    delete,
    path = "/api/subjects/{subject_id}",
    params(
        ("subject_id" = String, Path, description = "Subject ID")
    ),
    responses(
        (status = 200, description = "Subject deleted", body = MessageResponse),
        (status = 404, description = "Subject not found", body = MessageResponse),
        (status = 500, description = "Internal server error", body = MessageResponse)
    ),
    tag = "Subjects"
)]
pub async fn delete_subject(
    State(state): State<AppState>,
    Path(subject_id): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    let subject_id = parse_record_id(&subject_id, "Subject")?;

    SubjectService::new(&state.db).delete(subject_id).await?;

    Ok(Json(MessageResponse::new("Subject deleted successfully")))
}
