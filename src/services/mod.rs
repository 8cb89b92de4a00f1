//! Entity services.
//!
//! Services own field validation and derived fields, and delegate persistence
//! to the repositories. Each call touches a single row.

pub mod student_service;
pub mod subject_service;

pub use student_service::{StudentFields, StudentService};
pub use subject_service::{SubjectFields, SubjectService};

use crate::error::{AppError, AppResult};

/// Unwraps a field that must be present and not blank.
fn required(value: Option<String>, field: &str) -> AppResult<String> {
    match value {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(AppError::Validation(format!("`{field}` is required"))),
    }
}

/// Checks a field that may be absent but must not be blank when given.
fn non_blank(value: Option<String>, field: &str) -> AppResult<Option<String>> {
    match value {
        Some(value) if value.trim().is_empty() => {
            Err(AppError::Validation(format!("`{field}` must not be empty")))
        }
        other => Ok(other),
    }
}
