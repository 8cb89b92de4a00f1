pub mod dto;
pub mod health;
pub mod students;
pub mod subjects;

use uuid::Uuid;

use crate::error::{AppError, AppResult};

/// Path ids that are not valid identifiers cannot name any record.
pub(crate) fn parse_record_id(raw: &str, entity: &'static str) -> AppResult<Uuid> {
    Uuid::parse_str(raw).map_err(|_| AppError::NotFound(entity))
}
