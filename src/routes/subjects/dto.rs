use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::entities::subject;

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct CreateSubjectRequest {
    #[serde(rename = "Subject_key")]
    pub subject_key: Option<String>,
    #[serde(rename = "Subject_name")]
    pub subject_name: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateSubjectRequest {
    #[serde(rename = "Subject_key", skip_serializing_if = "Option::is_none")]
    pub subject_key: Option<String>,
    #[serde(rename = "Subject_name", skip_serializing_if = "Option::is_none")]
    pub subject_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SubjectResponse {
    #[serde(rename = "_id")]
    pub subject_id: Uuid,
    #[serde(rename = "Subject_key")]
    pub subject_key: String,
    #[serde(rename = "Subject_name")]
    pub subject_name: String,
    #[serde(rename = "createdAt")]
    pub created_at: NaiveDateTime,
    #[serde(rename = "updatedAt")]
    pub updated_at: NaiveDateTime,
}

impl From<subject::Model> for SubjectResponse {
    fn from(subject: subject::Model) -> Self {
        Self {
            subject_id: subject.subject_id,
            subject_key: subject.subject_key,
            subject_name: subject.subject_name,
            created_at: subject.created_at,
            updated_at: subject.updated_at,
        }
    }
}
