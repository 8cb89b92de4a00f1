use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::entities::student;

/// Body of `POST /api/students`.
///
/// `Remarks` and `_id` are not part of the request; if a client sends them
/// they are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct CreateStudentRequest {
    #[serde(rename = "Student_key")]
    pub student_key: Option<String>,
    #[serde(rename = "Student_name")]
    pub student_name: Option<String>,
    #[serde(rename = "Subject_key")]
    pub subject_key: Option<String>,
    /// Accepts a JSON string or number
    #[serde(rename = "Grade", default, deserialize_with = "grade_text")]
    #[schema(value_type = Option<String>, example = "80")]
    pub grade: Option<String>,
}

/// Body of `PUT /api/students/{student_id}`; every field is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateStudentRequest {
    #[serde(rename = "Student_key", skip_serializing_if = "Option::is_none")]
    pub student_key: Option<String>,
    #[serde(rename = "Student_name", skip_serializing_if = "Option::is_none")]
    pub student_name: Option<String>,
    #[serde(rename = "Subject_key", skip_serializing_if = "Option::is_none")]
    pub subject_key: Option<String>,
    #[serde(
        rename = "Grade",
        default,
        deserialize_with = "grade_text",
        skip_serializing_if = "Option::is_none"
    )]
    #[schema(value_type = Option<String>, example = "90")]
    pub grade: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct StudentResponse {
    #[serde(rename = "_id")]
    pub student_id: Uuid,
    #[serde(rename = "Student_key")]
    pub student_key: String,
    #[serde(rename = "Student_name")]
    pub student_name: String,
    #[serde(rename = "Subject_key")]
    pub subject_key: String,
    #[serde(rename = "Grade")]
    pub grade: String,
    /// `PASS`, `FAIL` or empty
    #[serde(rename = "Remarks")]
    pub remarks: String,
    #[serde(rename = "createdAt")]
    pub created_at: NaiveDateTime,
    #[serde(rename = "updatedAt")]
    pub updated_at: NaiveDateTime,
}

impl From<student::Model> for StudentResponse {
    fn from(student: student::Model) -> Self {
        Self {
            student_id: student.student_id,
            student_key: student.student_key,
            student_name: student.student_name,
            subject_key: student.subject_key,
            grade: student.grade,
            remarks: student.remarks,
            created_at: student.created_at,
            updated_at: student.updated_at,
        }
    }
}

/// Grade input from form clients arrives as text, from others as a number.
fn grade_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum GradeInput {
        Text(String),
        Number(serde_json::Number),
    }

    let grade = Option::<GradeInput>::deserialize(deserializer)?;
    Ok(grade.map(|grade| match grade {
        GradeInput::Text(text) => text,
        GradeInput::Number(number) => number.to_string(),
    }))
}
