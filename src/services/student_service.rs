use sea_orm::DatabaseConnection;
use uuid::Uuid;

use super::{non_blank, required};
use crate::entities::student;
use crate::error::{AppError, AppResult};
use crate::grading::{parse_grade, remark_for};
use crate::repositories::{NewStudent, StudentRepository, StudentUpdate};

/// Student fields as submitted by a client; absent fields are `None`.
///
/// There is no remarks field: remarks are always derived from the grade.
#[derive(Debug, Clone, Default)]
pub struct StudentFields {
    pub student_key: Option<String>,
    pub student_name: Option<String>,
    pub subject_key: Option<String>,
    pub grade: Option<String>,
}

pub struct StudentService {
    repo: StudentRepository,
}

impl StudentService {
    pub fn new(db: &DatabaseConnection) -> Self {
        Self {
            repo: StudentRepository::new(db),
        }
    }

    pub async fn list(&self) -> AppResult<Vec<student::Model>> {
        Ok(self.repo.find_all().await?)
    }

    pub async fn get(&self, student_id: Uuid) -> AppResult<student::Model> {
        self.repo
            .find_by_id(student_id)
            .await?
            .ok_or(AppError::NotFound("Student"))
    }

    /// Validates every required field, derives remarks from the grade and
    /// stores the new student.
    pub async fn create(&self, fields: StudentFields) -> AppResult<student::Model> {
        let student_key = required(fields.student_key, "Student_key")?;
        let student_name = required(fields.student_name, "Student_name")?;
        let subject_key = required(fields.subject_key, "Subject_key")?;
        let grade = numeric_grade(required(fields.grade, "Grade")?)?;

        let remarks = remark_for(&grade).to_string();
        let student = self
            .repo
            .create(
                Uuid::new_v4(),
                NewStudent {
                    student_key,
                    student_name,
                    subject_key,
                    grade,
                    remarks,
                },
            )
            .await?;

        tracing::info!(
            student_id = %student.student_id,
            remarks = %student.remarks,
            "Student created"
        );
        Ok(student)
    }

    /// Applies the present fields. Remarks are recomputed only when a grade is
    /// part of the update.
    pub async fn update(&self, student_id: Uuid, fields: StudentFields) -> AppResult<student::Model> {
        let grade = non_blank(fields.grade, "Grade")?
            .map(numeric_grade)
            .transpose()?;
        let remarks = grade.as_deref().map(|grade| remark_for(grade).to_string());

        let updates = StudentUpdate {
            student_key: non_blank(fields.student_key, "Student_key")?,
            student_name: non_blank(fields.student_name, "Student_name")?,
            subject_key: non_blank(fields.subject_key, "Subject_key")?,
            grade,
            remarks,
        };

        self.repo
            .update(student_id, updates)
            .await?
            .ok_or(AppError::NotFound("Student"))
    }

    pub async fn delete(&self, student_id: Uuid) -> AppResult<()> {
        if !self.repo.delete(student_id).await? {
            return Err(AppError::NotFound("Student"));
        }

        tracing::info!(student_id = %student_id, "Student deleted");
        Ok(())
    }
}

fn numeric_grade(grade: String) -> AppResult<String> {
    if parse_grade(&grade).is_none() {
        return Err(AppError::Validation(format!(
            "`Grade` must be a number, got {grade:?}"
        )));
    }
    Ok(grade)
}
