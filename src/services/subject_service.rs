use sea_orm::DatabaseConnection;
use uuid::Uuid;

use super::{non_blank, required};
use crate::entities::subject;
use crate::error::{AppError, AppResult};
use crate::repositories::{SubjectRepository, SubjectUpdate};

/// Subject fields as submitted by a client; absent fields are `None`.
#[derive(Debug, Clone, Default)]
pub struct SubjectFields {
    pub subject_key: Option<String>,
    pub subject_name: Option<String>,
}

pub struct SubjectService {
    repo: SubjectRepository,
}

impl SubjectService {
    pub fn new(db: &DatabaseConnection) -> Self {
        Self {
            repo: SubjectRepository::new(db),
        }
    }

    pub async fn list(&self) -> AppResult<Vec<subject::Model>> {
        Ok(self.repo.find_all().await?)
    }

    pub async fn get(&self, subject_id: Uuid) -> AppResult<subject::Model> {
        self.repo
            .find_by_id(subject_id)
            .await?
            .ok_or(AppError::NotFound("Subject"))
    }

    pub async fn create(&self, fields: SubjectFields) -> AppResult<subject::Model> {
        let subject_key = required(fields.subject_key, "Subject_key")?;
        let subject_name = required(fields.subject_name, "Subject_name")?;

        let subject = self
            .repo
            .create(Uuid::new_v4(), subject_key, subject_name)
            .await?;

        tracing::info!(subject_id = %subject.subject_id, subject_key = %subject.subject_key, "Subject created");
        Ok(subject)
    }

    pub async fn update(&self, subject_id: Uuid, fields: SubjectFields) -> AppResult<subject::Model> {
        let updates = SubjectUpdate {
            subject_key: non_blank(fields.subject_key, "Subject_key")?,
            subject_name: non_blank(fields.subject_name, "Subject_name")?,
        };

        self.repo
            .update(subject_id, updates)
            .await?
            .ok_or(AppError::NotFound("Subject"))
    }

    /// Students that reference the subject's key are left untouched.
    pub async fn delete(&self, subject_id: Uuid) -> AppResult<()> {
        if !self.repo.delete(subject_id).await? {
            return Err(AppError::NotFound("Subject"));
        }

        tracing::info!(subject_id = %subject_id, "Subject deleted");
        Ok(())
    }
}
