use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, QueryOrder, Set,
};
use uuid::Uuid;
use crate::entities::subject;
use chrono::Utc;

pub struct SubjectRepository {
    db: DatabaseConnection,
}

impl SubjectRepository {
    pub fn new(db: &DatabaseConnection) -> Self {
        Self { db: db.clone() }
    }

    /// All subjects in insertion order. Rows created in the same instant are
    /// ordered by id so the sequence is stable between calls.
    pub async fn find_all(&self) -> Result<Vec<subject::Model>, DbErr> {
        subject::Entity::find()
            .order_by_asc(subject::Column::CreatedAt)
            .order_by_asc(subject::Column::SubjectId)
            .all(&self.db)
            .await
    }

    pub async fn find_by_id(&self, subject_id: Uuid) -> Result<Option<subject::Model>, DbErr> {
        subject::Entity::find_by_id(subject_id).one(&self.db).await
    }

    pub async fn create(
        &self,
        subject_id: Uuid,
        subject_key: String,
        subject_name: String,
    ) -> Result<subject::Model, DbErr> {
        let now = Utc::now().naive_utc();
        let subject_model = subject::ActiveModel {
            subject_id: Set(subject_id),
            subject_key: Set(subject_key),
            subject_name: Set(subject_name),
            created_at: Set(now),
            updated_at: Set(now),
        };

        subject_model.insert(&self.db).await
    }

    /// Applies the present fields. Returns `None` when the subject does not exist.
    pub async fn update(
        &self,
        subject_id: Uuid,
        updates: SubjectUpdate,
    ) -> Result<Option<subject::Model>, DbErr> {
        let Some(subject) = self.find_by_id(subject_id).await? else {
            return Ok(None);
        };

        self.apply_update(subject, updates).await
    }

    /// Writes `updates` over a previously loaded row. A row deleted since it
    /// was loaded yields `None`, the same as one that never existed.
    async fn apply_update(
        &self,
        subject: subject::Model,
        updates: SubjectUpdate,
    ) -> Result<Option<subject::Model>, DbErr> {
        let mut active_model: subject::ActiveModel = subject.into();

        if let Some(subject_key) = updates.subject_key {
            active_model.subject_key = Set(subject_key);
        }
        if let Some(subject_name) = updates.subject_name {
            active_model.subject_name = Set(subject_name);
        }

        active_model.updated_at = Set(Utc::now().naive_utc());

        match active_model.update(&self.db).await {
            Ok(result) => Ok(Some(result)),
            Err(DbErr::RecordNotUpdated) => Ok(None),
            Err(err) => Err(err),
        }
    }

    /// Returns whether a row was removed.
    pub async fn delete(&self, subject_id: Uuid) -> Result<bool, DbErr> {
        let result = subject::Entity::delete_by_id(subject_id)
            .exec(&self.db)
            .await?;
        Ok(result.rows_affected > 0)
    }
}

#[derive(Debug, Default)]
pub struct SubjectUpdate {
    pub subject_key: Option<String>,
    pub subject_name: Option<String>,
}
