use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Set,
};
use uuid::Uuid;
use crate::entities::student;
use chrono::Utc;

pub struct StudentRepository {
    db: DatabaseConnection,
}

impl StudentRepository {
    pub fn new(db: &DatabaseConnection) -> Self {
        Self { db: db.clone() }
    }

    /// All students in insertion order. Rows created in the same instant are
    /// ordered by id so the sequence is stable between calls.
    pub async fn find_all(&self) -> Result<Vec<student::Model>, DbErr> {
        student::Entity::find()
            .order_by_asc(student::Column::CreatedAt)
            .order_by_asc(student::Column::StudentId)
            .all(&self.db)
            .await
    }

    pub async fn find_by_id(&self, student_id: Uuid) -> Result<Option<student::Model>, DbErr> {
        student::Entity::find()
            .filter(student::Column::StudentId.eq(student_id))
            .one(&self.db)
            .await
    }

    pub async fn create(
        &self,
        student_id: Uuid,
        student: NewStudent,
    ) -> Result<student::Model, DbErr> {
        let now = Utc::now().naive_utc();
        let student_model = student::ActiveModel {
            student_id: Set(student_id),
            student_key: Set(student.student_key),
            student_name: Set(student.student_name),
            subject_key: Set(student.subject_key),
            grade: Set(student.grade),
            remarks: Set(student.remarks),
            created_at: Set(now),
            updated_at: Set(now),
        };

        student_model.insert(&self.db).await
    }

    /// Applies the present fields. Returns `None` when the student does not exist.
    pub async fn update(
        &self,
        student_id: Uuid,
        updates: StudentUpdate,
    ) -> Result<Option<student::Model>, DbErr> {
        let Some(student) = self.find_by_id(student_id).await? else {
            return Ok(None);
        };

        self.apply_update(student, updates).await
    }

    /// Writes `updates` over a previously loaded row. A row deleted since it
    /// was loaded yields `None`, the same as one that never existed.
    async fn apply_update(
        &self,
        student: student::Model,
        updates: StudentUpdate,
    ) -> Result<Option<student::Model>, DbErr> {
        let mut active_model: student::ActiveModel = student.into();

        if let Some(student_key) = updates.student_key {
            active_model.student_key = Set(student_key);
        }
        if let Some(student_name) = updates.student_name {
            active_model.student_name = Set(student_name);
        }
        if let Some(subject_key) = updates.subject_key {
            active_model.subject_key = Set(subject_key);
        }
        if let Some(grade) = updates.grade {
            active_model.grade = Set(grade);
        }
        if let Some(remarks) = updates.remarks {
            active_model.remarks = Set(remarks);
        }

        active_model.updated_at = Set(Utc::now().naive_utc());

        match active_model.update(&self.db).await {
            Ok(result) => Ok(Some(result)),
            Err(DbErr::RecordNotUpdated) => Ok(None),
            Err(err) => Err(err),
        }
    }

    /// Returns whether a row was removed.
    pub async fn delete(&self, student_id: Uuid) -> Result<bool, DbErr> {
        let result = student::Entity::delete_by_id(student_id)
            .exec(&self.db)
            .await?;
        Ok(result.rows_affected > 0)
    }
}

pub struct NewStudent {
    pub student_key: String,
    pub student_name: String,
    pub subject_key: String,
    pub grade: String,
    pub remarks: String,
}

#[derive(Debug, Default)]
pub struct StudentUpdate {
    pub student_key: Option<String>,
    pub student_name: Option<String>,
    pub subject_key: Option<String>,
    pub grade: Option<String>,
    pub remarks: Option<String>,
}
