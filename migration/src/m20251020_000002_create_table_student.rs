use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // subject_key is a soft reference to subject.subject_key, no foreign key
        manager
            .create_table(
                Table::create()
                    .table(Student::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Student::StudentId)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Student::StudentKey).string().not_null())
                    .col(ColumnDef::new(Student::StudentName).string().not_null())
                    .col(ColumnDef::new(Student::SubjectKey).string().not_null())
                    .col(ColumnDef::new(Student::Grade).string().not_null())
                    .col(
                        ColumnDef::new(Student::Remarks)
                            .string()
                            .not_null()
                            .default(""),
                    )
                    .col(ColumnDef::new(Student::CreatedAt).timestamp().not_null())
                    .col(ColumnDef::new(Student::UpdatedAt).timestamp().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_student_subject_key")
                    .table(Student::Table)
                    .col(Student::SubjectKey)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_student_subject_key")
                    .table(Student::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Student::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Student {
    Table,
    StudentId,
    StudentKey,
    StudentName,
    SubjectKey,
    Grade,
    Remarks,
    CreatedAt,
    UpdatedAt,
}
