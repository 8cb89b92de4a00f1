use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Subject::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Subject::SubjectId)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Subject::SubjectKey).string().not_null())
                    .col(ColumnDef::new(Subject::SubjectName).string().not_null())
                    .col(ColumnDef::new(Subject::CreatedAt).timestamp().not_null())
                    .col(ColumnDef::new(Subject::UpdatedAt).timestamp().not_null())
                    .to_owned(),
            )
            .await?;

        // Lookup index only: subject keys are not unique
        manager
            .create_index(
                Index::create()
                    .name("idx_subject_subject_key")
                    .table(Subject::Table)
                    .col(Subject::SubjectKey)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_subject_subject_key")
                    .table(Subject::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Subject::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Subject {
    Table,
    SubjectId,
    SubjectKey,
    SubjectName,
    CreatedAt,
    UpdatedAt,
}
