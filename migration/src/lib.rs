pub use sea_orm_migration::prelude::*;

mod m20251020_000001_create_table_subject;
mod m20251020_000002_create_table_student;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251020_000001_create_table_subject::Migration),
            Box::new(m20251020_000002_create_table_student::Migration),
        ]
    }
}
