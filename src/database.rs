use anyhow::{Context, Result};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;

/// Connects to the record store and brings the schema up to date.
pub async fn connect_database(database_url: &str) -> Result<DatabaseConnection> {
    let mut options = ConnectOptions::new(database_url.to_owned());
    options
        .connect_timeout(Duration::from_secs(10))
        .sqlx_logging(false);

    // Every SQLite in-memory connection opens its own empty database
    if is_in_memory(database_url) {
        options.max_connections(1).min_connections(1);
    } else {
        options.max_connections(10);
    }

    let db = Database::connect(options)
        .await
        .context("Failed to connect to database")?;

    Migrator::up(&db, None)
        .await
        .context("Failed to run database migrations")?;

    tracing::info!("Database connected and migrated");
    Ok(db)
}

fn is_in_memory(database_url: &str) -> bool {
    database_url.starts_with("sqlite") && database_url.contains("memory")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_memory_detection() {
        assert!(is_in_memory("sqlite::memory:"));
        assert!(is_in_memory("sqlite://file?mode=memory"));
        assert!(!is_in_memory("sqlite://student_management.db?mode=rwc"));
        assert!(!is_in_memory("postgres://localhost/memory"));
    }

    #[tokio::test]
    async fn test_connect_in_memory_runs_migrations() {
        use sea_orm::EntityTrait;

        let db = connect_database("sqlite::memory:").await.unwrap();
        let subjects = crate::entities::subject::Entity::find()
            .all(&db)
            .await
            .unwrap();
        assert!(subjects.is_empty());
    }
}
