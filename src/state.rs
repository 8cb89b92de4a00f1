use sea_orm::DatabaseConnection;

/// Shared by every handler. Cloning is cheap: the connection is a pool handle.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub app_env: String,
}

impl AppState {
    pub fn new(db: DatabaseConnection, app_env: impl Into<String>) -> Self {
        Self {
            db,
            app_env: app_env.into(),
        }
    }
}
