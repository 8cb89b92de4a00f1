use clap::{ArgAction, Parser};
use once_cell::sync::Lazy;

pub const DEFAULT_CORS_ALLOWED_ORIGINS: &str =
    "http://localhost:3000,https://kavindasandaruwan-00.github.io";

/// Process-wide configuration, parsed from flags and environment on first use.
/// Only the binary touches this; library code takes `&Config`.
pub static APP_CONFIG: Lazy<Config> = Lazy::new(Config::parse);

#[derive(Debug, Parser, Clone)]
pub struct Config {
    #[clap(long, env, default_value_t = 8080)]
    pub port: u16,

    #[clap(long, env, default_value_t = true, action = ArgAction::Set)]
    pub swagger_enabled: bool,

    #[clap(long, env, default_value = "info")]
    pub log_level: String,

    #[clap(long, env, default_value = "sqlite://student_management.db?mode=rwc")]
    pub database_url: String,

    /// Comma-separated origin allow-list, or `*`
    #[clap(long, env, default_value = DEFAULT_CORS_ALLOWED_ORIGINS)]
    pub cors_allowed_origins: String,

    #[clap(long, env, default_value = "local")]
    pub app_env: String,
}
