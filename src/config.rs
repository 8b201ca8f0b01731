//! Environment configuration.

use crate::error::ConfigError;
use std::path::PathBuf;

/// Runtime configuration read from the environment.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    /// `APP_ENV=production` switches the CORS policy and the on-disk layout.
    pub production: bool,
    /// Comma-separated allow-list from `CORS_ORIGINS`. Only honored in
    /// production; development allows any origin.
    pub cors_origins: Vec<String>,
    pub data_dir: PathBuf,
    pub upload_dir: PathBuf,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let production = std::env::var("APP_ENV")
            .map(|v| v == "production")
            .unwrap_or(false);
        let port = match std::env::var("PORT") {
            Ok(v) => v
                .parse()
                .map_err(|_| ConfigError::Invalid { name: "PORT", value: v })?,
            Err(_) => 4000,
        };
        let cors_origins = std::env::var("CORS_ORIGINS")
            .map(|v| {
                v.split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect()
            })
            .unwrap_or_default();
        Ok(AppConfig {
            port,
            production,
            cors_origins,
            data_dir: dir_from_env("DATA_DIR", production, "data"),
            upload_dir: dir_from_env("UPLOAD_DIR", production, "uploads"),
        })
    }

    /// Path of the JSON document inside the data directory.
    pub fn data_file(&self) -> PathBuf {
        self.data_dir.join("db.json")
    }
}

/// Explicit override wins; otherwise `<default>` in production and
/// `.dev/<default>` in development.
fn dir_from_env(name: &str, production: bool, default: &str) -> PathBuf {
    match std::env::var(name) {
        Ok(v) if !v.is_empty() => PathBuf::from(v),
        _ => {
            if production {
                PathBuf::from(default)
            } else {
                PathBuf::from(".dev").join(default)
            }
        }
    }
}
