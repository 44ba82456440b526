use serde::Deserialize;
use std::env;
use std::path::PathBuf;

use crate::infrastructure::repositories::OMDB_DEFAULT_BASE_URL;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub log_format: LogFormat,
    // OMDb
    pub omdb_api_key: String,
    pub omdb_base_url: String,
    // Favorites location, defaults to the per-user profile directory
    pub profile_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

impl Config {
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        dotenvy::dotenv().ok();

        let omdb_api_key = env::var("OMDB_API_KEY")?;
        if omdb_api_key.trim().is_empty() {
            return Err("OMDB_API_KEY must not be empty".into());
        }

        let config = Config {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()?,
            log_format: env::var("LOG_FORMAT")
                .unwrap_or_else(|_| "pretty".to_string())
                .parse::<String>()
                .map(|s| match s.as_str() {
                    "json" => LogFormat::Json,
                    _ => LogFormat::Pretty,
                })?,
            omdb_api_key,
            omdb_base_url: env::var("OMDB_BASE_URL")
                .unwrap_or_else(|_| OMDB_DEFAULT_BASE_URL.to_string()),
            profile_dir: env::var("PROFILE_DIR")
                .ok()
                .filter(|dir| !dir.trim().is_empty())
                .map(PathBuf::from),
        };

        Ok(config)
    }
}
