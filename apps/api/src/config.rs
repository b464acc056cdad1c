use std::path::PathBuf;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Everything has a sensible local default; nothing is required.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding `model.json` and `scaler.json`.
    pub model_dir: PathBuf,
    /// Frontend origin allowed by CORS.
    pub allowed_origin: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            model_dir: std::env::var("MODEL_DIR")
                .unwrap_or_else(|_| "model".to_string())
                .into(),
            allowed_origin: std::env::var("ALLOWED_ORIGIN")
                .unwrap_or_else(|_| "http://localhost:3000".to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}
