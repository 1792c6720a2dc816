// src/config.rs
use std::env;

use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub provider_api_key: String,
    pub provider_base_url: String,
    pub provider_model: String,
    pub faculty_data: String,
    pub rooms_data: String,
}

impl Config {
    /// Read configuration from the environment. `GEMINI_API_KEY` is the
    /// only required variable; everything else has a default.
    pub fn from_env() -> Result<Self> {
        let port = match env::var("PORT") {
            Ok(v) => v.parse().context("PORT must be a valid port number")?,
            Err(_) => 3000,
        };

        Ok(Self {
            port,
            provider_api_key: env::var("GEMINI_API_KEY")
                .context("GEMINI_API_KEY is not set")?,
            provider_base_url: env::var("GEMINI_BASE_URL")
                .unwrap_or_else(|_| "https://generativelanguage.googleapis.com".to_string()),
            provider_model: env::var("GEMINI_MODEL")
                .unwrap_or_else(|_| "gemini-pro".to_string()),
            faculty_data: env::var("FACULTY_DATA")
                .unwrap_or_else(|_| "data/faculty.json".to_string()),
            rooms_data: env::var("ROOMS_DATA")
                .unwrap_or_else(|_| "data/rooms.json".to_string()),
        })
    }
}
