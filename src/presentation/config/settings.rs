use std::time::Duration;

use serde::Deserialize;

/// Runtime configuration, read once at startup.
///
/// Both provider api keys are required; startup fails fast without them.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub deepgram: DeepgramSettings,
    pub gemini: GeminiSettings,
    pub storage: StorageSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DeepgramSettings {
    pub api_key: String,
    pub base_url: Option<String>,
    pub model: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeminiSettings {
    pub api_key: String,
    pub base_url: Option<String>,
    pub model: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageSettings {
    pub upload_dir: String,
    pub max_upload_mb: usize,
    pub request_timeout_secs: u64,
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("missing required environment variable: {0}")]
    MissingVar(&'static str),
    #[error("invalid value for {0}: {1}")]
    InvalidVar(&'static str, String),
}

impl Settings {
    pub fn from_env() -> Result<Self, SettingsError> {
        Ok(Self {
            server: ServerSettings {
                host: env_or("SERVER_HOST", "0.0.0.0"),
                port: parse_env("SERVER_PORT", 3333)?,
            },
            deepgram: DeepgramSettings {
                api_key: required_env("DEEPGRAM_API_KEY")?,
                base_url: std::env::var("DEEPGRAM_BASE_URL").ok(),
                model: std::env::var("DEEPGRAM_MODEL").ok(),
            },
            gemini: GeminiSettings {
                api_key: required_env("GEMINI_API_KEY")?,
                base_url: std::env::var("GEMINI_BASE_URL").ok(),
                model: std::env::var("GEMINI_MODEL").ok(),
            },
            storage: StorageSettings {
                upload_dir: env_or("UPLOAD_DIR", "uploads"),
                max_upload_mb: parse_env("MAX_UPLOAD_MB", 100)?,
                request_timeout_secs: parse_env("PROVIDER_TIMEOUT_SECS", 300)?,
            },
        })
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.storage.request_timeout_secs)
    }

    pub fn max_upload_bytes(&self) -> usize {
        self.storage.max_upload_mb * 1024 * 1024
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn required_env(key: &'static str) -> Result<String, SettingsError> {
    std::env::var(key)
        .ok()
        .filter(|v| !v.is_empty())
        .ok_or(SettingsError::MissingVar(key))
}

fn parse_env<T: std::str::FromStr>(key: &'static str, default: T) -> Result<T, SettingsError> {
    match std::env::var(key) {
        Ok(v) => v
            .parse()
            .map_err(|_| SettingsError::InvalidVar(key, v)),
        Err(_) => Ok(default),
    }
}
