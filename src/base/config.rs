//! Load configuration via `config` crate with env-override support.

use std::{collections::HashMap, ops::Deref, path::Path, sync::Arc};

use reqwest::Url;
use serde::Deserialize;

use super::{error::ConfigError, verdicts};

/// Default Practicum homework statuses endpoint.
fn default_endpoint() -> String {
    "https://practicum.yandex.ru/api/user_api/homework_statuses/".to_string()
}

/// Default pause between poll cycles, in seconds.
fn default_retry_period_secs() -> u64 {
    600
}

/// Default timeout for a single API request, in seconds.
fn default_request_timeout_secs() -> u64 {
    30
}

/// Default status-to-verdict table.
fn default_homework_verdicts() -> HashMap<String, String> {
    verdicts::default_verdicts()
}

/// Configuration for the homework-bot application.
#[derive(Debug, Clone)]
pub struct Config {
    pub inner: Arc<ConfigInner>,
}

impl Deref for Config {
    type Target = ConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ConfigInner {
    /// Practicum API OAuth token (`PRACTICUM_TOKEN`).
    #[serde(default)]
    pub practicum_token: String,
    /// Telegram bot token (`TELEGRAM_TOKEN`).
    #[serde(default)]
    pub telegram_token: String,
    /// Destination Telegram chat id (`TELEGRAM_CHAT_ID`).
    #[serde(default)]
    pub telegram_chat_id: String,
    /// Homework statuses endpoint (`ENDPOINT`).
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Seconds to sleep between poll cycles (`RETRY_PERIOD_SECS`).
    #[serde(default = "default_retry_period_secs")]
    pub retry_period_secs: u64,
    /// Timeout for one API request in seconds (`REQUEST_TIMEOUT_SECS`).
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    /// Reject API payloads without `current_date` (`STRICT_CURRENT_DATE`).
    #[serde(default)]
    pub strict_current_date: bool,
    /// Optional Telegram Bot API base URL override (`TELEGRAM_API_URL`).
    #[serde(default)]
    pub telegram_api_url: Option<String>,
    /// Status key to verdict text; only settable from the config file.
    #[serde(default = "default_homework_verdicts")]
    pub homework_verdicts: HashMap<String, String>,
}

impl Default for ConfigInner {
    fn default() -> Self {
        Self {
            practicum_token: String::new(),
            telegram_token: String::new(),
            telegram_chat_id: String::new(),
            endpoint: default_endpoint(),
            retry_period_secs: default_retry_period_secs(),
            request_timeout_secs: default_request_timeout_secs(),
            strict_current_date: false,
            telegram_api_url: None,
            homework_verdicts: default_homework_verdicts(),
        }
    }
}

impl Config {
    /// Loads the config file (explicit path, else `.hidden/config.toml` if present), then
    /// overrides it with environment variables, and validates the result.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut cfg = config::Config::builder();

        if let Some(p) = explicit_path {
            cfg = cfg.add_source(config::File::from(p.to_path_buf()));
        } else if Path::new(".hidden/config.toml").exists() {
            cfg = cfg.add_source(config::File::with_name(".hidden/config.toml"));
        }

        cfg = cfg.add_source(config::Environment::default());

        Self::new(cfg.build()?.try_deserialize()?)
    }

    /// Validates an already deserialized configuration.
    pub fn new(inner: ConfigInner) -> Result<Self, ConfigError> {
        let result = Config { inner: Arc::new(inner) };

        if result.practicum_token.trim().is_empty() {
            return Err(ConfigError::Missing("PRACTICUM_TOKEN"));
        }

        if result.telegram_token.trim().is_empty() {
            return Err(ConfigError::Missing("TELEGRAM_TOKEN"));
        }

        if result.telegram_chat_id.trim().is_empty() {
            return Err(ConfigError::Missing("TELEGRAM_CHAT_ID"));
        }

        result.chat_id()?;

        if result.endpoint.trim().is_empty() {
            return Err(ConfigError::Missing("ENDPOINT"));
        }

        Url::parse(&result.endpoint).map_err(|e| ConfigError::invalid("ENDPOINT", e.to_string()))?;

        if let Some(url) = &result.telegram_api_url {
            Url::parse(url).map_err(|e| ConfigError::invalid("TELEGRAM_API_URL", e.to_string()))?;
        }

        if result.retry_period_secs == 0 {
            return Err(ConfigError::invalid("RETRY_PERIOD_SECS", "must be at least 1 second"));
        }

        if result.request_timeout_secs == 0 {
            return Err(ConfigError::invalid("REQUEST_TIMEOUT_SECS", "must be at least 1 second"));
        }

        if result.homework_verdicts.is_empty() {
            return Err(ConfigError::invalid("homework_verdicts", "at least one status verdict is required"));
        }

        Ok(result)
    }

    /// The destination chat id as Telegram expects it.
    pub fn chat_id(&self) -> Result<i64, ConfigError> {
        self.telegram_chat_id
            .trim()
            .parse()
            .map_err(|_| ConfigError::invalid("TELEGRAM_CHAT_ID", format!("`{}` is not an integer chat id", self.telegram_chat_id)))
    }
}

// Tests.
