use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::common::constants::{
    FILMS_API_ADDRESS, FILMS_URL_ENV, PLANETS_API_ADDRESS, PLANETS_URL_ENV, TIMEOUT_SECONDS_ENV,
    USER_AGENT,
};
use crate::common::error::{CatalogError, Result};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub http: HttpConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub planets_url: String,
    pub films_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            planets_url: PLANETS_API_ADDRESS.to_string(),
            films_url: FILMS_API_ADDRESS.to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// No timeout when unset
    pub timeout_seconds: Option<u64>,
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: None,
            user_agent: USER_AGENT.to_string(),
        }
    }
}

impl HttpConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_seconds.map(Duration::from_secs)
    }
}

impl Config {
    /// Load `path` (defaults when the file does not exist), then apply
    /// `.env` and environment overrides.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        dotenv::dotenv().ok();

        let mut config = Self::from_file(path)?;
        config.apply_overrides(|key| std::env::var(key).ok())?;
        config.normalize();
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let config_content = fs::read_to_string(path)?;
        Self::from_toml(&config_content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let mut config: Config = toml::from_str(content)?;
        config.normalize();
        Ok(config)
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<()> {
        if let Some(url) = lookup(PLANETS_URL_ENV) {
            self.api.planets_url = url;
        }
        if let Some(url) = lookup(FILMS_URL_ENV) {
            self.api.films_url = url;
        }
        if let Some(raw) = lookup(TIMEOUT_SECONDS_ENV) {
            let secs = raw.trim().parse::<u64>().map_err(|e| {
                CatalogError::Config(format!("{} must be a whole number of seconds: {}", TIMEOUT_SECONDS_ENV, e))
            })?;
            self.http.timeout_seconds = Some(secs);
        }
        Ok(())
    }

    /// Base addresses must end in `/` for cache keys to match planet URLs
    fn normalize(&mut self) {
        for url in [&mut self.api.planets_url, &mut self.api.films_url] {
            if !url.ends_with('/') {
                url.push('/');
            }
        }
    }
}
