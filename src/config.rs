//! Host configuration loaded from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use client::config::ApiConfig;

const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT `{0}`")]
    InvalidPort(String),
}

/// Listen port plus the API location embedded in every rendered page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HostConfig {
    pub port: u16,
    pub api: ApiConfig,
}

impl HostConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. `PORT` defaults to 3000; a blank or missing
    /// `EMPLOYEE_API_BASE_URL` uses the client's default.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPort`] when `PORT` is set but not a port number.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };
        let api = ApiConfig::from_base_url(lookup("EMPLOYEE_API_BASE_URL").as_deref());
        Ok(Self { port, api })
    }
}
