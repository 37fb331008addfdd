//! Startup configuration gate
//!
//! Reads the project URL and access key once, validates them, and hands back a
//! [`BackendConfig`] for the host to pass to its client factory. Nothing here
//! is global; the host calls [`BackendConfig::from_env`] at startup and stops
//! if it returns an error.

use crate::constants::{ENV_ANON_KEY, ENV_URL};
use crate::models::AnonKey;
use crate::utils::ConfigError;
use url::Url;

/// Auth behavior requested from the client at construction time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClientOptions {
    /// Keep the session across reloads
    pub persist_session: bool,
    /// Renew the access token before it expires
    pub auto_refresh_token: bool,
    /// Pick up session tokens from the page URL on load
    pub detect_session_in_url: bool,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            persist_session: true,
            auto_refresh_token: true,
            detect_session_in_url: true,
        }
    }
}

/// Validated connection settings
#[derive(Debug, Clone)]
pub struct BackendConfig {
    pub url: Url,
    pub anon_key: AnonKey,
    pub options: ClientOptions,
}

impl BackendConfig {
    /// Validate explicit values
    ///
    /// Checks run in order: URL present, key present, URL well-formed.
    /// Empty or whitespace-only values count as missing. The key is moved
    /// into [`AnonKey`] without copying.
    pub fn new(url: Option<&str>, anon_key: Option<String>) -> Result<Self, ConfigError> {
        let url = non_empty(url).ok_or(ConfigError::MissingVar(ENV_URL))?;
        let anon_key = anon_key
            .filter(|k| !k.trim().is_empty())
            .map(AnonKey::new)
            .ok_or(ConfigError::MissingVar(ENV_ANON_KEY))?;

        let url = Url::parse(url).map_err(|source| ConfigError::InvalidUrl {
            var: ENV_URL,
            source,
        })?;

        Ok(Self {
            url,
            anon_key,
            options: ClientOptions::default(),
        })
    }

    /// Load from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load through an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let url = lookup(ENV_URL);
        let url = non_empty(url.as_deref()).ok_or(ConfigError::MissingVar(ENV_URL))?;
        Self::new(Some(url), lookup(ENV_ANON_KEY))
    }

    pub fn with_options(mut self, options: ClientOptions) -> Self {
        self.options = options;
        self
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
