//! Client configuration

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use thiserror::Error;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_TOKEN_FILE: &str = ".kino/token.json";

pub const ENV_BASE_URL: &str = "KINO_API_BASE_URL";
pub const ENV_BACKEND: &str = "KINO_BACKEND";
pub const ENV_TIMEOUT: &str = "KINO_TIMEOUT_SECS";
pub const ENV_TOKEN_FILE: &str = "KINO_TOKEN_FILE";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("base url must not be empty")]
    EmptyBaseUrl,
    #[error("base url must use http:// or https:// and include a host: {0}")]
    InvalidBaseUrl(String),
    #[error("unknown backend variant: {0} (expected kinosub or legacy)")]
    UnknownBackend(String),
    #[error("timeout must be a positive number of seconds: {0}")]
    InvalidTimeout(String),
}

/// Server API variant.
///
/// Two deployments exist that disagree on auth endpoint names and on how the
/// profile encodes the admin role. They are never mixed within one client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Backend {
    /// `/auth/token`, `/auth/me`, `role` string
    #[default]
    KinoSub,
    /// `/token`, `/users/me`, `is_admin` flag
    Legacy,
}

impl Backend {
    pub fn token_path(self) -> &'static str {
        match self {
            Self::KinoSub => "/auth/token",
            Self::Legacy => "/token",
        }
    }

    pub fn profile_path(self) -> &'static str {
        match self {
            Self::KinoSub => "/auth/me",
            Self::Legacy => "/users/me",
        }
    }
}

impl FromStr for Backend {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "kinosub" | "default" => Ok(Self::KinoSub),
            "legacy" => Ok(Self::Legacy),
            other => Err(ConfigError::UnknownBackend(other.to_string())),
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::KinoSub => f.write_str("kinosub"),
            Self::Legacy => f.write_str("legacy"),
        }
    }
}

/// Client configuration for connecting to the KinoSub API
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Server base URL (e.g., "http://localhost:8000"), no trailing slash
    pub base_url: String,

    /// Which endpoint naming the server uses
    pub backend: Backend,

    /// Request timeout in seconds
    pub timeout: u64,

    /// Where the bearer token is persisted between runs
    pub token_file: PathBuf,
}

impl ClientConfig {
    /// Create a configuration for the given server
    pub fn new(base_url: impl AsRef<str>) -> Result<Self, ConfigError> {
        Ok(Self {
            base_url: normalize_base_url(base_url.as_ref())?,
            backend: Backend::default(),
            timeout: DEFAULT_TIMEOUT_SECS,
            token_file: PathBuf::from(DEFAULT_TOKEN_FILE),
        })
    }

    /// Read configuration from `KINO_*` environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let mut config =
            Self::new(non_empty(ENV_BASE_URL).unwrap_or_else(|| DEFAULT_BASE_URL.to_string()))?;
        if let Some(backend) = non_empty(ENV_BACKEND) {
            config.backend = backend.parse()?;
        }
        if let Some(timeout) = non_empty(ENV_TIMEOUT) {
            config.timeout = parse_timeout(&timeout)?;
        }
        if let Some(path) = non_empty(ENV_TOKEN_FILE) {
            config.token_file = PathBuf::from(path);
        }
        Ok(config)
    }

    /// Set the server base URL
    pub fn with_base_url(mut self, base_url: impl AsRef<str>) -> Result<Self, ConfigError> {
        self.base_url = normalize_base_url(base_url.as_ref())?;
        Ok(self)
    }

    /// Set the backend variant
    pub fn with_backend(mut self, backend: Backend) -> Self {
        self.backend = backend;
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds.max(1);
        self
    }

    /// Set the token file location
    pub fn with_token_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.token_file = path.into();
        self
    }

    /// Create an HTTP client from this configuration
    pub fn build_http_client(&self) -> crate::ClientResult<crate::NetworkHttpClient> {
        crate::NetworkHttpClient::new(self)
    }
}

fn parse_timeout(raw: &str) -> Result<u64, ConfigError> {
    match raw.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(secs),
        _ => Err(ConfigError::InvalidTimeout(raw.to_string())),
    }
}

/// Trim and validate a base URL, dropping any trailing slash
pub fn normalize_base_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Err(ConfigError::EmptyBaseUrl);
    }
    let Some((scheme, remainder)) = trimmed.split_once("://") else {
        return Err(ConfigError::InvalidBaseUrl(trimmed.to_string()));
    };
    if !(scheme == "http" || scheme == "https")
        || remainder.trim().is_empty()
        || remainder.starts_with('/')
    {
        return Err(ConfigError::InvalidBaseUrl(trimmed.to_string()));
    }
    Ok(trimmed.to_string())
}
