//! Application configuration.
//!
//! Values come from `MUSE_*` environment variables and can be overridden
//! with the builder methods.
//!
//! # Example
//!
//! ```ignore
//! use mentalmuse::config::{AppConfig, ClassifierKind};
//!
//! let config = AppConfig::from_env()
//!     .with_port(8080)
//!     .with_classifier(ClassifierKind::Signal);
//! ```

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::client::DEFAULT_API_URL;
use crate::error::StorageError;
use crate::session::DEFAULT_ONBOARDING_EXPIRY_DAYS;
use crate::storage::default_data_dir;

pub const ENV_DATA_DIR: &str = "MUSE_DATA_DIR";
pub const ENV_PORT: &str = "MUSE_PORT";
pub const ENV_API_URL: &str = "MUSE_API_URL";
pub const ENV_CLASSIFIER: &str = "MUSE_CLASSIFIER";
pub const ENV_JWT_SECRET: &str = "MUSE_JWT_SECRET";
pub const ENV_ONBOARDING_EXPIRY_DAYS: &str = "MUSE_ONBOARDING_EXPIRY_DAYS";

pub const DEFAULT_PORT: u16 = 5000;

/// Secret used when `MUSE_JWT_SECRET` is unset. Only fit for local use.
pub const DEV_JWT_SECRET: &str = "mentalmuse-dev-secret";

/// Which mood classifier backs the analysis endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClassifierKind {
    #[default]
    Stub,
    Signal,
}

impl fmt::Display for ClassifierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClassifierKind::Stub => f.write_str("stub"),
            ClassifierKind::Signal => f.write_str("signal"),
        }
    }
}

impl FromStr for ClassifierKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "stub" => Ok(ClassifierKind::Stub),
            "signal" => Ok(ClassifierKind::Signal),
            other => Err(format!("unknown classifier '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Data directory override (default `~/.mentalmuse`)
    pub data_dir: Option<PathBuf>,
    /// Port the API server binds (default: 5000)
    pub port: u16,
    /// Base URL the client talks to
    pub api_url: String,
    pub classifier: ClassifierKind,
    pub jwt_secret: String,
    /// Days before completed onboarding must be repeated
    pub onboarding_expiry_days: i64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            port: DEFAULT_PORT,
            api_url: DEFAULT_API_URL.to_string(),
            classifier: ClassifierKind::default(),
            jwt_secret: DEV_JWT_SECRET.to_string(),
            onboarding_expiry_days: DEFAULT_ONBOARDING_EXPIRY_DAYS,
        }
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = Some(dir.into());
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = url.into();
        self
    }

    pub fn with_classifier(mut self, classifier: ClassifierKind) -> Self {
        self.classifier = classifier;
        self
    }

    pub fn with_jwt_secret(mut self, secret: impl Into<String>) -> Self {
        self.jwt_secret = secret.into();
        self
    }

    pub fn with_onboarding_expiry_days(mut self, days: i64) -> Self {
        self.onboarding_expiry_days = days;
        self
    }

    /// Build a config from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any variable source. Unparseable values are
    /// logged and replaced by their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        let var = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        if let Some(dir) = var(ENV_DATA_DIR) {
            config.data_dir = Some(PathBuf::from(dir));
        }
        if let Some(port) = var(ENV_PORT) {
            config.port = parse_or_default(ENV_PORT, &port, DEFAULT_PORT);
        }
        if let Some(url) = var(ENV_API_URL) {
            config.api_url = url.trim_end_matches('/').to_string();
        }
        if let Some(kind) = var(ENV_CLASSIFIER) {
            config.classifier = parse_or_default(ENV_CLASSIFIER, &kind, ClassifierKind::default());
        }
        if let Some(secret) = var(ENV_JWT_SECRET) {
            config.jwt_secret = secret;
        }
        if let Some(days) = var(ENV_ONBOARDING_EXPIRY_DAYS) {
            let parsed = parse_or_default(
                ENV_ONBOARDING_EXPIRY_DAYS,
                &days,
                DEFAULT_ONBOARDING_EXPIRY_DAYS,
            );
            config.onboarding_expiry_days = if parsed > 0 {
                parsed
            } else {
                tracing::warn!(
                    var = ENV_ONBOARDING_EXPIRY_DAYS,
                    value = %days,
                    "expiry must be positive, using default"
                );
                DEFAULT_ONBOARDING_EXPIRY_DAYS
            };
        }
        config
    }

    /// The configured data directory, or `~/.mentalmuse`.
    pub fn data_dir(&self) -> Result<PathBuf, StorageError> {
        match self.data_dir {
            Some(ref dir) => Ok(dir.clone()),
            None => default_data_dir(),
        }
    }

    pub fn uses_dev_secret(&self) -> bool {
        self.jwt_secret == DEV_JWT_SECRET
    }
}

fn parse_or_default<T>(key: &str, value: &str, default: T) -> T
where
    T: FromStr + fmt::Display,
    T::Err: fmt::Display,
{
    match value.parse() {
        Ok(parsed) => parsed,
        Err(e) => {
            tracing::warn!(var = key, %value, error = %e, fallback = %default, "invalid config value");
            default
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_lookup(lookup(&[]));
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.port, 5000);
        assert_eq!(config.api_url, "http://localhost:5000/api");
        assert_eq!(config.onboarding_expiry_days, 30);
        assert!(config.uses_dev_secret());
    }

    #[test]
    fn test_reads_all_vars() {
        let config = AppConfig::from_lookup(lookup(&[
            (ENV_DATA_DIR, "/tmp/muse"),
            (ENV_PORT, "8080"),
            (ENV_API_URL, "http://example.com/api/"),
            (ENV_CLASSIFIER, "Signal"),
            (ENV_JWT_SECRET, "s3cret"),
            (ENV_ONBOARDING_EXPIRY_DAYS, "7"),
        ]));
        assert_eq!(config.data_dir().unwrap(), PathBuf::from("/tmp/muse"));
        assert_eq!(config.port, 8080);
        assert_eq!(config.api_url, "http://example.com/api");
        assert_eq!(config.classifier, ClassifierKind::Signal);
        assert_eq!(config.jwt_secret, "s3cret");
        assert_eq!(config.onboarding_expiry_days, 7);
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = AppConfig::from_lookup(lookup(&[
            (ENV_PORT, "not-a-port"),
            (ENV_CLASSIFIER, "neural"),
            (ENV_ONBOARDING_EXPIRY_DAYS, "-3"),
        ]));
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.classifier, ClassifierKind::Stub);
        assert_eq!(config.onboarding_expiry_days, DEFAULT_ONBOARDING_EXPIRY_DAYS);
    }

    #[test]
    fn test_builder_overrides() {
        let config = AppConfig::new()
            .with_port(0)
            .with_classifier(ClassifierKind::Signal)
            .with_onboarding_expiry_days(1);
        assert_eq!(config.port, 0);
        assert_eq!(config.classifier.to_string(), "signal");
        assert_eq!(config.onboarding_expiry_days, 1);
    }
}
