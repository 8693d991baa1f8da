//! Typed configuration from environment variables.
//!
//! Loads once at startup, fails fast if required vars are missing or blank.
//! Every missing name is reported in one error so the operator can fix the
//! environment in a single pass. Sensitive values are wrapped in
//! secrecy::SecretString to prevent log leaks.

pub mod env_file;
pub mod report;
pub mod secrets;
pub mod template;

use crate::error::{Error, Result};
use secrecy::{ExposeSecret, SecretString};

/// Credential for the generative-AI service.
pub const GOOGLE_API_KEY: &str = "GOOGLE_API_KEY";
/// MongoDB connection string, passed through unparsed.
pub const MONGO_URI: &str = "MONGO_URI";
/// Logical MongoDB database name.
pub const MONGO_DB_NAME: &str = "MONGO_DB_NAME";
/// Optional OTLP endpoint for traces, metrics and logs.
pub const OTEL_ENDPOINT: &str = "OTEL_ENDPOINT";
/// Optional fallback log filter, used when `RUST_LOG` is unset.
pub const LOG_LEVEL: &str = "LOG_LEVEL";

/// Required variables, in the order they are reported.
pub const REQUIRED_VARS: [&str; 3] = [GOOGLE_API_KEY, MONGO_URI, MONGO_DB_NAME];

pub(crate) const DEFAULT_LOG_LEVEL: &str = "info";

/// Immutable startup configuration.
///
/// Share across threads as `Arc<Config>`.
#[derive(Debug)]
pub struct Config {
    google_api_key: SecretString,
    mongo_uri: SecretString,
    mongo_db_name: String,
    otel_endpoint: Option<String>,
    log_level: String,
}

impl Config {
    /// Load configuration from the process environment.
    ///
    /// In local dev, call [`env_file::load_env_file`] before this.
    /// In production, the service manager provides the vars.
    pub fn load() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Validate configuration against an arbitrary variable source.
    ///
    /// Values are kept verbatim. A value that is empty after trimming
    /// counts as missing.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut missing = Vec::new();
        let mut required = |name: &'static str| {
            let value = non_blank(lookup(name));
            if value.is_none() {
                missing.push(name);
            }
            value
        };

        let google_api_key = required(GOOGLE_API_KEY);
        let mongo_uri = required(MONGO_URI);
        let mongo_db_name = required(MONGO_DB_NAME);

        let (Some(google_api_key), Some(mongo_uri), Some(mongo_db_name)) =
            (google_api_key, mongo_uri, mongo_db_name)
        else {
            return Err(Error::MissingConfiguration { missing });
        };

        Ok(Self {
            google_api_key: SecretString::from(google_api_key),
            mongo_uri: SecretString::from(mongo_uri),
            mongo_db_name,
            otel_endpoint: non_blank(lookup(OTEL_ENDPOINT)),
            log_level: non_blank(lookup(LOG_LEVEL))
                .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
        })
    }

    pub fn google_api_key(&self) -> &SecretString {
        &self.google_api_key
    }

    /// The connection string. May embed credentials, so it stays secret.
    pub fn mongo_uri(&self) -> &SecretString {
        &self.mongo_uri
    }

    pub fn mongo_db_name(&self) -> &str {
        &self.mongo_db_name
    }

    pub fn otel_endpoint(&self) -> Option<&str> {
        self.otel_endpoint.as_deref()
    }

    pub fn log_level(&self) -> &str {
        &self.log_level
    }
}

impl PartialEq for Config {
    fn eq(&self, other: &Self) -> bool {
        self.google_api_key.expose_secret() == other.google_api_key.expose_secret()
            && self.mongo_uri.expose_secret() == other.mongo_uri.expose_secret()
            && self.mongo_db_name == other.mongo_db_name
            && self.otel_endpoint == other.otel_endpoint
            && self.log_level == other.log_level
    }
}

impl Eq for Config {}

/// `None` for unset, empty, or whitespace-only values.
pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
