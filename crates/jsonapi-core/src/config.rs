//! Envelope configuration
//!
//! Configuration is read from `JSONAPI_`-prefixed environment variables when the
//! `config` feature is enabled:
//!
//! | Variable | Values | Default |
//! |----------|--------|---------|
//! | `JSONAPI_NO_CONTENT` | `envelope`, `empty` | `envelope` |
//! | `JSONAPI_ENV` | `production`/`prod`, `development`/`dev`, other | `development` |
//!
//! ```ignore
//! use jsonapi_core::{load_dotenv, EnvelopeConfig, Responder};
//!
//! load_dotenv();
//! let responder = Responder::new(EnvelopeConfig::from_env()?);
//! ```

use serde::Deserialize;
use std::fmt;

/// Prefix shared by every configuration variable.
pub const ENV_PREFIX: &str = "JSONAPI_";

/// What a 204 No Content response carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoContentPolicy {
    /// Emit the usual `{message, data}` envelope, like every other status.
    #[default]
    Envelope,
    /// Emit no body and no `Content-Type`.
    Empty,
}

impl NoContentPolicy {
    /// Read the policy from `JSONAPI_NO_CONTENT`.
    ///
    /// Unset means [`NoContentPolicy::Envelope`]. An unknown value is logged
    /// and also falls back to `Envelope`; use
    /// [`EnvelopeConfig::from_env`] to reject it instead.
    pub fn current() -> Self {
        let Ok(value) = std::env::var("JSONAPI_NO_CONTENT") else {
            return Self::default();
        };
        Self::parse(&value).unwrap_or_else(|| {
            tracing::warn!(value = %value, "unknown JSONAPI_NO_CONTENT, keeping envelope bodies");
            Self::default()
        })
    }

    fn parse(value: &str) -> Option<Self> {
        match value {
            "envelope" => Some(Self::Envelope),
            "empty" => Some(Self::Empty),
            _ => None,
        }
    }
}

/// Deployment environment, detected from `JSONAPI_ENV`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    /// Verbose errors and debug logging.
    Development,
    /// Error details are masked.
    Production,
    /// Any other name; behaves like a non-production environment.
    Custom(String),
}

impl Environment {
    /// Detect the current environment from `JSONAPI_ENV`.
    ///
    /// Unset means development.
    pub fn current() -> Self {
        match std::env::var("JSONAPI_ENV") {
            Ok(name) => Self::parse(&name),
            Err(_) => Self::Development,
        }
    }

    fn parse(name: &str) -> Self {
        match name {
            "production" | "prod" => Self::Production,
            "development" | "dev" => Self::Development,
            other => Self::Custom(other.to_string()),
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Development => "development",
            Self::Production => "production",
            Self::Custom(name) => name,
        }
    }

    /// Whether fault details may be included in a 500 envelope message.
    pub fn show_error_details(&self) -> bool {
        !self.is_production()
    }

    /// Default log level for this environment.
    pub fn default_log_level(&self) -> &'static str {
        match self {
            Self::Development => "debug",
            Self::Production | Self::Custom(_) => "info",
        }
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::current()
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Settings shared by every envelope a [`Responder`](crate::Responder) emits.
///
/// [`Default`] reads `JSONAPI_NO_CONTENT` and `JSONAPI_ENV`, falling back on
/// unset or malformed values, so a default responder honours the deployment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvelopeConfig {
    /// What a 204 carries
    pub no_content: NoContentPolicy,
    /// Controls 500 message masking
    pub environment: Environment,
}

impl Default for EnvelopeConfig {
    fn default() -> Self {
        Self::current()
    }
}

impl EnvelopeConfig {
    /// Read the configuration from the environment without failing.
    pub fn current() -> Self {
        Self {
            no_content: NoContentPolicy::current(),
            environment: Environment::current(),
        }
    }

    /// Set the 204 policy.
    pub fn no_content(mut self, policy: NoContentPolicy) -> Self {
        self.no_content = policy;
        self
    }

    /// Set the environment.
    pub fn environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }
}

#[cfg(feature = "config")]
pub use self::env::{load_dotenv, load_dotenv_from, ConfigError};

#[cfg(feature = "config")]
mod env {
    use super::{EnvelopeConfig, Environment, NoContentPolicy, ENV_PREFIX};
    use serde::Deserialize;
    use thiserror::Error;

    /// Error loading configuration from the environment.
    #[derive(Debug, Error)]
    pub enum ConfigError {
        #[error("configuration error: {0}")]
        Env(#[from] envy::Error),
    }

    #[derive(Debug, Default, Deserialize)]
    #[serde(default)]
    struct RawConfig {
        no_content: NoContentPolicy,
        env: Option<String>,
    }

    impl EnvelopeConfig {
        /// Load configuration from `JSONAPI_`-prefixed environment variables.
        ///
        /// Unset variables fall back to their defaults; malformed ones are an
        /// error rather than being ignored.
        pub fn from_env() -> Result<Self, ConfigError> {
            let raw: RawConfig = envy::prefixed(ENV_PREFIX).from_env()?;
            let config = Self {
                no_content: raw.no_content,
                environment: raw
                    .env
                    .as_deref()
                    .map(Environment::parse)
                    .unwrap_or(Environment::Development),
            };
            tracing::debug!(
                no_content = ?config.no_content,
                environment = %config.environment,
                "loaded envelope configuration"
            );
            Ok(config)
        }
    }

    /// Load a `.env` file from the current directory.
    ///
    /// Missing files are ignored and existing variables are never overridden.
    pub fn load_dotenv() {
        let _ = dotenvy::dotenv();
    }

    /// Load environment variables from a specific file.
    pub fn load_dotenv_from<P: AsRef<std::path::Path>>(path: P) {
        let _ = dotenvy::from_path(path);
    }
}
