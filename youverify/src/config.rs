//! Client configuration and environment selection

use std::env;
use std::fmt;
use std::time::Duration;

use http::HeaderName;
use strum::{Display, EnumString};
use thiserror::Error;
use tracing::Level;
use url::Url;

/// Base URL of the sandbox environment
pub const SANDBOX_BASE_URL: &str = "https://api.sandbox.youverify.co/v2/api/";
/// Base URL of the live environment
pub const PRODUCTION_BASE_URL: &str = "https://api.youverify.co/v2/api/";

/// Header carrying the secret token on every request
pub const DEFAULT_AUTH_HEADER: &str = "Token";

/// Default timeout for requests sent through the built-in transport
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Errors raised while reading configuration from the environment
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A required variable is not set
    #[error("{0} environment variable is not set")]
    Missing(&'static str),

    /// A variable is set to a value that cannot be used
    #[error("invalid value for {name}: {value}")]
    Invalid {
        /// Variable name
        name: &'static str,
        /// Offending value
        value: String,
    },
}

/// Youverify environment
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, EnumString, Display)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum Environment {
    /// Test environment, no billing
    #[default]
    Sandbox,
    /// Live environment
    #[strum(to_string = "production", serialize = "live")]
    Production,
}

impl Environment {
    /// Maps the `is_live` switch to an environment
    #[must_use]
    pub const fn from_is_live(is_live: bool) -> Self {
        if is_live {
            Self::Production
        } else {
            Self::Sandbox
        }
    }

    /// Returns the API base URL for the environment
    #[must_use]
    pub const fn base_url(&self) -> &'static str {
        match self {
            Self::Sandbox => SANDBOX_BASE_URL,
            Self::Production => PRODUCTION_BASE_URL,
        }
    }

    /// Whether requests are billed against the live account
    #[must_use]
    pub const fn is_live(&self) -> bool {
        matches!(self, Self::Production)
    }

    /// Default log level for the binary
    #[must_use]
    pub fn tracing_level(&self) -> Level {
        env::var("TRACING_LEVEL")
            .ok()
            .and_then(|val| val.parse::<Level>().ok())
            .unwrap_or(match self {
                Self::Production => Level::INFO,
                Self::Sandbox => Level::DEBUG,
            })
    }
}

/// Settings used to build a [`crate::Client`]
#[derive(Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Target environment
    pub environment: Environment,
    /// Secret token issued by Youverify
    pub secret_token: String,
    /// Replaces the environment base URL, e.g. for a local proxy
    pub base_url_override: Option<String>,
    /// Name of the header carrying the secret token
    pub auth_header: String,
    /// Timeout applied by the built-in transport
    pub timeout: Duration,
}

impl ClientConfig {
    /// Creates a configuration with default header and timeout
    #[must_use]
    pub fn new(environment: Environment, secret_token: impl Into<String>) -> Self {
        Self {
            environment,
            secret_token: secret_token.into(),
            base_url_override: None,
            auth_header: DEFAULT_AUTH_HEADER.to_string(),
            timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }

    /// Reads the configuration from `YOUVERIFY_*` environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if `YOUVERIFY_SECRET_TOKEN` is not set or any variable holds an invalid value
    pub fn from_env() -> Result<Self, ConfigError> {
        let environment = match env::var("YOUVERIFY_ENV") {
            Ok(value) => value
                .trim()
                .parse::<Environment>()
                .map_err(|_| ConfigError::Invalid {
                    name: "YOUVERIFY_ENV",
                    value,
                })?,
            Err(_) => Environment::Sandbox,
        };

        let secret_token = env::var("YOUVERIFY_SECRET_TOKEN")
            .map_err(|_| ConfigError::Missing("YOUVERIFY_SECRET_TOKEN"))?;

        let mut config = Self::new(environment, secret_token);

        if let Ok(base_url) = env::var("YOUVERIFY_BASE_URL") {
            if Url::parse(base_url.trim()).is_err() {
                return Err(ConfigError::Invalid {
                    name: "YOUVERIFY_BASE_URL",
                    value: base_url,
                });
            }
            config = config.with_base_url(base_url.trim());
        }

        if let Ok(header) = env::var("YOUVERIFY_AUTH_HEADER") {
            if HeaderName::from_bytes(header.trim().as_bytes()).is_err() {
                return Err(ConfigError::Invalid {
                    name: "YOUVERIFY_AUTH_HEADER",
                    value: header,
                });
            }
            config = config.with_auth_header(header.trim());
        }

        if let Ok(value) = env::var("YOUVERIFY_TIMEOUT_SECS") {
            let secs = match value.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => secs,
                _ => {
                    return Err(ConfigError::Invalid {
                        name: "YOUVERIFY_TIMEOUT_SECS",
                        value,
                    })
                }
            };
            config = config.with_timeout(Duration::from_secs(secs));
        }

        Ok(config)
    }

    /// Overrides the base URL. A trailing `/` is added when missing.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        self.base_url_override = Some(base_url);
        self
    }

    /// Overrides the authentication header name
    #[must_use]
    pub fn with_auth_header(mut self, header: impl Into<String>) -> Self {
        self.auth_header = header.into();
        self
    }

    /// Overrides the transport timeout
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Base URL requests are sent to
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.base_url_override
            .as_deref()
            .unwrap_or_else(|| self.environment.base_url())
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("environment", &self.environment)
            .field("secret_token", &"<redacted>")
            .field("base_url", &self.base_url())
            .field("auth_header", &self.auth_header)
            .field("timeout", &self.timeout)
            .finish()
    }
}
