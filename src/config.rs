//! Square client configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{SquareError, SquareResult};

/// Default value for the `Square-Version` header.
pub const DEFAULT_SQUARE_VERSION: &str = "2024-01-18";

/// Configuration for the Square client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SquareConfig {
    /// Access token used as the bearer credential
    pub access_token: String,

    /// Target environment (default: production)
    #[serde(default)]
    pub environment: Environment,

    /// Base URL override; when unset, the environment's URL is used
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,

    /// Value sent in the `Square-Version` header
    #[serde(default = "default_square_version")]
    pub square_version: String,

    /// Request timeout
    #[serde(default = "default_timeout", with = "duration_secs")]
    pub timeout: Duration,

    /// Retry configuration
    #[serde(default)]
    pub retry: RetryConfig,
}

fn default_square_version() -> String {
    DEFAULT_SQUARE_VERSION.into()
}

fn default_timeout() -> Duration {
    Duration::from_secs(60)
}

mod duration_secs {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        duration.as_secs().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = u64::deserialize(deserializer)?;
        Ok(Duration::from_secs(secs))
    }
}

impl SquareConfig {
    /// Build a configuration from `SQUARE_ACCESS_TOKEN` and
    /// `SQUARE_ENVIRONMENT` (`production` or `sandbox`).
    pub fn from_env() -> SquareResult<Self> {
        let access_token = std::env::var("SQUARE_ACCESS_TOKEN")
            .map_err(|_| SquareError::Config("SQUARE_ACCESS_TOKEN is not set".into()))?;

        let environment = match std::env::var("SQUARE_ENVIRONMENT").ok().as_deref() {
            None | Some("production") => Environment::Production,
            Some("sandbox") => Environment::Sandbox,
            Some(other) => {
                return Err(SquareError::Config(format!(
                    "unknown SQUARE_ENVIRONMENT: {other}"
                )))
            }
        };

        Ok(Self {
            access_token,
            environment,
            ..Self::default()
        })
    }

    /// The base URL requests are sent to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.api_url
            .as_deref()
            .unwrap_or_else(|| self.environment.base_url())
    }
}

impl Default for SquareConfig {
    fn default() -> Self {
        Self {
            access_token: String::new(),
            environment: Environment::default(),
            api_url: None,
            square_version: default_square_version(),
            timeout: default_timeout(),
            retry: RetryConfig::default(),
        }
    }
}

/// Square environment selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Live API at connect.squareup.com
    #[default]
    Production,

    /// Sandbox API at connect.squareupsandbox.com
    Sandbox,
}

impl Environment {
    /// Base URL for this environment.
    #[must_use]
    pub const fn base_url(self) -> &'static str {
        match self {
            Self::Production => "https://connect.squareup.com",
            Self::Sandbox => "https://connect.squareupsandbox.com",
        }
    }
}

/// Retry configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetryConfig {
    /// Maximum attempts per request
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,

    /// Initial delay between retries in milliseconds
    #[serde(default = "default_initial_delay_ms")]
    pub initial_delay_ms: u64,

    /// Maximum delay between retries in milliseconds
    #[serde(default = "default_max_delay_ms")]
    pub max_delay_ms: u64,
}

fn default_max_attempts() -> u32 {
    3
}

fn default_initial_delay_ms() -> u64 {
    1000
}

fn default_max_delay_ms() -> u64 {
    60_000
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: default_max_attempts(),
            initial_delay_ms: default_initial_delay_ms(),
            max_delay_ms: default_max_delay_ms(),
        }
    }
}
