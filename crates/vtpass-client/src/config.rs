//! Client configuration.

use serde::Deserialize;
use std::fmt;
use std::path::Path;
use vtpass_core::{Credentials, Environment};

use crate::error::ClientError;
use crate::transport::DEFAULT_TIMEOUT_SECONDS;

/// Paths searched for a secrets file, in order.
const SECRET_PATHS: [&str; 2] = [".secrets/vtpass.json", "../.secrets/vtpass.json"];

/// Credentials, environment and timeout for a [`crate::VtpassClient`].
#[derive(Clone)]
pub struct ClientConfig {
    /// Merchant API key.
    pub api_key: String,
    /// Merchant public key.
    pub public_key: String,
    /// Merchant secret key.
    pub secret_key: String,
    /// Target environment (default: sandbox).
    pub environment: Environment,
    /// Request timeout in seconds (default: 30).
    pub timeout_seconds: u64,
}

/// Secrets file structure.
#[derive(Debug, Deserialize)]
struct VtpassSecrets {
    api_key: String,
    public_key: String,
    secret_key: String,
    #[serde(default)]
    environment: Option<String>,
    #[serde(default)]
    timeout_seconds: Option<u64>,
}

impl ClientConfig {
    /// Create a configuration with default environment and timeout.
    #[must_use]
    pub fn new(
        api_key: impl Into<String>,
        public_key: impl Into<String>,
        secret_key: impl Into<String>,
    ) -> Self {
        Self {
            api_key: api_key.into(),
            public_key: public_key.into(),
            secret_key: secret_key.into(),
            environment: Environment::default(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
        }
    }

    /// Set the environment.
    #[must_use]
    pub fn with_environment(mut self, environment: impl Into<Environment>) -> Self {
        self.environment = environment.into();
        self
    }

    /// Set the request timeout.
    #[must_use]
    pub fn with_timeout_seconds(mut self, seconds: u64) -> Self {
        self.timeout_seconds = seconds;
        self
    }

    /// The configured credentials.
    #[must_use]
    pub fn credentials(&self) -> Credentials {
        Credentials::new(&self.api_key, &self.public_key, &self.secret_key)
    }

    /// Load configuration from a secrets file or environment variables.
    ///
    /// `.secrets/vtpass.json` is tried first. Otherwise `VTPASS_API_KEY`,
    /// `VTPASS_PUBLIC_KEY` and `VTPASS_SECRET_KEY` are required, and
    /// `VTPASS_ENVIRONMENT` / `VTPASS_TIMEOUT_SECONDS` are optional.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Configuration`] if a required key is missing.
    pub fn from_env() -> Result<Self, ClientError> {
        for path in &SECRET_PATHS {
            if Path::new(path).exists() {
                return Self::from_secrets_file(path);
            }
        }

        tracing::debug!("VTpass secrets file not found, using environment variables");
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Configuration`] if a required key is missing
    /// or the timeout is not a number.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ClientError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            lookup(key)
                .filter(|value| !value.is_empty())
                .ok_or_else(|| ClientError::Configuration(format!("{key} is not set")))
        };

        let timeout_seconds = match lookup("VTPASS_TIMEOUT_SECONDS") {
            Some(raw) => raw.trim().parse().map_err(|_| {
                ClientError::Configuration(format!("VTPASS_TIMEOUT_SECONDS is not a number: {raw}"))
            })?,
            None => DEFAULT_TIMEOUT_SECONDS,
        };

        Ok(Self {
            api_key: required("VTPASS_API_KEY")?,
            public_key: required("VTPASS_PUBLIC_KEY")?,
            secret_key: required("VTPASS_SECRET_KEY")?,
            environment: lookup("VTPASS_ENVIRONMENT")
                .map(|name| Environment::from_name(&name))
                .unwrap_or_default(),
            timeout_seconds,
        })
    }

    /// Load configuration from a JSON secrets file.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Configuration`] if the file cannot be read or
    /// parsed.
    pub fn from_secrets_file(path: impl AsRef<Path>) -> Result<Self, ClientError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            ClientError::Configuration(format!("cannot read {}: {e}", path.display()))
        })?;
        let secrets: VtpassSecrets = serde_json::from_str(&contents).map_err(|e| {
            ClientError::Configuration(format!("invalid secrets file {}: {e}", path.display()))
        })?;

        tracing::info!(path = %path.display(), "Loaded VTpass secrets from file");

        Ok(Self {
            api_key: secrets.api_key,
            public_key: secrets.public_key,
            secret_key: secrets.secret_key,
            environment: secrets
                .environment
                .as_deref()
                .map(Environment::from_name)
                .unwrap_or_default(),
            timeout_seconds: secrets.timeout_seconds.unwrap_or(DEFAULT_TIMEOUT_SECONDS),
        })
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("credentials", &self.credentials())
            .field("environment", &self.environment)
            .field("timeout_seconds", &self.timeout_seconds)
            .finish()
    }
}
