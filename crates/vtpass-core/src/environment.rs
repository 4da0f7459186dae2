//! API environments and their base URLs.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Base URL of the VTpass sandbox.
pub const SANDBOX_BASE_URL: &str = "https://sandbox.vtpass.com/api/";

/// Base URL of the VTpass live environment.
pub const LIVE_BASE_URL: &str = "https://vtpass.com/api/";

/// Which VTpass deployment requests are sent to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Test deployment, no real money moves.
    #[default]
    Sandbox,
    /// Production deployment.
    Live,
}

impl Environment {
    /// Resolve an environment name.
    ///
    /// `"sandbox"` and `"live"` are matched case-insensitively. Any other
    /// value resolves to [`Environment::Sandbox`].
    #[must_use]
    #[allow(clippy::match_same_arms)]
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "live" => Self::Live,
            "sandbox" => Self::Sandbox,
            _ => Self::Sandbox,
        }
    }

    /// Base URL for this environment.
    #[must_use]
    pub const fn base_url(self) -> &'static str {
        match self {
            Self::Sandbox => SANDBOX_BASE_URL,
            Self::Live => LIVE_BASE_URL,
        }
    }

    /// Lowercase name of the environment.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sandbox => "sandbox",
            Self::Live => "live",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for Environment {
    fn from(name: &str) -> Self {
        Self::from_name(name)
    }
}
