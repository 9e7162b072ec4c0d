use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::AuthError;

/// Config section holding static credentials
pub const AUTH_SECTION: &str = "auth";

/// Prefix for environment overrides, e.g. `SNS_AUTH__ACCESS_KEY`
pub const ENV_PREFIX: &str = "SNS";

/// Static credentials from the `[auth]` config section
///
/// Both keys default to empty strings when absent.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    pub access_key: String,
    pub secret_key: String,
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("access_key", &self.access_key)
            .field("secret_key", &"[REDACTED]")
            .finish()
    }
}

impl AuthConfig {
    /// Load the `[auth]` section
    ///
    /// # Loading Order
    /// 1. Configuration file, if given and present
    /// 2. Environment variables `SNS_AUTH__ACCESS_KEY` / `SNS_AUTH__SECRET_KEY`
    pub fn load(config_path: Option<&Path>) -> Result<Self, AuthError> {
        let mut builder = config::Config::builder();

        if let Some(path) = config_path {
            builder = builder.add_source(config::File::from(path).required(false));
        }

        builder = builder.add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__"),
        );

        let settings = builder.build()?;
        Self::from_settings(&settings)
    }

    /// Like [`AuthConfig::load`], but an unreadable source yields empty credentials
    pub fn load_or_default(config_path: Option<&Path>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!(error = %e, "Ignoring unreadable auth configuration");
            Self::default()
        })
    }

    /// Extract the `[auth]` section from already-built settings
    ///
    /// A missing section is empty; a malformed one is an error.
    pub fn from_settings(settings: &config::Config) -> Result<Self, AuthError> {
        match settings.get::<AuthConfig>(AUTH_SECTION) {
            Ok(cfg) => Ok(cfg),
            Err(config::ConfigError::NotFound(_)) => Ok(Self::default()),
            Err(e) => Err(e.into()),
        }
    }
}
