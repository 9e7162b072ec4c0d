//! AWS credential resolution for the notification dispatch backend
//!
//! Credentials are resolved through a fallback chain:
//! 1. A cached value, if one was already resolved
//! 2. Environment variables (`AWS_ACCESS_KEY_ID` / `AWS_SECRET_ACCESS_KEY`)
//! 3. The `[auth]` config section (`access_key` / `secret_key`), empty if absent
//!
//! Resolution never fails. Services should build and inject their own
//! provider; [`resolve_credentials`] is a process-wide convenience on top of
//! the same types.
//!
//! # Example
//!
//! ```no_run
//! use aws_auth::{AuthConfig, CachedCredentialProvider, ChainCredentialProvider, CredentialProvider};
//! use std::path::Path;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = AuthConfig::load(Some(Path::new("config/sns.toml")))?;
//!     let provider = CachedCredentialProvider::new(ChainCredentialProvider::from_config(config));
//!
//!     let creds = provider.credentials();
//!     println!("using access key {}", creds.access_key);
//!     Ok(())
//! }
//! ```

use std::path::PathBuf;

use once_cell::sync::Lazy;
use thiserror::Error;

mod auth_config;
mod provider;

pub use auth_config::{AuthConfig, AUTH_SECTION, ENV_PREFIX};
pub use provider::{
    CachedCredentialProvider, ChainCredentialProvider, ConfigCredentialProvider,
    CredentialProvider, Credentials, EnvCredentialProvider,
};

/// Environment variable naming the config file used by [`resolve_credentials`]
pub const CONFIG_FILE_ENV: &str = "SNS_CONFIG_FILE";

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Failed to load auth configuration: {0}")]
    Config(#[from] config::ConfigError),
}

static DEFAULT_PROVIDER: Lazy<CachedCredentialProvider<ChainCredentialProvider>> = Lazy::new(|| {
    let path = std::env::var_os(CONFIG_FILE_ENV).map(PathBuf::from);
    let config = AuthConfig::load_or_default(path.as_deref());
    CachedCredentialProvider::new(ChainCredentialProvider::from_config(config))
});

/// Resolve credentials through the process-wide cached chain
///
/// The first call resolves and caches; later calls return the cached bundle.
pub fn resolve_credentials() -> Credentials {
    DEFAULT_PROVIDER.credentials()
}
