use std::fmt;
use std::sync::Arc;

use once_cell::sync::OnceCell;
use tracing::{debug, warn};

use crate::auth_config::AuthConfig;

pub const ENV_ACCESS_KEY_ID: &str = "AWS_ACCESS_KEY_ID";
pub const ENV_ACCESS_KEY: &str = "AWS_ACCESS_KEY";
pub const ENV_SECRET_ACCESS_KEY: &str = "AWS_SECRET_ACCESS_KEY";
pub const ENV_SECRET_KEY: &str = "AWS_SECRET_KEY";
pub const ENV_SESSION_TOKEN: &str = "AWS_SESSION_TOKEN";

/// AWS credential bundle
///
/// May be empty when no source supplied anything; callers find out when the
/// dispatch backend rejects the request.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub access_key: String,
    pub secret_key: String,
    pub session_token: Option<String>,
}

impl Credentials {
    pub fn new(access_key: impl Into<String>, secret_key: impl Into<String>) -> Self {
        Self {
            access_key: access_key.into(),
            secret_key: secret_key.into(),
            session_token: None,
        }
    }

    pub fn with_session_token(mut self, token: impl Into<String>) -> Self {
        self.session_token = Some(token.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.access_key.is_empty() && self.secret_key.is_empty()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("access_key", &self.access_key)
            .field("secret_key", &"[REDACTED]")
            .field("session_token", &self.session_token.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

impl From<AuthConfig> for Credentials {
    fn from(cfg: AuthConfig) -> Self {
        Self::new(cfg.access_key, cfg.secret_key)
    }
}

/// Source of AWS credentials
///
/// Never fails: a provider with nothing to offer returns an empty bundle.
pub trait CredentialProvider: Send + Sync {
    fn credentials(&self) -> Credentials;
}

impl<P: CredentialProvider + ?Sized> CredentialProvider for Arc<P> {
    fn credentials(&self) -> Credentials {
        (**self).credentials()
    }
}

impl<P: CredentialProvider + ?Sized> CredentialProvider for Box<P> {
    fn credentials(&self) -> Credentials {
        (**self).credentials()
    }
}

type EnvLookup = Arc<dyn Fn(&str) -> Option<String> + Send + Sync>;

/// Credentials from the standard AWS environment variables
#[derive(Clone)]
pub struct EnvCredentialProvider {
    lookup: EnvLookup,
}

impl fmt::Debug for EnvCredentialProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnvCredentialProvider").finish_non_exhaustive()
    }
}

impl Default for EnvCredentialProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl EnvCredentialProvider {
    /// Read from the process environment
    pub fn new() -> Self {
        Self::with_lookup(|key| std::env::var(key).ok())
    }

    /// Read through a custom lookup instead of the process environment
    pub fn with_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String> + Send + Sync + 'static,
    {
        Self {
            lookup: Arc::new(lookup),
        }
    }

    fn var(&self, key: &str) -> Option<String> {
        (self.lookup)(key).filter(|v| !v.is_empty())
    }

    /// Credentials if both access and secret key are set
    pub fn try_credentials(&self) -> Option<Credentials> {
        let access_key = self
            .var(ENV_ACCESS_KEY_ID)
            .or_else(|| self.var(ENV_ACCESS_KEY))?;
        let secret_key = self
            .var(ENV_SECRET_ACCESS_KEY)
            .or_else(|| self.var(ENV_SECRET_KEY))?;

        Some(Credentials {
            access_key,
            secret_key,
            session_token: self.var(ENV_SESSION_TOKEN),
        })
    }
}

impl CredentialProvider for EnvCredentialProvider {
    fn credentials(&self) -> Credentials {
        self.try_credentials().unwrap_or_default()
    }
}

/// Credentials from the `[auth]` config section
#[derive(Debug, Clone, Default)]
pub struct ConfigCredentialProvider {
    config: AuthConfig,
}

impl ConfigCredentialProvider {
    pub fn new(config: AuthConfig) -> Self {
        Self { config }
    }
}

impl CredentialProvider for ConfigCredentialProvider {
    fn credentials(&self) -> Credentials {
        self.config.clone().into()
    }
}

/// Environment first, then the `[auth]` config section
#[derive(Debug, Clone)]
pub struct ChainCredentialProvider {
    env: EnvCredentialProvider,
    config: ConfigCredentialProvider,
}

impl ChainCredentialProvider {
    pub fn new(env: EnvCredentialProvider, config: ConfigCredentialProvider) -> Self {
        Self { env, config }
    }

    /// Process environment plus the given config section
    pub fn from_config(config: AuthConfig) -> Self {
        Self::new(EnvCredentialProvider::new(), ConfigCredentialProvider::new(config))
    }
}

impl CredentialProvider for ChainCredentialProvider {
    fn credentials(&self) -> Credentials {
        if let Some(creds) = self.env.try_credentials() {
            debug!(source = "environment", access_key = %creds.access_key, "Resolved AWS credentials");
            return creds;
        }

        let creds = self.config.credentials();
        if creds.is_empty() {
            warn!("No AWS credentials in environment or [auth] config section, using empty credentials");
        } else {
            debug!(source = "config", access_key = %creds.access_key, "Resolved AWS credentials");
        }
        creds
    }
}

/// Resolves once through the inner provider and memoizes the result
///
/// Concurrent first callers block until the single initialization finishes.
pub struct CachedCredentialProvider<P> {
    inner: P,
    cached: OnceCell<Credentials>,
}

impl<P: CredentialProvider> CachedCredentialProvider<P> {
    pub fn new(inner: P) -> Self {
        Self {
            inner,
            cached: OnceCell::new(),
        }
    }

    /// Start with already-resolved credentials; `inner` is never consulted
    pub fn preset(inner: P, credentials: Credentials) -> Self {
        Self {
            inner,
            cached: OnceCell::with_value(credentials),
        }
    }

    pub fn is_resolved(&self) -> bool {
        self.cached.get().is_some()
    }
}

impl<P: CredentialProvider> CredentialProvider for CachedCredentialProvider<P> {
    fn credentials(&self) -> Credentials {
        self.cached
            .get_or_init(|| self.inner.credentials())
            .clone()
    }
}

impl<P> fmt::Debug for CachedCredentialProvider<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CachedCredentialProvider")
            .field("resolved", &self.cached.get().is_some())
            .finish()
    }
}
