//! Loader configuration.

use std::time::Duration;

use crate::error::{Error, Result};

/// Environment variable overriding [`DEFAULT_TIMEOUT`], in whole seconds.
pub const TIMEOUT_ENV: &str = "ADULT_LOCATOR_TIMEOUT_SECS";

/// Upper bound on a blocking HTTP fetch. Requests are never retried.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Settings shared by the loaders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoaderConfig {
    /// Total time allowed for a network request, connect to last body byte.
    pub timeout: Duration,
    pub user_agent: String,
    /// Honour `HTTP_PROXY` / `HTTPS_PROXY` / `NO_PROXY` from the environment.
    pub use_env_proxy: bool,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            user_agent: concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).to_string(),
            use_env_proxy: true,
        }
    }
}

impl LoaderConfig {
    /// Defaults, overridden by `ADULT_LOCATOR_TIMEOUT_SECS` when set.
    pub fn from_env() -> Result<Self> {
        Self::default().with_timeout_override(std::env::var(TIMEOUT_ENV).ok().as_deref())
    }

    fn with_timeout_override(mut self, raw: Option<&str>) -> Result<Self> {
        if let Some(raw) = raw {
            let secs = raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|&s| s > 0)
                .ok_or_else(|| Error::Config {
                    key: TIMEOUT_ENV,
                    value: raw.to_string(),
                })?;
            self.timeout = Duration::from_secs(secs);
        }
        Ok(self)
    }
}
