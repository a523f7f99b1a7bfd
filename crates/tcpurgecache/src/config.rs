use crate::error::{PurgeCacheError, PurgeCacheResult};
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const ROOT_URL_ENV: &str = "TASKCLUSTER_ROOT_URL";
pub const TIMEOUT_ENV: &str = "TASKCLUSTER_PURGE_CACHE_TIMEOUT_SECS";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ClientConfig {
    pub root_url: Option<String>,
    pub timeout_secs: Option<u64>,
}

impl ClientConfig {
    pub fn new(root_url: impl Into<String>) -> Self {
        Self {
            root_url: Some(root_url.into()),
            timeout_secs: None,
        }
    }

    pub fn from_env() -> PurgeCacheResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> PurgeCacheResult<Self> {
        let root_url = lookup(ROOT_URL_ENV).filter(|v| !v.trim().is_empty());
        let timeout_secs = match lookup(TIMEOUT_ENV).filter(|v| !v.trim().is_empty()) {
            Some(raw) => Some(raw.trim().parse::<u64>().map_err(|_| {
                PurgeCacheError::Config(format!("{TIMEOUT_ENV} is not a number: {raw}"))
            })?),
            None => None,
        };
        let cfg = Self {
            root_url,
            timeout_secs,
        };
        cfg.timeout()?;
        Ok(cfg)
    }

    /// Root URL with any trailing slash removed.
    pub fn root_url(&self) -> PurgeCacheResult<&str> {
        self.root_url
            .as_deref()
            .map(|url| url.trim_end_matches('/'))
            .filter(|url| !url.is_empty())
            .ok_or_else(|| PurgeCacheError::Config("root_url is required".to_string()))
    }

    /// Request timeout; zero is rejected since every request would fail.
    pub fn timeout(&self) -> PurgeCacheResult<Duration> {
        match self.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS) {
            0 => Err(PurgeCacheError::Config(
                "timeout_secs must be greater than zero".to_string(),
            )),
            secs => Ok(Duration::from_secs(secs)),
        }
    }
}
