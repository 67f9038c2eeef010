use std::time::Duration;

use anyhow::{Context, Result};
use jobs_core::JobsEndpoint;
use jobs_engine::FetchSettings;

pub const DEFAULT_BASE_URL: &str = "https://apis.ccbp.in";

pub const ENV_BASE_URL: &str = "JOBS_API_BASE_URL";
pub const ENV_REQUEST_TIMEOUT_SECS: &str = "JOBS_REQUEST_TIMEOUT_SECS";
pub const ENV_CONNECT_TIMEOUT_SECS: &str = "JOBS_CONNECT_TIMEOUT_SECS";
pub const ENV_MAX_RESPONSE_BYTES: &str = "JOBS_MAX_RESPONSE_BYTES";

/// Where the listing service lives and how patiently to talk to it.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    pub base_url: String,
    pub fetch: FetchSettings,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            fetch: FetchSettings::default(),
        }
    }
}

impl SearchConfig {
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Reads overrides from the process environment; unset variables keep
    /// their defaults.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();
        if let Some(base_url) = lookup(ENV_BASE_URL) {
            config.base_url = base_url;
        }
        if let Some(secs) = parse_var::<u64>(&lookup, ENV_REQUEST_TIMEOUT_SECS)? {
            config.fetch.request_timeout = Duration::from_secs(secs);
        }
        if let Some(secs) = parse_var::<u64>(&lookup, ENV_CONNECT_TIMEOUT_SECS)? {
            config.fetch.connect_timeout = Duration::from_secs(secs);
        }
        if let Some(bytes) = parse_var::<u64>(&lookup, ENV_MAX_RESPONSE_BYTES)? {
            config.fetch.max_bytes = bytes;
        }
        config.endpoint()?;
        Ok(config)
    }

    pub fn endpoint(&self) -> Result<JobsEndpoint> {
        JobsEndpoint::parse(&self.base_url)
            .with_context(|| format!("invalid job service url {:?}", self.base_url))
    }
}

fn parse_var<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Result<Option<T>>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    lookup(key)
        .map(|raw| {
            raw.trim()
                .parse::<T>()
                .with_context(|| format!("{key} must be a number, got {raw:?}"))
        })
        .transpose()
}
