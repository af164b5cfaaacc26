use std::time::Duration;

use crate::error::{Error, Result};

pub const VERIFY_ATTEMPTS_ENV: &str = "MACIM_VERIFY_ATTEMPTS";
pub const VERIFY_INTERVAL_ENV: &str = "MACIM_VERIFY_INTERVAL_MS";
pub const LOG_ENV: &str = "MACIM_LOG";

const DEFAULT_VERIFY_INTERVAL_MS: u64 = 50;

/// How a switch request is confirmed after it has been issued.
///
/// `attempts == 0` issues the request and returns immediately.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerifyPolicy {
    pub attempts: u32,
    pub interval: Duration,
}

impl VerifyPolicy {
    pub const fn none() -> Self {
        Self {
            attempts: 0,
            interval: Duration::from_millis(DEFAULT_VERIFY_INTERVAL_MS),
        }
    }

    pub const fn new(attempts: u32, interval: Duration) -> Self {
        Self { attempts, interval }
    }

    pub fn is_enabled(&self) -> bool {
        self.attempts > 0
    }
}

impl Default for VerifyPolicy {
    fn default() -> Self {
        Self::none()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub verify: VerifyPolicy,
    /// `env_logger` filter directives, e.g. `debug` or `macim=trace`.
    pub log_filter: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut verify = VerifyPolicy::none();
        if let Some(attempts) = parse(&lookup, VERIFY_ATTEMPTS_ENV)? {
            verify.attempts = attempts;
        }
        if let Some(ms) = parse(&lookup, VERIFY_INTERVAL_ENV)? {
            verify.interval = Duration::from_millis(ms);
        }
        let log_filter = lookup(LOG_ENV).filter(|v| !v.trim().is_empty());
        Ok(Self { verify, log_filter })
    }
}

fn parse<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
) -> Result<Option<T>> {
    let Some(raw) = lookup(key) else {
        return Ok(None);
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    match trimmed.parse() {
        Ok(value) => Ok(Some(value)),
        Err(_) => Err(Error::InvalidConfig { key, value: raw }),
    }
}
