use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;
use std::time::Duration;

/// Store configuration loaded from environment variables
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// How many listings `featured()` returns
    pub featured_count: usize,
    /// How many listings `recent()` returns
    pub recent_count: usize,
    /// Artificial delay before each query completes
    pub latency: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            featured_count: 3,
            recent_count: 4,
            latency: Duration::ZERO,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        let defaults = Self::default();

        Ok(Self {
            featured_count: read_var("LISTING_FEATURED_COUNT", defaults.featured_count)
                .context("LISTING_FEATURED_COUNT must be a valid number")?,
            recent_count: read_var("LISTING_RECENT_COUNT", defaults.recent_count)
                .context("LISTING_RECENT_COUNT must be a valid number")?,
            latency: Duration::from_millis(
                read_var("LISTING_LATENCY_MS", 0u64)
                    .context("LISTING_LATENCY_MS must be a valid number")?,
            ),
        })
    }
}

fn read_var<T>(name: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(raw) if !raw.trim().is_empty() => Ok(raw.trim().parse()?),
        _ => Ok(default),
    }
}
