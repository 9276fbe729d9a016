//! Server configuration read from environment variables.

use std::str::FromStr;
use std::time::Duration;

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_SESSION_TTL_HOURS: u64 = 12;
const DEFAULT_CLEANUP_INTERVAL_MINUTES: u64 = 30;

/// Startup configuration for the web binary.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Sessions idle longer than this are purged.
    pub session_ttl: Duration,
    /// How often the purge runs. Never zero.
    pub cleanup_interval: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
            session_ttl: Duration::from_secs(DEFAULT_SESSION_TTL_HOURS * 3600),
            cleanup_interval: Duration::from_secs(DEFAULT_CLEANUP_INTERVAL_MINUTES * 60),
        }
    }
}

impl ServerConfig {
    /// Read `HOST`, `PORT`, `SESSION_TTL_HOURS` and `CLEANUP_INTERVAL_MINUTES`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. Unset, malformed or zero values fall back to the defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let ttl_hours = positive_or(&lookup, "SESSION_TTL_HOURS", DEFAULT_SESSION_TTL_HOURS);
        let interval_minutes =
            positive_or(&lookup, "CLEANUP_INTERVAL_MINUTES", DEFAULT_CLEANUP_INTERVAL_MINUTES);
        Self {
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: positive_or(&lookup, "PORT", DEFAULT_PORT),
            session_ttl: Duration::from_secs(ttl_hours.saturating_mul(3600)),
            cleanup_interval: Duration::from_secs(interval_minutes.saturating_mul(60)),
        }
    }
}

/// Parse a value that must be non-zero, falling back to `default` otherwise.
fn positive_or<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: FromStr + Default + PartialEq,
{
    let Some(raw) = lookup(key) else {
        return default;
    };
    match raw.trim().parse::<T>() {
        Ok(value) if value != T::default() => value,
        _ => {
            log::warn!("Ignoring invalid {}={:?}, using default", key, raw);
            default
        }
    }
}
