//! Integration tests for server configuration parsing.

use round_robin_web::config::ServerConfig;
use std::collections::HashMap;
use std::time::Duration;

fn config_from(vars: &[(&str, &str)]) -> ServerConfig {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    ServerConfig::from_lookup(|key| vars.get(key).cloned())
}

#[test]
fn unset_vars_use_defaults() {
    assert_eq!(config_from(&[]), ServerConfig::default());
}

#[test]
fn reads_all_vars() {
    let config = config_from(&[
        ("HOST", "127.0.0.1"),
        ("PORT", "9000"),
        ("SESSION_TTL_HOURS", "2"),
        ("CLEANUP_INTERVAL_MINUTES", "5"),
    ]);
    assert_eq!(config.host, "127.0.0.1");
    assert_eq!(config.port, 9000);
    assert_eq!(config.session_ttl, Duration::from_secs(2 * 3600));
    assert_eq!(config.cleanup_interval, Duration::from_secs(5 * 60));
}

#[test]
fn zero_cleanup_interval_falls_back_to_default() {
    let config = config_from(&[("CLEANUP_INTERVAL_MINUTES", "0"), ("SESSION_TTL_HOURS", "0")]);
    let defaults = ServerConfig::default();
    assert!(!config.cleanup_interval.is_zero());
    assert_eq!(config.cleanup_interval, defaults.cleanup_interval);
    assert_eq!(config.session_ttl, defaults.session_ttl);
}

#[test]
fn huge_ttl_saturates_instead_of_overflowing() {
    let max = u64::MAX.to_string();
    let config = config_from(&[
        ("SESSION_TTL_HOURS", max.as_str()),
        ("CLEANUP_INTERVAL_MINUTES", max.as_str()),
    ]);
    assert_eq!(config.session_ttl, Duration::from_secs(u64::MAX));
    assert_eq!(config.cleanup_interval, Duration::from_secs(u64::MAX));
}

#[test]
fn malformed_values_fall_back_to_defaults() {
    let config = config_from(&[("PORT", "http"), ("CLEANUP_INTERVAL_MINUTES", "-3")]);
    let defaults = ServerConfig::default();
    assert_eq!(config.port, defaults.port);
    assert_eq!(config.cleanup_interval, defaults.cleanup_interval);
}
