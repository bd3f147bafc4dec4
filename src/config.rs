//! Server configuration from environment variables.
//!
//! `HOST` (default `0.0.0.0`), `PORT` (default `8080`) and `INACTIVITY_HOURS` (default `12`).
//! Values that fail to parse fall back to the default.

use std::time::Duration;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Tournaments not accessed for this long are dropped.
    pub inactivity_timeout: Duration,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_inactivity_hours() -> u64 {
    12
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            inactivity_timeout: Duration::from_secs(default_inactivity_hours() * 3600),
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup (the environment in production, a map in tests).
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST")
            .map(|h| h.trim().to_string())
            .filter(|h| !h.is_empty())
            .unwrap_or_else(default_host);
        let port = parse_or("PORT", lookup("PORT"), default_port());
        let hours = parse_or("INACTIVITY_HOURS", lookup("INACTIVITY_HOURS"), default_inactivity_hours());
        let secs = hours.checked_mul(3600).unwrap_or_else(|| {
            log::warn!(
                "INACTIVITY_HOURS={} is out of range, using {}",
                hours,
                default_inactivity_hours()
            );
            default_inactivity_hours() * 3600
        });
        Self {
            host,
            port,
            inactivity_timeout: Duration::from_secs(secs),
        }
    }
}

fn parse_or<T: std::str::FromStr + std::fmt::Display>(key: &str, raw: Option<String>, default: T) -> T {
    match raw {
        None => default,
        Some(v) => v.trim().parse().unwrap_or_else(|_| {
            log::warn!("Ignoring invalid {}={:?}, using {}", key, v, default);
            default
        }),
    }
}
