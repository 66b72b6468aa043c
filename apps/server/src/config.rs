use std::{net::SocketAddr, time::Duration};

use hearth_core::constants::{DEFAULT_REMINDER_HOUR, DEFAULT_REMINDER_THRESHOLD};
use hearth_core::utils::time_utils::DEFAULT_HOUSEHOLD_TZ;

/// Runtime configuration, read once at startup from `HEARTH_*` variables.
pub struct Config {
    pub listen_addr: SocketAddr,
    pub db_path: String,
    /// Pinned timezone name. Parsed (and rejected if unknown) in `build_state`.
    pub timezone: String,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
    pub reminder_enabled: bool,
    pub reminder_hour: u32,
    pub reminder_threshold: usize,
}

impl Config {
    pub fn from_env() -> Self {
        let listen_addr = parse_or_default(
            "HEARTH_LISTEN_ADDR",
            SocketAddr::from(([0, 0, 0, 0], 8080)),
        );
        let db_path = std::env::var("HEARTH_DB_PATH").unwrap_or_else(|_| "hearth.db".into());
        let timezone = std::env::var("HEARTH_TIMEZONE")
            .unwrap_or_else(|_| DEFAULT_HOUSEHOLD_TZ.name().to_string());
        let cors_allow = std::env::var("HEARTH_CORS_ORIGIN")
            .unwrap_or_else(|_| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let timeout_secs: u64 = parse_or_default("HEARTH_REQUEST_TIMEOUT_SECS", 30);
        let reminder_enabled = parse_or_default("HEARTH_REMINDER_ENABLED", true);
        let mut reminder_hour = parse_or_default("HEARTH_REMINDER_HOUR", DEFAULT_REMINDER_HOUR);
        if reminder_hour > 23 {
            tracing::warn!(
                "HEARTH_REMINDER_HOUR {} is out of range, using {}",
                reminder_hour,
                DEFAULT_REMINDER_HOUR
            );
            reminder_hour = DEFAULT_REMINDER_HOUR;
        }
        let reminder_threshold =
            parse_or_default("HEARTH_REMINDER_THRESHOLD", DEFAULT_REMINDER_THRESHOLD);

        Self {
            listen_addr,
            db_path,
            timezone,
            cors_allow,
            request_timeout: Duration::from_secs(timeout_secs),
            reminder_enabled,
            reminder_hour,
            reminder_threshold,
        }
    }
}

/// Reads an env var, falling back to the default (with a warning) when the
/// value does not parse.
fn parse_or_default<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr + std::fmt::Display,
{
    match std::env::var(key) {
        Ok(raw) => match raw.parse() {
            Ok(value) => value,
            Err(_) => {
                tracing::warn!("Invalid {} value '{}', using default {}", key, raw, default);
                default
            }
        },
        Err(_) => default,
    }
}
