use log::warn;
use sportsdb::{SportsDbSettings, DEFAULT_API_KEY, DEFAULT_BASE_URL};
use std::env;
use std::str::FromStr;
use std::time::Duration;

const DEFAULT_PORT: u16 = 18000;
const DEFAULT_DEBOUNCE_MS: u64 = 500;
const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub sportsdb: SportsDbSettings,
    pub debounce: Duration,
    pub show_search_errors: bool,
}

impl AppConfig {
    pub fn from_env() -> Self {
        AppConfig::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        AppConfig {
            port: parse_or(&lookup, "LINEUP_PORT", DEFAULT_PORT),
            sportsdb: SportsDbSettings {
                base_url: lookup("SPORTSDB_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
                api_key: lookup("SPORTSDB_API_KEY").unwrap_or_else(|| DEFAULT_API_KEY.to_string()),
                timeout: Duration::from_secs(parse_or(&lookup, "SEARCH_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS)),
            },
            debounce: Duration::from_millis(parse_or(&lookup, "SEARCH_DEBOUNCE_MS", DEFAULT_DEBOUNCE_MS)),
            show_search_errors: parse_or(&lookup, "SHOW_SEARCH_ERRORS", false),
        }
    }
}

fn parse_or<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T {
    match lookup(key) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!("{}: cannot parse '{}', using default", key, raw);
            default
        }),
        None => default,
    }
}
