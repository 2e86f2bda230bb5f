use std::{net::SocketAddr, time::Duration};

use anyhow::Context;

pub const APP_NAME: &str = "Property Valuation Service";
pub const SERVICE_NAME: &str = "valuation-service";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8000";
const DEFAULT_CORS_ALLOW_ORIGINS: &str = "http://localhost:3000";
const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 30_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

/// Server settings, read from the environment (and `.env` when present).
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: SocketAddr,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
    pub log_level: String,
    pub log_format: LogFormat,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let listen_addr: SocketAddr = std::env::var("VALUATION_LISTEN_ADDR")
            .unwrap_or_else(|_| DEFAULT_LISTEN_ADDR.to_string())
            .parse()
            .context("Invalid VALUATION_LISTEN_ADDR")?;
        let cors_allow = parse_origins(
            &std::env::var("VALUATION_CORS_ALLOW_ORIGINS")
                .unwrap_or_else(|_| DEFAULT_CORS_ALLOW_ORIGINS.into()),
        );
        let timeout_ms: u64 = std::env::var("VALUATION_REQUEST_TIMEOUT_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_MS);
        let log_level = std::env::var("VALUATION_LOG_LEVEL").unwrap_or_else(|_| "info".into());
        let log_format = match std::env::var("VALUATION_LOG_FORMAT") {
            Ok(v) if v.eq_ignore_ascii_case("json") => LogFormat::Json,
            _ => LogFormat::Text,
        };
        Ok(Self {
            listen_addr,
            cors_allow,
            request_timeout: Duration::from_millis(timeout_ms),
            log_level,
            log_format,
        })
    }

    pub fn allows_any_origin(&self) -> bool {
        self.cors_allow.iter().any(|o| o == "*")
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(([0, 0, 0, 0], 8000)),
            cors_allow: parse_origins(DEFAULT_CORS_ALLOW_ORIGINS),
            request_timeout: Duration::from_millis(DEFAULT_REQUEST_TIMEOUT_MS),
            log_level: "info".into(),
            log_format: LogFormat::Text,
        }
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origins_are_trimmed_and_blank_entries_dropped() {
        assert_eq!(
            parse_origins(" http://a.test , ,http://b.test,"),
            vec!["http://a.test".to_string(), "http://b.test".to_string()]
        );
    }

    #[test]
    fn default_config_matches_documented_defaults() {
        let config = Config::default();
        assert_eq!(config.listen_addr.port(), 8000);
        assert_eq!(config.cors_allow, vec!["http://localhost:3000".to_string()]);
        assert_eq!(config.request_timeout, Duration::from_secs(30));
        assert!(!config.allows_any_origin());
    }
}
