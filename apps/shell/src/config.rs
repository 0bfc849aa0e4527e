use std::time::Duration;

use anyhow::{bail, Context};
use fintrack_core::constants::{DEFAULT_API_BASE_URL, DEFAULT_TOAST_TTL_MS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub api_base_url: String,
    pub request_timeout: Duration,
    pub toast_ttl_ms: u64,
    pub log_format: LogFormat,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let api_base_url =
            lookup("FT_API_BASE_URL").unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());
        let timeout_ms: u64 = lookup("FT_REQUEST_TIMEOUT_MS")
            .unwrap_or_else(|| "30000".into())
            .parse()
            .context("Invalid FT_REQUEST_TIMEOUT_MS")?;
        let toast_ttl_ms: u64 = match lookup("FT_TOAST_TTL_MS") {
            Some(value) => value.parse().context("Invalid FT_TOAST_TTL_MS")?,
            None => DEFAULT_TOAST_TTL_MS,
        };
        if toast_ttl_ms == 0 {
            bail!("FT_TOAST_TTL_MS must be positive");
        }
        let log_format = match lookup("FT_LOG_FORMAT") {
            Some(format) if format.eq_ignore_ascii_case("json") => LogFormat::Json,
            _ => LogFormat::Text,
        };
        Ok(Self {
            api_base_url,
            request_timeout: Duration::from_millis(timeout_ms),
            toast_ttl_ms,
            log_format,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> anyhow::Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_without_environment() {
        let config = config(&[]).unwrap();
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.request_timeout, Duration::from_secs(30));
        assert_eq!(config.toast_ttl_ms, DEFAULT_TOAST_TTL_MS);
        assert_eq!(config.log_format, LogFormat::Text);
    }

    #[test]
    fn reads_overrides() {
        let config = config(&[
            ("FT_API_BASE_URL", "https://assets.example.com/v1"),
            ("FT_REQUEST_TIMEOUT_MS", "500"),
            ("FT_TOAST_TTL_MS", "1000"),
            ("FT_LOG_FORMAT", "JSON"),
        ])
        .unwrap();
        assert_eq!(config.api_base_url, "https://assets.example.com/v1");
        assert_eq!(config.request_timeout, Duration::from_millis(500));
        assert_eq!(config.toast_ttl_ms, 1000);
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn rejects_bad_numbers() {
        assert!(config(&[("FT_TOAST_TTL_MS", "0")]).is_err());
        assert!(config(&[("FT_TOAST_TTL_MS", "soon")]).is_err());
        assert!(config(&[("FT_REQUEST_TIMEOUT_MS", "-1")]).is_err());
    }
}
