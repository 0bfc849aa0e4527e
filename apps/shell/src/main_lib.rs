use std::sync::Arc;

use fintrack_client::AssetsClient;
use fintrack_core::{AssetFlowService, NotificationStore};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::{Config, LogFormat};

pub struct AppState {
    pub notifications: NotificationStore,
    pub asset_flows: AssetFlowService,
}

/// Filter used when `RUST_LOG` is unset. Kept quiet so log lines do not
/// interleave with toasts on stderr.
const DEFAULT_LOG_FILTER: &str = "warn";

fn env_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}

pub fn init_tracing(config: &Config) {
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let registry = tracing_subscriber::registry().with(env_filter(directives.as_deref()));

    // Logs go to stderr so command output on stdout stays clean.
    match config.log_format {
        LogFormat::Json => registry
            .with(
                fmt::layer()
                    .json()
                    .with_current_span(false)
                    .with_writer(std::io::stderr),
            )
            .init(),
        LogFormat::Text => registry
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_line_number(true)
                    .with_writer(std::io::stderr),
            )
            .init(),
    }
}

pub fn build_state(config: &Config) -> anyhow::Result<AppState> {
    if NotificationStore::install_global(NotificationStore::with_default_ttl(config.toast_ttl_ms))
        .is_err()
    {
        tracing::warn!("Notification store was already initialized, keeping its defaults");
    }
    let notifications = NotificationStore::global().clone();

    let client = AssetsClient::with_timeout(&config.api_base_url, config.request_timeout)?;
    tracing::info!("Assets backend: {}", client.base_url());

    let asset_flows = AssetFlowService::new(Arc::new(client), notifications.clone());

    Ok(AppState {
        notifications,
        asset_flows,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_filter_defaults_to_warn() {
        assert_eq!(env_filter(None).to_string(), "warn");
    }

    #[test]
    fn test_env_filter_uses_rust_log_directives() {
        assert_eq!(env_filter(Some("debug")).to_string(), "debug");
        assert_eq!(
            env_filter(Some("fintrack_client=trace")).to_string(),
            "fintrack_client=trace"
        );
    }

    #[test]
    fn test_env_filter_falls_back_on_invalid_directives() {
        assert_eq!(env_filter(Some("fintrack_client=loud")).to_string(), "warn");
    }
}
