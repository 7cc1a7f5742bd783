//! Tracing setup for the catalog server: log format, filter and alerting.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::observability::AlertLayer;

/// Debug output for the catalog crates; SQL statement logging stays quiet.
const DEFAULT_LOG_FILTER: &str =
    "info,api_server=debug,catalog_core=debug,catalog_infra=debug,sea_orm=warn,sqlx=warn";

/// Telemetry configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct TelemetryConfig {
    /// Emit JSON log lines instead of pretty output.
    pub json_logs: bool,
    /// `EnvFilter` directives.
    pub log_filter: String,
    /// Forward ERROR events (failed creations, store faults) to an alert sender.
    pub alerts_enabled: bool,
    pub alert_webhook_url: Option<String>,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            json_logs: false,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            alerts_enabled: true,
            alert_webhook_url: None,
        }
    }
}

impl TelemetryConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            json_logs: var("LOG_FORMAT")
                .map(|v| v.eq_ignore_ascii_case("json"))
                .unwrap_or(defaults.json_logs),
            log_filter: var("RUST_LOG")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.log_filter),
            alerts_enabled: var("ALERTS_ENABLED")
                .map(|v| v != "false" && v != "0")
                .unwrap_or(defaults.alerts_enabled),
            alert_webhook_url: var("ALERT_WEBHOOK_URL").filter(|v| !v.is_empty()),
        }
    }

    fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_new(&self.log_filter).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
    }
}

/// Install the global tracing subscriber.
///
/// Must run inside a Tokio runtime when alerts are enabled.
pub fn init_telemetry(config: &TelemetryConfig) {
    let alert_layer = config
        .alerts_enabled
        .then(|| match &config.alert_webhook_url {
            Some(url) => AlertLayer::webhook(url.clone()),
            None => AlertLayer::console(),
        });

    tracing_subscriber::registry()
        .with(config.env_filter())
        .with(config.json_logs.then(|| fmt::layer().json()))
        .with((!config.json_logs).then(|| fmt::layer().pretty()))
        .with(alert_layer)
        .init();

    tracing::info!(
        filter = %config.log_filter,
        json_logs = config.json_logs,
        alerts_enabled = config.alerts_enabled,
        webhook = config.alert_webhook_url.is_some(),
        "Telemetry initialized"
    );
}
