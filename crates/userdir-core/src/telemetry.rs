//! Tracing subscriber setup.
//!
//! The filter comes from `RUST_LOG` when set, otherwise from
//! [`TelemetryConfig::default_filter`].

#[cfg(feature = "telemetry")]
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::DirectoryResult;
use serde::{Deserialize, Serialize};

/// Telemetry configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelemetryConfig {
    /// Service name attached to the startup log line.
    #[serde(default = "default_service_name")]
    pub service_name: String,

    /// Filter directives used when `RUST_LOG` is unset.
    #[serde(default = "default_filter")]
    pub default_filter: String,

    /// Emit JSON lines instead of human-readable output.
    #[serde(default)]
    pub json: bool,

    /// Whether to enable console output.
    #[serde(default = "default_console_output")]
    pub console_output: bool,
}

fn default_service_name() -> String {
    "userdir".to_string()
}

fn default_filter() -> String {
    "info,userdir=debug,tower_http=debug".to_string()
}

const fn default_console_output() -> bool {
    true
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            service_name: default_service_name(),
            default_filter: default_filter(),
            json: false,
            console_output: default_console_output(),
        }
    }
}

/// Installs the global tracing subscriber.
///
/// Fails if a global subscriber has already been set.
#[cfg(feature = "telemetry")]
pub fn init_tracing(config: &TelemetryConfig) -> DirectoryResult<()> {
    if !config.console_output {
        return Ok(());
    }

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.default_filter));

    let result = if config.json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json().with_target(true))
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_target(true))
            .try_init()
    };

    result.map_err(|e| crate::DirectoryError::Internal(format!("Failed to install tracing subscriber: {e}")))?;

    tracing::info!(
        service_name = %config.service_name,
        json = config.json,
        "Tracing initialized"
    );

    Ok(())
}

/// Placeholder for when telemetry feature is disabled.
#[cfg(not(feature = "telemetry"))]
pub fn init_tracing(_config: &TelemetryConfig) -> DirectoryResult<()> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TelemetryConfig::default();
        assert_eq!(config.service_name, "userdir");
        assert!(config.default_filter.starts_with("info"));
        assert!(!config.json);
        assert!(config.console_output);
    }

    #[test]
    fn test_disabled_console_is_noop() {
        let config = TelemetryConfig {
            console_output: false,
            ..TelemetryConfig::default()
        };
        assert!(init_tracing(&config).is_ok());
    }

    #[test]
    fn test_deserialize_partial() {
        let config: TelemetryConfig = serde_json::from_str(r#"{"json": true}"#).unwrap();
        assert!(config.json);
        assert_eq!(config.service_name, "userdir");
    }
}
