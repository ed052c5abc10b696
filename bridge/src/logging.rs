//! Global `tracing` subscriber setup.
use tracing_subscriber::fmt::layer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

use crate::config::{BridgeConfig, LogFormat};
use crate::error::BridgeError;

/// Installs the process-wide subscriber described by `config`.
///
/// `RUST_LOG` takes precedence over `config.log_level`. Calling this twice
/// returns [`BridgeError::Subscriber`] instead of panicking.
pub fn init(config: &BridgeConfig) -> Result<(), BridgeError> {
    let filter = build_env_filter(config)?;

    let fmt_layer = match config.log_format {
        LogFormat::Pretty => layer().pretty().boxed(),
        LogFormat::Compact => layer().compact().boxed(),
        LogFormat::Json => layer().json().with_ansi(false).boxed(),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()?;

    tracing::debug!(format = ?config.log_format, "Logging initialised");
    Ok(())
}

fn build_env_filter(config: &BridgeConfig) -> Result<EnvFilter, BridgeError> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    EnvFilter::try_new(&config.log_level).map_err(|source| BridgeError::LogFilter {
        filter: config.log_level.clone(),
        source,
    })
}
