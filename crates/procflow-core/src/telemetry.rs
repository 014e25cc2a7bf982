use tracing_subscriber::EnvFilter;

use crate::config::{EngineConfig, LogFormat};

/// Install the global `fmt` subscriber.
///
/// `RUST_LOG` wins over `config.log_level` when set. Returns `false` when a
/// global subscriber was already installed.
pub fn init_tracing(config: &EngineConfig) -> bool {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    let installed = match config.log_format {
        LogFormat::Full => builder.try_init().is_ok(),
        LogFormat::Compact => builder.compact().try_init().is_ok(),
    };

    if installed {
        tracing::debug!(log_level = %config.log_level, log_format = %config.log_format, "Tracing initialized");
    }
    installed
}
