//! Logging initialisation.
//!
//! The library crates only emit `tracing` events; a host process installs a
//! subscriber once with [`init_logging`]. Levels are controlled through
//! `RUST_LOG` (for example `strata_paths=debug`).

use std::sync::Once;

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

static INIT: Once = Once::new();

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum LogFormat {
    /// JSON structured logs.
    Json,
    /// Human-readable logs.
    #[default]
    Pretty,
}

/// Installs the global subscriber.
///
/// Safe to call more than once; only the first call has an effect.
pub fn init_logging(format: LogFormat) {
    INIT.call_once(|| {
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

        let installed = match format {
            LogFormat::Json => tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().json())
                .try_init(),
            LogFormat::Pretty => tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().pretty())
                .try_init(),
        };
        if installed.is_err() {
            tracing::debug!("global subscriber already installed, keeping it");
        }
    });
}

/// Installs a subscriber that writes through the test harness.
///
/// Intended for tests; repeated calls are ignored.
pub fn init_test_logging() {
    let _ = fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("strata=debug")),
        )
        .with_test_writer()
        .try_init();
}
