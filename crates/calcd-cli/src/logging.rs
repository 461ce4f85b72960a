//! Logging Bootstrap
//!
//! Installs the process-wide `tracing` subscriber: console output plus two
//! append-only file sinks under the log directory — `combined.log` carrying
//! every level the filter admits, and `error.log` carrying error events only.
//!
//! The returned guards keep the non-blocking writers alive. `main` holds them
//! for the process lifetime so buffered lines flush at shutdown.

use std::path::Path;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

/// Initializes the global subscriber, creating the log directory if needed.
///
/// The default level is INFO; `RUST_LOG` overrides it. May only be called
/// once per process.
pub fn init(log_dir: impl AsRef<Path>) -> Result<Vec<WorkerGuard>> {
    let log_dir = log_dir.as_ref();
    std::fs::create_dir_all(log_dir)
        .with_context(|| format!("Failed to create log directory {}", log_dir.display()))?;

    let (combined, combined_guard) =
        tracing_appender::non_blocking(tracing_appender::rolling::never(log_dir, "combined.log"));
    let (errors, errors_guard) =
        tracing_appender::non_blocking(tracing_appender::rolling::never(log_dir, "error.log"));

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(combined),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(errors)
                .with_filter(LevelFilter::ERROR),
        )
        .init();

    Ok(vec![combined_guard, errors_guard])
}
