//! Logging setup and configuration

use anyhow::Result;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use crate::config::Config;

pub struct LoggingGuard {
    pub _guard: Option<tracing_appender::non_blocking::WorkerGuard>,
}

/// Logs go to stderr so stdout carries only the report. `RUST_LOG` takes
/// precedence over the `-v` level.
pub fn setup_logging(config: &Config) -> Result<Arc<LoggingGuard>> {
    let filter = EnvFilter::builder()
        .with_default_directive(config.log_level().parse()?)
        .from_env_lossy();

    let (file_layer, guard) = match &config.log_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)?;
            let file_appender = tracing_appender::rolling::daily(dir, "lst-prices.log");
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_writer(non_blocking)
                .with_target(true)
                .with_thread_ids(false)
                .with_level(true)
                .with_ansi(false)
                .compact();
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_ansi(true)
                .with_level(true)
        )
        .with(file_layer)
        .with(filter)
        .try_init()?;

    Ok(Arc::new(LoggingGuard { _guard: guard }))
}
