//! Tracing setup
//!
//! The terminal belongs to the UI, so log output goes to a file.

use std::fs::{self, File};
use std::sync::Mutex;

use anyhow::Context;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;

/// Build the log filter: `RUST_LOG` wins over the configured level
pub fn env_filter(config: &Config) -> anyhow::Result<EnvFilter> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(&config.log_level)
            .with_context(|| format!("invalid log filter {:?}", config.log_level)),
    }
}

/// Install the global subscriber writing to `config.log_file`
pub fn init(config: &Config) -> anyhow::Result<()> {
    if let Some(dir) = config.log_file.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir)
            .with_context(|| format!("creating log directory {}", dir.display()))?;
    }
    let file = File::create(&config.log_file)
        .with_context(|| format!("creating log file {}", config.log_file.display()))?;

    tracing_subscriber::registry()
        .with(env_filter(config)?)
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_target(true)
                .with_writer(Mutex::new(file)),
        )
        .try_init()
        .context("installing tracing subscriber")?;

    Ok(())
}
