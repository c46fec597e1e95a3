//! Logging setup on top of the `log` facade.
//!
//! Records are written by a `fern` dispatch to a log file, one line per
//! record: `[timestamp LEVEL target] message`.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Local;

use crate::config::LoggingConfig;
use crate::constants::{APP_DIR_NAME, LOG_FILE_NAME, LOG_TIMESTAMP_FORMAT};

/// Default log file location inside the platform data directory
pub fn get_log_file_path() -> Result<PathBuf> {
    dirs::data_local_dir()
        .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))
        .map(|dir| dir.join(APP_DIR_NAME).join(LOG_FILE_NAME))
}

/// Build the dispatch described by `config` without installing it.
///
/// Returns `None` when logging is disabled.
pub fn build_dispatch(config: &LoggingConfig) -> Result<Option<fern::Dispatch>> {
    if !config.enabled {
        return Ok(None);
    }

    let level = config.level_filter()?;
    let path = match &config.file {
        Some(path) => path.clone(),
        None => get_log_file_path()?,
    };

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
    }

    let file = fern::log_file(&path).with_context(|| format!("Failed to open log file: {}", path.display()))?;

    let dispatch = fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                Local::now().format(LOG_TIMESTAMP_FORMAT),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level)
        .chain(file);

    Ok(Some(dispatch))
}

/// Install the global logger. Does nothing when logging is disabled.
pub fn init(config: &LoggingConfig) -> Result<()> {
    if let Some(dispatch) = build_dispatch(config)? {
        dispatch.apply().context("Failed to install logger")?;
    }
    Ok(())
}
