//! Constants used throughout the crate
//!
//! This module centralizes file names, default values and other constant
//! strings to improve maintainability and consistency.

/// Directory name under the platform config/data directories
pub const APP_DIR_NAME: &str = "missions";
/// Config file looked up in the working directory
pub const LOCAL_CONFIG_FILE: &str = "missions.toml";
/// Config file name inside the platform config directory
pub const CONFIG_FILE_NAME: &str = "config.toml";
/// Log file name inside the platform data directory
pub const LOG_FILE_NAME: &str = "missions.log";

// Database defaults
pub const DEFAULT_DATABASE_URL: &str = "sqlite://missions.db?mode=rwc";
pub const MEMORY_DATABASE_URL: &str = "sqlite::memory:";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 10;
pub const DEFAULT_MIN_CONNECTIONS: u32 = 1;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 8;

// Logging defaults
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const LOG_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

// Messages
pub const CONFIG_GENERATED: &str = "Generated default configuration file";
