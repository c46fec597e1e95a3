//! Missions - data access for missions, their module manifests and moderation
//!
//! This library maps the mission domain onto a relational database through
//! SeaORM. Missions are drafted by customers, composed from modules through
//! flights, formed, and then completed or rejected by moderators.
//!
//! # Modules
//!
//! * [`config`] - Application configuration management
//! * [`entities`] - SeaORM entity models for missions, modules, flights and customers
//! * [`repositories`] - Query layer over the entities
//! * [`service`] - Mission operations with logging and workflow checks
//! * [`storage`] - Database connection and schema bootstrap
//! * [`utils`] - Utility functions and helpers

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// SeaORM entity models for database tables
pub mod entities;

/// Error types shared by repositories and the service
pub mod error;

/// Logging setup
pub mod logger;

/// Repository layer for database operations
pub mod repositories;

/// Mission operations used by callers
pub mod service;

/// Database connection and schema management
pub mod storage;

/// Utility functions for date/time handling
pub mod utils;

// Re-export entity models for convenient access
pub use entities::{customer, flight, mission, module};
pub use error::{MissionError, Result};
