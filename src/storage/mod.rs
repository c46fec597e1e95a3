//! Database connection and schema bootstrap.
//!
//! The schema is derived from the SeaORM entities in [`crate::entities`]:
//! - Customers (with the moderator role flag)
//! - Modules
//! - Missions
//! - Flights (mission-module manifest entries)

pub mod db;

pub use db::Storage;
