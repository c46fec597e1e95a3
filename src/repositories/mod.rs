//! Repository layer for database operations.
//!
//! This module provides repository structs that encapsulate database queries
//! and operations, following the Data Mapper pattern recommended by SeaORM.
//! Repositories keep entities as pure data models and take any
//! `ConnectionTrait` so the same query runs on the pool or inside a transaction.

pub mod customer;
pub mod mission;
pub mod module;

pub use customer::CustomerRepository;
pub use mission::{MissionDetails, MissionFilter, MissionRepository, StatusFilter};
pub use module::ModuleRepository;
