//! Utility modules.
//!
//! - [`datetime`] - Parsing of date bounds used by mission listings

pub mod datetime;
