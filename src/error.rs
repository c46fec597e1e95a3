//! Error types for mission data access.

use sea_orm::DbErr;
use uuid::Uuid;

use crate::entities::MissionStatus;

/// Errors returned by the repositories and the mission service.
///
/// Repository lookups report a missing row as `None`, never as an error;
/// `NotFound` is only produced by service operations that need the row.
#[derive(Debug, thiserror::Error)]
pub enum MissionError {
    #[error("Storage error: {0}")]
    Storage(#[from] DbErr),

    #[error("Mission not found: {0}")]
    NotFound(Uuid),

    #[error("Invalid status transition: {from} -> {to}")]
    InvalidTransition { from: MissionStatus, to: MissionStatus },

    #[error("Mission {0} has no modules")]
    EmptyManifest(Uuid),

    #[error("Customer {0} is not a moderator")]
    NotModerator(Uuid),
}

impl MissionError {
    /// True for failures coming from the database rather than from the workflow.
    pub fn is_storage(&self) -> bool {
        matches!(self, Self::Storage(_))
    }
}

pub type Result<T> = std::result::Result<T, MissionError>;
