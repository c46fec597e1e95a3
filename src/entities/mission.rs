//! Mission entity and its status enumeration.

use std::fmt;

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "missions")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub uuid: Uuid,
    pub status: MissionStatus,
    pub creation_date: DateTimeUtc,
    pub formation_date: Option<DateTimeUtc>,
    pub completion_date: Option<DateTimeUtc>,
    pub customer_id: Uuid,
    pub moderator_id: Option<Uuid>,
}

/// Lifecycle status of a mission, stored as lower-case text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Text")]
#[serde(rename_all = "lowercase")]
pub enum MissionStatus {
    #[sea_orm(string_value = "draft")]
    Draft,
    #[sea_orm(string_value = "formed")]
    Formed,
    #[sea_orm(string_value = "completed")]
    Completed,
    #[sea_orm(string_value = "rejected")]
    Rejected,
    #[sea_orm(string_value = "deleted")]
    Deleted,
}

impl MissionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Formed => "formed",
            Self::Completed => "completed",
            Self::Rejected => "rejected",
            Self::Deleted => "deleted",
        }
    }

    /// Whether a mission in this status may move to `next`.
    ///
    /// Drafts are formed or deleted by their owner; formed missions are
    /// completed or rejected by a moderator. Every other move is refused.
    pub fn can_transition_to(&self, next: MissionStatus) -> bool {
        matches!(
            (self, next),
            (Self::Draft, Self::Formed)
                | (Self::Draft, Self::Deleted)
                | (Self::Formed, Self::Completed)
                | (Self::Formed, Self::Rejected)
        )
    }

    /// Statuses that never show up in mission listings.
    pub fn is_hidden(&self) -> bool {
        matches!(self, Self::Draft | Self::Deleted)
    }
}

impl fmt::Display for MissionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::customer::Entity",
        from = "Column::CustomerId",
        to = "super::customer::Column::Uuid"
    )]
    Customer,
    #[sea_orm(
        belongs_to = "super::customer::Entity",
        from = "Column::ModeratorId",
        to = "super::customer::Column::Uuid",
        on_delete = "SetNull"
    )]
    Moderator,
    #[sea_orm(has_many = "super::flight::Entity")]
    Flights,
}

impl Related<super::customer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Customer.def()
    }
}

impl Related<super::flight::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Flights.def()
    }
}

impl Related<super::module::Entity> for Entity {
    fn to() -> RelationDef {
        super::flight::Relation::Module.def()
    }
    fn via() -> Option<RelationDef> {
        Some(super::flight::Relation::Mission.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Builds a fresh draft owned by `customer_id`.
    pub fn new_draft(customer_id: Uuid, now: DateTimeUtc) -> Self {
        Self {
            uuid: Uuid::new_v4(),
            status: MissionStatus::Draft,
            creation_date: now,
            formation_date: None,
            completion_date: None,
            customer_id,
            moderator_id: None,
        }
    }

    pub fn is_draft(&self) -> bool {
        self.status == MissionStatus::Draft
    }

    /// Submits the draft for moderation.
    pub fn form(&mut self, at: DateTimeUtc) {
        self.status = MissionStatus::Formed;
        self.formation_date = Some(at);
    }

    /// Records the moderator's decision on a formed mission.
    pub fn moderate(&mut self, moderator_id: Uuid, approve: bool, at: DateTimeUtc) {
        self.status = if approve {
            MissionStatus::Completed
        } else {
            MissionStatus::Rejected
        };
        self.moderator_id = Some(moderator_id);
        self.completion_date = Some(at);
    }

    pub fn soft_delete(&mut self) {
        self.status = MissionStatus::Deleted;
    }
}
