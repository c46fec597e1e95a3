//! Mission repository for database operations.

use std::collections::{HashMap, HashSet};

use chrono::{DateTime, Utc};
use sea_orm::sea_query::{Expr, Func, LikeExpr, OnConflict, SimpleExpr};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, EntityTrait, JoinType, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, RelationTrait,
};
use serde::Serialize;
use uuid::Uuid;

use crate::entities::{customer, flight, mission, module, MissionStatus};
use crate::error::Result;

/// How mission listings are narrowed by status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusFilter {
    /// Exactly this status.
    Exact(MissionStatus),
    /// Case-insensitive substring of the stored status text. Empty text matches everything.
    Contains(String),
}

impl StatusFilter {
    fn to_expr(&self) -> SimpleExpr {
        match self {
            Self::Exact(status) => mission::Column::Status.eq(*status),
            Self::Contains(text) => Expr::expr(Func::lower(Expr::col(mission::Column::Status))).like(
                LikeExpr::new(format!("%{}%", escape_like(&text.to_lowercase()))).escape(LIKE_ESCAPE),
            ),
        }
    }
}

const LIKE_ESCAPE: char = '\\';

/// Makes `%`, `_` and the escape character match literally inside a LIKE pattern.
fn escape_like(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '%' | '_' | LIKE_ESCAPE) {
            escaped.push(LIKE_ESCAPE);
        }
        escaped.push(c);
    }
    escaped
}

/// Optional criteria for [`MissionRepository::list`]. The default matches every listed mission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MissionFilter {
    pub customer_id: Option<Uuid>,
    pub formed_from: Option<DateTime<Utc>>,
    pub formed_to: Option<DateTime<Utc>>,
    pub status: Option<StatusFilter>,
}

impl MissionFilter {
    pub fn customer(mut self, customer_id: Uuid) -> Self {
        self.customer_id = Some(customer_id);
        self
    }

    pub fn formed_from(mut self, from: DateTime<Utc>) -> Self {
        self.formed_from = Some(from);
        self
    }

    pub fn formed_to(mut self, to: DateTime<Utc>) -> Self {
        self.formed_to = Some(to);
        self
    }

    pub fn status(mut self, status: StatusFilter) -> Self {
        self.status = Some(status);
        self
    }
}

/// A mission together with its owner and, once moderated, its moderator.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MissionDetails {
    #[serde(flatten)]
    pub mission: mission::Model,
    pub customer: Option<customer::Model>,
    pub moderator: Option<customer::Model>,
}

/// Repository for mission-related database operations.
///
/// Status changes are not validated here: [`MissionRepository::save`] writes
/// whatever status the caller put on the model.
pub struct MissionRepository;

impl MissionRepository {
    /// List formed and moderated missions matching `filter`.
    ///
    /// Drafts and deleted missions are never returned. When both date bounds
    /// are given the formation date must fall inside the inclusive range.
    pub async fn list<C>(conn: &C, filter: &MissionFilter) -> Result<Vec<MissionDetails>>
    where
        C: ConnectionTrait,
    {
        let mut query = mission::Entity::find()
            .filter(mission::Column::Status.ne(MissionStatus::Deleted))
            .filter(mission::Column::Status.ne(MissionStatus::Draft));

        if let Some(status) = &filter.status {
            query = query.filter(status.to_expr());
        }

        if let Some(customer_id) = filter.customer_id {
            query = query.filter(mission::Column::CustomerId.eq(customer_id));
        }

        query = match (filter.formed_from, filter.formed_to) {
            (Some(from), Some(to)) => query.filter(mission::Column::FormationDate.between(from, to)),
            (Some(from), None) => query.filter(mission::Column::FormationDate.gte(from)),
            (None, Some(to)) => query.filter(mission::Column::FormationDate.lte(to)),
            (None, None) => query,
        };

        let missions = query.all(conn).await?;
        Self::with_participants(conn, missions).await
    }

    /// Get the customer's current draft, if there is one.
    pub async fn get_draft<C>(conn: &C, customer_id: &Uuid) -> Result<Option<mission::Model>>
    where
        C: ConnectionTrait,
    {
        Ok(mission::Entity::find()
            .filter(mission::Column::Status.eq(MissionStatus::Draft))
            .filter(mission::Column::CustomerId.eq(*customer_id))
            .order_by_asc(mission::Column::CreationDate)
            .one(conn)
            .await?)
    }

    /// Insert a new draft for the customer.
    ///
    /// An existing draft is not looked up first; callers that need the
    /// one-draft-per-customer convention check [`MissionRepository::get_draft`].
    pub async fn create_draft<C>(conn: &C, customer_id: &Uuid) -> Result<mission::Model>
    where
        C: ConnectionTrait,
    {
        let draft = mission::Model::new_draft(*customer_id, Utc::now());
        Ok(Self::to_active_model(&draft).insert(conn).await?)
    }

    /// Get a mission that has not been deleted.
    ///
    /// With `user_id` the mission must also be owned by that user.
    pub async fn get_by_id<C>(conn: &C, mission_id: &Uuid, user_id: Option<&Uuid>) -> Result<Option<MissionDetails>>
    where
        C: ConnectionTrait,
    {
        let mut query = mission::Entity::find()
            .filter(mission::Column::Uuid.eq(*mission_id))
            .filter(mission::Column::Status.ne(MissionStatus::Deleted));

        if let Some(user_id) = user_id {
            query = query.filter(mission::Column::CustomerId.eq(*user_id));
        }

        match query.one(conn).await? {
            Some(mission) => Ok(Self::with_participants(conn, vec![mission]).await?.pop()),
            None => Ok(None),
        }
    }

    /// Get the modules on a mission's manifest, in no particular order.
    pub async fn get_flight_modules<C>(conn: &C, mission_id: &Uuid) -> Result<Vec<module::Model>>
    where
        C: ConnectionTrait,
    {
        Ok(module::Entity::find()
            .join(JoinType::InnerJoin, module::Relation::Flights.def())
            .filter(flight::Column::MissionId.eq(*mission_id))
            .all(conn)
            .await?)
    }

    /// Write every column of the mission, inserting the row if it is missing.
    pub async fn save<C>(conn: &C, mission: &mission::Model) -> Result<()>
    where
        C: ConnectionTrait,
    {
        mission::Entity::insert(Self::to_active_model(mission))
            .on_conflict(
                OnConflict::column(mission::Column::Uuid)
                    .update_columns([
                        mission::Column::Status,
                        mission::Column::CreationDate,
                        mission::Column::FormationDate,
                        mission::Column::CompletionDate,
                        mission::Column::CustomerId,
                        mission::Column::ModeratorId,
                    ])
                    .to_owned(),
            )
            .exec_without_returning(conn)
            .await?;
        Ok(())
    }

    /// Attach a module to a mission. Attaching it twice keeps a single flight.
    pub async fn add_module<C>(conn: &C, mission_id: &Uuid, module_id: &Uuid) -> Result<()>
    where
        C: ConnectionTrait,
    {
        let flight = flight::ActiveModel {
            mission_id: ActiveValue::Set(*mission_id),
            module_id: ActiveValue::Set(*module_id),
        };

        flight::Entity::insert(flight)
            .on_conflict(
                OnConflict::columns([flight::Column::MissionId, flight::Column::ModuleId])
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(conn)
            .await?;
        Ok(())
    }

    /// Detach a module from a mission and return the number of flights removed.
    ///
    /// Removing a module that is not attached removes nothing and succeeds.
    pub async fn remove_module<C>(conn: &C, mission_id: &Uuid, module_id: &Uuid) -> Result<u64>
    where
        C: ConnectionTrait,
    {
        let result = flight::Entity::delete_many()
            .filter(flight::Column::MissionId.eq(*mission_id))
            .filter(flight::Column::ModuleId.eq(*module_id))
            .exec(conn)
            .await?;
        Ok(result.rows_affected)
    }

    /// Count the modules attached to a mission.
    pub async fn count_modules<C>(conn: &C, mission_id: &Uuid) -> Result<u64>
    where
        C: ConnectionTrait,
    {
        Ok(flight::Entity::find()
            .filter(flight::Column::MissionId.eq(*mission_id))
            .count(conn)
            .await?)
    }

    fn to_active_model(mission: &mission::Model) -> mission::ActiveModel {
        mission::ActiveModel {
            uuid: ActiveValue::Set(mission.uuid),
            status: ActiveValue::Set(mission.status),
            creation_date: ActiveValue::Set(mission.creation_date),
            formation_date: ActiveValue::Set(mission.formation_date),
            completion_date: ActiveValue::Set(mission.completion_date),
            customer_id: ActiveValue::Set(mission.customer_id),
            moderator_id: ActiveValue::Set(mission.moderator_id),
        }
    }

    /// Load owners and moderators for a batch of missions with a single query.
    async fn with_participants<C>(conn: &C, missions: Vec<mission::Model>) -> Result<Vec<MissionDetails>>
    where
        C: ConnectionTrait,
    {
        let ids: HashSet<Uuid> = missions
            .iter()
            .flat_map(|m| std::iter::once(m.customer_id).chain(m.moderator_id))
            .collect();

        let customers: HashMap<Uuid, customer::Model> = if ids.is_empty() {
            HashMap::new()
        } else {
            customer::Entity::find()
                .filter(customer::Column::Uuid.is_in(ids))
                .all(conn)
                .await?
                .into_iter()
                .map(|c| (c.uuid, c))
                .collect()
        };

        Ok(missions
            .into_iter()
            .map(|mission| {
                let customer = customers.get(&mission.customer_id).cloned();
                let moderator = mission.moderator_id.and_then(|id| customers.get(&id).cloned());
                MissionDetails {
                    mission,
                    customer,
                    moderator,
                }
            })
            .collect())
    }
}
