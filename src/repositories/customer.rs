//! Customer repository for database operations.

use sea_orm::{ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder};
use uuid::Uuid;

use crate::entities::customer;
use crate::error::Result;

/// Repository for customer-related database operations.
pub struct CustomerRepository;

impl CustomerRepository {
    /// Get a single customer by UUID.
    pub async fn get_by_id<C>(conn: &C, uuid: &Uuid) -> Result<Option<customer::Model>>
    where
        C: ConnectionTrait,
    {
        Ok(customer::Entity::find_by_id(*uuid).one(conn).await?)
    }

    /// Get all customers holding the moderator role, ordered by login.
    pub async fn get_moderators<C>(conn: &C) -> Result<Vec<customer::Model>>
    where
        C: ConnectionTrait,
    {
        Ok(customer::Entity::find()
            .filter(customer::Column::IsModerator.eq(true))
            .order_by_asc(customer::Column::Login)
            .all(conn)
            .await?)
    }

    /// Create a new customer.
    pub async fn create<C>(conn: &C, login: &str, name: &str, is_moderator: bool) -> Result<customer::Model>
    where
        C: ConnectionTrait,
    {
        let model = customer::ActiveModel {
            uuid: ActiveValue::Set(Uuid::new_v4()),
            login: ActiveValue::Set(login.to_string()),
            name: ActiveValue::Set(name.to_string()),
            is_moderator: ActiveValue::Set(is_moderator),
        };
        Ok(model.insert(conn).await?)
    }
}
