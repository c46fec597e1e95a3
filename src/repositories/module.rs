//! Module repository for database operations.

use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, EntityTrait, QueryOrder};
use uuid::Uuid;

use crate::entities::module;
use crate::error::Result;

/// Repository for module-related database operations.
pub struct ModuleRepository;

impl ModuleRepository {
    /// Get all modules ordered by name.
    pub async fn get_all<C>(conn: &C) -> Result<Vec<module::Model>>
    where
        C: ConnectionTrait,
    {
        Ok(module::Entity::find()
            .order_by_asc(module::Column::Name)
            .all(conn)
            .await?)
    }

    /// Get a single module by UUID.
    pub async fn get_by_id<C>(conn: &C, uuid: &Uuid) -> Result<Option<module::Model>>
    where
        C: ConnectionTrait,
    {
        Ok(module::Entity::find_by_id(*uuid).one(conn).await?)
    }

    /// Create a new module.
    pub async fn create<C>(conn: &C, name: &str, description: Option<&str>, mass_kg: f64) -> Result<module::Model>
    where
        C: ConnectionTrait,
    {
        let model = module::ActiveModel {
            uuid: ActiveValue::Set(Uuid::new_v4()),
            name: ActiveValue::Set(name.to_string()),
            description: ActiveValue::Set(description.map(str::to_string)),
            mass_kg: ActiveValue::Set(mass_kg),
        };
        Ok(model.insert(conn).await?)
    }
}
