use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "modules")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub uuid: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub mass_kg: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::flight::Entity")]
    Flights,
}

impl Related<super::flight::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Flights.def()
    }
}

impl Related<super::mission::Entity> for Entity {
    fn to() -> RelationDef {
        super::flight::Relation::Mission.def()
    }
    fn via() -> Option<RelationDef> {
        Some(super::flight::Relation::Module.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
