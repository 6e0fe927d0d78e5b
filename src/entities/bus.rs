use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "bus")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub company_name: String,
    #[sea_orm(unique)]
    pub bus_number: String,
    pub source: String,
    pub destination: String,
    pub start_time: Time,
    pub end_time: Time,
    pub capacity: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::bus_day::Entity")]
    OperatingDays,
    #[sea_orm(has_many = "super::reservation::Entity")]
    Reservations,
}

impl Related<super::bus_day::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OperatingDays.def()
    }
}

impl Related<super::reservation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Reservations.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
