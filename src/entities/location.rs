//! `SeaORM` Entity, location

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "locations")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub create_time: DateTimeUtc,
    pub update_time: DateTimeUtc,
    pub name: String,
    #[sea_orm(unique)]
    pub external_id: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    pub site_survey_needed: bool,
    pub location_type_id: Option<i32>,
    pub parent_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::location_type::Entity",
        from = "Column::LocationTypeId",
        to = "super::location_type::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    LocationType,
    #[sea_orm(
        belongs_to = "Entity",
        from = "Column::ParentId",
        to = "Column::Id",
        on_update = "NoAction",
        on_delete = "SetNull"
    )]
    Parent,
    #[sea_orm(has_many = "super::work_order::Entity")]
    WorkOrder,
}

impl Related<super::location_type::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::LocationType.def()
    }
}

impl Related<super::work_order::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::WorkOrder.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
