//! `SeaORM` Entity, work order type

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "work_order_types")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub create_time: DateTimeUtc,
    pub update_time: DateTimeUtc,
    pub name: String,
    pub description: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::work_order::Entity")]
    WorkOrder,
    #[sea_orm(has_many = "super::check_list_category_definition::Entity")]
    CheckListCategoryDefinition,
}

impl Related<super::work_order::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::WorkOrder.def()
    }
}

impl Related<super::check_list_category_definition::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CheckListCategoryDefinition.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
