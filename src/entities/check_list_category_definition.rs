//! `SeaORM` Entity, check list category definition

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "check_list_category_definitions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub create_time: DateTimeUtc,
    pub update_time: DateTimeUtc,
    pub title: String,
    pub description: Option<String>,
    pub work_order_type_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::work_order_type::Entity",
        from = "Column::WorkOrderTypeId",
        to = "super::work_order_type::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    WorkOrderType,
    #[sea_orm(has_many = "super::check_list_item_definition::Entity")]
    CheckListItemDefinition,
}

impl Related<super::work_order_type::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::WorkOrderType.def()
    }
}

impl Related<super::check_list_item_definition::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CheckListItemDefinition.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
