//! `SeaORM` Entity, work order

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::enums::{WorkOrderPriority, WorkOrderStatus};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "work_orders")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub create_time: DateTimeUtc,
    pub update_time: DateTimeUtc,
    pub name: String,
    pub status: WorkOrderStatus,
    pub priority: WorkOrderPriority,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub install_date: Option<DateTimeUtc>,
    pub creation_date: DateTimeUtc,
    pub index: Option<i32>,
    pub close_date: Option<DateTimeUtc>,
    pub work_order_type_id: Option<i32>,
    pub location_id: Option<i32>,
    pub owner_id: Option<i32>,
    pub assignee_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::work_order_type::Entity",
        from = "Column::WorkOrderTypeId",
        to = "super::work_order_type::Column::Id",
        on_update = "NoAction",
        on_delete = "SetNull"
    )]
    WorkOrderType,
    #[sea_orm(
        belongs_to = "super::location::Entity",
        from = "Column::LocationId",
        to = "super::location::Column::Id",
        on_update = "NoAction",
        on_delete = "SetNull"
    )]
    Location,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::OwnerId",
        to = "super::user::Column::Id",
        on_update = "NoAction",
        on_delete = "SetNull"
    )]
    Owner,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::AssigneeId",
        to = "super::user::Column::Id",
        on_update = "NoAction",
        on_delete = "SetNull"
    )]
    Assignee,
    #[sea_orm(has_many = "super::link::Entity")]
    Link,
    #[sea_orm(has_many = "super::activity::Entity")]
    Activity,
}

impl Related<super::work_order_type::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::WorkOrderType.def()
    }
}

impl Related<super::location::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Location.def()
    }
}

impl Related<super::link::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Link.def()
    }
}

impl Related<super::activity::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Activity.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
