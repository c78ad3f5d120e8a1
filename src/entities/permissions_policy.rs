//! `SeaORM` Entity, permissions policy

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "permissions_policies")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub create_time: DateTimeUtc,
    pub update_time: DateTimeUtc,
    #[sea_orm(unique)]
    pub name: String,
    pub description: Option<String>,
    pub is_global: bool,
    pub inventory_policy: Option<Json>,
    pub workforce_policy: Option<Json>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::users_group_policy::Entity")]
    UsersGroupPolicy,
}

impl Related<super::users_group_policy::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UsersGroupPolicy.def()
    }
}

impl Related<super::users_group::Entity> for Entity {
    fn to() -> RelationDef {
        super::users_group_policy::Relation::UsersGroup.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::users_group_policy::Relation::PermissionsPolicy.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
