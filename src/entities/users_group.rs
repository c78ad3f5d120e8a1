//! `SeaORM` Entity, users group

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::enums::UsersGroupStatus;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "users_groups")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub create_time: DateTimeUtc,
    pub update_time: DateTimeUtc,
    #[sea_orm(unique)]
    pub name: String,
    pub description: Option<String>,
    pub status: UsersGroupStatus,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::users_group_member::Entity")]
    UsersGroupMember,
    #[sea_orm(has_many = "super::users_group_policy::Entity")]
    UsersGroupPolicy,
}

impl Related<super::users_group_member::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UsersGroupMember.def()
    }
}

impl Related<super::users_group_policy::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UsersGroupPolicy.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        super::users_group_member::Relation::User.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::users_group_member::Relation::UsersGroup.def().rev())
    }
}

impl Related<super::permissions_policy::Entity> for Entity {
    fn to() -> RelationDef {
        super::users_group_policy::Relation::PermissionsPolicy.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::users_group_policy::Relation::UsersGroup.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
