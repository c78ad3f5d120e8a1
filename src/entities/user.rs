//! `SeaORM` Entity, workforce user

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::enums::{UserRole, UserStatus};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub create_time: DateTimeUtc,
    pub update_time: DateTimeUtc,
    #[sea_orm(unique)]
    pub auth_id: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub status: UserStatus,
    pub role: UserRole,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::users_group_member::Entity")]
    UsersGroupMember,
    #[sea_orm(has_many = "super::activity::Entity")]
    Activity,
}

impl Related<super::users_group_member::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UsersGroupMember.def()
    }
}

impl Related<super::users_group::Entity> for Entity {
    fn to() -> RelationDef {
        super::users_group_member::Relation::UsersGroup.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::users_group_member::Relation::User.def().rev())
    }
}

impl Related<super::activity::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Activity.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
