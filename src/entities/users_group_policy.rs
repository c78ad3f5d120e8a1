//! `SeaORM` Entity, users group ↔ permissions policy junction

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users_group_policies")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub users_group_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub permissions_policy_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users_group::Entity",
        from = "Column::UsersGroupId",
        to = "super::users_group::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    UsersGroup,
    #[sea_orm(
        belongs_to = "super::permissions_policy::Entity",
        from = "Column::PermissionsPolicyId",
        to = "super::permissions_policy::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    PermissionsPolicy,
}

impl Related<super::users_group::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UsersGroup.def()
    }
}

impl Related<super::permissions_policy::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PermissionsPolicy.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
