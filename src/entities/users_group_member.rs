//! `SeaORM` Entity, users group ↔ user junction

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users_group_members")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub users_group_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub user_id: i32,
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
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    User,
}

impl Related<super::users_group::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UsersGroup.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
