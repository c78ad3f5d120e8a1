//! `SeaORM` Entity, automation actions rule

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "actions_rules")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub create_time: DateTimeUtc,
    pub update_time: DateTimeUtc,
    pub name: String,
    pub trigger_id: String,
    pub rule_filters: Json,
    pub rule_actions: Json,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
