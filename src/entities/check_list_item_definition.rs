//! `SeaORM` Entity, check list item definition

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::enums::EnumSelectionMode;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "check_list_item_definitions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub create_time: DateTimeUtc,
    pub update_time: DateTimeUtc,
    pub title: String,
    #[sea_orm(column_name = "type")]
    pub item_type: String,
    pub index: Option<i32>,
    pub enum_values: Option<String>,
    pub enum_selection_mode_value: Option<EnumSelectionMode>,
    pub help_text: Option<String>,
    pub check_list_category_definition_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::check_list_category_definition::Entity",
        from = "Column::CheckListCategoryDefinitionId",
        to = "super::check_list_category_definition::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    CheckListCategoryDefinition,
}

impl Related<super::check_list_category_definition::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CheckListCategoryDefinition.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
