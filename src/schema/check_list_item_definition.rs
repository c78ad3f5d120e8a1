use async_trait::async_trait;
use sea_orm::{ActiveValue::Set, ModelTrait};

use crate::ent::{
    Builder, Client, Create, Delete, DeleteOne, EntError, Mutation, Op, Schema, Update,
    UpdateOne, Updater, validate, value,
};
use crate::entities::enums::{CheckListItemType, EnumSelectionMode};
use crate::entities::{check_list_category_definition, check_list_item_definition};

pub struct CheckListItemDefinition;

pub type CheckListItemDefinitionCreate = Create<CheckListItemDefinition>;
pub type CheckListItemDefinitionUpdate = Update<CheckListItemDefinition>;
pub type CheckListItemDefinitionUpdateOne = UpdateOne<CheckListItemDefinition>;
pub type CheckListItemDefinitionDelete = Delete<CheckListItemDefinition>;
pub type CheckListItemDefinitionDeleteOne = DeleteOne<CheckListItemDefinition>;

#[async_trait]
impl Schema for CheckListItemDefinition {
    type Entity = check_list_item_definition::Entity;
    type Model = check_list_item_definition::Model;
    type ActiveModel = check_list_item_definition::ActiveModel;
    type Edges = ();

    const TYPE: &'static str = "CheckListItemDefinition";

    fn id_column() -> check_list_item_definition::Column {
        check_list_item_definition::Column::Id
    }

    fn id_of(model: &check_list_item_definition::Model) -> i32 {
        model.id
    }

    fn defaults(mutation: &mut Mutation<Self>) {
        let op = mutation.op();
        let fields = mutation.fields_mut();
        super::stamp(op, &mut fields.create_time, &mut fields.update_time);
    }

    fn check(mutation: &Mutation<Self>) -> Result<(), EntError> {
        let fields = mutation.fields();
        if mutation.op() == Op::Create {
            validate::require(Self::TYPE, "title", &fields.title)?;
            validate::require(Self::TYPE, "type", &fields.item_type)?;
            validate::require_edge(Self::TYPE, "check_list_category_definition", &fields.check_list_category_definition_id)?;
        } else {
            validate::keep_edge(Self::TYPE, "check_list_category_definition", &fields.check_list_category_definition_id)?;
        }
        if let Some(title) = value(&fields.title) {
            validate::not_empty(Self::TYPE, "title", title)?;
        }
        if let Some(item_type) = value(&fields.item_type) {
            validate::one_of::<CheckListItemType>(Self::TYPE, "type", item_type)?;
        }
        Ok(())
    }

    super::hook_slot!(check_list_item_definition);
}

pub trait CheckListItemDefinitionMutator: Builder<CheckListItemDefinition> {
    fn set_title(mut self, title: impl Into<String>) -> Self {
        self.mutation_mut().fields_mut().title = Set(title.into());
        self
    }

    /// Stored as text; anything outside [`CheckListItemType`] fails
    /// validation on save.
    fn set_type(mut self, item_type: impl Into<String>) -> Self {
        self.mutation_mut().fields_mut().item_type = Set(item_type.into());
        self
    }

    fn set_item_type(self, item_type: CheckListItemType) -> Self {
        self.set_type(item_type.to_string())
    }

    fn set_index(mut self, index: impl Into<Option<i32>>) -> Self {
        if let Some(index) = index.into() {
            self.mutation_mut().fields_mut().index = Set(Some(index));
        }
        self
    }

    fn set_enum_values(mut self, values: impl Into<Option<String>>) -> Self {
        if let Some(values) = values.into() {
            self.mutation_mut().fields_mut().enum_values = Set(Some(values));
        }
        self
    }

    fn set_enum_selection_mode(mut self, mode: impl Into<Option<EnumSelectionMode>>) -> Self {
        if let Some(mode) = mode.into() {
            self.mutation_mut().fields_mut().enum_selection_mode_value = Set(Some(mode));
        }
        self
    }

    fn set_help_text(mut self, help_text: impl Into<Option<String>>) -> Self {
        if let Some(help_text) = help_text.into() {
            self.mutation_mut().fields_mut().help_text = Set(Some(help_text));
        }
        self
    }

    fn set_category_id(mut self, id: i32) -> Self {
        self.mutation_mut().fields_mut().check_list_category_definition_id = Set(Some(id));
        self
    }

    fn set_category(self, category: &check_list_category_definition::Model) -> Self {
        self.set_category_id(category.id)
    }
}

impl<T: Builder<CheckListItemDefinition>> CheckListItemDefinitionMutator for T {}

pub trait CheckListItemDefinitionUpdater: Updater<CheckListItemDefinition> {
    fn clear_index(mut self) -> Self {
        self.mutation_mut().fields_mut().index = Set(None);
        self
    }

    fn clear_enum_values(mut self) -> Self {
        self.mutation_mut().fields_mut().enum_values = Set(None);
        self
    }

    fn clear_enum_selection_mode(mut self) -> Self {
        self.mutation_mut().fields_mut().enum_selection_mode_value = Set(None);
        self
    }

    fn clear_help_text(mut self) -> Self {
        self.mutation_mut().fields_mut().help_text = Set(None);
        self
    }
}

impl<T: Updater<CheckListItemDefinition>> CheckListItemDefinitionUpdater for T {}

impl check_list_item_definition::Model {
    pub async fn query_category(
        &self,
        client: &Client,
    ) -> Result<Option<check_list_category_definition::Model>, EntError> {
        client
            .one(self.find_related(check_list_category_definition::Entity))
            .await
    }
}
