use async_trait::async_trait;
use sea_orm::{ActiveValue::Set, DatabaseTransaction, ModelTrait};

use crate::ent::{
    Builder, Client, Create, Delete, DeleteOne, EdgeIds, EntError, Mutation, O2m, Op, Schema,
    Update, UpdateOne, Updater, validate, value,
};
use crate::entities::{check_list_category_definition, check_list_item_definition, work_order_type};

pub struct CheckListCategoryDefinition;

#[derive(Debug, Clone, Default)]
pub struct CheckListCategoryDefinitionEdges {
    pub items: EdgeIds,
}

pub type CheckListCategoryDefinitionCreate = Create<CheckListCategoryDefinition>;
pub type CheckListCategoryDefinitionUpdate = Update<CheckListCategoryDefinition>;
pub type CheckListCategoryDefinitionUpdateOne = UpdateOne<CheckListCategoryDefinition>;
pub type CheckListCategoryDefinitionDelete = Delete<CheckListCategoryDefinition>;
pub type CheckListCategoryDefinitionDeleteOne = DeleteOne<CheckListCategoryDefinition>;

const ITEMS: O2m<check_list_item_definition::Entity> = O2m {
    target: "CheckListItemDefinition",
    id: check_list_item_definition::Column::Id,
    fk: check_list_item_definition::Column::CheckListCategoryDefinitionId,
};

#[async_trait]
impl Schema for CheckListCategoryDefinition {
    type Entity = check_list_category_definition::Entity;
    type Model = check_list_category_definition::Model;
    type ActiveModel = check_list_category_definition::ActiveModel;
    type Edges = CheckListCategoryDefinitionEdges;

    const TYPE: &'static str = "CheckListCategoryDefinition";

    fn id_column() -> check_list_category_definition::Column {
        check_list_category_definition::Column::Id
    }

    fn id_of(model: &check_list_category_definition::Model) -> i32 {
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
            validate::require_edge(Self::TYPE, "work_order_type", &fields.work_order_type_id)?;
        } else {
            validate::keep_edge(Self::TYPE, "work_order_type", &fields.work_order_type_id)?;
        }
        if let Some(title) = value(&fields.title) {
            validate::not_empty(Self::TYPE, "title", title)?;
        }
        Ok(())
    }

    async fn save_edges(
        tx: &DatabaseTransaction,
        id: i32,
        edges: &CheckListCategoryDefinitionEdges,
    ) -> Result<(), EntError> {
        ITEMS.apply(tx, id, &edges.items).await
    }

    super::hook_slot!(check_list_category_definition);
}

pub trait CheckListCategoryDefinitionMutator: Builder<CheckListCategoryDefinition> {
    fn set_title(mut self, title: impl Into<String>) -> Self {
        self.mutation_mut().fields_mut().title = Set(title.into());
        self
    }

    fn set_description(mut self, description: impl Into<Option<String>>) -> Self {
        if let Some(description) = description.into() {
            self.mutation_mut().fields_mut().description = Set(Some(description));
        }
        self
    }

    fn set_work_order_type_id(mut self, id: i32) -> Self {
        self.mutation_mut().fields_mut().work_order_type_id = Set(Some(id));
        self
    }

    fn set_work_order_type(self, work_order_type: &work_order_type::Model) -> Self {
        self.set_work_order_type_id(work_order_type.id)
    }

    fn add_item_ids(mut self, ids: impl IntoIterator<Item = i32>) -> Self {
        self.mutation_mut().edges_mut().items.add(ids);
        self
    }
}

impl<T: Builder<CheckListCategoryDefinition>> CheckListCategoryDefinitionMutator for T {}

pub trait CheckListCategoryDefinitionUpdater: Updater<CheckListCategoryDefinition> {
    fn clear_description(mut self) -> Self {
        self.mutation_mut().fields_mut().description = Set(None);
        self
    }
}

impl<T: Updater<CheckListCategoryDefinition>> CheckListCategoryDefinitionUpdater for T {}

impl check_list_category_definition::Model {
    pub async fn query_work_order_type(&self, client: &Client) -> Result<Option<work_order_type::Model>, EntError> {
        client.one(self.find_related(work_order_type::Entity)).await
    }

    pub async fn query_items(&self, client: &Client) -> Result<Vec<check_list_item_definition::Model>, EntError> {
        client
            .all(self.find_related(check_list_item_definition::Entity))
            .await
    }
}
