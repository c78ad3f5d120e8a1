use async_trait::async_trait;
use sea_orm::{ActiveValue::Set, DatabaseTransaction, ModelTrait};

use crate::ent::{
    Builder, Client, Create, Delete, DeleteOne, EdgeIds, EntError, Mutation, O2m, Op, Schema,
    Update, UpdateOne, Updater, validate, value,
};
use crate::entities::{check_list_category_definition, work_order, work_order_type};

pub struct WorkOrderType;

#[derive(Debug, Clone, Default)]
pub struct WorkOrderTypeEdges {
    pub work_orders: EdgeIds,
    pub check_list_categories: EdgeIds,
}

pub type WorkOrderTypeCreate = Create<WorkOrderType>;
pub type WorkOrderTypeUpdate = Update<WorkOrderType>;
pub type WorkOrderTypeUpdateOne = UpdateOne<WorkOrderType>;
pub type WorkOrderTypeDelete = Delete<WorkOrderType>;
pub type WorkOrderTypeDeleteOne = DeleteOne<WorkOrderType>;

const WORK_ORDERS: O2m<work_order::Entity> = O2m {
    target: "WorkOrder",
    id: work_order::Column::Id,
    fk: work_order::Column::WorkOrderTypeId,
};

const CHECK_LIST_CATEGORIES: O2m<check_list_category_definition::Entity> = O2m {
    target: "CheckListCategoryDefinition",
    id: check_list_category_definition::Column::Id,
    fk: check_list_category_definition::Column::WorkOrderTypeId,
};

#[async_trait]
impl Schema for WorkOrderType {
    type Entity = work_order_type::Entity;
    type Model = work_order_type::Model;
    type ActiveModel = work_order_type::ActiveModel;
    type Edges = WorkOrderTypeEdges;

    const TYPE: &'static str = "WorkOrderType";

    fn id_column() -> work_order_type::Column {
        work_order_type::Column::Id
    }

    fn id_of(model: &work_order_type::Model) -> i32 {
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
            validate::require(Self::TYPE, "name", &fields.name)?;
        }
        if let Some(name) = value(&fields.name) {
            validate::not_empty(Self::TYPE, "name", name)?;
        }
        Ok(())
    }

    async fn save_edges(tx: &DatabaseTransaction, id: i32, edges: &WorkOrderTypeEdges) -> Result<(), EntError> {
        WORK_ORDERS.apply(tx, id, &edges.work_orders).await?;
        CHECK_LIST_CATEGORIES
            .apply(tx, id, &edges.check_list_categories)
            .await
    }

    super::hook_slot!(work_order_type);
}

pub trait WorkOrderTypeMutator: Builder<WorkOrderType> {
    fn set_name(mut self, name: impl Into<String>) -> Self {
        self.mutation_mut().fields_mut().name = Set(name.into());
        self
    }

    fn set_description(mut self, description: impl Into<Option<String>>) -> Self {
        if let Some(description) = description.into() {
            self.mutation_mut().fields_mut().description = Set(Some(description));
        }
        self
    }

    fn add_work_order_ids(mut self, ids: impl IntoIterator<Item = i32>) -> Self {
        self.mutation_mut().edges_mut().work_orders.add(ids);
        self
    }

    fn add_check_list_category_ids(mut self, ids: impl IntoIterator<Item = i32>) -> Self {
        self.mutation_mut().edges_mut().check_list_categories.add(ids);
        self
    }
}

impl<T: Builder<WorkOrderType>> WorkOrderTypeMutator for T {}

pub trait WorkOrderTypeUpdater: Updater<WorkOrderType> {
    fn clear_description(mut self) -> Self {
        self.mutation_mut().fields_mut().description = Set(None);
        self
    }

    fn remove_work_order_ids(mut self, ids: impl IntoIterator<Item = i32>) -> Self {
        self.mutation_mut().edges_mut().work_orders.remove(ids);
        self
    }

    fn clear_work_orders(mut self) -> Self {
        self.mutation_mut().edges_mut().work_orders.clear();
        self
    }
}

impl<T: Updater<WorkOrderType>> WorkOrderTypeUpdater for T {}

impl work_order_type::Model {
    pub async fn query_work_orders(&self, client: &Client) -> Result<Vec<work_order::Model>, EntError> {
        client.all(self.find_related(work_order::Entity)).await
    }

    pub async fn query_check_list_categories(
        &self,
        client: &Client,
    ) -> Result<Vec<check_list_category_definition::Model>, EntError> {
        client
            .all(self.find_related(check_list_category_definition::Entity))
            .await
    }
}
