use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveValue::Set, DatabaseTransaction, EntityTrait, ModelTrait};

use crate::ent::{
    Builder, Client, Create, Delete, DeleteOne, EdgeIds, EntError, Mutation, O2m, Op, Schema,
    Update, UpdateOne, Updater, default_to, validate, value,
};
use crate::entities::enums::{WorkOrderPriority, WorkOrderStatus};
use crate::entities::{activity, link, location, user, work_order, work_order_type};

pub struct WorkOrder;

#[derive(Debug, Clone, Default)]
pub struct WorkOrderEdges {
    pub links: EdgeIds,
}

pub type WorkOrderCreate = Create<WorkOrder>;
pub type WorkOrderUpdate = Update<WorkOrder>;
pub type WorkOrderUpdateOne = UpdateOne<WorkOrder>;
pub type WorkOrderDelete = Delete<WorkOrder>;
pub type WorkOrderDeleteOne = DeleteOne<WorkOrder>;

const LINKS: O2m<link::Entity> = O2m {
    target: "Link",
    id: link::Column::Id,
    fk: link::Column::WorkOrderId,
};

#[async_trait]
impl Schema for WorkOrder {
    type Entity = work_order::Entity;
    type Model = work_order::Model;
    type ActiveModel = work_order::ActiveModel;
    type Edges = WorkOrderEdges;

    const TYPE: &'static str = "WorkOrder";

    fn id_column() -> work_order::Column {
        work_order::Column::Id
    }

    fn id_of(model: &work_order::Model) -> i32 {
        model.id
    }

    fn defaults(mutation: &mut Mutation<Self>) {
        let op = mutation.op();
        let fields = mutation.fields_mut();
        super::stamp(op, &mut fields.create_time, &mut fields.update_time);
        if op == Op::Create {
            default_to(&mut fields.status, || WorkOrderStatus::Planned);
            default_to(&mut fields.priority, || WorkOrderPriority::None);
        }
    }

    fn check(mutation: &Mutation<Self>) -> Result<(), EntError> {
        let fields = mutation.fields();
        if mutation.op() == Op::Create {
            validate::require(Self::TYPE, "name", &fields.name)?;
            validate::require(Self::TYPE, "creation_date", &fields.creation_date)?;
            validate::require_edge(Self::TYPE, "owner", &fields.owner_id)?;
        } else {
            validate::keep_edge(Self::TYPE, "owner", &fields.owner_id)?;
        }
        if let Some(name) = value(&fields.name) {
            validate::not_empty(Self::TYPE, "name", name)?;
        }
        Ok(())
    }

    async fn save_edges(tx: &DatabaseTransaction, id: i32, edges: &WorkOrderEdges) -> Result<(), EntError> {
        LINKS.apply(tx, id, &edges.links).await
    }

    super::hook_slot!(work_order);
}

/// Setters shared by every work order builder and by hooks.
pub trait WorkOrderMutator: Builder<WorkOrder> {
    fn set_name(mut self, name: impl Into<String>) -> Self {
        self.mutation_mut().fields_mut().name = Set(name.into());
        self
    }

    fn set_status(mut self, status: impl Into<Option<WorkOrderStatus>>) -> Self {
        if let Some(status) = status.into() {
            self.mutation_mut().fields_mut().status = Set(status);
        }
        self
    }

    fn set_priority(mut self, priority: impl Into<Option<WorkOrderPriority>>) -> Self {
        if let Some(priority) = priority.into() {
            self.mutation_mut().fields_mut().priority = Set(priority);
        }
        self
    }

    fn set_description(mut self, description: impl Into<Option<String>>) -> Self {
        if let Some(description) = description.into() {
            self.mutation_mut().fields_mut().description = Set(Some(description));
        }
        self
    }

    fn set_install_date(mut self, date: impl Into<Option<DateTime<Utc>>>) -> Self {
        if let Some(date) = date.into() {
            self.mutation_mut().fields_mut().install_date = Set(Some(date));
        }
        self
    }

    fn set_creation_date(mut self, date: DateTime<Utc>) -> Self {
        self.mutation_mut().fields_mut().creation_date = Set(date);
        self
    }

    fn set_index(mut self, index: impl Into<Option<i32>>) -> Self {
        if let Some(index) = index.into() {
            self.mutation_mut().fields_mut().index = Set(Some(index));
        }
        self
    }

    fn set_close_date(mut self, date: impl Into<Option<DateTime<Utc>>>) -> Self {
        if let Some(date) = date.into() {
            self.mutation_mut().fields_mut().close_date = Set(Some(date));
        }
        self
    }

    fn set_type_id(mut self, id: impl Into<Option<i32>>) -> Self {
        if let Some(id) = id.into() {
            self.mutation_mut().fields_mut().work_order_type_id = Set(Some(id));
        }
        self
    }

    fn set_type(self, work_order_type: &work_order_type::Model) -> Self {
        self.set_type_id(work_order_type.id)
    }

    fn set_location_id(mut self, id: impl Into<Option<i32>>) -> Self {
        if let Some(id) = id.into() {
            self.mutation_mut().fields_mut().location_id = Set(Some(id));
        }
        self
    }

    fn set_location(self, location: &location::Model) -> Self {
        self.set_location_id(location.id)
    }

    fn set_owner_id(mut self, id: i32) -> Self {
        self.mutation_mut().fields_mut().owner_id = Set(Some(id));
        self
    }

    fn set_owner(self, owner: &user::Model) -> Self {
        self.set_owner_id(owner.id)
    }

    fn set_assignee_id(mut self, id: impl Into<Option<i32>>) -> Self {
        if let Some(id) = id.into() {
            self.mutation_mut().fields_mut().assignee_id = Set(Some(id));
        }
        self
    }

    fn set_assignee(self, assignee: &user::Model) -> Self {
        self.set_assignee_id(assignee.id)
    }

    fn add_link_ids(mut self, ids: impl IntoIterator<Item = i32>) -> Self {
        self.mutation_mut().edges_mut().links.add(ids);
        self
    }

    fn add_links(self, links: &[link::Model]) -> Self {
        self.add_link_ids(links.iter().map(|l| l.id))
    }
}

impl<T: Builder<WorkOrder>> WorkOrderMutator for T {}

/// Clearing operations, only available when updating.
pub trait WorkOrderUpdater: Updater<WorkOrder> {
    fn clear_description(mut self) -> Self {
        self.mutation_mut().fields_mut().description = Set(None);
        self
    }

    fn clear_install_date(mut self) -> Self {
        self.mutation_mut().fields_mut().install_date = Set(None);
        self
    }

    fn clear_index(mut self) -> Self {
        self.mutation_mut().fields_mut().index = Set(None);
        self
    }

    fn clear_close_date(mut self) -> Self {
        self.mutation_mut().fields_mut().close_date = Set(None);
        self
    }

    fn clear_type(mut self) -> Self {
        self.mutation_mut().fields_mut().work_order_type_id = Set(None);
        self
    }

    fn clear_location(mut self) -> Self {
        self.mutation_mut().fields_mut().location_id = Set(None);
        self
    }

    fn clear_assignee(mut self) -> Self {
        self.mutation_mut().fields_mut().assignee_id = Set(None);
        self
    }

    fn remove_link_ids(mut self, ids: impl IntoIterator<Item = i32>) -> Self {
        self.mutation_mut().edges_mut().links.remove(ids);
        self
    }

    fn clear_links(mut self) -> Self {
        self.mutation_mut().edges_mut().links.clear();
        self
    }
}

impl<T: Updater<WorkOrder>> WorkOrderUpdater for T {}

impl work_order::Model {
    pub async fn query_type(&self, client: &Client) -> Result<Option<work_order_type::Model>, EntError> {
        match self.work_order_type_id {
            Some(id) => client.one(work_order_type::Entity::find_by_id(id)).await,
            None => Ok(None),
        }
    }

    pub async fn query_location(&self, client: &Client) -> Result<Option<location::Model>, EntError> {
        match self.location_id {
            Some(id) => client.one(location::Entity::find_by_id(id)).await,
            None => Ok(None),
        }
    }

    pub async fn query_owner(&self, client: &Client) -> Result<Option<user::Model>, EntError> {
        match self.owner_id {
            Some(id) => client.one(user::Entity::find_by_id(id)).await,
            None => Ok(None),
        }
    }

    pub async fn query_assignee(&self, client: &Client) -> Result<Option<user::Model>, EntError> {
        match self.assignee_id {
            Some(id) => client.one(user::Entity::find_by_id(id)).await,
            None => Ok(None),
        }
    }

    pub async fn query_links(&self, client: &Client) -> Result<Vec<link::Model>, EntError> {
        client.all(self.find_related(link::Entity)).await
    }

    pub async fn query_activities(&self, client: &Client) -> Result<Vec<activity::Model>, EntError> {
        client.all(self.find_related(activity::Entity)).await
    }
}
