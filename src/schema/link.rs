use async_trait::async_trait;
use sea_orm::{ActiveValue::Set, ModelTrait};

use crate::ent::{
    Builder, Client, Create, Delete, DeleteOne, EntError, Mutation, Schema, Update, UpdateOne,
    Updater,
};
use crate::entities::enums::FutureState;
use crate::entities::{link, work_order};

pub struct Link;

pub type LinkCreate = Create<Link>;
pub type LinkUpdate = Update<Link>;
pub type LinkUpdateOne = UpdateOne<Link>;
pub type LinkDelete = Delete<Link>;
pub type LinkDeleteOne = DeleteOne<Link>;

#[async_trait]
impl Schema for Link {
    type Entity = link::Entity;
    type Model = link::Model;
    type ActiveModel = link::ActiveModel;
    type Edges = ();

    const TYPE: &'static str = "Link";

    fn id_column() -> link::Column {
        link::Column::Id
    }

    fn id_of(model: &link::Model) -> i32 {
        model.id
    }

    fn defaults(mutation: &mut Mutation<Self>) {
        let op = mutation.op();
        let fields = mutation.fields_mut();
        super::stamp(op, &mut fields.create_time, &mut fields.update_time);
    }

    fn check(_mutation: &Mutation<Self>) -> Result<(), EntError> {
        Ok(())
    }

    super::hook_slot!(link);
}

pub trait LinkMutator: Builder<Link> {
    fn set_future_state(mut self, state: impl Into<Option<FutureState>>) -> Self {
        if let Some(state) = state.into() {
            self.mutation_mut().fields_mut().future_state = Set(Some(state));
        }
        self
    }

    fn set_work_order_id(mut self, id: impl Into<Option<i32>>) -> Self {
        if let Some(id) = id.into() {
            self.mutation_mut().fields_mut().work_order_id = Set(Some(id));
        }
        self
    }

    fn set_work_order(self, work_order: &work_order::Model) -> Self {
        self.set_work_order_id(work_order.id)
    }
}

impl<T: Builder<Link>> LinkMutator for T {}

pub trait LinkUpdater: Updater<Link> {
    fn clear_future_state(mut self) -> Self {
        self.mutation_mut().fields_mut().future_state = Set(None);
        self
    }

    fn clear_work_order(mut self) -> Self {
        self.mutation_mut().fields_mut().work_order_id = Set(None);
        self
    }
}

impl<T: Updater<Link>> LinkUpdater for T {}

impl link::Model {
    pub async fn query_work_order(&self, client: &Client) -> Result<Option<work_order::Model>, EntError> {
        client.one(self.find_related(work_order::Entity)).await
    }
}
