use async_trait::async_trait;
use sea_orm::{ActiveValue::Set, ModelTrait};

use crate::ent::{
    Builder, Client, Create, Delete, DeleteOne, EntError, Mutation, Op, Schema, Update,
    UpdateOne, Updater, default_to, validate,
};
use crate::entities::enums::ActivityField;
use crate::entities::{activity, user, work_order};

pub struct Activity;

pub type ActivityCreate = Create<Activity>;
pub type ActivityUpdate = Update<Activity>;
pub type ActivityUpdateOne = UpdateOne<Activity>;
pub type ActivityDelete = Delete<Activity>;
pub type ActivityDeleteOne = DeleteOne<Activity>;

#[async_trait]
impl Schema for Activity {
    type Entity = activity::Entity;
    type Model = activity::Model;
    type ActiveModel = activity::ActiveModel;
    type Edges = ();

    const TYPE: &'static str = "Activity";

    fn id_column() -> activity::Column {
        activity::Column::Id
    }

    fn id_of(model: &activity::Model) -> i32 {
        model.id
    }

    fn defaults(mutation: &mut Mutation<Self>) {
        let op = mutation.op();
        let fields = mutation.fields_mut();
        super::stamp(op, &mut fields.create_time, &mut fields.update_time);
        if op == Op::Create {
            default_to(&mut fields.is_create, || false);
        }
    }

    fn check(mutation: &Mutation<Self>) -> Result<(), EntError> {
        let fields = mutation.fields();
        if mutation.op() == Op::Create {
            validate::require(Self::TYPE, "changed_field", &fields.changed_field)?;
            validate::require_edge(Self::TYPE, "work_order", &fields.work_order_id)?;
        } else {
            validate::keep_edge(Self::TYPE, "work_order", &fields.work_order_id)?;
        }
        Ok(())
    }

    super::hook_slot!(activity);
}

pub trait ActivityMutator: Builder<Activity> {
    fn set_changed_field(mut self, field: ActivityField) -> Self {
        self.mutation_mut().fields_mut().changed_field = Set(field);
        self
    }

    fn set_is_create(mut self, is_create: impl Into<Option<bool>>) -> Self {
        if let Some(is_create) = is_create.into() {
            self.mutation_mut().fields_mut().is_create = Set(is_create);
        }
        self
    }

    fn set_old_value(mut self, old: impl Into<Option<String>>) -> Self {
        if let Some(old) = old.into() {
            self.mutation_mut().fields_mut().old_value = Set(Some(old));
        }
        self
    }

    fn set_new_value(mut self, new: impl Into<Option<String>>) -> Self {
        if let Some(new) = new.into() {
            self.mutation_mut().fields_mut().new_value = Set(Some(new));
        }
        self
    }

    fn set_author_id(mut self, id: impl Into<Option<i32>>) -> Self {
        if let Some(id) = id.into() {
            self.mutation_mut().fields_mut().author_id = Set(Some(id));
        }
        self
    }

    fn set_work_order_id(mut self, id: i32) -> Self {
        self.mutation_mut().fields_mut().work_order_id = Set(Some(id));
        self
    }
}

impl<T: Builder<Activity>> ActivityMutator for T {}

pub trait ActivityUpdater: Updater<Activity> {
    fn clear_old_value(mut self) -> Self {
        self.mutation_mut().fields_mut().old_value = Set(None);
        self
    }

    fn clear_new_value(mut self) -> Self {
        self.mutation_mut().fields_mut().new_value = Set(None);
        self
    }

    fn clear_author(mut self) -> Self {
        self.mutation_mut().fields_mut().author_id = Set(None);
        self
    }
}

impl<T: Updater<Activity>> ActivityUpdater for T {}

impl activity::Model {
    pub async fn query_author(&self, client: &Client) -> Result<Option<user::Model>, EntError> {
        client.one(self.find_related(user::Entity)).await
    }

    pub async fn query_work_order(&self, client: &Client) -> Result<Option<work_order::Model>, EntError> {
        client.one(self.find_related(work_order::Entity)).await
    }
}
