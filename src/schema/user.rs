use async_trait::async_trait;
use sea_orm::{ActiveValue::Set, EntityTrait, ModelTrait, QueryFilter, ColumnTrait};

use crate::ent::{
    Builder, Client, Create, Delete, DeleteOne, EntError, Mutation, Op, Schema, Update,
    UpdateOne, Updater, default_to, validate, value,
};
use crate::entities::enums::{UserRole, UserStatus};
use crate::entities::{user, users_group, work_order};

pub struct User;

pub type UserCreate = Create<User>;
pub type UserUpdate = Update<User>;
pub type UserUpdateOne = UpdateOne<User>;
pub type UserDelete = Delete<User>;
pub type UserDeleteOne = DeleteOne<User>;

const NAME_MAX_LEN: usize = 255;

#[async_trait]
impl Schema for User {
    type Entity = user::Entity;
    type Model = user::Model;
    type ActiveModel = user::ActiveModel;
    type Edges = ();

    const TYPE: &'static str = "User";

    fn id_column() -> user::Column {
        user::Column::Id
    }

    fn id_of(model: &user::Model) -> i32 {
        model.id
    }

    fn defaults(mutation: &mut Mutation<Self>) {
        let op = mutation.op();
        let fields = mutation.fields_mut();
        super::stamp(op, &mut fields.create_time, &mut fields.update_time);
        if op == Op::Create {
            default_to(&mut fields.status, || UserStatus::Active);
            default_to(&mut fields.role, || UserRole::User);
        }
    }

    fn check(mutation: &Mutation<Self>) -> Result<(), EntError> {
        let fields = mutation.fields();
        if mutation.op() == Op::Create {
            validate::require(Self::TYPE, "auth_id", &fields.auth_id)?;
        }
        if let Some(auth_id) = value(&fields.auth_id) {
            validate::not_empty(Self::TYPE, "auth_id", auth_id)?;
        }
        if let Some(Some(first_name)) = value(&fields.first_name) {
            validate::max_len(Self::TYPE, "first_name", first_name, NAME_MAX_LEN)?;
        }
        if let Some(Some(last_name)) = value(&fields.last_name) {
            validate::max_len(Self::TYPE, "last_name", last_name, NAME_MAX_LEN)?;
        }
        if let Some(Some(email)) = value(&fields.email) {
            validate::email(Self::TYPE, "email", email)?;
        }
        Ok(())
    }

    super::hook_slot!(user);
}

pub trait UserMutator: Builder<User> {
    fn set_auth_id(mut self, auth_id: impl Into<String>) -> Self {
        self.mutation_mut().fields_mut().auth_id = Set(auth_id.into());
        self
    }

    fn set_first_name(mut self, name: impl Into<Option<String>>) -> Self {
        if let Some(name) = name.into() {
            self.mutation_mut().fields_mut().first_name = Set(Some(name));
        }
        self
    }

    fn set_last_name(mut self, name: impl Into<Option<String>>) -> Self {
        if let Some(name) = name.into() {
            self.mutation_mut().fields_mut().last_name = Set(Some(name));
        }
        self
    }

    fn set_email(mut self, email: impl Into<Option<String>>) -> Self {
        if let Some(email) = email.into() {
            self.mutation_mut().fields_mut().email = Set(Some(email));
        }
        self
    }

    fn set_status(mut self, status: impl Into<Option<UserStatus>>) -> Self {
        if let Some(status) = status.into() {
            self.mutation_mut().fields_mut().status = Set(status);
        }
        self
    }

    fn set_role(mut self, role: impl Into<Option<UserRole>>) -> Self {
        if let Some(role) = role.into() {
            self.mutation_mut().fields_mut().role = Set(role);
        }
        self
    }
}

impl<T: Builder<User>> UserMutator for T {}

pub trait UserUpdater: Updater<User> {
    fn clear_first_name(mut self) -> Self {
        self.mutation_mut().fields_mut().first_name = Set(None);
        self
    }

    fn clear_last_name(mut self) -> Self {
        self.mutation_mut().fields_mut().last_name = Set(None);
        self
    }

    fn clear_email(mut self) -> Self {
        self.mutation_mut().fields_mut().email = Set(None);
        self
    }
}

impl<T: Updater<User>> UserUpdater for T {}

impl user::Model {
    pub async fn query_groups(&self, client: &Client) -> Result<Vec<users_group::Model>, EntError> {
        client.all(self.find_related(users_group::Entity)).await
    }

    pub async fn query_owned_work_orders(&self, client: &Client) -> Result<Vec<work_order::Model>, EntError> {
        client
            .all(work_order::Entity::find().filter(work_order::Column::OwnerId.eq(self.id)))
            .await
    }

    pub async fn query_assigned_work_orders(&self, client: &Client) -> Result<Vec<work_order::Model>, EntError> {
        client
            .all(work_order::Entity::find().filter(work_order::Column::AssigneeId.eq(self.id)))
            .await
    }
}
