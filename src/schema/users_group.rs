use async_trait::async_trait;
use sea_orm::{ActiveValue::Set, DatabaseTransaction, ModelTrait};

use crate::ent::{
    Builder, Client, Create, Delete, DeleteOne, EdgeIds, EntError, M2m, Mutation, Op, Schema,
    Update, UpdateOne, Updater, default_to, validate, value,
};
use crate::entities::enums::UsersGroupStatus;
use crate::entities::{permissions_policy, user, users_group, users_group_member, users_group_policy};

pub struct UsersGroup;

#[derive(Debug, Clone, Default)]
pub struct UsersGroupEdges {
    pub members: EdgeIds,
    pub policies: EdgeIds,
}

pub type UsersGroupCreate = Create<UsersGroup>;
pub type UsersGroupUpdate = Update<UsersGroup>;
pub type UsersGroupUpdateOne = UpdateOne<UsersGroup>;
pub type UsersGroupDelete = Delete<UsersGroup>;
pub type UsersGroupDeleteOne = DeleteOne<UsersGroup>;

const MEMBERS: M2m<users_group_member::Entity, user::Entity> = M2m {
    target: "User",
    target_id: user::Column::Id,
    owner_col: users_group_member::Column::UsersGroupId,
    target_col: users_group_member::Column::UserId,
};

const POLICIES: M2m<users_group_policy::Entity, permissions_policy::Entity> = M2m {
    target: "PermissionsPolicy",
    target_id: permissions_policy::Column::Id,
    owner_col: users_group_policy::Column::UsersGroupId,
    target_col: users_group_policy::Column::PermissionsPolicyId,
};

#[async_trait]
impl Schema for UsersGroup {
    type Entity = users_group::Entity;
    type Model = users_group::Model;
    type ActiveModel = users_group::ActiveModel;
    type Edges = UsersGroupEdges;

    const TYPE: &'static str = "UsersGroup";

    fn id_column() -> users_group::Column {
        users_group::Column::Id
    }

    fn id_of(model: &users_group::Model) -> i32 {
        model.id
    }

    fn defaults(mutation: &mut Mutation<Self>) {
        let op = mutation.op();
        let fields = mutation.fields_mut();
        super::stamp(op, &mut fields.create_time, &mut fields.update_time);
        if op == Op::Create {
            default_to(&mut fields.status, || UsersGroupStatus::Active);
        }
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

    async fn save_edges(tx: &DatabaseTransaction, id: i32, edges: &UsersGroupEdges) -> Result<(), EntError> {
        MEMBERS.apply(tx, id, &edges.members).await?;
        POLICIES.apply(tx, id, &edges.policies).await
    }

    super::hook_slot!(users_group);
}

pub trait UsersGroupMutator: Builder<UsersGroup> {
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

    fn set_status(mut self, status: impl Into<Option<UsersGroupStatus>>) -> Self {
        if let Some(status) = status.into() {
            self.mutation_mut().fields_mut().status = Set(status);
        }
        self
    }

    fn add_member_ids(mut self, ids: impl IntoIterator<Item = i32>) -> Self {
        self.mutation_mut().edges_mut().members.add(ids);
        self
    }

    fn add_members(self, users: &[user::Model]) -> Self {
        self.add_member_ids(users.iter().map(|u| u.id))
    }

    fn add_policy_ids(mut self, ids: impl IntoIterator<Item = i32>) -> Self {
        self.mutation_mut().edges_mut().policies.add(ids);
        self
    }

    fn add_policies(self, policies: &[permissions_policy::Model]) -> Self {
        self.add_policy_ids(policies.iter().map(|p| p.id))
    }
}

impl<T: Builder<UsersGroup>> UsersGroupMutator for T {}

pub trait UsersGroupUpdater: Updater<UsersGroup> {
    fn clear_description(mut self) -> Self {
        self.mutation_mut().fields_mut().description = Set(None);
        self
    }

    fn remove_member_ids(mut self, ids: impl IntoIterator<Item = i32>) -> Self {
        self.mutation_mut().edges_mut().members.remove(ids);
        self
    }

    fn remove_members(self, users: &[user::Model]) -> Self {
        self.remove_member_ids(users.iter().map(|u| u.id))
    }

    fn clear_members(mut self) -> Self {
        self.mutation_mut().edges_mut().members.clear();
        self
    }

    fn remove_policy_ids(mut self, ids: impl IntoIterator<Item = i32>) -> Self {
        self.mutation_mut().edges_mut().policies.remove(ids);
        self
    }

    fn clear_policies(mut self) -> Self {
        self.mutation_mut().edges_mut().policies.clear();
        self
    }
}

impl<T: Updater<UsersGroup>> UsersGroupUpdater for T {}

impl users_group::Model {
    pub async fn query_members(&self, client: &Client) -> Result<Vec<user::Model>, EntError> {
        client.all(self.find_related(user::Entity)).await
    }

    pub async fn query_policies(&self, client: &Client) -> Result<Vec<permissions_policy::Model>, EntError> {
        client.all(self.find_related(permissions_policy::Entity)).await
    }
}
