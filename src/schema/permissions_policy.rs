use async_trait::async_trait;
use sea_orm::{ActiveValue::Set, DatabaseTransaction, ModelTrait};
use serde_json::Value as Json;

use crate::ent::{
    Builder, Client, Create, Delete, DeleteOne, EdgeIds, EntError, M2m, Mutation, Op, Schema,
    Update, UpdateOne, Updater, default_to, validate, value,
};
use crate::entities::{permissions_policy, users_group, users_group_policy};

pub struct PermissionsPolicy;

#[derive(Debug, Clone, Default)]
pub struct PermissionsPolicyEdges {
    pub groups: EdgeIds,
}

pub type PermissionsPolicyCreate = Create<PermissionsPolicy>;
pub type PermissionsPolicyUpdate = Update<PermissionsPolicy>;
pub type PermissionsPolicyUpdateOne = UpdateOne<PermissionsPolicy>;
pub type PermissionsPolicyDelete = Delete<PermissionsPolicy>;
pub type PermissionsPolicyDeleteOne = DeleteOne<PermissionsPolicy>;

// Inverse side of UsersGroup.policies.
const GROUPS: M2m<users_group_policy::Entity, users_group::Entity> = M2m {
    target: "UsersGroup",
    target_id: users_group::Column::Id,
    owner_col: users_group_policy::Column::PermissionsPolicyId,
    target_col: users_group_policy::Column::UsersGroupId,
};

#[async_trait]
impl Schema for PermissionsPolicy {
    type Entity = permissions_policy::Entity;
    type Model = permissions_policy::Model;
    type ActiveModel = permissions_policy::ActiveModel;
    type Edges = PermissionsPolicyEdges;

    const TYPE: &'static str = "PermissionsPolicy";

    fn id_column() -> permissions_policy::Column {
        permissions_policy::Column::Id
    }

    fn id_of(model: &permissions_policy::Model) -> i32 {
        model.id
    }

    fn defaults(mutation: &mut Mutation<Self>) {
        let op = mutation.op();
        let fields = mutation.fields_mut();
        super::stamp(op, &mut fields.create_time, &mut fields.update_time);
        if op == Op::Create {
            default_to(&mut fields.is_global, || false);
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
        if let Some(Some(policy)) = value(&fields.inventory_policy) {
            validate::json_object(Self::TYPE, "inventory_policy", policy)?;
        }
        if let Some(Some(policy)) = value(&fields.workforce_policy) {
            validate::json_object(Self::TYPE, "workforce_policy", policy)?;
        }
        Ok(())
    }

    async fn save_edges(tx: &DatabaseTransaction, id: i32, edges: &PermissionsPolicyEdges) -> Result<(), EntError> {
        GROUPS.apply(tx, id, &edges.groups).await
    }

    super::hook_slot!(permissions_policy);
}

pub trait PermissionsPolicyMutator: Builder<PermissionsPolicy> {
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

    fn set_is_global(mut self, is_global: impl Into<Option<bool>>) -> Self {
        if let Some(is_global) = is_global.into() {
            self.mutation_mut().fields_mut().is_global = Set(is_global);
        }
        self
    }

    fn set_inventory_policy(mut self, policy: impl Into<Option<Json>>) -> Self {
        if let Some(policy) = policy.into() {
            self.mutation_mut().fields_mut().inventory_policy = Set(Some(policy));
        }
        self
    }

    fn set_workforce_policy(mut self, policy: impl Into<Option<Json>>) -> Self {
        if let Some(policy) = policy.into() {
            self.mutation_mut().fields_mut().workforce_policy = Set(Some(policy));
        }
        self
    }

    fn add_group_ids(mut self, ids: impl IntoIterator<Item = i32>) -> Self {
        self.mutation_mut().edges_mut().groups.add(ids);
        self
    }
}

impl<T: Builder<PermissionsPolicy>> PermissionsPolicyMutator for T {}

pub trait PermissionsPolicyUpdater: Updater<PermissionsPolicy> {
    fn clear_description(mut self) -> Self {
        self.mutation_mut().fields_mut().description = Set(None);
        self
    }

    fn clear_inventory_policy(mut self) -> Self {
        self.mutation_mut().fields_mut().inventory_policy = Set(None);
        self
    }

    fn clear_workforce_policy(mut self) -> Self {
        self.mutation_mut().fields_mut().workforce_policy = Set(None);
        self
    }

    fn remove_group_ids(mut self, ids: impl IntoIterator<Item = i32>) -> Self {
        self.mutation_mut().edges_mut().groups.remove(ids);
        self
    }

    fn clear_groups(mut self) -> Self {
        self.mutation_mut().edges_mut().groups.clear();
        self
    }
}

impl<T: Updater<PermissionsPolicy>> PermissionsPolicyUpdater for T {}

impl permissions_policy::Model {
    pub async fn query_groups(&self, client: &Client) -> Result<Vec<users_group::Model>, EntError> {
        client.all(self.find_related(users_group::Entity)).await
    }
}
