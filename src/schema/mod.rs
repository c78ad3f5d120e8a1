//! Builder schemas, one module per entity: defaults, required fields,
//! validators, edge writers, typed setters and relationship queries.

use chrono::{DateTime, Utc};
use sea_orm::ActiveValue;

use crate::ent::{Client, EntityClient, Hook, Op, Schema, default_to};

mod actions_rule;
mod activity;
mod check_list_category_definition;
mod check_list_item_definition;
mod link;
mod location;
mod location_type;
mod permissions_policy;
mod user;
mod users_group;
mod work_order;
mod work_order_type;

pub use actions_rule::*;
pub use activity::*;
pub use check_list_category_definition::*;
pub use check_list_item_definition::*;
pub use link::*;
pub use location::*;
pub use location_type::*;
pub use permissions_policy::*;
pub use user::*;
pub use users_group::*;
pub use work_order::*;
pub use work_order_type::*;

/// Hooks registered per entity type. Captured immutably by a [`Client`].
#[derive(Clone, Default)]
pub struct Hooks {
    actions_rule: Vec<Hook<ActionsRule>>,
    activity: Vec<Hook<Activity>>,
    check_list_category_definition: Vec<Hook<CheckListCategoryDefinition>>,
    check_list_item_definition: Vec<Hook<CheckListItemDefinition>>,
    link: Vec<Hook<Link>>,
    location: Vec<Hook<Location>>,
    location_type: Vec<Hook<LocationType>>,
    permissions_policy: Vec<Hook<PermissionsPolicy>>,
    user: Vec<Hook<User>>,
    users_group: Vec<Hook<UsersGroup>>,
    work_order: Vec<Hook<WorkOrder>>,
    work_order_type: Vec<Hook<WorkOrderType>>,
}

impl Hooks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a hook for entity `S`. Earlier hooks wrap later ones.
    pub fn on<S: Schema>(&mut self, hook: Hook<S>) -> &mut Self {
        S::hooks_mut(self).push(hook);
        self
    }

    pub fn len<S: Schema>(&self) -> usize {
        S::hooks(self).len()
    }
}

macro_rules! hook_slot {
    ($field:ident) => {
        fn hooks(registry: &$crate::schema::Hooks) -> &[$crate::ent::Hook<Self>] {
            &registry.$field
        }

        fn hooks_mut(registry: &mut $crate::schema::Hooks) -> &mut Vec<$crate::ent::Hook<Self>> {
            &mut registry.$field
        }
    };
}
pub(crate) use hook_slot;

/// Stamps `create_time` on create and `update_time` on every write, unless
/// the caller set them.
pub(crate) fn stamp(
    op: Op,
    create_time: &mut ActiveValue<DateTime<Utc>>,
    update_time: &mut ActiveValue<DateTime<Utc>>,
) {
    let now = Utc::now();
    if op == Op::Create {
        default_to(create_time, || now);
    }
    default_to(update_time, || now);
}

impl Client {
    pub fn actions_rule(&self) -> EntityClient<ActionsRule> {
        self.of()
    }

    pub fn activity(&self) -> EntityClient<Activity> {
        self.of()
    }

    pub fn check_list_category_definition(&self) -> EntityClient<CheckListCategoryDefinition> {
        self.of()
    }

    pub fn check_list_item_definition(&self) -> EntityClient<CheckListItemDefinition> {
        self.of()
    }

    pub fn link(&self) -> EntityClient<Link> {
        self.of()
    }

    pub fn location(&self) -> EntityClient<Location> {
        self.of()
    }

    pub fn location_type(&self) -> EntityClient<LocationType> {
        self.of()
    }

    pub fn permissions_policy(&self) -> EntityClient<PermissionsPolicy> {
        self.of()
    }

    pub fn user(&self) -> EntityClient<User> {
        self.of()
    }

    pub fn users_group(&self) -> EntityClient<UsersGroup> {
        self.of()
    }

    pub fn work_order(&self) -> EntityClient<WorkOrder> {
        self.of()
    }

    pub fn work_order_type(&self) -> EntityClient<WorkOrderType> {
        self.of()
    }
}
