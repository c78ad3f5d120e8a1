use async_graphql::*;
use chrono::Utc;

use crate::auth::{require_admin, require_auth};
use crate::ent::{Client, Create, EntError};
use crate::entities::enums::WorkOrderStatus;
use crate::graphql::types::{
    ActionsRule, AddActionsRuleInput, AddCheckListCategoryDefinitionInput,
    AddCheckListItemDefinitionInput, AddLinkInput, AddLocationInput, AddLocationTypeInput,
    AddPermissionsPolicyInput, AddUsersGroupInput, AddWorkOrderInput, AddWorkOrderTypeInput,
    CheckListCategoryDefinition, CheckListItemDefinition, CheckListItemDefinitionInput,
    EditActionsRuleInput, EditLinkInput, EditLocationTypeInput, EditPermissionsPolicyInput,
    EditUsersGroupInput, EditWorkOrderInput, Link, Location, LocationType, LocationTypeIndex,
    PermissionsPolicy, UpdateUsersGroupMembersInput, UsersGroup, WorkOrder, WorkOrderType,
};
use crate::schema::{
    ActionsRuleMutator, CheckListCategoryDefinitionMutator, CheckListItemDefinition as ItemSchema,
    CheckListItemDefinitionMutator, LinkMutator, LinkUpdater, LocationMutator,
    LocationTypeMutator, LocationTypeUpdater, PermissionsPolicyMutator, PermissionsPolicyUpdater,
    UsersGroupMutator, UsersGroupUpdater, WorkOrderMutator, WorkOrderTypeMutator,
    WorkOrderUpdater,
};

pub struct MutationRoot;

fn failed(action: &str, err: EntError) -> Error {
    Error::new(format!("Failed to {}: {}", action, err))
}

/// Unique name violations get a message naming the clashing value.
fn name_taken(kind: &str, name: &str, action: &str, err: EntError) -> Error {
    if err.is_constraint() {
        Error::new(format!("A {} with the name {} already exists", kind, name))
    } else {
        failed(action, err)
    }
}

/// Applies a nullable input: a value sets the field, `null` clears it and an
/// omitted field leaves the builder untouched.
fn nullable<B, T>(
    builder: B,
    input: MaybeUndefined<T>,
    set: impl FnOnce(B, T) -> B,
    clear: impl FnOnce(B) -> B,
) -> B {
    match input {
        MaybeUndefined::Value(value) => set(builder, value),
        MaybeUndefined::Null => clear(builder),
        MaybeUndefined::Undefined => builder,
    }
}

fn item_builder(create: Create<ItemSchema>, item: CheckListItemDefinitionInput) -> Create<ItemSchema> {
    create
        .set_title(item.title)
        .set_item_type(item.item_type)
        .set_index(item.index)
        .set_enum_values(item.enum_values)
        .set_enum_selection_mode(item.enum_selection_mode)
        .set_help_text(item.help_text)
}

fn closes(status: WorkOrderStatus) -> bool {
    matches!(status, WorkOrderStatus::Done | WorkOrderStatus::Closed)
}

#[Object]
impl MutationRoot {
    async fn add_work_order(&self, ctx: &Context<'_>, input: AddWorkOrderInput) -> Result<WorkOrder> {
        let viewer = require_auth(ctx)?;
        let client = ctx.data::<Client>()?;
        let owner_id = input.owner_id.unwrap_or(viewer.id);
        let close_date = input.status.filter(|s| closes(*s)).map(|_| Utc::now());

        let order = client
            .transaction(|tx| async move {
                tx.work_order()
                    .create()
                    .set_name(input.name)
                    .set_description(input.description)
                    .set_type_id(input.work_order_type_id)
                    .set_location_id(input.location_id)
                    .set_owner_id(owner_id)
                    .set_assignee_id(input.assignee_id)
                    .set_status(input.status)
                    .set_priority(input.priority)
                    .set_index(input.index)
                    .set_install_date(input.install_date)
                    .set_close_date(close_date)
                    .set_creation_date(Utc::now())
                    .save()
                    .await
            })
            .await
            .map_err(|e| failed("create work order", e))?;

        Ok(order.into())
    }

    async fn edit_work_order(&self, ctx: &Context<'_>, input: EditWorkOrderInput) -> Result<WorkOrder> {
        require_auth(ctx)?;
        let client = ctx.data::<Client>()?;

        let order = client
            .transaction(|tx| async move {
                let mut update = tx.work_order().update_one_id(input.id);
                if let Some(name) = input.name {
                    update = update.set_name(name);
                }
                if let Some(owner_id) = input.owner_id {
                    update = update.set_owner_id(owner_id);
                }
                // A status change stamps or clears the close date unless one is given.
                let close_date = match (input.close_date, input.status) {
                    (MaybeUndefined::Undefined, Some(status)) if closes(status) => MaybeUndefined::Value(Utc::now()),
                    (MaybeUndefined::Undefined, Some(_)) => MaybeUndefined::Null,
                    (other, _) => other,
                };
                update = update.set_status(input.status).set_priority(input.priority);
                update = nullable(update, input.description, |u, v| u.set_description(v), |u| u.clear_description());
                update = nullable(update, input.assignee_id, |u, v| u.set_assignee_id(v), |u| u.clear_assignee());
                update = nullable(update, input.location_id, |u, v| u.set_location_id(v), |u| u.clear_location());
                update = nullable(update, input.index, |u, v| u.set_index(v), |u| u.clear_index());
                update = nullable(update, input.install_date, |u, v| u.set_install_date(v), |u| u.clear_install_date());
                update = nullable(update, close_date, |u, v| u.set_close_date(v), |u| u.clear_close_date());
                update.save().await
            })
            .await
            .map_err(|e| failed("update work order", e))?;

        Ok(order.into())
    }

    async fn remove_work_order(&self, ctx: &Context<'_>, id: i32) -> Result<i32> {
        require_auth(ctx)?;
        let client = ctx.data::<Client>()?;

        client
            .transaction(|tx| async move { tx.work_order().delete_one_id(id).exec().await })
            .await
            .map_err(|e| failed("remove work order", e))?;

        Ok(id)
    }

    async fn add_location_type(&self, ctx: &Context<'_>, input: AddLocationTypeInput) -> Result<LocationType> {
        require_auth(ctx)?;
        let client = ctx.data::<Client>()?;
        let name = input.name.clone();

        // New types go to the end of the ordering.
        let location_type = client
            .transaction(|tx| async move {
                let index = tx.location_type().count().await?;
                tx.location_type()
                    .create()
                    .set_name(input.name)
                    .set_map_type(input.map_type)
                    .set_map_zoom_level(input.map_zoom_level)
                    .set_site(input.is_site)
                    .set_index(i32::try_from(index).unwrap_or(i32::MAX))
                    .save()
                    .await
            })
            .await
            .map_err(|e| name_taken("location type", &name, "create location type", e))?;

        Ok(location_type.into())
    }

    async fn edit_location_type(&self, ctx: &Context<'_>, input: EditLocationTypeInput) -> Result<LocationType> {
        require_auth(ctx)?;
        let client = ctx.data::<Client>()?;
        let name = input.name.clone().unwrap_or_default();

        let location_type = client
            .transaction(|tx| async move {
                let mut update = tx.location_type().update_one_id(input.id).set_site(input.is_site);
                if let Some(name) = input.name {
                    update = update.set_name(name);
                }
                update = nullable(update, input.map_type, |u, v| u.set_map_type(v), |u| u.clear_map_type());
                update = nullable(update, input.map_zoom_level, |u, v| u.set_map_zoom_level(v), |u| u.clear_map_zoom_level());
                update.save().await
            })
            .await
            .map_err(|e| name_taken("location type", &name, "update location type", e))?;

        Ok(location_type.into())
    }

    async fn edit_location_types_index(
        &self,
        ctx: &Context<'_>,
        location_types_index: Vec<LocationTypeIndex>,
    ) -> Result<Vec<LocationType>> {
        require_auth(ctx)?;
        let client = ctx.data::<Client>()?;

        let location_types = client
            .transaction(|tx| async move {
                let mut updated = Vec::with_capacity(location_types_index.len());
                for entry in location_types_index {
                    let location_type = tx
                        .location_type()
                        .update_one_id(entry.location_type_id)
                        .set_index(entry.index)
                        .save()
                        .await?;
                    updated.push(location_type);
                }
                Ok(updated)
            })
            .await
            .map_err(|e| failed("reorder location types", e))?;

        Ok(location_types.into_iter().map(Into::into).collect())
    }

    async fn add_location(&self, ctx: &Context<'_>, input: AddLocationInput) -> Result<Location> {
        require_auth(ctx)?;
        let client = ctx.data::<Client>()?;
        let external_id = input.external_id.clone().unwrap_or_default();

        let location = client
            .transaction(|tx| async move {
                tx.location()
                    .create()
                    .set_name(input.name)
                    .set_type_id(input.type_id)
                    .set_parent_id(input.parent_id)
                    .set_latitude(input.latitude)
                    .set_longitude(input.longitude)
                    .set_external_id(input.external_id)
                    .save()
                    .await
            })
            .await
            .map_err(|e| {
                if e.is_constraint() {
                    Error::new(format!("A location with the external id {} already exists", external_id))
                } else {
                    failed("create location", e)
                }
            })?;

        Ok(location.into())
    }

    async fn add_link(&self, ctx: &Context<'_>, input: AddLinkInput) -> Result<Link> {
        require_auth(ctx)?;
        let client = ctx.data::<Client>()?;

        let link = client
            .transaction(|tx| async move {
                tx.link()
                    .create()
                    .set_work_order_id(input.work_order_id)
                    .set_future_state(input.future_state)
                    .save()
                    .await
            })
            .await
            .map_err(|e| failed("create link", e))?;

        Ok(link.into())
    }

    async fn edit_link(&self, ctx: &Context<'_>, input: EditLinkInput) -> Result<Link> {
        require_auth(ctx)?;
        let client = ctx.data::<Client>()?;

        let link = client
            .transaction(|tx| async move {
                let mut update = tx.link().update_one_id(input.id);
                update = nullable(update, input.work_order_id, |u, v| u.set_work_order_id(v), |u| u.clear_work_order());
                update = nullable(update, input.future_state, |u, v| u.set_future_state(v), |u| u.clear_future_state());
                update.save().await
            })
            .await
            .map_err(|e| failed("update link", e))?;

        Ok(link.into())
    }

    async fn add_users_group(&self, ctx: &Context<'_>, input: AddUsersGroupInput) -> Result<UsersGroup> {
        require_admin(ctx)?;
        let client = ctx.data::<Client>()?;
        let name = input.name.clone();

        let group = client
            .transaction(|tx| async move {
                tx.users_group()
                    .create()
                    .set_name(input.name)
                    .set_description(input.description)
                    .add_member_ids(input.members.unwrap_or_default())
                    .add_policy_ids(input.policies.unwrap_or_default())
                    .save()
                    .await
            })
            .await
            .map_err(|e| name_taken("group", &name, "create group", e))?;

        Ok(group.into())
    }

    async fn edit_users_group(&self, ctx: &Context<'_>, input: EditUsersGroupInput) -> Result<UsersGroup> {
        require_admin(ctx)?;
        let client = ctx.data::<Client>()?;
        let name = input.name.clone().unwrap_or_default();

        let group = client
            .transaction(|tx| async move {
                let mut update = tx.users_group().update_one_id(input.id).set_status(input.status);
                if let Some(name) = input.name {
                    update = update.set_name(name);
                }
                if let Some(policies) = input.policies {
                    update = update.clear_policies().add_policy_ids(policies);
                }
                update = nullable(update, input.description, |u, v| u.set_description(v), |u| u.clear_description());
                update.save().await
            })
            .await
            .map_err(|e| name_taken("group", &name, "update group", e))?;

        Ok(group.into())
    }

    async fn update_users_group_members(
        &self,
        ctx: &Context<'_>,
        input: UpdateUsersGroupMembersInput,
    ) -> Result<UsersGroup> {
        require_admin(ctx)?;
        let client = ctx.data::<Client>()?;

        let group = client
            .transaction(|tx| async move {
                tx.users_group()
                    .update_one_id(input.id)
                    .remove_member_ids(input.removed_member_ids)
                    .add_member_ids(input.added_member_ids)
                    .save()
                    .await
            })
            .await
            .map_err(|e| failed("update group members", e))?;

        Ok(group.into())
    }

    async fn add_permissions_policy(
        &self,
        ctx: &Context<'_>,
        input: AddPermissionsPolicyInput,
    ) -> Result<PermissionsPolicy> {
        require_admin(ctx)?;
        let client = ctx.data::<Client>()?;
        let name = input.name.clone();

        let policy = client
            .transaction(|tx| async move {
                tx.permissions_policy()
                    .create()
                    .set_name(input.name)
                    .set_description(input.description)
                    .set_is_global(input.is_global)
                    .set_inventory_policy(input.inventory_input.map(|json| json.0))
                    .set_workforce_policy(input.workforce_input.map(|json| json.0))
                    .add_group_ids(input.groups.unwrap_or_default())
                    .save()
                    .await
            })
            .await
            .map_err(|e| name_taken("policy", &name, "create policy", e))?;

        Ok(policy.into())
    }

    async fn edit_permissions_policy(
        &self,
        ctx: &Context<'_>,
        input: EditPermissionsPolicyInput,
    ) -> Result<PermissionsPolicy> {
        require_admin(ctx)?;
        let client = ctx.data::<Client>()?;
        let name = input.name.clone().unwrap_or_default();

        let policy = client
            .transaction(|tx| async move {
                let mut update = tx
                    .permissions_policy()
                    .update_one_id(input.id)
                    .set_is_global(input.is_global);
                if let Some(name) = input.name {
                    update = update.set_name(name);
                }
                if let Some(groups) = input.groups {
                    update = update.clear_groups().add_group_ids(groups);
                }
                update = nullable(update, input.description, |u, v| u.set_description(v), |u| u.clear_description());
                update = nullable(
                    update,
                    input.inventory_input,
                    |u, v| u.set_inventory_policy(v.0),
                    |u| u.clear_inventory_policy(),
                );
                update = nullable(
                    update,
                    input.workforce_input,
                    |u, v| u.set_workforce_policy(v.0),
                    |u| u.clear_workforce_policy(),
                );
                update.save().await
            })
            .await
            .map_err(|e| name_taken("policy", &name, "update policy", e))?;

        Ok(policy.into())
    }

    async fn add_actions_rule(&self, ctx: &Context<'_>, input: AddActionsRuleInput) -> Result<ActionsRule> {
        require_admin(ctx)?;
        let client = ctx.data::<Client>()?;

        let rule = client
            .transaction(|tx| async move {
                tx.actions_rule()
                    .create()
                    .set_name(input.name)
                    .set_trigger_id(input.trigger_id)
                    .set_rule_filters(input.rule_filters.0)
                    .set_rule_actions(input.rule_actions.0)
                    .save()
                    .await
            })
            .await
            .map_err(|e| failed("create actions rule", e))?;

        Ok(rule.into())
    }

    async fn edit_actions_rule(&self, ctx: &Context<'_>, input: EditActionsRuleInput) -> Result<ActionsRule> {
        require_admin(ctx)?;
        let client = ctx.data::<Client>()?;

        let rule = client
            .transaction(|tx| async move {
                let mut update = tx.actions_rule().update_one_id(input.id);
                if let Some(name) = input.name {
                    update = update.set_name(name);
                }
                if let Some(trigger_id) = input.trigger_id {
                    update = update.set_trigger_id(trigger_id);
                }
                if let Some(filters) = input.rule_filters {
                    update = update.set_rule_filters(filters.0);
                }
                if let Some(actions) = input.rule_actions {
                    update = update.set_rule_actions(actions.0);
                }
                update.save().await
            })
            .await
            .map_err(|e| failed("update actions rule", e))?;

        Ok(rule.into())
    }

    async fn add_work_order_type(&self, ctx: &Context<'_>, input: AddWorkOrderTypeInput) -> Result<WorkOrderType> {
        require_auth(ctx)?;
        let client = ctx.data::<Client>()?;

        let work_order_type = client
            .transaction(|tx| async move {
                tx.work_order_type()
                    .create()
                    .set_name(input.name)
                    .set_description(input.description)
                    .save()
                    .await
            })
            .await
            .map_err(|e| failed("create work order type", e))?;

        Ok(work_order_type.into())
    }

    async fn add_check_list_category_definition(
        &self,
        ctx: &Context<'_>,
        input: AddCheckListCategoryDefinitionInput,
    ) -> Result<CheckListCategoryDefinition> {
        require_auth(ctx)?;
        let client = ctx.data::<Client>()?;

        let category = client
            .transaction(|tx| async move {
                let category = tx
                    .check_list_category_definition()
                    .create()
                    .set_title(input.title)
                    .set_description(input.description)
                    .set_work_order_type_id(input.work_order_type_id)
                    .save()
                    .await?;
                let items = input.items.unwrap_or_default().into_iter().map(|item| {
                    item_builder(tx.check_list_item_definition().create(), item).set_category_id(category.id)
                });
                let items: Vec<_> = items.collect();
                if !items.is_empty() {
                    tx.check_list_item_definition().create_bulk(items).save().await?;
                }
                Ok(category)
            })
            .await
            .map_err(|e| failed("create check list category", e))?;

        Ok(category.into())
    }

    async fn add_check_list_item_definition(
        &self,
        ctx: &Context<'_>,
        input: AddCheckListItemDefinitionInput,
    ) -> Result<CheckListItemDefinition> {
        require_auth(ctx)?;
        let client = ctx.data::<Client>()?;

        let item = client
            .transaction(|tx| async move {
                item_builder(tx.check_list_item_definition().create(), input.item)
                    .set_category_id(input.category_id)
                    .save()
                    .await
            })
            .await
            .map_err(|e| failed("create check list item", e))?;

        Ok(item.into())
    }
}
