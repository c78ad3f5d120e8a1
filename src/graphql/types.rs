use async_graphql::*;
use chrono::{DateTime, Utc};
use sea_orm::{ColumnTrait, Condition};

use crate::ent::Client;
use crate::entities::enums::{
    ActivityField, CheckListItemType, EnumSelectionMode, FutureState, UserRole, UserStatus,
    UsersGroupStatus, WorkOrderPriority, WorkOrderStatus,
};
use crate::entities::{
    activity, check_list_category_definition, check_list_item_definition, link, location,
    work_order,
};
use crate::graphql::DataLoaderContext;

#[derive(SimpleObject, Clone)]
#[graphql(complex)]
pub struct User {
    pub id: i32,
    pub auth_id: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub status: UserStatus,
    pub role: UserRole,
    pub create_time: DateTime<Utc>,
    pub update_time: DateTime<Utc>,
}

impl From<crate::entities::user::Model> for User {
    fn from(user: crate::entities::user::Model) -> Self {
        Self {
            id: user.id,
            auth_id: user.auth_id,
            first_name: user.first_name,
            last_name: user.last_name,
            email: user.email,
            status: user.status,
            role: user.role,
            create_time: user.create_time,
            update_time: user.update_time,
        }
    }
}

#[ComplexObject]
impl User {
    async fn groups(&self, ctx: &Context<'_>) -> Result<Vec<UsersGroup>> {
        let client = ctx.data::<Client>()?;
        let user = client.user().get(self.id).await?;
        let groups = user
            .query_groups(client)
            .await
            .map_err(|e| Error::new(format!("Failed to fetch groups: {}", e)))?;
        Ok(groups.into_iter().map(Into::into).collect())
    }
}

#[derive(SimpleObject, Clone)]
#[graphql(complex)]
pub struct UsersGroup {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub status: UsersGroupStatus,
    pub create_time: DateTime<Utc>,
    pub update_time: DateTime<Utc>,
}

impl From<crate::entities::users_group::Model> for UsersGroup {
    fn from(group: crate::entities::users_group::Model) -> Self {
        Self {
            id: group.id,
            name: group.name,
            description: group.description,
            status: group.status,
            create_time: group.create_time,
            update_time: group.update_time,
        }
    }
}

#[ComplexObject]
impl UsersGroup {
    async fn members(&self, ctx: &Context<'_>) -> Result<Vec<User>> {
        let client = ctx.data::<Client>()?;
        let group = client.users_group().get(self.id).await?;
        let members = group
            .query_members(client)
            .await
            .map_err(|e| Error::new(format!("Failed to fetch members: {}", e)))?;
        Ok(members.into_iter().map(Into::into).collect())
    }

    async fn policies(&self, ctx: &Context<'_>) -> Result<Vec<PermissionsPolicy>> {
        let client = ctx.data::<Client>()?;
        let group = client.users_group().get(self.id).await?;
        let policies = group
            .query_policies(client)
            .await
            .map_err(|e| Error::new(format!("Failed to fetch policies: {}", e)))?;
        Ok(policies.into_iter().map(Into::into).collect())
    }
}

#[derive(SimpleObject, Clone)]
#[graphql(complex)]
pub struct PermissionsPolicy {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub is_global: bool,
    pub inventory_policy: Option<Json<serde_json::Value>>,
    pub workforce_policy: Option<Json<serde_json::Value>>,
    pub create_time: DateTime<Utc>,
    pub update_time: DateTime<Utc>,
}

impl From<crate::entities::permissions_policy::Model> for PermissionsPolicy {
    fn from(policy: crate::entities::permissions_policy::Model) -> Self {
        Self {
            id: policy.id,
            name: policy.name,
            description: policy.description,
            is_global: policy.is_global,
            inventory_policy: policy.inventory_policy.map(Json),
            workforce_policy: policy.workforce_policy.map(Json),
            create_time: policy.create_time,
            update_time: policy.update_time,
        }
    }
}

#[ComplexObject]
impl PermissionsPolicy {
    async fn groups(&self, ctx: &Context<'_>) -> Result<Vec<UsersGroup>> {
        let client = ctx.data::<Client>()?;
        let policy = client.permissions_policy().get(self.id).await?;
        let groups = policy
            .query_groups(client)
            .await
            .map_err(|e| Error::new(format!("Failed to fetch groups: {}", e)))?;
        Ok(groups.into_iter().map(Into::into).collect())
    }
}

#[derive(SimpleObject, Clone)]
#[graphql(complex)]
pub struct LocationType {
    pub id: i32,
    pub name: String,
    pub is_site: bool,
    pub map_type: Option<String>,
    pub map_zoom_level: Option<i32>,
    pub index: i32,
    pub create_time: DateTime<Utc>,
    pub update_time: DateTime<Utc>,
}

impl From<crate::entities::location_type::Model> for LocationType {
    fn from(location_type: crate::entities::location_type::Model) -> Self {
        Self {
            id: location_type.id,
            name: location_type.name,
            is_site: location_type.site,
            map_type: location_type.map_type,
            map_zoom_level: location_type.map_zoom_level,
            index: location_type.index,
            create_time: location_type.create_time,
            update_time: location_type.update_time,
        }
    }
}

#[ComplexObject]
impl LocationType {
    async fn locations(&self, ctx: &Context<'_>) -> Result<Vec<Location>> {
        let client = ctx.data::<Client>()?;
        let locations = client
            .location()
            .find(Condition::all().add(location::Column::LocationTypeId.eq(self.id)))
            .await
            .map_err(|e| Error::new(format!("Failed to fetch locations: {}", e)))?;
        Ok(locations.into_iter().map(Into::into).collect())
    }
}

#[derive(SimpleObject, Clone)]
#[graphql(complex)]
pub struct Location {
    pub id: i32,
    pub name: String,
    pub external_id: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    pub site_survey_needed: bool,
    pub create_time: DateTime<Utc>,
    pub update_time: DateTime<Utc>,
    #[graphql(skip)]
    pub location_type_id: Option<i32>,
    #[graphql(skip)]
    pub parent_id: Option<i32>,
}

impl From<crate::entities::location::Model> for Location {
    fn from(location: crate::entities::location::Model) -> Self {
        Self {
            id: location.id,
            name: location.name,
            external_id: location.external_id,
            latitude: location.latitude,
            longitude: location.longitude,
            site_survey_needed: location.site_survey_needed,
            create_time: location.create_time,
            update_time: location.update_time,
            location_type_id: location.location_type_id,
            parent_id: location.parent_id,
        }
    }
}

#[ComplexObject]
impl Location {
    async fn location_type(&self, ctx: &Context<'_>) -> Result<Option<LocationType>> {
        let Some(type_id) = self.location_type_id else {
            return Ok(None);
        };
        let client = ctx.data::<Client>()?;
        let location_type = client
            .location_type()
            .get(type_id)
            .await
            .map_err(|e| Error::new(format!("Failed to fetch location type: {}", e)))?;
        Ok(Some(location_type.into()))
    }

    async fn parent(&self, ctx: &Context<'_>) -> Result<Option<Location>> {
        let Some(parent_id) = self.parent_id else {
            return Ok(None);
        };
        let client = ctx.data::<Client>()?;
        let parent = client
            .location()
            .get(parent_id)
            .await
            .map_err(|e| Error::new(format!("Failed to fetch parent location: {}", e)))?;
        Ok(Some(parent.into()))
    }

    async fn children(&self, ctx: &Context<'_>) -> Result<Vec<Location>> {
        let client = ctx.data::<Client>()?;
        let children = client
            .location()
            .find(Condition::all().add(location::Column::ParentId.eq(self.id)))
            .await
            .map_err(|e| Error::new(format!("Failed to fetch child locations: {}", e)))?;
        Ok(children.into_iter().map(Into::into).collect())
    }
}

#[derive(SimpleObject, Clone)]
#[graphql(complex)]
pub struct WorkOrderType {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub create_time: DateTime<Utc>,
    pub update_time: DateTime<Utc>,
}

impl From<crate::entities::work_order_type::Model> for WorkOrderType {
    fn from(work_order_type: crate::entities::work_order_type::Model) -> Self {
        Self {
            id: work_order_type.id,
            name: work_order_type.name,
            description: work_order_type.description,
            create_time: work_order_type.create_time,
            update_time: work_order_type.update_time,
        }
    }
}

#[ComplexObject]
impl WorkOrderType {
    async fn check_list_categories(&self, ctx: &Context<'_>) -> Result<Vec<CheckListCategoryDefinition>> {
        let client = ctx.data::<Client>()?;
        let categories = client
            .check_list_category_definition()
            .find(Condition::all().add(check_list_category_definition::Column::WorkOrderTypeId.eq(self.id)))
            .await
            .map_err(|e| Error::new(format!("Failed to fetch check list categories: {}", e)))?;
        Ok(categories.into_iter().map(Into::into).collect())
    }
}

#[derive(SimpleObject, Clone)]
#[graphql(complex)]
pub struct WorkOrder {
    pub id: i32,
    pub name: String,
    pub status: WorkOrderStatus,
    pub priority: WorkOrderPriority,
    pub description: Option<String>,
    pub install_date: Option<DateTime<Utc>>,
    pub creation_date: DateTime<Utc>,
    pub index: Option<i32>,
    pub close_date: Option<DateTime<Utc>>,
    pub create_time: DateTime<Utc>,
    pub update_time: DateTime<Utc>,
    #[graphql(skip)]
    pub work_order_type_id: Option<i32>,
    #[graphql(skip)]
    pub location_id: Option<i32>,
    #[graphql(skip)]
    pub owner_id: Option<i32>,
    #[graphql(skip)]
    pub assignee_id: Option<i32>,
}

impl From<work_order::Model> for WorkOrder {
    fn from(order: work_order::Model) -> Self {
        Self {
            id: order.id,
            name: order.name,
            status: order.status,
            priority: order.priority,
            description: order.description,
            install_date: order.install_date,
            creation_date: order.creation_date,
            index: order.index,
            close_date: order.close_date,
            create_time: order.create_time,
            update_time: order.update_time,
            work_order_type_id: order.work_order_type_id,
            location_id: order.location_id,
            owner_id: order.owner_id,
            assignee_id: order.assignee_id,
        }
    }
}

#[ComplexObject]
impl WorkOrder {
    async fn work_order_type(&self, ctx: &Context<'_>) -> Result<Option<WorkOrderType>> {
        let Some(type_id) = self.work_order_type_id else {
            return Ok(None);
        };
        let client = ctx.data::<Client>()?;
        let work_order_type = client
            .work_order_type()
            .get(type_id)
            .await
            .map_err(|e| Error::new(format!("Failed to fetch work order type: {}", e)))?;
        Ok(Some(work_order_type.into()))
    }

    async fn location(&self, ctx: &Context<'_>) -> Result<Option<Location>> {
        let Some(location_id) = self.location_id else {
            return Ok(None);
        };
        let client = ctx.data::<Client>()?;
        let location = client
            .location()
            .get(location_id)
            .await
            .map_err(|e| Error::new(format!("Failed to fetch location: {}", e)))?;
        Ok(Some(location.into()))
    }

    async fn owner(&self, ctx: &Context<'_>) -> Result<Option<User>> {
        let dataloader = ctx.data::<DataLoaderContext>()?;
        let owner = dataloader
            .load_user(self.owner_id)
            .await
            .map_err(|e| Error::new(format!("Failed to fetch owner: {}", e)))?;
        Ok(owner.map(Into::into))
    }

    async fn assignee(&self, ctx: &Context<'_>) -> Result<Option<User>> {
        let dataloader = ctx.data::<DataLoaderContext>()?;
        let assignee = dataloader
            .load_user(self.assignee_id)
            .await
            .map_err(|e| Error::new(format!("Failed to fetch assignee: {}", e)))?;
        Ok(assignee.map(Into::into))
    }

    async fn links(&self, ctx: &Context<'_>) -> Result<Vec<Link>> {
        let client = ctx.data::<Client>()?;
        let links = client
            .link()
            .find(Condition::all().add(link::Column::WorkOrderId.eq(self.id)))
            .await
            .map_err(|e| Error::new(format!("Failed to fetch links: {}", e)))?;
        Ok(links.into_iter().map(Into::into).collect())
    }

    async fn activities(&self, ctx: &Context<'_>) -> Result<Vec<Activity>> {
        let client = ctx.data::<Client>()?;
        let activities = client
            .activity()
            .find(Condition::all().add(activity::Column::WorkOrderId.eq(self.id)))
            .await
            .map_err(|e| Error::new(format!("Failed to fetch activities: {}", e)))?;
        Ok(activities.into_iter().map(Into::into).collect())
    }
}

#[derive(SimpleObject, Clone)]
#[graphql(complex)]
pub struct Link {
    pub id: i32,
    pub future_state: Option<FutureState>,
    pub create_time: DateTime<Utc>,
    pub update_time: DateTime<Utc>,
    #[graphql(skip)]
    pub work_order_id: Option<i32>,
}

impl From<link::Model> for Link {
    fn from(link: link::Model) -> Self {
        Self {
            id: link.id,
            future_state: link.future_state,
            create_time: link.create_time,
            update_time: link.update_time,
            work_order_id: link.work_order_id,
        }
    }
}

#[ComplexObject]
impl Link {
    async fn work_order(&self, ctx: &Context<'_>) -> Result<Option<WorkOrder>> {
        let Some(work_order_id) = self.work_order_id else {
            return Ok(None);
        };
        let client = ctx.data::<Client>()?;
        let order = client
            .work_order()
            .get(work_order_id)
            .await
            .map_err(|e| Error::new(format!("Failed to fetch work order: {}", e)))?;
        Ok(Some(order.into()))
    }
}

#[derive(SimpleObject, Clone)]
#[graphql(complex)]
pub struct Activity {
    pub id: i32,
    pub changed_field: ActivityField,
    pub is_create: bool,
    pub old_value: Option<String>,
    pub new_value: Option<String>,
    pub create_time: DateTime<Utc>,
    #[graphql(skip)]
    pub author_id: Option<i32>,
}

impl From<activity::Model> for Activity {
    fn from(activity: activity::Model) -> Self {
        Self {
            id: activity.id,
            changed_field: activity.changed_field,
            is_create: activity.is_create,
            old_value: activity.old_value,
            new_value: activity.new_value,
            create_time: activity.create_time,
            author_id: activity.author_id,
        }
    }
}

#[ComplexObject]
impl Activity {
    async fn author(&self, ctx: &Context<'_>) -> Result<Option<User>> {
        let dataloader = ctx.data::<DataLoaderContext>()?;
        let author = dataloader
            .load_user(self.author_id)
            .await
            .map_err(|e| Error::new(format!("Failed to fetch author: {}", e)))?;
        Ok(author.map(Into::into))
    }
}

#[derive(SimpleObject, Clone)]
pub struct ActionsRule {
    pub id: i32,
    pub name: String,
    pub trigger_id: String,
    pub rule_filters: Json<serde_json::Value>,
    pub rule_actions: Json<serde_json::Value>,
    pub create_time: DateTime<Utc>,
    pub update_time: DateTime<Utc>,
}

impl From<crate::entities::actions_rule::Model> for ActionsRule {
    fn from(rule: crate::entities::actions_rule::Model) -> Self {
        Self {
            id: rule.id,
            name: rule.name,
            trigger_id: rule.trigger_id,
            rule_filters: Json(rule.rule_filters),
            rule_actions: Json(rule.rule_actions),
            create_time: rule.create_time,
            update_time: rule.update_time,
        }
    }
}

#[derive(SimpleObject, Clone)]
#[graphql(complex)]
pub struct CheckListCategoryDefinition {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub create_time: DateTime<Utc>,
    pub update_time: DateTime<Utc>,
}

impl From<check_list_category_definition::Model> for CheckListCategoryDefinition {
    fn from(category: check_list_category_definition::Model) -> Self {
        Self {
            id: category.id,
            title: category.title,
            description: category.description,
            create_time: category.create_time,
            update_time: category.update_time,
        }
    }
}

#[ComplexObject]
impl CheckListCategoryDefinition {
    async fn check_list_item_definitions(&self, ctx: &Context<'_>) -> Result<Vec<CheckListItemDefinition>> {
        let client = ctx.data::<Client>()?;
        let items = client
            .check_list_item_definition()
            .find(
                Condition::all()
                    .add(check_list_item_definition::Column::CheckListCategoryDefinitionId.eq(self.id)),
            )
            .await
            .map_err(|e| Error::new(format!("Failed to fetch check list items: {}", e)))?;
        Ok(items.into_iter().map(Into::into).collect())
    }
}

#[derive(SimpleObject, Clone)]
pub struct CheckListItemDefinition {
    pub id: i32,
    pub title: String,
    #[graphql(name = "type")]
    pub item_type: String,
    pub index: Option<i32>,
    pub enum_values: Option<String>,
    pub enum_selection_mode_value: Option<EnumSelectionMode>,
    pub help_text: Option<String>,
    pub create_time: DateTime<Utc>,
    pub update_time: DateTime<Utc>,
}

impl From<check_list_item_definition::Model> for CheckListItemDefinition {
    fn from(item: check_list_item_definition::Model) -> Self {
        Self {
            id: item.id,
            title: item.title,
            item_type: item.item_type,
            index: item.index,
            enum_values: item.enum_values,
            enum_selection_mode_value: item.enum_selection_mode_value,
            help_text: item.help_text,
            create_time: item.create_time,
            update_time: item.update_time,
        }
    }
}

// Input types

#[derive(InputObject)]
pub struct AddWorkOrderInput {
    pub name: String,
    pub description: Option<String>,
    pub work_order_type_id: Option<i32>,
    pub location_id: Option<i32>,
    /// Defaults to the viewer.
    pub owner_id: Option<i32>,
    pub assignee_id: Option<i32>,
    pub status: Option<WorkOrderStatus>,
    pub priority: Option<WorkOrderPriority>,
    pub index: Option<i32>,
    pub install_date: Option<DateTime<Utc>>,
}

/// Omitted fields are left unchanged; an explicit `null` clears the field.
#[derive(InputObject)]
pub struct EditWorkOrderInput {
    pub id: i32,
    pub name: Option<String>,
    pub description: MaybeUndefined<String>,
    pub owner_id: Option<i32>,
    pub assignee_id: MaybeUndefined<i32>,
    pub location_id: MaybeUndefined<i32>,
    pub status: Option<WorkOrderStatus>,
    pub priority: Option<WorkOrderPriority>,
    pub index: MaybeUndefined<i32>,
    pub install_date: MaybeUndefined<DateTime<Utc>>,
    pub close_date: MaybeUndefined<DateTime<Utc>>,
}

#[derive(InputObject)]
pub struct AddLocationTypeInput {
    pub name: String,
    pub map_type: Option<String>,
    pub map_zoom_level: Option<i32>,
    pub is_site: Option<bool>,
}

#[derive(InputObject)]
pub struct EditLocationTypeInput {
    pub id: i32,
    pub name: Option<String>,
    pub map_type: MaybeUndefined<String>,
    pub map_zoom_level: MaybeUndefined<i32>,
    pub is_site: Option<bool>,
}

#[derive(InputObject)]
pub struct LocationTypeIndex {
    pub location_type_id: i32,
    pub index: i32,
}

#[derive(InputObject)]
pub struct AddLocationInput {
    pub name: String,
    pub type_id: i32,
    pub parent_id: Option<i32>,
    pub latitude: f64,
    pub longitude: f64,
    pub external_id: Option<String>,
}

#[derive(InputObject)]
pub struct AddLinkInput {
    pub work_order_id: Option<i32>,
    pub future_state: Option<FutureState>,
}

#[derive(InputObject)]
pub struct EditLinkInput {
    pub id: i32,
    pub work_order_id: MaybeUndefined<i32>,
    pub future_state: MaybeUndefined<FutureState>,
}

#[derive(InputObject)]
pub struct AddUsersGroupInput {
    pub name: String,
    pub description: Option<String>,
    pub members: Option<Vec<i32>>,
    pub policies: Option<Vec<i32>>,
}

#[derive(InputObject)]
pub struct EditUsersGroupInput {
    pub id: i32,
    pub name: Option<String>,
    pub description: MaybeUndefined<String>,
    pub status: Option<UsersGroupStatus>,
    pub policies: Option<Vec<i32>>,
}

#[derive(InputObject)]
pub struct UpdateUsersGroupMembersInput {
    pub id: i32,
    pub added_member_ids: Vec<i32>,
    pub removed_member_ids: Vec<i32>,
}

#[derive(InputObject)]
pub struct AddPermissionsPolicyInput {
    pub name: String,
    pub description: Option<String>,
    pub is_global: Option<bool>,
    pub inventory_input: Option<Json<serde_json::Value>>,
    pub workforce_input: Option<Json<serde_json::Value>>,
    pub groups: Option<Vec<i32>>,
}

#[derive(InputObject)]
pub struct EditPermissionsPolicyInput {
    pub id: i32,
    pub name: Option<String>,
    pub description: MaybeUndefined<String>,
    pub is_global: Option<bool>,
    pub inventory_input: MaybeUndefined<Json<serde_json::Value>>,
    pub workforce_input: MaybeUndefined<Json<serde_json::Value>>,
    pub groups: Option<Vec<i32>>,
}

#[derive(InputObject)]
pub struct AddActionsRuleInput {
    pub name: String,
    pub trigger_id: String,
    pub rule_filters: Json<serde_json::Value>,
    pub rule_actions: Json<serde_json::Value>,
}

#[derive(InputObject)]
pub struct EditActionsRuleInput {
    pub id: i32,
    pub name: Option<String>,
    pub trigger_id: Option<String>,
    pub rule_filters: Option<Json<serde_json::Value>>,
    pub rule_actions: Option<Json<serde_json::Value>>,
}

#[derive(InputObject)]
pub struct AddWorkOrderTypeInput {
    pub name: String,
    pub description: Option<String>,
}

#[derive(InputObject)]
pub struct CheckListItemDefinitionInput {
    pub title: String,
    #[graphql(name = "type")]
    pub item_type: CheckListItemType,
    pub index: Option<i32>,
    pub enum_values: Option<String>,
    pub enum_selection_mode: Option<EnumSelectionMode>,
    pub help_text: Option<String>,
}

#[derive(InputObject)]
pub struct AddCheckListCategoryDefinitionInput {
    pub title: String,
    pub description: Option<String>,
    pub work_order_type_id: i32,
    pub items: Option<Vec<CheckListItemDefinitionInput>>,
}

#[derive(InputObject)]
pub struct AddCheckListItemDefinitionInput {
    pub category_id: i32,
    #[graphql(flatten)]
    pub item: CheckListItemDefinitionInput,
}
