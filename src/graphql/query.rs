use async_graphql::*;
use sea_orm::{ColumnTrait, QueryFilter, QueryOrder, QuerySelect};

use crate::auth::{require_admin, require_auth};
use crate::ent::Client;
use crate::entities::enums::WorkOrderStatus;
use crate::entities::{location_type, work_order};
use crate::graphql::types::{
    ActionsRule, LocationType, PermissionsPolicy, User, UsersGroup, WorkOrder,
};

const DEFAULT_PAGE_SIZE: u64 = 50;

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    async fn me(&self, ctx: &Context<'_>) -> Result<User> {
        let client = ctx.data::<Client>()?;
        let authenticated_user = require_auth(ctx)?;

        let user = client
            .user()
            .get(authenticated_user.id)
            .await
            .map_err(|e| Error::new(format!("Failed to find user: {}", e)))?;

        Ok(user.into())
    }

    async fn health(&self) -> &str {
        "OK"
    }

    async fn work_order(&self, ctx: &Context<'_>, id: i32) -> Result<Option<WorkOrder>> {
        require_auth(ctx)?;
        let client = ctx.data::<Client>()?;

        match client.work_order().get(id).await {
            Ok(order) => Ok(Some(order.into())),
            Err(e) if e.is_not_found() => Ok(None),
            Err(e) => Err(Error::new(format!("Failed to fetch work order: {}", e))),
        }
    }

    async fn work_orders(
        &self,
        ctx: &Context<'_>,
        status: Option<WorkOrderStatus>,
        limit: Option<u64>,
        offset: Option<u64>,
    ) -> Result<Vec<WorkOrder>> {
        require_auth(ctx)?;
        let client = ctx.data::<Client>()?;

        let mut query = client.work_order().query();
        if let Some(status) = status {
            query = query.filter(work_order::Column::Status.eq(status));
        }
        let query = query
            .order_by_asc(work_order::Column::Id)
            .limit(limit.unwrap_or(DEFAULT_PAGE_SIZE))
            .offset(offset.unwrap_or(0));

        let orders = client
            .all(query)
            .await
            .map_err(|e| Error::new(format!("Failed to fetch work orders: {}", e)))?;

        Ok(orders.into_iter().map(Into::into).collect())
    }

    async fn location_types(&self, ctx: &Context<'_>) -> Result<Vec<LocationType>> {
        require_auth(ctx)?;
        let client = ctx.data::<Client>()?;

        let query = client
            .location_type()
            .query()
            .order_by_asc(location_type::Column::Index)
            .order_by_asc(location_type::Column::Id);
        let location_types = client
            .all(query)
            .await
            .map_err(|e| Error::new(format!("Failed to fetch location types: {}", e)))?;

        Ok(location_types.into_iter().map(Into::into).collect())
    }

    async fn users_groups(&self, ctx: &Context<'_>) -> Result<Vec<UsersGroup>> {
        require_admin(ctx)?;
        let client = ctx.data::<Client>()?;

        let groups = client
            .users_group()
            .all()
            .await
            .map_err(|e| Error::new(format!("Failed to fetch groups: {}", e)))?;

        Ok(groups.into_iter().map(Into::into).collect())
    }

    async fn permissions_policies(&self, ctx: &Context<'_>) -> Result<Vec<PermissionsPolicy>> {
        require_admin(ctx)?;
        let client = ctx.data::<Client>()?;

        let policies = client
            .permissions_policy()
            .all()
            .await
            .map_err(|e| Error::new(format!("Failed to fetch policies: {}", e)))?;

        Ok(policies.into_iter().map(Into::into).collect())
    }

    async fn actions_rules(&self, ctx: &Context<'_>) -> Result<Vec<ActionsRule>> {
        require_admin(ctx)?;
        let client = ctx.data::<Client>()?;

        let rules = client
            .actions_rule()
            .all()
            .await
            .map_err(|e| Error::new(format!("Failed to fetch actions rules: {}", e)))?;

        Ok(rules.into_iter().map(Into::into).collect())
    }
}
