use async_graphql::{Context, Error, Result};

use crate::auth::AuthenticatedUser;

/// Authorization guard for checking if user is authenticated
pub fn require_auth<'ctx>(ctx: &'ctx Context<'_>) -> Result<&'ctx AuthenticatedUser> {
    ctx.data::<AuthenticatedUser>()
        .map_err(|_| Error::new("Authentication required"))
}

/// Policies, groups and automation rules are administered by admins and owners.
pub fn require_admin<'ctx>(ctx: &'ctx Context<'_>) -> Result<&'ctx AuthenticatedUser> {
    let user = require_auth(ctx)?;
    if !user.is_admin() {
        return Err(Error::new("Insufficient permissions: admin role required"));
    }
    Ok(user)
}
