use serde::{Deserialize, Serialize};

use crate::entities::enums::UserRole;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: i32, // user id
    pub auth_id: String,
    pub role: UserRole,
    pub exp: i64,   // expiration timestamp
    pub iat: i64,   // issued at timestamp
}

/// The viewer of a request, taken from a verified bearer token.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub id: i32,
    pub auth_id: String,
    pub role: UserRole,
}

impl AuthenticatedUser {
    pub fn is_admin(&self) -> bool {
        matches!(self.role, UserRole::Admin | UserRole::Owner)
    }
}

impl From<Claims> for AuthenticatedUser {
    fn from(claims: Claims) -> Self {
        Self {
            id: claims.sub,
            auth_id: claims.auth_id,
            role: claims.role,
        }
    }
}
