use async_graphql::dataloader::{DataLoader, Loader};
use sea_orm::{ColumnTrait, Condition};
use std::collections::HashMap;
use std::sync::Arc;

use crate::ent::Client;
use crate::entities::user;

/// DataLoader for batching user lookups (work order owners and assignees,
/// activity authors)
#[derive(Clone)]
pub struct UserLoader {
    client: Client,
}

impl UserLoader {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

impl Loader<i32> for UserLoader {
    type Value = user::Model;
    type Error = String;

    async fn load(&self, keys: &[i32]) -> Result<HashMap<i32, Self::Value>, Self::Error> {
        let users = self
            .client
            .user()
            .find(Condition::all().add(user::Column::Id.is_in(keys.iter().copied())))
            .await
            .map_err(|e| format!("Failed to load users: {}", e))?;

        Ok(users.into_iter().map(|u| (u.id, u)).collect())
    }
}

/// DataLoader context for GraphQL resolvers
#[derive(Clone)]
pub struct DataLoaderContext {
    pub user_loader: Arc<DataLoader<UserLoader>>,
}

impl DataLoaderContext {
    pub fn new(client: Client) -> Self {
        Self {
            user_loader: Arc::new(
                DataLoader::new(UserLoader::new(client), tokio::spawn).max_batch_size(100),
            ),
        }
    }

    pub async fn load_user(&self, id: Option<i32>) -> Result<Option<user::Model>, String> {
        match id {
            Some(id) => self.user_loader.load_one(id).await,
            None => Ok(None),
        }
    }
}
