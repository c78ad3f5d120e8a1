use async_graphql::{EmptySubscription, Schema};

use crate::ent::Client;
use crate::graphql::{DataLoaderContext, MutationRoot, QueryRoot};

pub type ApiSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Builds the schema. `client` backs the batched user lookups; resolvers
/// read the per-request client from the request data.
pub fn create_schema(client: Client) -> ApiSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(DataLoaderContext::new(client))
        .finish()
}
