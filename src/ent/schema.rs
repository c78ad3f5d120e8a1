use std::fmt::Debug;

use async_trait::async_trait;
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, DatabaseTransaction, EntityTrait, FromQueryResult,
    IntoActiveModel,
};
use serde::{Serialize, de::DeserializeOwned};

use super::{EntError, Hook, Mutation};
use crate::schema::Hooks;

/// Static description of one entity type: its sea-orm types, defaults,
/// validators, edge writers and hook slot.
#[async_trait]
pub trait Schema: Sized + Send + Sync + 'static {
    type Entity: EntityTrait<Model = Self::Model>;
    type Model: FromQueryResult
        + IntoActiveModel<Self::ActiveModel>
        + Serialize
        + DeserializeOwned
        + Clone
        + Debug
        + Send
        + Sync
        + 'static;
    type ActiveModel: ActiveModelTrait<Entity = Self::Entity>
        + ActiveModelBehavior
        + Clone
        + Debug
        + Default
        + Send
        + Sync
        + 'static;
    /// Pending to-many relationship changes.
    type Edges: Clone + Debug + Default + Send + Sync + 'static;

    /// Type name used in errors and logs.
    const TYPE: &'static str;

    fn id_column() -> <Self::Entity as EntityTrait>::Column;

    fn id_of(model: &Self::Model) -> i32;

    /// Fills defaultable fields the caller left unset.
    fn defaults(mutation: &mut Mutation<Self>);

    /// Required fields, required edges and field validators. Must not do I/O.
    fn check(mutation: &Mutation<Self>) -> Result<(), EntError>;

    /// Writes edge changes for row `id` after its own row was written.
    async fn save_edges(
        _tx: &DatabaseTransaction,
        _id: i32,
        _edges: &Self::Edges,
    ) -> Result<(), EntError> {
        Ok(())
    }

    fn hooks(registry: &Hooks) -> &[Hook<Self>];

    fn hooks_mut(registry: &mut Hooks) -> &mut Vec<Hook<Self>>;
}
