use sea_orm::sea_query::IntoCondition;
use tracing::debug;

use super::{Client, EntError, Mutation, Next, Op, Saved, Schema};

/// Access to the pending mutation of a builder. The per-entity setter traits
/// are implemented for every `Builder` of their entity, including the bare
/// [`Mutation`] handed to hooks.
pub trait Builder<S: Schema>: Sized {
    fn mutation(&self) -> &Mutation<S>;

    fn mutation_mut(&mut self) -> &mut Mutation<S>;
}

/// Builders that modify existing rows, which additionally expose clearing of
/// nullable fields and to-many edges.
pub trait Updater<S: Schema>: Builder<S> {}

impl<S: Schema> Builder<S> for Mutation<S> {
    fn mutation(&self) -> &Mutation<S> {
        self
    }

    fn mutation_mut(&mut self) -> &mut Mutation<S> {
        self
    }
}

/// Defaults, checks, then the hook chain inside a transaction bounded by the
/// client timeout.
pub(crate) async fn save<S: Schema>(
    client: Client,
    mut mutation: Mutation<S>,
) -> Result<Saved<S::Model>, EntError> {
    if mutation.op().is_write() {
        S::defaults(&mut mutation);
        S::check(&mutation)?;
    }
    debug!(entity = S::TYPE, op = %mutation.op(), id = ?mutation.id(), "saving mutation");

    let timeout = client.timeout();
    let run = client.transaction(move |tx| Next::<S>::start().run(tx, mutation));
    match timeout {
        Some(limit) => tokio::time::timeout(limit, run)
            .await
            .map_err(|_| EntError::Timeout(limit))?,
        None => run.await,
    }
}

fn abort(entity: &str, op: Op, err: EntError) -> ! {
    panic!("{entity} {op} failed: {err}")
}

macro_rules! impl_builder {
    ($builder:ident) => {
        impl<S: Schema> Builder<S> for $builder<S> {
            fn mutation(&self) -> &Mutation<S> {
                &self.mutation
            }

            fn mutation_mut(&mut self) -> &mut Mutation<S> {
                &mut self.mutation
            }
        }

        impl<S: Schema> std::fmt::Debug for $builder<S> {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.debug_struct(stringify!($builder))
                    .field("mutation", &self.mutation)
                    .finish_non_exhaustive()
            }
        }
    };
}

/// Builder inserting one row.
pub struct Create<S: Schema> {
    client: Client,
    mutation: Mutation<S>,
}

impl<S: Schema> Create<S> {
    pub(crate) fn new(client: Client) -> Self {
        Self {
            client,
            mutation: Mutation::new(Op::Create),
        }
    }

    pub async fn save(self) -> Result<S::Model, EntError> {
        save(self.client, self.mutation).await?.into_node()
    }

    /// Like [`save`](Self::save) but panics on error.
    pub async fn save_x(self) -> S::Model {
        match self.save().await {
            Ok(model) => model,
            Err(err) => abort(S::TYPE, Op::Create, err),
        }
    }

    pub async fn exec(self) -> Result<(), EntError> {
        self.save().await.map(drop)
    }

    pub async fn exec_x(self) {
        if let Err(err) = self.exec().await {
            abort(S::TYPE, Op::Create, err)
        }
    }
}

impl_builder!(Create);

/// Inserts several rows in one transaction; any failure rolls back all of them.
pub struct CreateBulk<S: Schema> {
    client: Client,
    builders: Vec<Create<S>>,
}

impl<S: Schema> CreateBulk<S> {
    pub(crate) fn new(client: Client, builders: impl IntoIterator<Item = Create<S>>) -> Self {
        Self {
            client,
            builders: builders.into_iter().collect(),
        }
    }

    pub async fn save(self) -> Result<Vec<S::Model>, EntError> {
        let builders = self.builders;
        self.client
            .transaction(move |tx| async move {
                let mut models = Vec::with_capacity(builders.len());
                for builder in builders {
                    models.push(save(tx.clone(), builder.mutation).await?.into_node()?);
                }
                Ok(models)
            })
            .await
    }

    pub async fn save_x(self) -> Vec<S::Model> {
        match self.save().await {
            Ok(models) => models,
            Err(err) => abort(S::TYPE, Op::Create, err),
        }
    }
}

/// Builder updating every row that matches its filters.
pub struct Update<S: Schema> {
    client: Client,
    mutation: Mutation<S>,
}

impl<S: Schema> Update<S> {
    pub(crate) fn new(client: Client) -> Self {
        Self {
            client,
            mutation: Mutation::new(Op::Update),
        }
    }

    /// Narrows the rows to update. Filters are combined with AND.
    pub fn filter<F: IntoCondition>(mut self, filter: F) -> Self {
        self.mutation.add_predicate(filter);
        self
    }

    /// Returns the number of rows updated.
    pub async fn save(self) -> Result<u64, EntError> {
        save(self.client, self.mutation).await?.into_affected()
    }

    pub async fn save_x(self) -> u64 {
        match self.save().await {
            Ok(rows) => rows,
            Err(err) => abort(S::TYPE, Op::Update, err),
        }
    }

    pub async fn exec(self) -> Result<(), EntError> {
        self.save().await.map(drop)
    }

    pub async fn exec_x(self) {
        if let Err(err) = self.exec().await {
            abort(S::TYPE, Op::Update, err)
        }
    }
}

impl_builder!(Update);
impl<S: Schema> Updater<S> for Update<S> {}

/// Builder updating one row by id.
pub struct UpdateOne<S: Schema> {
    client: Client,
    mutation: Mutation<S>,
}

impl<S: Schema> UpdateOne<S> {
    pub(crate) fn new(client: Client, id: i32) -> Self {
        Self {
            client,
            mutation: Mutation::with_id(Op::UpdateOne, id),
        }
    }

    /// Returns the updated row; `NotFound` when the id does not exist.
    pub async fn save(self) -> Result<S::Model, EntError> {
        save(self.client, self.mutation).await?.into_node()
    }

    pub async fn save_x(self) -> S::Model {
        match self.save().await {
            Ok(model) => model,
            Err(err) => abort(S::TYPE, Op::UpdateOne, err),
        }
    }

    pub async fn exec(self) -> Result<(), EntError> {
        self.save().await.map(drop)
    }

    pub async fn exec_x(self) {
        if let Err(err) = self.exec().await {
            abort(S::TYPE, Op::UpdateOne, err)
        }
    }
}

impl_builder!(UpdateOne);
impl<S: Schema> Updater<S> for UpdateOne<S> {}

/// Builder deleting every row that matches its filters.
pub struct Delete<S: Schema> {
    client: Client,
    mutation: Mutation<S>,
}

impl<S: Schema> Delete<S> {
    pub(crate) fn new(client: Client) -> Self {
        Self {
            client,
            mutation: Mutation::new(Op::Delete),
        }
    }

    pub fn filter<F: IntoCondition>(mut self, filter: F) -> Self {
        self.mutation.add_predicate(filter);
        self
    }

    /// Returns the number of rows deleted.
    pub async fn exec(self) -> Result<u64, EntError> {
        save(self.client, self.mutation).await?.into_affected()
    }

    pub async fn exec_x(self) -> u64 {
        match self.exec().await {
            Ok(rows) => rows,
            Err(err) => abort(S::TYPE, Op::Delete, err),
        }
    }
}

impl_builder!(Delete);

/// Builder deleting one row by id.
pub struct DeleteOne<S: Schema> {
    client: Client,
    mutation: Mutation<S>,
}

impl<S: Schema> DeleteOne<S> {
    pub(crate) fn new(client: Client, id: i32) -> Self {
        Self {
            client,
            mutation: Mutation::with_id(Op::DeleteOne, id),
        }
    }

    /// Fails with `NotFound` when the id does not exist.
    pub async fn exec(self) -> Result<(), EntError> {
        save(self.client, self.mutation).await?.into_affected().map(drop)
    }

    pub async fn exec_x(self) {
        if let Err(err) = self.exec().await {
            abort(S::TYPE, Op::DeleteOne, err)
        }
    }
}

impl_builder!(DeleteOne);
