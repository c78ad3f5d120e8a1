use std::fmt;
use std::future::Future;
use std::marker::PhantomData;
use std::sync::Arc;
use std::time::Duration;

use sea_orm::{
    ColumnTrait, Condition, DatabaseConnection, DatabaseTransaction, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, Select, TransactionTrait,
};

use super::{Create, CreateBulk, Delete, DeleteOne, EntError, Schema, Update, UpdateOne};
use crate::schema::Hooks;

#[derive(Clone)]
enum Driver {
    Pool(DatabaseConnection),
    Tx(Arc<DatabaseTransaction>),
}

/// Execution context handed explicitly to every builder.
///
/// Holds the database handle (a pool, or a transaction the client was bound
/// to), the hook registry, the per-operation timeout and the id of the user
/// on whose behalf mutations run. Cloning is cheap.
#[derive(Clone)]
pub struct Client {
    driver: Driver,
    hooks: Arc<Hooks>,
    timeout: Option<Duration>,
    viewer: Option<i32>,
}

impl Client {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            driver: Driver::Pool(db),
            hooks: Arc::new(Hooks::default()),
            timeout: None,
            viewer: None,
        }
    }

    /// Binds a client to a transaction opened by the caller. Every save made
    /// through it runs inside a savepoint of `tx`.
    pub fn from_transaction(tx: Arc<DatabaseTransaction>) -> Self {
        Self {
            driver: Driver::Tx(tx),
            hooks: Arc::new(Hooks::default()),
            timeout: None,
            viewer: None,
        }
    }

    pub fn with_hooks(mut self, hooks: Hooks) -> Self {
        self.hooks = Arc::new(hooks);
        self
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_viewer(mut self, viewer: Option<i32>) -> Self {
        self.viewer = viewer;
        self
    }

    pub fn hooks(&self) -> &Hooks {
        &self.hooks
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    pub fn viewer(&self) -> Option<i32> {
        self.viewer
    }

    pub fn in_transaction(&self) -> bool {
        matches!(self.driver, Driver::Tx(_))
    }

    /// Opens a transaction, or a savepoint when already bound to one.
    pub(crate) async fn begin(&self) -> Result<DatabaseTransaction, DbErr> {
        match &self.driver {
            Driver::Pool(db) => db.begin().await,
            Driver::Tx(tx) => tx.begin().await,
        }
    }

    fn bind(&self, tx: Arc<DatabaseTransaction>) -> Self {
        Self {
            driver: Driver::Tx(tx),
            ..self.clone()
        }
    }

    /// Runs `f` with a client bound to a new transaction. The transaction is
    /// committed when `f` returns `Ok` and rolled back otherwise.
    ///
    /// The client passed to `f` must not outlive the returned future.
    pub async fn transaction<T, F, Fut>(&self, f: F) -> Result<T, EntError>
    where
        F: FnOnce(Client) -> Fut,
        Fut: Future<Output = Result<T, EntError>>,
    {
        let tx = Arc::new(self.begin().await?);
        let result = f(self.bind(Arc::clone(&tx))).await;

        match (result, Arc::try_unwrap(tx)) {
            (Ok(value), Ok(tx)) => {
                tx.commit().await?;
                Ok(value)
            }
            (Err(err), Ok(tx)) => {
                tx.rollback().await?;
                Err(err)
            }
            (Ok(_), Err(_)) => Err(EntError::Internal(
                "transaction client escaped its closure".into(),
            )),
            (Err(err), Err(_)) => Err(err),
        }
    }

    pub async fn count<E: EntityTrait>(&self, select: Select<E>) -> Result<u64, EntError>
    where
        E::Model: Sync,
    {
        let rows = match &self.driver {
            Driver::Pool(db) => select.count(db).await?,
            Driver::Tx(tx) => select.count(tx.as_ref()).await?,
        };
        Ok(rows)
    }

    pub async fn all<E: EntityTrait>(&self, select: Select<E>) -> Result<Vec<E::Model>, EntError> {
        let rows = match &self.driver {
            Driver::Pool(db) => select.all(db).await?,
            Driver::Tx(tx) => select.all(tx.as_ref()).await?,
        };
        Ok(rows)
    }

    pub async fn one<E: EntityTrait>(&self, select: Select<E>) -> Result<Option<E::Model>, EntError> {
        let row = match &self.driver {
            Driver::Pool(db) => select.one(db).await?,
            Driver::Tx(tx) => select.one(tx.as_ref()).await?,
        };
        Ok(row)
    }

    /// Builders and reads for entity type `S`.
    pub fn of<S: Schema>(&self) -> EntityClient<S> {
        EntityClient {
            client: self.clone(),
            _schema: PhantomData,
        }
    }
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("in_transaction", &self.in_transaction())
            .field("timeout", &self.timeout)
            .field("viewer", &self.viewer)
            .finish_non_exhaustive()
    }
}

/// Entry point for the builders of one entity type.
pub struct EntityClient<S: Schema> {
    client: Client,
    _schema: PhantomData<fn() -> S>,
}

impl<S: Schema> EntityClient<S> {
    pub fn create(&self) -> Create<S> {
        Create::new(self.client.clone())
    }

    pub fn create_bulk(&self, builders: impl IntoIterator<Item = Create<S>>) -> CreateBulk<S> {
        CreateBulk::new(self.client.clone(), builders)
    }

    /// Bulk update of every row matching the filters added to the builder.
    pub fn update(&self) -> Update<S> {
        Update::new(self.client.clone())
    }

    pub fn update_one(&self, model: &S::Model) -> UpdateOne<S> {
        self.update_one_id(S::id_of(model))
    }

    pub fn update_one_id(&self, id: i32) -> UpdateOne<S> {
        UpdateOne::new(self.client.clone(), id)
    }

    pub fn delete(&self) -> Delete<S> {
        Delete::new(self.client.clone())
    }

    pub fn delete_one(&self, model: &S::Model) -> DeleteOne<S> {
        self.delete_one_id(S::id_of(model))
    }

    pub fn delete_one_id(&self, id: i32) -> DeleteOne<S> {
        DeleteOne::new(self.client.clone(), id)
    }

    /// Select over this entity, for callers that need ordering or paging.
    pub fn query(&self) -> Select<S::Entity> {
        S::Entity::find()
    }

    pub async fn get(&self, id: i32) -> Result<S::Model, EntError> {
        self.client
            .one(S::Entity::find().filter(S::id_column().eq(id)))
            .await?
            .ok_or(EntError::NotFound { entity: S::TYPE, id })
    }

    pub async fn find(&self, condition: Condition) -> Result<Vec<S::Model>, EntError> {
        self.client.all(S::Entity::find().filter(condition)).await
    }

    pub async fn all(&self) -> Result<Vec<S::Model>, EntError> {
        self.client.all(S::Entity::find()).await
    }

    pub async fn count(&self) -> Result<u64, EntError> {
        self.client.count(S::Entity::find()).await
    }
}
