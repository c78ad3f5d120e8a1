use std::future::Future;
use std::marker::PhantomData;
use std::sync::Arc;

use futures::future::BoxFuture;

use super::persist::persist;
use super::{Client, EntError, Mutation, Saved, Schema};

pub type HookFuture<S> = BoxFuture<'static, Result<Saved<<S as Schema>::Model>, EntError>>;

type HookFn<S> = dyn Fn(Client, Mutation<S>, Next<S>) -> HookFuture<S> + Send + Sync;

/// Middleware wrapping the persistence of one entity type.
///
/// A hook receives the client the mutation runs on, the pending mutation and
/// the rest of the chain. It may rewrite the mutation before calling
/// [`Next::run`], inspect the result afterwards, or return without calling
/// `next` at all, in which case nothing is written.
pub struct Hook<S: Schema>(Arc<HookFn<S>>);

impl<S: Schema> Hook<S> {
    pub fn new<F, Fut>(f: F) -> Self
    where
        F: Fn(Client, Mutation<S>, Next<S>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Saved<S::Model>, EntError>> + Send + 'static,
    {
        let hook = move |client: Client, mutation: Mutation<S>, next: Next<S>| -> HookFuture<S> {
            Box::pin(f(client, mutation, next))
        };
        Self(Arc::new(hook))
    }
}

impl<S: Schema> Clone for Hook<S> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

/// The remainder of a hook chain. Hooks run in registration order, so the
/// first registered hook is the outermost one; the end of the chain is the
/// database write.
pub struct Next<S: Schema> {
    index: usize,
    _schema: PhantomData<fn() -> S>,
}

impl<S: Schema> Next<S> {
    pub(crate) fn start() -> Self {
        Self::at(0)
    }

    fn at(index: usize) -> Self {
        Self {
            index,
            _schema: PhantomData,
        }
    }

    pub async fn run(self, client: Client, mutation: Mutation<S>) -> Result<Saved<S::Model>, EntError> {
        let hook = S::hooks(client.hooks()).get(self.index).cloned();
        match hook {
            Some(hook) => (hook.0)(client, mutation, Next::at(self.index + 1)).await,
            None => persist(&client, mutation).await,
        }
    }
}
