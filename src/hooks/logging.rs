use std::time::Instant;

use tracing::{debug, warn};

use crate::ent::{Client, Hook, Mutation, Next, Schema};
use crate::schema::*;

/// Emits one event per mutation with its entity, op, target and outcome.
pub fn logging<S: Schema>() -> Hook<S> {
    Hook::new(|client: Client, mutation: Mutation<S>, next: Next<S>| async move {
        let op = mutation.op();
        let id = mutation.id();
        let started = Instant::now();
        let result = next.run(client, mutation).await;
        let elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
        match &result {
            Ok(_) => debug!(entity = S::TYPE, %op, ?id, elapsed_ms, "mutation applied"),
            Err(err) => warn!(entity = S::TYPE, %op, ?id, elapsed_ms, error = %err, "mutation failed"),
        }
        result
    })
}

pub fn register_logging(hooks: &mut Hooks) {
    hooks
        .on(logging::<ActionsRule>())
        .on(logging::<Activity>())
        .on(logging::<CheckListCategoryDefinition>())
        .on(logging::<CheckListItemDefinition>())
        .on(logging::<Link>())
        .on(logging::<Location>())
        .on(logging::<LocationType>())
        .on(logging::<PermissionsPolicy>())
        .on(logging::<User>())
        .on(logging::<UsersGroup>())
        .on(logging::<WorkOrder>())
        .on(logging::<WorkOrderType>());
}
