mod common;

use std::sync::{Arc, Mutex};
use std::time::Duration;

use chrono::Utc;
use pretty_assertions::assert_eq;

use invgraph::ent::{EntError, Hook, Mutation, Next, Op};
use invgraph::entities::enums::{ActivityField, WorkOrderStatus};
use invgraph::hooks::default_hooks;
use invgraph::schema::*;

fn tracing_hook(name: &'static str, events: Arc<Mutex<Vec<String>>>) -> Hook<LocationType> {
    Hook::new(move |client, mutation: Mutation<LocationType>, next: Next<LocationType>| {
        let events = Arc::clone(&events);
        async move {
            events.lock().unwrap().push(format!("{name}:before"));
            let result = next.run(client, mutation).await;
            events.lock().unwrap().push(format!("{name}:after"));
            result
        }
    })
}

#[tokio::test]
async fn first_registered_hook_runs_outermost() {
    let events = Arc::new(Mutex::new(Vec::new()));
    let mut hooks = Hooks::new();
    hooks
        .on(tracing_hook("outer", Arc::clone(&events)))
        .on(tracing_hook("inner", Arc::clone(&events)));
    assert_eq!(hooks.len::<LocationType>(), 2);
    assert_eq!(hooks.len::<WorkOrder>(), 0);
    let client = common::client().await.with_hooks(hooks);

    common::location_type(&client, "Building").await;

    assert_eq!(
        *events.lock().unwrap(),
        vec!["outer:before", "inner:before", "inner:after", "outer:after"]
    );
}

#[tokio::test]
async fn hook_can_short_circuit_the_write() {
    let mut hooks = Hooks::new();
    hooks.on(Hook::new(|_client, mutation: Mutation<LocationType>, _next: Next<LocationType>| async move {
        match mutation.op() {
            Op::Create => Err(EntError::Internal("location types are frozen".into())),
            _ => unreachable!(),
        }
    }));
    let client = common::client().await.with_hooks(hooks);

    let err = client.location_type().create().set_name("Building").save().await.unwrap_err();

    assert!(matches!(err, EntError::Internal(_)));
    assert!(client.location_type().all().await.unwrap().is_empty());
}

#[tokio::test]
async fn hook_can_rewrite_fields_before_persisting() {
    let mut hooks = Hooks::new();
    hooks.on(Hook::new(|client, mutation: Mutation<WorkOrder>, next: Next<WorkOrder>| async move {
        let name = mutation.fields().name.clone().unwrap();
        let mutation = mutation.set_name(name.trim().to_uppercase());
        next.run(client, mutation).await
    }));
    let client = common::client().await.with_hooks(hooks);
    let owner = common::user(&client, "alice").await;

    let order = common::work_order(&client, "  replace fiber ", &owner).await;

    assert_eq!(order.name, "REPLACE FIBER");
    assert_eq!(client.work_order().get(order.id).await.unwrap().name, "REPLACE FIBER");
}

#[tokio::test]
async fn rewritten_fields_are_validated_again() {
    let mut hooks = Hooks::new();
    hooks.on(Hook::new(|client, mutation: Mutation<WorkOrder>, next: Next<WorkOrder>| async move {
        next.run(client, mutation.set_name("")).await
    }));
    let client = common::client().await.with_hooks(hooks);
    let owner = common::user(&client, "alice").await;

    let err = client
        .work_order()
        .create()
        .set_name("Survey")
        .set_creation_date(Utc::now())
        .set_owner(&owner)
        .save()
        .await
        .unwrap_err();

    assert!(matches!(err, EntError::Validation { field: "name", .. }));
    assert!(client.work_order().all().await.unwrap().is_empty());
}

#[tokio::test]
async fn history_records_creation_and_status_changes() {
    let client = common::client().await.with_hooks(default_hooks());
    let owner = common::user(&client, "alice").await;
    let client = client.with_viewer(Some(owner.id));

    let order = common::work_order(&client, "Survey", &owner).await;
    let created = order.query_activities(&client).await.unwrap();
    assert_eq!(created.len(), 1);
    assert_eq!(created[0].changed_field, ActivityField::CreationDate);
    assert!(created[0].is_create);
    assert_eq!(created[0].new_value, Some(order.creation_date.timestamp().to_string()));

    client
        .work_order()
        .update_one(&order)
        .set_status(WorkOrderStatus::Done)
        .exec_x()
        .await;

    let activities = order.query_activities(&client).await.unwrap();
    let status: Vec<_> = activities
        .iter()
        .filter(|a| a.changed_field == ActivityField::Status)
        .collect();
    assert_eq!(status.len(), 1);
    assert_eq!(status[0].old_value.as_deref(), Some("PLANNED"));
    assert_eq!(status[0].new_value.as_deref(), Some("DONE"));
    assert!(!status[0].is_create);
    assert_eq!(status[0].author_id, Some(owner.id));
    assert_eq!(activities.len(), 2);
}

#[tokio::test]
async fn history_is_rolled_back_with_a_failed_update() {
    let client = common::client().await.with_hooks(default_hooks());
    let owner = common::user(&client, "alice").await;
    let order = common::work_order(&client, "Survey", &owner).await;

    let err = client
        .work_order()
        .update_one(&order)
        .set_status(WorkOrderStatus::Blocked)
        .set_assignee_id(owner.id + 100)
        .save()
        .await
        .unwrap_err();

    assert!(err.is_constraint(), "unexpected error: {err}");
    assert_eq!(client.work_order().get(order.id).await.unwrap().status, WorkOrderStatus::Planned);
    assert_eq!(order.query_activities(&client).await.unwrap().len(), 1);
}

#[tokio::test]
async fn slow_mutations_time_out() {
    let mut hooks = Hooks::new();
    hooks.on(Hook::new(|client, mutation: Mutation<LocationType>, next: Next<LocationType>| async move {
        tokio::time::sleep(Duration::from_millis(500)).await;
        next.run(client, mutation).await
    }));
    let client = common::client()
        .await
        .with_hooks(hooks)
        .with_timeout(Some(Duration::from_millis(50)));

    let err = client.location_type().create().set_name("Building").save().await.unwrap_err();

    assert!(matches!(err, EntError::Timeout(limit) if limit == Duration::from_millis(50)));
}

#[tokio::test]
async fn timing_out_after_the_write_rolls_it_back() {
    let mut hooks = Hooks::new();
    hooks.on(Hook::new(|client, mutation: Mutation<LocationType>, next: Next<LocationType>| async move {
        let saved = next.run(client, mutation).await;
        tokio::time::sleep(Duration::from_millis(500)).await;
        saved
    }));
    let client = common::client()
        .await
        .with_hooks(hooks)
        .with_timeout(Some(Duration::from_millis(50)));

    let err = client.location_type().create().set_name("Building").save().await.unwrap_err();

    assert!(matches!(err, EntError::Timeout(_)));
    let unbounded = client.with_timeout(None).with_hooks(Hooks::new());
    assert!(unbounded.location_type().all().await.unwrap().is_empty());
}
