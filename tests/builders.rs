mod common;

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use chrono::Utc;
use pretty_assertions::assert_eq;
use sea_orm::ColumnTrait;

use invgraph::ent::{Builder, EntError, Hook, Mutation, Next};
use invgraph::entities::enums::{
    CheckListItemType, UserRole, UserStatus, WorkOrderPriority, WorkOrderStatus,
};
use invgraph::entities::{user, work_order};
use invgraph::schema::*;

#[tokio::test]
async fn missing_required_field_fails_before_the_hook_chain() {
    let calls = Arc::new(AtomicUsize::new(0));
    let seen = Arc::clone(&calls);
    let mut hooks = Hooks::new();
    hooks.on(Hook::new(move |client, mutation: Mutation<WorkOrder>, next: Next<WorkOrder>| {
        seen.fetch_add(1, Ordering::SeqCst);
        next.run(client, mutation)
    }));
    let client = common::client().await.with_hooks(hooks);
    let owner = common::user(&client, "alice").await;

    let err = client
        .work_order()
        .create()
        .set_creation_date(Utc::now())
        .set_owner(&owner)
        .save()
        .await
        .unwrap_err();

    assert!(matches!(err, EntError::MissingField { entity: "WorkOrder", field: "name" }));
    assert!(err.is_validation());
    assert_eq!(calls.load(Ordering::SeqCst), 0);
    assert!(client.work_order().all().await.unwrap().is_empty());
}

#[tokio::test]
async fn missing_required_edge_is_reported() {
    let client = common::client().await;

    let err = client
        .work_order()
        .create()
        .set_name("Install antenna")
        .set_creation_date(Utc::now())
        .save()
        .await
        .unwrap_err();

    assert!(matches!(err, EntError::MissingEdge { entity: "WorkOrder", edge: "owner" }));
}

#[tokio::test]
async fn defaults_are_applied_on_create() {
    let client = common::client().await;
    let before = Utc::now();

    let user = common::user(&client, "alice").await;

    assert_eq!(user.status, UserStatus::Active);
    assert_eq!(user.role, UserRole::User);
    assert_eq!(user.create_time, user.update_time);
    assert!(user.create_time >= before);

    let stored = client.user().get(user.id).await.unwrap();
    assert_eq!(stored.create_time, user.create_time);

    let order = common::work_order(&client, "Survey", &user).await;
    assert_eq!(order.status, WorkOrderStatus::Planned);
    assert_eq!(order.priority, WorkOrderPriority::None);

    let location_type = common::location_type(&client, "Building").await;
    assert!(!location_type.site);
    assert_eq!(location_type.map_zoom_level, Some(DEFAULT_MAP_ZOOM_LEVEL));
    assert_eq!(location_type.index, 0);
}

#[tokio::test]
async fn update_refreshes_update_time_only() {
    let client = common::client().await;
    let user = common::user(&client, "alice").await;

    let updated = client
        .user()
        .update_one(&user)
        .set_first_name("Alice".to_string())
        .save()
        .await
        .unwrap();

    assert_eq!(updated.first_name.as_deref(), Some("Alice"));
    assert_eq!(updated.create_time, user.create_time);
    assert!(updated.update_time >= user.update_time);
}

#[tokio::test]
async fn item_type_outside_its_domain_is_rejected() {
    let client = common::client().await;
    let work_order_type = client
        .work_order_type()
        .create()
        .set_name("Maintenance")
        .save_x()
        .await;
    let category = client
        .check_list_category_definition()
        .create()
        .set_title("Safety")
        .set_work_order_type(&work_order_type)
        .save_x()
        .await;

    let err = client
        .check_list_item_definition()
        .create()
        .set_title("Helmet on")
        .set_type("checkbox")
        .set_category(&category)
        .save()
        .await
        .unwrap_err();
    assert!(matches!(err, EntError::Validation { field: "type", .. }));

    let item = client
        .check_list_item_definition()
        .create()
        .set_title("Helmet on")
        .set_item_type(CheckListItemType::YesNo)
        .set_category(&category)
        .save()
        .await
        .unwrap();
    assert_eq!(item.item_type, "yes_no");
    assert_eq!(category.query_items(&client).await.unwrap(), vec![item]);
}

#[tokio::test]
async fn validators_reject_out_of_range_and_malformed_values() {
    let client = common::client().await;
    let location_type = common::location_type(&client, "Tower").await;

    let err = client
        .location()
        .create()
        .set_name("North mast")
        .set_latitude(91.0)
        .set_longitude(10.0)
        .set_type(&location_type)
        .save()
        .await
        .unwrap_err();
    assert!(matches!(err, EntError::Validation { field: "latitude", .. }));

    let err = client
        .user()
        .create()
        .set_auth_id("bob")
        .set_email("not-an-email".to_string())
        .save()
        .await
        .unwrap_err();
    assert!(matches!(err, EntError::Validation { field: "email", .. }));

    let err = client
        .actions_rule()
        .create()
        .set_name("notify")
        .set_trigger_id("work_order_done")
        .set_rule_filters(serde_json::json!({ "status": "DONE" }))
        .set_rule_actions(serde_json::json!([]))
        .save()
        .await
        .unwrap_err();
    assert!(matches!(err, EntError::Validation { field: "rule_filters", .. }));
}

#[tokio::test]
async fn serialized_entity_still_queries_its_edges() {
    let client = common::client().await;
    let owner = common::user(&client, "alice").await;
    let order = common::work_order(&client, "Replace battery", &owner).await;

    let json = serde_json::to_string(&order).unwrap();
    let decoded: work_order::Model = serde_json::from_str(&json).unwrap();

    assert_eq!(decoded, order);
    assert_eq!(decoded.query_owner(&client).await.unwrap(), Some(owner.clone()));
    assert_eq!(decoded.query_owner(&client).await.unwrap(), Some(owner));
}

#[tokio::test]
async fn updating_a_missing_row_is_not_found() {
    let client = common::client().await;
    let owner = common::user(&client, "alice").await;
    let order = common::work_order(&client, "Survey", &owner).await;

    let err = client
        .work_order()
        .update_one_id(order.id + 100)
        .set_name("Renamed")
        .save()
        .await
        .unwrap_err();

    assert!(matches!(err, EntError::NotFound { entity: "WorkOrder", .. }));
    assert_eq!(client.work_order().get(order.id).await.unwrap().name, "Survey");
}

#[tokio::test]
async fn deleting_a_missing_row_is_not_found() {
    let client = common::client().await;
    let owner = common::user(&client, "alice").await;
    let order = common::work_order(&client, "Survey", &owner).await;

    client.work_order().delete_one(&order).exec().await.unwrap();
    let err = client.work_order().delete_one(&order).exec().await.unwrap_err();

    assert!(err.is_not_found());
    assert!(client.work_order().get(order.id).await.unwrap_err().is_not_found());
}

#[tokio::test]
async fn bulk_update_and_delete_report_affected_rows() {
    let client = common::client().await;
    let owner = common::user(&client, "alice").await;
    common::work_order(&client, "A", &owner).await;
    common::work_order(&client, "B", &owner).await;
    let done = common::work_order(&client, "C", &owner).await;
    client
        .work_order()
        .update_one(&done)
        .set_status(WorkOrderStatus::Done)
        .exec_x()
        .await;

    let updated = client
        .work_order()
        .update()
        .filter(work_order::Column::Status.eq(WorkOrderStatus::Planned))
        .set_priority(WorkOrderPriority::High)
        .save()
        .await
        .unwrap();
    assert_eq!(updated, 2);

    let high = client
        .work_order()
        .find(sea_orm::Condition::all().add(work_order::Column::Priority.eq(WorkOrderPriority::High)))
        .await
        .unwrap();
    assert_eq!(high.len(), 2);

    let deleted = client
        .work_order()
        .delete()
        .filter(work_order::Column::Status.eq(WorkOrderStatus::Done))
        .exec()
        .await
        .unwrap();
    assert_eq!(deleted, 1);
    assert_eq!(client.work_order().all().await.unwrap().len(), 2);
}

#[tokio::test]
async fn clearing_a_required_edge_is_rejected() {
    let client = common::client().await;
    let location_type = common::location_type(&client, "Room").await;
    let location = client
        .location()
        .create()
        .set_name("Lab")
        .set_latitude(32.1)
        .set_longitude(34.8)
        .set_type(&location_type)
        .save_x()
        .await;

    let mut update = client.location().update_one(&location);
    update.mutation_mut().fields_mut().location_type_id = sea_orm::ActiveValue::Set(None);
    let err = update.save().await.unwrap_err();

    assert!(matches!(err, EntError::MissingEdge { entity: "Location", edge: "type" }));
}

#[tokio::test]
async fn one_to_many_links_follow_add_and_remove() {
    let client = common::client().await;
    let owner = common::user(&client, "alice").await;
    let first = client.link().create().save_x().await;
    let second = client.link().create().save_x().await;

    let order = client
        .work_order()
        .create()
        .set_name("Swap router")
        .set_creation_date(Utc::now())
        .set_owner(&owner)
        .add_links(&[first.clone(), second.clone()])
        .save()
        .await
        .unwrap();
    let mut ids: Vec<i32> = order.query_links(&client).await.unwrap().iter().map(|l| l.id).collect();
    ids.sort();
    assert_eq!(ids, vec![first.id, second.id]);

    client
        .work_order()
        .update_one(&order)
        .remove_link_ids([first.id])
        .exec_x()
        .await;
    let links = order.query_links(&client).await.unwrap();
    assert_eq!(links.len(), 1);
    assert_eq!(links[0].id, second.id);
    assert_eq!(client.link().get(first.id).await.unwrap().work_order_id, None);
}

#[tokio::test]
async fn group_members_follow_add_remove_and_clear() {
    let client = common::client().await;
    let alice = common::user(&client, "alice").await;
    let bob = common::user(&client, "bob").await;
    let carol = common::user(&client, "carol").await;

    let group = client
        .users_group()
        .create()
        .set_name("Field technicians")
        .add_members(&[alice.clone(), bob.clone()])
        .save()
        .await
        .unwrap();
    let mut members: Vec<String> = group
        .query_members(&client)
        .await
        .unwrap()
        .into_iter()
        .map(|u| u.auth_id)
        .collect();
    members.sort();
    assert_eq!(members, vec!["alice", "bob"]);

    client
        .users_group()
        .update_one(&group)
        .remove_members(&[alice.clone()])
        .add_member_ids([carol.id])
        .exec_x()
        .await;
    let mut members: Vec<String> = group
        .query_members(&client)
        .await
        .unwrap()
        .into_iter()
        .map(|u| u.auth_id)
        .collect();
    members.sort();
    assert_eq!(members, vec!["bob", "carol"]);
    let carol_groups: Vec<i32> = carol
        .query_groups(&client)
        .await
        .unwrap()
        .iter()
        .map(|g| g.id)
        .collect();
    assert_eq!(carol_groups, vec![group.id]);

    client.users_group().update_one(&group).clear_members().exec_x().await;
    assert!(group.query_members(&client).await.unwrap().is_empty());

    let err = client
        .users_group()
        .update_one(&group)
        .add_member_ids([carol.id + 100])
        .save()
        .await
        .unwrap_err();
    assert!(matches!(err, EntError::NotFound { entity: "User", .. }));
}

#[tokio::test]
async fn concurrent_duplicates_yield_one_constraint_error() {
    let client = common::client().await;

    let (first, second) = tokio::join!(
        client.location_type().create().set_name("Site").save(),
        client.location_type().create().set_name("Site").save(),
    );

    let results = [first, second];
    assert_eq!(results.iter().filter(|r| r.is_ok()).count(), 1);
    let err = results.into_iter().find_map(Result::err).unwrap();
    assert!(err.is_constraint(), "unexpected error: {err}");
    assert_eq!(client.location_type().all().await.unwrap().len(), 1);
}

#[tokio::test]
async fn create_bulk_is_all_or_nothing() {
    let client = common::client().await;

    let err = client
        .user()
        .create_bulk([
            client.user().create().set_auth_id("alice"),
            client.user().create().set_auth_id("alice"),
        ])
        .save()
        .await
        .unwrap_err();
    assert!(err.is_constraint());
    assert_eq!(client.user().count().await.unwrap(), 0);

    let users: Vec<user::Model> = client
        .user()
        .create_bulk(["alice", "bob"].map(|id| client.user().create().set_auth_id(id)))
        .save()
        .await
        .unwrap();
    assert_eq!(users.len(), 2);
    assert_eq!(client.user().count().await.unwrap(), 2);
}
