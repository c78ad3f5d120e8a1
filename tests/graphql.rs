mod common;

use async_graphql::Request;
use pretty_assertions::assert_eq;
use serde_json::json;

use invgraph::auth::AuthenticatedUser;
use invgraph::ent::Client;
use invgraph::entities::enums::UserRole;
use invgraph::graphql::{create_schema, ApiSchema};
use invgraph::hooks::default_hooks;

async fn setup() -> (ApiSchema, Client, AuthenticatedUser) {
    let client = common::client().await.with_hooks(default_hooks());
    let admin = common::user(&client, "admin").await;
    let viewer = AuthenticatedUser {
        id: admin.id,
        auth_id: admin.auth_id,
        role: UserRole::Admin,
    };
    let client = client.with_viewer(Some(viewer.id));
    (create_schema(client.clone()), client, viewer)
}

async fn run(schema: &ApiSchema, client: &Client, viewer: &AuthenticatedUser, query: &str) -> async_graphql::Response {
    let request = Request::new(query).data(viewer.clone()).data(client.clone());
    schema.execute(request).await
}

#[tokio::test]
async fn location_types_are_appended_and_unique() {
    let (schema, client, viewer) = setup().await;

    for name in ["Building", "Floor"] {
        let response = run(
            &schema,
            &client,
            &viewer,
            &format!(r#"mutation {{ addLocationType(input: {{ name: "{name}" }}) {{ name index mapZoomLevel }} }}"#),
        )
        .await;
        assert!(response.errors.is_empty(), "{:?}", response.errors);
    }

    let response = run(
        &schema,
        &client,
        &viewer,
        r#"mutation { addLocationType(input: { name: "Building" }) { id } }"#,
    )
    .await;
    assert_eq!(response.errors.len(), 1);
    assert_eq!(response.errors[0].message, "A location type with the name Building already exists");

    let response = run(&schema, &client, &viewer, "{ locationTypes { name index } }").await;
    assert_eq!(
        response.data.into_json().unwrap(),
        json!({ "locationTypes": [
            { "name": "Building", "index": 0 },
            { "name": "Floor", "index": 1 },
        ]})
    );
}

#[tokio::test]
async fn closing_a_work_order_sets_its_close_date_and_history() {
    let (schema, client, viewer) = setup().await;

    let response = run(
        &schema,
        &client,
        &viewer,
        r#"mutation { addWorkOrder(input: { name: "Survey" }) { id status owner { authId } } }"#,
    )
    .await;
    assert!(response.errors.is_empty(), "{:?}", response.errors);
    let created = response.data.into_json().unwrap();
    assert_eq!(created["addWorkOrder"]["status"], "PLANNED");
    assert_eq!(created["addWorkOrder"]["owner"]["authId"], "admin");
    let id = created["addWorkOrder"]["id"].as_i64().unwrap();

    let response = run(
        &schema,
        &client,
        &viewer,
        &format!(
            r#"mutation {{ editWorkOrder(input: {{ id: {id}, status: DONE, description: null }}) {{
                status closeDate activities {{ changedField oldValue newValue author {{ authId }} }}
            }} }}"#
        ),
    )
    .await;
    assert!(response.errors.is_empty(), "{:?}", response.errors);
    let edited = response.data.into_json().unwrap();
    assert_eq!(edited["editWorkOrder"]["status"], "DONE");
    assert!(edited["editWorkOrder"]["closeDate"].is_string());

    let activities = edited["editWorkOrder"]["activities"].as_array().unwrap();
    let status = activities
        .iter()
        .find(|a| a["changedField"] == "STATUS")
        .unwrap();
    assert_eq!(status["oldValue"], "PLANNED");
    assert_eq!(status["newValue"], "DONE");
    assert_eq!(status["author"]["authId"], "admin");
    assert!(activities.iter().any(|a| a["changedField"] == "CLOSE_DATE"));
}

#[tokio::test]
async fn close_date_follows_the_status() {
    let (schema, client, viewer) = setup().await;

    let response = run(
        &schema,
        &client,
        &viewer,
        r#"mutation { addWorkOrder(input: { name: "Splice", status: DONE }) { id closeDate } }"#,
    )
    .await;
    assert!(response.errors.is_empty(), "{:?}", response.errors);
    let created = response.data.into_json().unwrap();
    assert!(created["addWorkOrder"]["closeDate"].is_string());
    let id = created["addWorkOrder"]["id"].as_i64().unwrap();

    let response = run(
        &schema,
        &client,
        &viewer,
        &format!(r#"mutation {{ editWorkOrder(input: {{ id: {id}, status: IN_PROGRESS }}) {{ status closeDate }} }}"#),
    )
    .await;
    assert!(response.errors.is_empty(), "{:?}", response.errors);
    assert_eq!(
        response.data.into_json().unwrap(),
        json!({ "editWorkOrder": { "status": "IN_PROGRESS", "closeDate": null } })
    );

    let response = run(
        &schema,
        &client,
        &viewer,
        r#"mutation { addWorkOrder(input: { name: "Survey" }) { closeDate } }"#,
    )
    .await;
    assert_eq!(
        response.data.into_json().unwrap(),
        json!({ "addWorkOrder": { "closeDate": null } })
    );
}

#[tokio::test]
async fn group_membership_is_managed_by_admins() {
    let (schema, client, viewer) = setup().await;
    let tech = common::user(&client, "tech").await;

    let response = run(
        &schema,
        &client,
        &viewer,
        r#"mutation { addUsersGroup(input: { name: "Field" }) { id } }"#,
    )
    .await;
    assert!(response.errors.is_empty(), "{:?}", response.errors);
    let group_id = response.data.into_json().unwrap()["addUsersGroup"]["id"].as_i64().unwrap();

    let response = run(
        &schema,
        &client,
        &viewer,
        &format!(
            r#"mutation {{ updateUsersGroupMembers(input: {{ id: {group_id}, addedMemberIds: [{}], removedMemberIds: [] }}) {{
                members {{ authId }}
            }} }}"#,
            tech.id
        ),
    )
    .await;
    assert!(response.errors.is_empty(), "{:?}", response.errors);
    assert_eq!(
        response.data.into_json().unwrap(),
        json!({ "updateUsersGroupMembers": { "members": [{ "authId": "tech" }] } })
    );

    let technician = AuthenticatedUser {
        id: tech.id,
        auth_id: tech.auth_id.clone(),
        role: UserRole::User,
    };
    let response = run(&schema, &client, &technician, "{ usersGroups { name } }").await;
    assert_eq!(response.errors[0].message, "Insufficient permissions: admin role required");
}
