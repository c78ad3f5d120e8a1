#![allow(dead_code)]

use chrono::Utc;
use sea_orm::{ConnectOptions, Database};

use invgraph::ent::{migrate, Client};
use invgraph::entities::{location_type, user, work_order};
use invgraph::schema::{LocationTypeMutator, UserMutator, WorkOrderMutator};

/// Client over a fresh in-memory SQLite database with every table created.
/// One pooled connection keeps all queries on the same database.
pub async fn client() -> Client {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options.max_connections(1).sqlx_logging(false);
    let db = Database::connect(options).await.expect("connect to sqlite");
    migrate::create_all(&db).await.expect("create tables");
    Client::new(db)
}

pub async fn user(client: &Client, auth_id: &str) -> user::Model {
    client.user().create().set_auth_id(auth_id).save_x().await
}

pub async fn work_order(client: &Client, name: &str, owner: &user::Model) -> work_order::Model {
    client
        .work_order()
        .create()
        .set_name(name)
        .set_creation_date(Utc::now())
        .set_owner(owner)
        .save_x()
        .await
}

pub async fn location_type(client: &Client, name: &str) -> location_type::Model {
    client.location_type().create().set_name(name).save_x().await
}
