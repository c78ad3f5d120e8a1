mod common;

use pretty_assertions::assert_eq;

use invgraph::ent::EntError;
use invgraph::schema::*;

#[tokio::test]
async fn failing_step_rolls_back_earlier_writes() {
    let client = common::client().await;

    let result: Result<(), EntError> = client
        .transaction(|tx| async move {
            assert!(tx.in_transaction());
            tx.location_type().create().set_name("Building").save().await?;
            tx.location_type().create().set_name("Floor").save().await?;
            tx.work_order().update_one_id(404).set_name("Missing").save().await?;
            Ok(())
        })
        .await;

    assert!(result.unwrap_err().is_not_found());
    assert!(client.location_type().all().await.unwrap().is_empty());
}

#[tokio::test]
async fn successful_transaction_commits_every_write() {
    let client = common::client().await;

    let (building, floor) = client
        .transaction(|tx| async move {
            let building = tx.location_type().create().set_name("Building").save().await?;
            let floor = tx
                .location_type()
                .create()
                .set_name("Floor")
                .set_index(building.index + 1)
                .save()
                .await?;
            Ok((building, floor))
        })
        .await
        .unwrap();

    let mut stored = client.location_type().all().await.unwrap();
    stored.sort_by_key(|t| t.index);
    assert_eq!(stored, vec![building, floor]);
}

#[tokio::test]
async fn failed_save_inside_a_transaction_keeps_earlier_writes() {
    let client = common::client().await;

    let names = client
        .transaction(|tx| async move {
            tx.location_type().create().set_name("Building").save().await?;
            let duplicate = tx.location_type().create().set_name("Building").save().await;
            assert!(duplicate.unwrap_err().is_constraint());
            tx.location_type().create().set_name("Room").save().await?;
            let names: Vec<String> = tx
                .location_type()
                .all()
                .await?
                .into_iter()
                .map(|t| t.name)
                .collect();
            Ok(names)
        })
        .await
        .unwrap();

    assert_eq!(names.len(), 2);
    assert_eq!(client.location_type().all().await.unwrap().len(), 2);
}

#[tokio::test]
async fn bound_client_runs_saves_in_the_callers_transaction() {
    let client = common::client().await;
    let owner = common::user(&client, "alice").await;

    let order = client
        .transaction(|tx| {
            let owner = owner.clone();
            async move {
                let order = common::work_order(&tx, "Survey", &owner).await;
                let visible = tx.work_order().get(order.id).await?;
                Ok(visible)
            }
        })
        .await
        .unwrap();

    assert_eq!(client.work_order().get(order.id).await.unwrap(), order);
}
