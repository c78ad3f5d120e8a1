use chrono::{DateTime, Utc};
use tracing::debug;

use crate::ent::{Client, EntError, Hook, Mutation, Next, Op, Saved};
use crate::entities::enums::ActivityField;
use crate::entities::work_order;
use crate::schema::{ActivityMutator, WorkOrder};

struct Change {
    field: ActivityField,
    old: Option<String>,
    new: Option<String>,
}

/// Records work order activity: a `CREATION_DATE` entry when an order is
/// created and one entry per tracked field changed by an update-one. The
/// entries are written in the same transaction as the order, authored by
/// the client viewer.
pub fn work_order_history() -> Hook<WorkOrder> {
    Hook::new(|client: Client, mutation: Mutation<WorkOrder>, next: Next<WorkOrder>| async move {
        match (mutation.op(), mutation.id()) {
            (Op::Create, _) => {
                let saved = next.run(client.clone(), mutation).await?;
                if let Saved::Node(order) = &saved {
                    let created = Change {
                        field: ActivityField::CreationDate,
                        old: None,
                        new: Some(timestamp(order.creation_date)),
                    };
                    record(&client, order.id, true, vec![created]).await?;
                }
                Ok(saved)
            }
            (Op::UpdateOne, Some(id)) => {
                let before = client.work_order().get(id).await?;
                let saved = next.run(client.clone(), mutation).await?;
                if let Saved::Node(after) = &saved {
                    record(&client, id, false, diff(&before, after)).await?;
                }
                Ok(saved)
            }
            _ => next.run(client, mutation).await,
        }
    })
}

async fn record(client: &Client, work_order_id: i32, is_create: bool, changes: Vec<Change>) -> Result<(), EntError> {
    for change in changes {
        debug!(work_order_id, field = %change.field, "recording work order activity");
        client
            .activity()
            .create()
            .set_changed_field(change.field)
            .set_is_create(is_create)
            .set_old_value(change.old)
            .set_new_value(change.new)
            .set_author_id(client.viewer())
            .set_work_order_id(work_order_id)
            .exec()
            .await?;
    }
    Ok(())
}

fn diff(before: &work_order::Model, after: &work_order::Model) -> Vec<Change> {
    let mut changes = Vec::new();
    let mut track = |field, old: Option<String>, new: Option<String>| {
        if old != new {
            changes.push(Change { field, old, new });
        }
    };
    track(
        ActivityField::Status,
        Some(before.status.to_string()),
        Some(after.status.to_string()),
    );
    track(
        ActivityField::Priority,
        Some(before.priority.to_string()),
        Some(after.priority.to_string()),
    );
    track(
        ActivityField::Assignee,
        before.assignee_id.map(|id| id.to_string()),
        after.assignee_id.map(|id| id.to_string()),
    );
    track(
        ActivityField::Owner,
        before.owner_id.map(|id| id.to_string()),
        after.owner_id.map(|id| id.to_string()),
    );
    track(ActivityField::Name, Some(before.name.clone()), Some(after.name.clone()));
    track(
        ActivityField::Description,
        before.description.clone(),
        after.description.clone(),
    );
    track(
        ActivityField::CloseDate,
        before.close_date.map(timestamp),
        after.close_date.map(timestamp),
    );
    changes
}

/// Unix seconds, the format activity values use for dates.
fn timestamp(date: DateTime<Utc>) -> String {
    date.timestamp().to_string()
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::entities::enums::{WorkOrderPriority, WorkOrderStatus};

    fn order() -> work_order::Model {
        let now = Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap();
        work_order::Model {
            id: 1,
            create_time: now,
            update_time: now,
            name: "Replace antenna".into(),
            status: WorkOrderStatus::Planned,
            priority: WorkOrderPriority::None,
            description: None,
            install_date: None,
            creation_date: now,
            index: None,
            close_date: None,
            work_order_type_id: None,
            location_id: None,
            owner_id: Some(1),
            assignee_id: None,
        }
    }

    #[test]
    fn diff_reports_only_tracked_changes() {
        let before = order();
        let mut after = order();
        after.status = WorkOrderStatus::Done;
        after.assignee_id = Some(4);
        after.index = Some(3);
        after.close_date = Some(Utc.with_ymd_and_hms(2024, 5, 2, 0, 0, 0).unwrap());

        let changes = diff(&before, &after);
        let fields: Vec<_> = changes.iter().map(|c| c.field).collect();
        assert_eq!(
            fields,
            vec![ActivityField::Status, ActivityField::Assignee, ActivityField::CloseDate]
        );
        assert_eq!(changes[0].old.as_deref(), Some("PLANNED"));
        assert_eq!(changes[0].new.as_deref(), Some("DONE"));
        assert_eq!(changes[1].old, None);
        assert_eq!(changes[2].new.as_deref(), Some("1714608000"));
    }

    #[test]
    fn unchanged_order_has_no_history() {
        assert!(diff(&order(), &order()).is_empty());
    }
}
