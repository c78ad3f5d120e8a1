use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, EntityTrait, IntoActiveModel, Iterable,
    QueryFilter, QuerySelect,
};

use super::{Client, EntError, Mutation, Op, Saved, Schema};

/// Terminal step of every hook chain: writes the row and its edge changes
/// inside one savepoint of the client's transaction.
pub(crate) async fn persist<S: Schema>(
    client: &Client,
    mutation: Mutation<S>,
) -> Result<Saved<S::Model>, EntError> {
    if mutation.op().is_write() {
        // Hooks may have rewritten fields since the builder checked them.
        S::check(&mutation)?;
    }

    let op = mutation.op();
    let id = mutation.id();
    let (fields, edges, predicate) = mutation.into_parts();
    let tx = client.begin().await?;

    let saved = match (op, id) {
        (Op::Create, _) => {
            let model = fields.insert(&tx).await?;
            S::save_edges(&tx, S::id_of(&model), &edges).await?;
            Saved::Node(model)
        }
        (Op::UpdateOne, Some(id)) => {
            let current = S::Entity::find()
                .filter(S::id_column().eq(id))
                .one(&tx)
                .await?
                .ok_or(EntError::NotFound { entity: S::TYPE, id })?;

            let mut active = current.into_active_model();
            for column in <S::Entity as EntityTrait>::Column::iter() {
                if let ActiveValue::Set(value) = fields.get(column) {
                    active.set(column, value);
                }
            }
            let model = active
                .update(&tx)
                .await
                .map_err(|err| EntError::for_row(err, S::TYPE, id))?;
            S::save_edges(&tx, id, &edges).await?;
            Saved::Node(model)
        }
        (Op::Update, _) => {
            let ids: Vec<i32> = S::Entity::find()
                .select_only()
                .column(S::id_column())
                .filter(predicate)
                .into_tuple()
                .all(&tx)
                .await?;
            if ids.is_empty() {
                Saved::Affected(0)
            } else {
                let result = S::Entity::update_many()
                    .set(fields)
                    .filter(S::id_column().is_in(ids.iter().copied()))
                    .exec(&tx)
                    .await?;
                for id in ids {
                    S::save_edges(&tx, id, &edges).await?;
                }
                Saved::Affected(result.rows_affected)
            }
        }
        (Op::DeleteOne, Some(id)) => {
            let result = S::Entity::delete_many()
                .filter(S::id_column().eq(id))
                .exec(&tx)
                .await?;
            if result.rows_affected == 0 {
                return Err(EntError::NotFound { entity: S::TYPE, id });
            }
            Saved::Affected(result.rows_affected)
        }
        (Op::Delete, _) => {
            let result = S::Entity::delete_many().filter(predicate).exec(&tx).await?;
            Saved::Affected(result.rows_affected)
        }
        (Op::UpdateOne | Op::DeleteOne, None) => {
            return Err(EntError::Internal(format!(
                "{op} {} mutation without a target id",
                S::TYPE
            )));
        }
    };

    tx.commit().await?;
    Ok(saved)
}
