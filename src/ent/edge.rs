use sea_orm::sea_query::{Expr, OnConflict, Query, SimpleExpr};
use sea_orm::{
    ColumnTrait, ConnectionTrait, DatabaseTransaction, EntityTrait, QueryFilter, QuerySelect,
};

use super::EntError;

/// Pending changes to one to-many edge of a row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EdgeIds {
    added: Vec<i32>,
    removed: Vec<i32>,
    cleared: bool,
}

impl EdgeIds {
    pub fn add(&mut self, ids: impl IntoIterator<Item = i32>) {
        self.added.extend(ids);
    }

    pub fn remove(&mut self, ids: impl IntoIterator<Item = i32>) {
        self.removed.extend(ids);
    }

    /// Detaches every currently linked row before adds are applied.
    pub fn clear(&mut self) {
        self.cleared = true;
    }

    pub fn added(&self) -> &[i32] {
        &self.added
    }

    pub fn removed(&self) -> &[i32] {
        &self.removed
    }

    pub fn cleared(&self) -> bool {
        self.cleared
    }

    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty() && !self.cleared
    }
}

/// One-to-many edge stored as a foreign key on the child table `T`.
pub struct O2m<T: EntityTrait> {
    pub target: &'static str,
    pub id: T::Column,
    pub fk: T::Column,
}

impl<T: EntityTrait> O2m<T> {
    pub async fn apply(&self, tx: &DatabaseTransaction, owner: i32, edge: &EdgeIds) -> Result<(), EntError> {
        if edge.cleared {
            T::update_many()
                .col_expr(self.fk, Expr::value(Option::<i32>::None))
                .filter(self.fk.eq(owner))
                .exec(tx)
                .await?;
        }
        if !edge.removed.is_empty() {
            T::update_many()
                .col_expr(self.fk, Expr::value(Option::<i32>::None))
                .filter(self.fk.eq(owner))
                .filter(self.id.is_in(edge.removed.iter().copied()))
                .exec(tx)
                .await?;
        }
        if !edge.added.is_empty() {
            ensure_exist::<T>(tx, self.target, self.id, &edge.added).await?;
            T::update_many()
                .col_expr(self.fk, Expr::value(owner))
                .filter(self.id.is_in(edge.added.iter().copied()))
                .exec(tx)
                .await?;
        }
        Ok(())
    }
}

/// Many-to-many edge stored in join table `J`, pointing at rows of `T`.
pub struct M2m<J: EntityTrait, T: EntityTrait> {
    pub target: &'static str,
    pub target_id: T::Column,
    pub owner_col: J::Column,
    pub target_col: J::Column,
}

impl<J: EntityTrait, T: EntityTrait> M2m<J, T> {
    pub async fn apply(&self, tx: &DatabaseTransaction, owner: i32, edge: &EdgeIds) -> Result<(), EntError> {
        if edge.cleared {
            J::delete_many()
                .filter(self.owner_col.eq(owner))
                .exec(tx)
                .await?;
        }
        if !edge.removed.is_empty() {
            J::delete_many()
                .filter(self.owner_col.eq(owner))
                .filter(self.target_col.is_in(edge.removed.iter().copied()))
                .exec(tx)
                .await?;
        }
        if !edge.added.is_empty() {
            ensure_exist::<T>(tx, self.target, self.target_id, &edge.added).await?;

            let mut insert = Query::insert();
            insert
                .into_table(J::default())
                .columns([self.owner_col, self.target_col])
                .on_conflict(
                    OnConflict::columns([self.owner_col, self.target_col])
                        .do_nothing()
                        .to_owned(),
                );
            for target in &edge.added {
                let row = [SimpleExpr::Value(owner.into()), SimpleExpr::Value((*target).into())];
                insert
                    .values(row)
                    .map_err(|err| EntError::Internal(err.to_string()))?;
            }
            let backend = tx.get_database_backend();
            tx.execute(backend.build(&insert)).await?;
        }
        Ok(())
    }
}

async fn ensure_exist<T: EntityTrait>(
    tx: &DatabaseTransaction,
    target: &'static str,
    id: T::Column,
    ids: &[i32],
) -> Result<(), EntError> {
    let found: Vec<i32> = T::find()
        .select_only()
        .column(id)
        .filter(id.is_in(ids.iter().copied()))
        .into_tuple()
        .all(tx)
        .await?;
    match ids.iter().find(|id| !found.contains(id)) {
        Some(missing) => Err(EntError::NotFound {
            entity: target,
            id: *missing,
        }),
        None => Ok(()),
    }
}
