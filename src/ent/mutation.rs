use std::fmt;

use sea_orm::sea_query::IntoCondition;
use sea_orm::{ActiveModelTrait, ActiveValue, Condition, Value};

use super::{EntError, Schema};

/// Kind of write a mutation performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
pub enum Op {
    Create,
    UpdateOne,
    Update,
    DeleteOne,
    Delete,
}

impl Op {
    /// Operations that carry field values and run defaults and validators.
    pub fn is_write(self) -> bool {
        matches!(self, Op::Create | Op::Update | Op::UpdateOne)
    }

    pub fn is_update(self) -> bool {
        matches!(self, Op::Update | Op::UpdateOne)
    }
}

/// Pending changes for one entity type: field values, edge changes and, for
/// single-row operations, the target id.
pub struct Mutation<S: Schema> {
    op: Op,
    id: Option<i32>,
    predicate: Condition,
    fields: S::ActiveModel,
    edges: S::Edges,
}

impl<S: Schema> Mutation<S> {
    pub fn new(op: Op) -> Self {
        Self {
            op,
            id: None,
            predicate: Condition::all(),
            fields: <S::ActiveModel as Default>::default(),
            edges: S::Edges::default(),
        }
    }

    pub(crate) fn with_id(op: Op, id: i32) -> Self {
        let mut mutation = Self::new(op);
        mutation.id = Some(id);
        mutation
    }

    pub fn op(&self) -> Op {
        self.op
    }

    /// Target id of an `UpdateOne` or `DeleteOne`.
    pub fn id(&self) -> Option<i32> {
        self.id
    }

    pub fn predicate(&self) -> &Condition {
        &self.predicate
    }

    pub(crate) fn add_predicate<F: IntoCondition>(&mut self, filter: F) {
        let current = std::mem::replace(&mut self.predicate, Condition::all());
        self.predicate = current.add(filter.into_condition());
    }

    pub fn fields(&self) -> &S::ActiveModel {
        &self.fields
    }

    pub fn fields_mut(&mut self) -> &mut S::ActiveModel {
        &mut self.fields
    }

    pub fn edges(&self) -> &S::Edges {
        &self.edges
    }

    pub fn edges_mut(&mut self) -> &mut S::Edges {
        &mut self.edges
    }

    /// Names of the columns this mutation sets.
    pub fn changed_fields(&self) -> Vec<String> {
        use sea_orm::{EntityTrait, IdenStatic, Iterable};
        <S::Entity as EntityTrait>::Column::iter()
            .filter(|column| matches!(self.fields.get(*column), ActiveValue::Set(_)))
            .map(|column| column.as_str().to_owned())
            .collect()
    }

    pub(crate) fn into_parts(self) -> (S::ActiveModel, S::Edges, Condition) {
        (self.fields, self.edges, self.predicate)
    }
}

impl<S: Schema> Clone for Mutation<S> {
    fn clone(&self) -> Self {
        Self {
            op: self.op,
            id: self.id,
            predicate: self.predicate.clone(),
            fields: self.fields.clone(),
            edges: self.edges.clone(),
        }
    }
}

impl<S: Schema> fmt::Debug for Mutation<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mutation")
            .field("type", &S::TYPE)
            .field("op", &self.op)
            .field("id", &self.id)
            .field("fields", &self.fields)
            .field("edges", &self.edges)
            .finish()
    }
}

/// Result of running a mutation through the hook chain.
#[derive(Debug, Clone, PartialEq)]
pub enum Saved<M> {
    /// The created or updated row.
    Node(M),
    /// Rows touched by a bulk update or a delete.
    Affected(u64),
}

impl<M> Saved<M> {
    pub fn into_node(self) -> Result<M, EntError> {
        match self {
            Saved::Node(model) => Ok(model),
            Saved::Affected(_) => Err(EntError::Internal(
                "mutation returned an affected-row count where a node was expected".into(),
            )),
        }
    }

    pub fn into_affected(self) -> Result<u64, EntError> {
        match self {
            Saved::Affected(rows) => Ok(rows),
            Saved::Node(_) => Err(EntError::Internal(
                "mutation returned a node where an affected-row count was expected".into(),
            )),
        }
    }
}

/// Sets `slot` to `value()` when it was never assigned.
pub fn default_to<V, F>(slot: &mut ActiveValue<V>, value: F)
where
    V: Into<Value>,
    F: FnOnce() -> V,
{
    if matches!(slot, ActiveValue::NotSet) {
        *slot = ActiveValue::Set(value());
    }
}

/// The value held by `slot`, if any.
pub fn value<V: Into<Value>>(slot: &ActiveValue<V>) -> Option<&V> {
    match slot {
        ActiveValue::Set(v) | ActiveValue::Unchanged(v) => Some(v),
        ActiveValue::NotSet => None,
    }
}
