use std::time::Duration;

use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

/// Errors returned by the mutation builders and entity reads.
#[derive(Debug, Error)]
pub enum EntError {
    /// A required field was never set on a create.
    #[error("missing required field \"{entity}.{field}\"")]
    MissingField {
        entity: &'static str,
        field: &'static str,
    },

    /// A required relationship was never set, or an update tried to clear it.
    #[error("missing required edge \"{entity}.{edge}\"")]
    MissingEdge {
        entity: &'static str,
        edge: &'static str,
    },

    /// A set field violates its declared constraint.
    #[error("validator failed for field \"{entity}.{field}\": {reason}")]
    Validation {
        entity: &'static str,
        field: &'static str,
        reason: String,
    },

    /// Uniqueness or foreign-key violation reported by the database.
    #[error("constraint failed: {0}")]
    Constraint(String),

    /// The targeted row does not exist.
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: i32 },

    /// The operation exceeded the client timeout and was rolled back.
    #[error("operation timed out after {0:?}")]
    Timeout(Duration),

    /// Broken hook composition or another programming error.
    #[error("internal error: {0}")]
    Internal(String),

    #[error(transparent)]
    Db(DbErr),
}

impl EntError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    pub fn is_constraint(&self) -> bool {
        matches!(self, Self::Constraint(_))
    }

    /// True for errors raised before the database was touched.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::MissingField { .. } | Self::MissingEdge { .. } | Self::Validation { .. }
        )
    }

    pub(crate) fn validation(entity: &'static str, field: &'static str, reason: impl Into<String>) -> Self {
        Self::Validation {
            entity,
            field,
            reason: reason.into(),
        }
    }

    /// Maps a driver error raised while touching row `id`, turning the
    /// "nothing updated" family into `NotFound`.
    pub(crate) fn for_row(err: DbErr, entity: &'static str, id: i32) -> Self {
        match err {
            DbErr::RecordNotUpdated | DbErr::RecordNotFound(_) => Self::NotFound { entity, id },
            other => other.into(),
        }
    }
}

impl From<DbErr> for EntError {
    fn from(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(msg)) => Self::Constraint(msg),
            Some(SqlErr::ForeignKeyConstraintViolation(msg)) => Self::Constraint(msg),
            _ => Self::Db(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_not_updated_becomes_not_found() {
        let err = EntError::for_row(DbErr::RecordNotUpdated, "WorkOrder", 7);
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "WorkOrder not found: 7");
    }

    #[test]
    fn other_driver_errors_pass_through() {
        let err = EntError::from(DbErr::Custom("boom".into()));
        assert!(matches!(err, EntError::Db(DbErr::Custom(_))));
        assert!(!err.is_validation());
    }
}
