//! Field checks used by the entity schemas. Every function here is pure;
//! checks run before a mutation touches the database.

use std::fmt::Display;
use std::str::FromStr;

use sea_orm::{ActiveValue, Value};
use serde_json::Value as Json;
use validator::ValidateEmail;

use super::EntError;

/// Fails with `MissingField` unless `slot` holds a value.
pub fn require<V: Into<Value>>(entity: &'static str, field: &'static str, slot: &ActiveValue<V>) -> Result<(), EntError> {
    match slot {
        ActiveValue::NotSet => Err(EntError::MissingField { entity, field }),
        _ => Ok(()),
    }
}

/// Fails with `MissingEdge` unless the foreign key holds an id.
pub fn require_edge(entity: &'static str, edge: &'static str, slot: &ActiveValue<Option<i32>>) -> Result<(), EntError> {
    match slot {
        ActiveValue::Set(Some(_)) | ActiveValue::Unchanged(Some(_)) => Ok(()),
        _ => Err(EntError::MissingEdge { entity, edge }),
    }
}

/// Fails with `MissingEdge` when an update clears a required edge.
pub fn keep_edge(entity: &'static str, edge: &'static str, slot: &ActiveValue<Option<i32>>) -> Result<(), EntError> {
    match slot {
        ActiveValue::Set(None) => Err(EntError::MissingEdge { entity, edge }),
        _ => Ok(()),
    }
}

pub fn not_empty(entity: &'static str, field: &'static str, value: &str) -> Result<(), EntError> {
    if value.trim().is_empty() {
        return Err(EntError::validation(entity, field, "value is empty"));
    }
    Ok(())
}

pub fn max_len(entity: &'static str, field: &'static str, value: &str, max: usize) -> Result<(), EntError> {
    let len = value.chars().count();
    if len > max {
        return Err(EntError::validation(
            entity,
            field,
            format!("length {len} exceeds {max}"),
        ));
    }
    Ok(())
}

pub fn range<T>(entity: &'static str, field: &'static str, value: T, min: T, max: T) -> Result<(), EntError>
where
    T: PartialOrd + Display + Copy,
{
    // NaN fails both comparisons, so test for membership rather than exclusion.
    if value >= min && value <= max {
        return Ok(());
    }
    Err(EntError::validation(
        entity,
        field,
        format!("{value} is outside [{min}, {max}]"),
    ))
}

pub fn email(entity: &'static str, field: &'static str, value: &str) -> Result<(), EntError> {
    if value.validate_email() {
        Ok(())
    } else {
        Err(EntError::validation(entity, field, format!("{value:?} is not a valid email")))
    }
}

/// Parses a string-backed enum column against its value set.
pub fn one_of<T: FromStr>(entity: &'static str, field: &'static str, value: &str) -> Result<T, EntError> {
    value
        .parse()
        .map_err(|_| EntError::validation(entity, field, format!("invalid enum value {value:?}")))
}

pub fn json_object(entity: &'static str, field: &'static str, value: &Json) -> Result<(), EntError> {
    if value.is_object() {
        Ok(())
    } else {
        Err(EntError::validation(entity, field, "expected a JSON object"))
    }
}

pub fn json_array(entity: &'static str, field: &'static str, value: &Json) -> Result<(), EntError> {
    if value.is_array() {
        Ok(())
    } else {
        Err(EntError::validation(entity, field, "expected a JSON array"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn require_reports_entity_and_field() {
        let slot: ActiveValue<String> = ActiveValue::NotSet;
        let err = require("User", "auth_id", &slot).unwrap_err();
        assert!(matches!(err, EntError::MissingField { entity: "User", field: "auth_id" }));
        assert!(require("User", "auth_id", &ActiveValue::Set("a".to_string())).is_ok());
    }

    #[test]
    fn required_edges_need_an_id() {
        assert!(require_edge("WorkOrder", "owner", &ActiveValue::Set(None)).is_err());
        assert!(require_edge("WorkOrder", "owner", &ActiveValue::NotSet).is_err());
        assert!(require_edge("WorkOrder", "owner", &ActiveValue::Set(Some(3))).is_ok());
        assert!(keep_edge("WorkOrder", "owner", &ActiveValue::NotSet).is_ok());
        assert!(keep_edge("WorkOrder", "owner", &ActiveValue::Set(None)).is_err());
    }

    #[test]
    fn range_rejects_nan_and_bounds() {
        assert!(range("Location", "latitude", 45.0, -90.0, 90.0).is_ok());
        assert!(range("Location", "latitude", 90.5, -90.0, 90.0).is_err());
        assert!(range("Location", "latitude", f64::NAN, -90.0, 90.0).is_err());
    }

    #[test]
    fn strings_and_json() {
        assert!(not_empty("UsersGroup", "name", "  ").is_err());
        assert!(max_len("User", "first_name", &"x".repeat(256), 255).is_err());
        assert!(email("User", "email", "ops@example.com").is_ok());
        assert!(email("User", "email", "not-an-email").is_err());
        assert!(json_object("PermissionsPolicy", "inventory_policy", &json!({"read": true})).is_ok());
        assert!(json_array("ActionsRule", "rule_filters", &json!({})).is_err());
    }
}
