//! Enum columns shared by the entities and the GraphQL layer.
//!
//! Each enum is stored as its string value, exposed to GraphQL under the
//! same name and parsed from client strings through `FromStr`.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
    Display, EnumString, async_graphql::Enum,
)]
#[sea_orm(rs_type = "String", db_type = "Text")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum UserStatus {
    #[sea_orm(string_value = "ACTIVE")]
    Active,
    #[sea_orm(string_value = "DEACTIVATED")]
    Deactivated,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
    Display, EnumString, async_graphql::Enum,
)]
#[sea_orm(rs_type = "String", db_type = "Text")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    #[sea_orm(string_value = "USER")]
    User,
    #[sea_orm(string_value = "ADMIN")]
    Admin,
    #[sea_orm(string_value = "OWNER")]
    Owner,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
    Display, EnumString, async_graphql::Enum,
)]
#[sea_orm(rs_type = "String", db_type = "Text")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum UsersGroupStatus {
    #[sea_orm(string_value = "ACTIVE")]
    Active,
    #[sea_orm(string_value = "DEACTIVATED")]
    Deactivated,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
    Display, EnumString, async_graphql::Enum,
)]
#[sea_orm(rs_type = "String", db_type = "Text")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum WorkOrderStatus {
    #[sea_orm(string_value = "PLANNED")]
    Planned,
    #[sea_orm(string_value = "IN_PROGRESS")]
    InProgress,
    #[sea_orm(string_value = "PENDING")]
    Pending,
    #[sea_orm(string_value = "SUBMITTED")]
    Submitted,
    #[sea_orm(string_value = "CLOSED")]
    Closed,
    #[sea_orm(string_value = "DONE")]
    Done,
    #[sea_orm(string_value = "BLOCKED")]
    Blocked,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
    Display, EnumString, async_graphql::Enum,
)]
#[sea_orm(rs_type = "String", db_type = "Text")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum WorkOrderPriority {
    #[sea_orm(string_value = "URGENT")]
    Urgent,
    #[sea_orm(string_value = "HIGH")]
    High,
    #[sea_orm(string_value = "MEDIUM")]
    Medium,
    #[sea_orm(string_value = "LOW")]
    Low,
    #[sea_orm(string_value = "NONE")]
    None,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
    Display, EnumString, async_graphql::Enum,
)]
#[sea_orm(rs_type = "String", db_type = "Text")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum FutureState {
    #[sea_orm(string_value = "INSTALL")]
    Install,
    #[sea_orm(string_value = "REMOVE")]
    Remove,
}

/// Work order fields tracked by the activity history.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
    Display, EnumString, async_graphql::Enum,
)]
#[sea_orm(rs_type = "String", db_type = "Text")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[graphql(name = "ActivityField")]
pub enum ActivityField {
    #[sea_orm(string_value = "STATUS")]
    Status,
    #[sea_orm(string_value = "PRIORITY")]
    Priority,
    #[sea_orm(string_value = "ASSIGNEE")]
    Assignee,
    #[sea_orm(string_value = "CREATION_DATE")]
    CreationDate,
    #[sea_orm(string_value = "OWNER")]
    Owner,
    #[sea_orm(string_value = "NAME")]
    Name,
    #[sea_orm(string_value = "DESCRIPTION")]
    Description,
    #[sea_orm(string_value = "CLOSE_DATE")]
    CloseDate,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
    Display, EnumString, async_graphql::Enum,
)]
#[sea_orm(rs_type = "String", db_type = "Text")]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum EnumSelectionMode {
    #[sea_orm(string_value = "single")]
    Single,
    #[sea_orm(string_value = "multiple")]
    Multiple,
}

/// Kinds of check list item a definition can describe. Stored as a plain
/// string column, so the domain is enforced by the builder validators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, async_graphql::Enum)]
#[strum(serialize_all = "snake_case")]
pub enum CheckListItemType {
    Simple,
    String,
    Number,
    Enum,
    Files,
    YesNo,
    CellScan,
    WifiScan,
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn parses_wire_names() {
        assert_eq!(WorkOrderStatus::from_str("IN_PROGRESS").unwrap(), WorkOrderStatus::InProgress);
        assert_eq!(WorkOrderPriority::from_str("NONE").unwrap(), WorkOrderPriority::None);
        assert_eq!(CheckListItemType::from_str("yes_no").unwrap(), CheckListItemType::YesNo);
        assert_eq!(EnumSelectionMode::Multiple.to_string(), "multiple");
        assert!(WorkOrderStatus::from_str("in progress").is_err());
    }

    #[test]
    fn serde_matches_column_values() {
        let json = serde_json::to_string(&ActivityField::CreationDate).unwrap();
        assert_eq!(json, "\"CREATION_DATE\"");
        assert_eq!(ActivityField::CreationDate.to_value(), "CREATION_DATE");
    }
}
