//! `SeaORM` entities for the inventory and workforce schema.
//!
//! One module per table. Join tables for many-to-many edges live next to
//! the entities they connect.

pub mod prelude;

pub mod actions_rule;
pub mod activity;
pub mod check_list_category_definition;
pub mod check_list_item_definition;
pub mod enums;
pub mod link;
pub mod location;
pub mod location_type;
pub mod permissions_policy;
pub mod user;
pub mod users_group;
pub mod users_group_member;
pub mod users_group_policy;
pub mod work_order;
pub mod work_order_type;
