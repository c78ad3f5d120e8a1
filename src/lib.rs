//! Inventory and work order data layer: typed mutation builders over
//! sea-orm entities, a per-entity hook chain, and the GraphQL API served by
//! the `invgraph` binary.

pub mod auth;
pub mod config;
pub mod ent;
pub mod entities;
pub mod graphql;
pub mod hooks;
pub mod schema;
