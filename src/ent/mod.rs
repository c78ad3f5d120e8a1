//! Mutation-builder runtime shared by every entity.
//!
//! A builder collects field and edge changes into a [`Mutation`], applies
//! defaults and validators, then runs the entity's hook chain inside a
//! transaction. The end of the chain writes the row and its edges.

mod builder;
mod client;
mod edge;
mod error;
mod hook;
pub mod migrate;
mod mutation;
mod persist;
mod schema;
pub mod validate;

pub use builder::{Builder, Create, CreateBulk, Delete, DeleteOne, Update, UpdateOne, Updater};
pub use client::{Client, EntityClient};
pub use edge::{EdgeIds, M2m, O2m};
pub use error::EntError;
pub use hook::{Hook, HookFuture, Next};
pub use mutation::{Mutation, Op, Saved, default_to, value};
pub use schema::Schema;
