pub mod dataloader;
pub mod mutation;
pub mod query;
pub mod schema;
pub mod types;

pub use dataloader::*;
pub use mutation::*;
pub use query::*;
pub use schema::*;
pub use types::*;
