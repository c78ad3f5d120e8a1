//! Hooks shipped with the crate.

mod logging;
mod work_order_history;

pub use logging::{logging, register_logging};
pub use work_order_history::work_order_history;

use crate::schema::Hooks;

/// Hook set used by the server: logging on every entity, outermost, then the
/// work order activity history.
pub fn default_hooks() -> Hooks {
    let mut hooks = Hooks::new();
    register_logging(&mut hooks);
    hooks.on(work_order_history());
    hooks
}
