//! HTML template rendering handlers.

mod not_found;
mod stats;

pub use not_found::{fallback_handler, not_found_page};
pub use stats::stats_handler;
