//! Core domain entities.
//!
//! - [`Link`] - A stored short code with its target and click statistics
//! - [`NewLink`] - Input for creating a link

pub mod link;

pub use link::{Link, NewLink};
