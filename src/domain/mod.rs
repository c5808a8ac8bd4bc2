//! Domain layer containing business entities and the storage contract.
//!
//! The domain layer has no dependencies on infrastructure or presentation
//! layers. Registry logic lives in [`crate::application::services`].
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions

pub mod entities;
pub mod repositories;
