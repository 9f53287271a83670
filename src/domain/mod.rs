//! Domain layer containing catalog entities and the rules shared by all of them.
//!
//! This module defines entities, the repository interface, and the two pieces
//! of logic every list/detail/delete triad relies on, independent of
//! infrastructure concerns.
//!
//! # Architecture
//!
//! - [`kind`] - Entity kinds, the relationship graph and URL builders
//! - [`entities`] - Core business data structures and the [`entities::Entity`] descriptor
//! - [`repositories`] - Data access trait definitions
//! - [`pagination`] - Page resolution for list views
//! - [`deletion_guard`] - Blocking deletion of entities that still have children
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on the web or presentation layers
//! - Repository traits define contracts implemented by infrastructure layer
//! - Business logic is encapsulated in services (see [`crate::application::services`])

pub mod deletion_guard;
pub mod entities;
pub mod kind;
pub mod pagination;
pub mod repositories;
