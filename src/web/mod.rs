//! Server-rendered HTML for the course catalog.
//!
//! Every entity kind gets the same five views (list, detail, create, update,
//! delete), implemented once in [`handlers`] and bound to a kind through
//! [`resource::Resource`]. Pages are rendered with Askama templates from
//! `templates/`.
//!
//! # Modules
//!
//! - [`forms`] - Form structs, validation and field rendering data
//! - [`handlers`] - Generic view handlers and their templates
//! - [`resource`] - Entity kind to form/service binding
//! - [`routes`] - Route table for all six entity kinds

pub mod forms;
pub mod handlers;
pub mod resource;
pub mod routes;
