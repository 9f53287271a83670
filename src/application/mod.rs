//! Application layer services implementing business logic.
//!
//! This layer orchestrates domain operations by coordinating repository calls
//! with pagination and the deletion guard. Services consume repository traits
//! and provide a clean API for HTTP handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::crud_service::CrudService`] - List, detail, create, update and guarded delete
//!   for any entity kind

pub mod services;
