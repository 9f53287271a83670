//! Repository trait definitions for the domain layer.
//!
//! A single generic [`EntityRepository`] covers all six entity kinds; the
//! entity-specific parts (tables, columns, label views) live with the
//! PostgreSQL implementation in `crate::infrastructure::persistence`.
//!
//! # Testing
//!
//! Unit tests build concrete mocks with `mockall::mock!`; handler tests use
//! the in-memory implementation in `tests/common`. See `tests/repository_*.rs`
//! for the PostgreSQL implementation.

pub mod entity_repository;

pub use entity_repository::EntityRepository;
