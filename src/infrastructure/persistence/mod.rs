//! PostgreSQL repository implementation.
//!
//! One generic repository serves all six entity kinds. Entity-specific SQL
//! (select lists, ordering, insert/update statements) is supplied per entity
//! through [`PgEntity`], and human-readable labels come from the `*_labels`
//! views created by the migrations.
//!
//! # Repositories
//!
//! - [`PgEntityRepository`] - CRUD and guarded deletes for any [`PgEntity`]

pub mod pg_entity_repository;
pub mod tables;

pub use pg_entity_repository::PgEntityRepository;
pub use tables::PgEntity;
