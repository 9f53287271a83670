//! Repository trait shared by every entity kind.

use crate::domain::deletion_guard::{ChildRecord, DeleteOutcome};
use crate::domain::entities::Entity;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for one entity kind.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgEntityRepository`] - PostgreSQL implementation
/// - `tests/common::MemoryRepository` - in-memory implementation for handler tests
#[async_trait]
pub trait EntityRepository<E: Entity>: Send + Sync {
    /// Finds an entity by its database ID.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<E>, AppError>;

    /// Returns every entity in the kind's canonical order.
    async fn list_all(&self) -> Result<Vec<E>, AppError>;

    /// Returns at most `limit` entities starting at the zero-based `offset`,
    /// in the same order as [`EntityRepository::list_all`].
    async fn list_page(&self, offset: u64, limit: u64) -> Result<Vec<E>, AppError>;

    /// Counts all entities of this kind.
    async fn count(&self) -> Result<u64, AppError>;

    /// Lists the child records referencing `parent_id`.
    ///
    /// Always empty for kinds without a child relation.
    async fn children(&self, parent_id: i64) -> Result<Vec<ChildRecord>, AppError>;

    /// Persists a new entity and returns it with its assigned ID.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] on unique or foreign-key violations.
    async fn create(&self, input: E::Input) -> Result<E, AppError>;

    /// Overwrites the fields of an existing entity.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the entity does not exist.
    /// Returns [`AppError::Conflict`] on unique or foreign-key violations.
    async fn update(&self, id: i64, input: E::Input) -> Result<E, AppError>;

    /// Deletes the entity unless children reference it.
    ///
    /// The child check and the delete run in one transaction, so a child
    /// inserted concurrently cannot slip between them.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the row is already gone.
    async fn delete_if_childless(&self, id: i64) -> Result<DeleteOutcome, AppError>;
}
