//! Generic CRUD service shared by all entity kinds.

use crate::domain::deletion_guard::{ChildRecord, DeleteOutcome, DeletionCheck};
use crate::domain::entities::Entity;
use crate::domain::kind::EntityKind;
use crate::domain::pagination::{Page, paginate};
use crate::domain::repositories::EntityRepository;
use crate::error::AppError;
use serde_json::json;
use std::sync::Arc;

/// An entity together with the children shown on its detail page.
#[derive(Debug, Clone)]
pub struct Detail<E> {
    pub entity: E,
    pub children: Vec<ChildRecord>,
}

/// List/detail/create/update/delete for one entity kind.
///
/// Handles:
/// - Paginated listing, clamping the requested page
/// - Lookups that fail with [`AppError::NotFound`]
/// - The deletion guard, both as a read-only check for the confirmation page
///   and as a transactional guarded delete
pub struct CrudService<E: Entity> {
    repository: Arc<dyn EntityRepository<E>>,
    page_size: u32,
}

impl<E: Entity> CrudService<E> {
    /// Creates a new service listing `page_size` rows per page.
    pub fn new(repository: Arc<dyn EntityRepository<E>>, page_size: u32) -> Self {
        Self {
            repository,
            page_size: page_size.max(1),
        }
    }

    pub fn kind(&self) -> EntityKind {
        E::KIND
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Returns the requested page of the listing.
    ///
    /// `requested_page` is the raw `?page=` value; absent, non-numeric and
    /// out-of-range values are clamped rather than rejected.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list(&self, requested_page: Option<&str>) -> Result<Page<E>, AppError> {
        let total = self.repository.count().await?;
        let window = paginate(total, self.page_size, requested_page);
        let items = self
            .repository
            .list_page(window.offset(), window.limit())
            .await?;

        Ok(Page { items, window })
    }

    /// Returns every entity of this kind, e.g. to fill a select box.
    pub async fn list_all(&self) -> Result<Vec<E>, AppError> {
        self.repository.list_all().await
    }

    pub async fn count(&self) -> Result<u64, AppError> {
        self.repository.count().await
    }

    /// Retrieves an entity by ID.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the entity does not exist.
    pub async fn get(&self, id: i64) -> Result<E, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found::<E>(id))
    }

    /// Retrieves an entity and the children that reference it.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the entity does not exist.
    pub async fn detail(&self, id: i64) -> Result<Detail<E>, AppError> {
        let entity = self.get(id).await?;
        let children = self.repository.children(id).await?;

        Ok(Detail { entity, children })
    }

    /// Persists a new entity from validated input.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] on unique or foreign-key violations.
    pub async fn create(&self, input: E::Input) -> Result<E, AppError> {
        let created = self.repository.create(input).await?;
        tracing::info!(kind = %E::KIND, id = created.id(), "created");
        Ok(created)
    }

    /// Overwrites an existing entity with validated input.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the entity does not exist.
    /// Returns [`AppError::Conflict`] on unique or foreign-key violations.
    pub async fn update(&self, id: i64, input: E::Input) -> Result<E, AppError> {
        let updated = self.repository.update(id, input).await?;
        tracing::info!(kind = %E::KIND, id, "updated");
        Ok(updated)
    }

    /// Runs the deletion guard without deleting anything.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the entity does not exist.
    pub async fn check_deletable(&self, id: i64) -> Result<(E, DeletionCheck), AppError> {
        let entity = self.get(id).await?;
        let children = self.repository.children(id).await?;

        Ok((entity, DeletionCheck::from_children(children)))
    }

    /// Deletes the entity unless children reference it.
    ///
    /// Returns [`DeleteOutcome::Deleted`] or [`DeleteOutcome::Blocked`] with
    /// the children found inside the deleting transaction.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the entity does not exist, including
    /// when a concurrent request deleted it first.
    pub async fn delete(&self, id: i64) -> Result<DeleteOutcome, AppError> {
        match self.repository.delete_if_childless(id).await? {
            DeleteOutcome::Blocked(children) => {
                tracing::info!(
                    kind = %E::KIND,
                    id,
                    children = children.len(),
                    "deletion blocked by child records"
                );
                Ok(DeleteOutcome::Blocked(children))
            }
            DeleteOutcome::Deleted => {
                tracing::info!(kind = %E::KIND, id, "deleted");
                Ok(DeleteOutcome::Deleted)
            }
        }
    }
}

fn not_found<E: Entity>(id: i64) -> AppError {
    AppError::not_found(
        format!("{} not found", E::KIND),
        json!({ "kind": E::KIND.slug(), "id": id }),
    )
}
