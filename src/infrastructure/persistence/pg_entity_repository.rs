//! PostgreSQL implementation of the entity repository.

use async_trait::async_trait;
use serde_json::json;
use sqlx::{Executor, PgPool, Postgres, Row};
use std::marker::PhantomData;
use std::sync::Arc;

use super::tables::{PgEntity, label_view, table_name};
use crate::domain::deletion_guard::{ChildRecord, DeleteOutcome};
use crate::domain::kind::EntityKind;
use crate::domain::repositories::EntityRepository;
use crate::error::AppError;

/// PostgreSQL repository for one entity kind.
///
/// Guarded deletes lock the parent row with `SELECT ... FOR UPDATE` before
/// looking for children. Inserting a child takes a `FOR KEY SHARE` lock on
/// the parent for the foreign-key check, so it waits for the deleting
/// transaction and then fails instead of leaving an orphan.
pub struct PgEntityRepository<E> {
    pool: Arc<PgPool>,
    _entity: PhantomData<fn() -> E>,
}

impl<E: PgEntity> PgEntityRepository<E> {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self {
            pool,
            _entity: PhantomData,
        }
    }
}

#[derive(sqlx::FromRow)]
struct ChildRow {
    id: i64,
    label: String,
}

/// Loads the children of `parent_id` through any executor, so the guarded
/// delete can run the same query inside its transaction.
async fn fetch_children<'e, X>(
    executor: X,
    parent: EntityKind,
    parent_id: i64,
) -> Result<Vec<ChildRecord>, AppError>
where
    X: Executor<'e, Database = Postgres>,
{
    let Some(relation) = parent.child_relation() else {
        return Ok(Vec::new());
    };

    let sql = format!(
        "SELECT c.id, l.label FROM {table} c JOIN {view} l ON l.id = c.id \
         WHERE c.{fk} = $1 ORDER BY l.label, c.id",
        table = table_name(relation.child),
        view = label_view(relation.child),
        fk = relation.foreign_key,
    );

    let rows = sqlx::query_as::<_, ChildRow>(&sql)
        .bind(parent_id)
        .fetch_all(executor)
        .await?;

    Ok(rows
        .into_iter()
        .map(|r| ChildRecord::new(relation.child, r.id, r.label))
        .collect())
}

fn to_sql_bound(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

#[async_trait]
impl<E: PgEntity> EntityRepository<E> for PgEntityRepository<E> {
    async fn find_by_id(&self, id: i64) -> Result<Option<E>, AppError> {
        let sql = format!("{} WHERE t.id = $1", E::SELECT);

        let entity = sqlx::query_as::<_, E>(&sql)
            .bind(id)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(entity)
    }

    async fn list_all(&self) -> Result<Vec<E>, AppError> {
        let sql = format!("{} ORDER BY {}", E::SELECT, E::ORDER_BY);

        let entities = sqlx::query_as::<_, E>(&sql)
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(entities)
    }

    async fn list_page(&self, offset: u64, limit: u64) -> Result<Vec<E>, AppError> {
        let sql = format!(
            "{} ORDER BY {} LIMIT $1 OFFSET $2",
            E::SELECT,
            E::ORDER_BY
        );

        let entities = sqlx::query_as::<_, E>(&sql)
            .bind(to_sql_bound(limit))
            .bind(to_sql_bound(offset))
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(entities)
    }

    async fn count(&self) -> Result<u64, AppError> {
        let sql = format!("SELECT COUNT(*) FROM {}", table_name(E::KIND));

        let count = sqlx::query_scalar::<_, i64>(&sql)
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(u64::try_from(count).unwrap_or(0))
    }

    async fn children(&self, parent_id: i64) -> Result<Vec<ChildRecord>, AppError> {
        fetch_children(self.pool.as_ref(), E::KIND, parent_id).await
    }

    async fn create(&self, input: E::Input) -> Result<E, AppError> {
        let row = E::bind_input(sqlx::query(E::INSERT), &input)
            .fetch_one(self.pool.as_ref())
            .await?;
        let id: i64 = row.try_get("id")?;

        self.find_by_id(id).await?.ok_or_else(|| {
            AppError::internal(
                "Created record could not be read back",
                json!({ "kind": E::KIND.slug(), "id": id }),
            )
        })
    }

    async fn update(&self, id: i64, input: E::Input) -> Result<E, AppError> {
        let result = E::bind_input(sqlx::query(E::UPDATE).bind(id), &input)
            .execute(self.pool.as_ref())
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(
                format!("{} not found", E::KIND),
                json!({ "kind": E::KIND.slug(), "id": id }),
            ));
        }

        self.find_by_id(id).await?.ok_or_else(|| {
            AppError::not_found(
                format!("{} not found", E::KIND),
                json!({ "kind": E::KIND.slug(), "id": id }),
            )
        })
    }

    async fn delete_if_childless(&self, id: i64) -> Result<DeleteOutcome, AppError> {
        let table = table_name(E::KIND);
        let mut tx = self.pool.begin().await?;

        let lock_sql = format!("SELECT id FROM {table} WHERE id = $1 FOR UPDATE");
        let locked = sqlx::query(&lock_sql)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;

        if locked.is_none() {
            tx.rollback().await?;
            return Err(AppError::not_found(
                format!("{} not found", E::KIND),
                json!({ "kind": E::KIND.slug(), "id": id }),
            ));
        }

        let children = fetch_children(&mut *tx, E::KIND, id).await?;
        if !children.is_empty() {
            tx.rollback().await?;
            return Ok(DeleteOutcome::Blocked(children));
        }

        let delete_sql = format!("DELETE FROM {table} WHERE id = $1");
        sqlx::query(&delete_sql).bind(id).execute(&mut *tx).await?;

        tx.commit().await?;
        Ok(DeleteOutcome::Deleted)
    }
}
