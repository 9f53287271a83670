//! Detail view.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Path, State};

use super::parse_id;
use crate::domain::deletion_guard::ChildRecord;
use crate::domain::entities::Cell;
use crate::error::AppError;
use crate::state::AppState;
use crate::web::resource::Resource;

pub struct DetailRow {
    pub heading: &'static str,
    pub cell: Cell,
}

/// Template for `templates/detail.html`.
#[derive(Template, WebTemplate)]
#[template(path = "detail.html")]
pub struct DetailTemplate {
    pub singular: &'static str,
    pub label: String,
    pub rows: Vec<DetailRow>,
    /// Heading of the child list, `None` for kinds nothing references.
    pub children_title: Option<&'static str>,
    pub children: Vec<ChildRecord>,
    pub created_at: String,
    pub updated_at: String,
    pub list_url: String,
    pub update_url: String,
    pub delete_url: String,
}

/// Renders one entity with the child records that reference it.
///
/// # Endpoint
///
/// `GET /{kind}/{id}`
pub async fn detail_handler<R: Resource>(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<DetailTemplate, AppError> {
    let id = parse_id(R::KIND, &id)?;
    let detail = R::service(&state).detail(id).await?;
    let entity = &detail.entity;

    let rows = R::HEADINGS
        .iter()
        .copied()
        .zip(entity.cells())
        .map(|(heading, cell)| DetailRow { heading, cell })
        .collect();

    Ok(DetailTemplate {
        singular: R::KIND.singular(),
        label: entity.label().to_string(),
        rows,
        children_title: R::KIND.child_relation().map(|r| r.child.plural()),
        children: detail.children,
        created_at: entity.created_at().format("%Y-%m-%d %H:%M").to_string(),
        updated_at: entity.updated_at().format("%Y-%m-%d %H:%M").to_string(),
        list_url: R::KIND.list_path(),
        update_url: R::KIND.update_path(id),
        delete_url: R::KIND.delete_path(id),
    })
}
