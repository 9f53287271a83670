//! Delete confirmation and the guarded delete itself.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};

use super::parse_id;
use crate::domain::deletion_guard::{ChildRecord, DeleteOutcome, DeletionCheck};
use crate::error::AppError;
use crate::state::AppState;
use crate::web::resource::Resource;

/// Template for `templates/confirm_delete.html`.
#[derive(Template, WebTemplate)]
#[template(path = "confirm_delete.html")]
pub struct ConfirmDeleteTemplate {
    pub singular: &'static str,
    pub label: String,
    pub action: String,
    pub cancel_url: String,
}

/// Template for `templates/refuse_delete.html`, listing the blocking children.
#[derive(Template, WebTemplate)]
#[template(path = "refuse_delete.html")]
pub struct RefuseDeleteTemplate {
    pub singular: &'static str,
    pub label: String,
    pub children: Vec<ChildRecord>,
    pub detail_url: String,
}

impl RefuseDeleteTemplate {
    fn new<R: Resource>(entity: &R, children: Vec<ChildRecord>) -> Self {
        Self {
            singular: R::KIND.singular(),
            label: entity.label().to_string(),
            children,
            detail_url: entity.detail_path(),
        }
    }
}

/// Asks for confirmation, or explains why the entity cannot be deleted.
///
/// # Endpoint
///
/// `GET /{kind}/{id}/delete`
pub async fn delete_confirm_handler<R: Resource>(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let id = parse_id(R::KIND, &id)?;
    let (entity, check) = R::service(&state).check_deletable(id).await?;

    let response = match check {
        DeletionCheck::Deletable => ConfirmDeleteTemplate {
            singular: R::KIND.singular(),
            label: entity.label().to_string(),
            action: R::KIND.delete_path(id),
            cancel_url: entity.detail_path(),
        }
        .into_response(),
        DeletionCheck::Blocked(children) => {
            RefuseDeleteTemplate::new(&entity, children).into_response()
        }
    };

    Ok(response)
}

/// Deletes the entity if nothing references it.
///
/// # Endpoint
///
/// `POST /{kind}/{id}/delete`
///
/// # Responses
///
/// - **303 See Other** to the list page
/// - **404 Not Found** if the entity does not exist
/// - **409 Conflict** with the list of blocking children
pub async fn delete_handler<R: Resource>(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let id = parse_id(R::KIND, &id)?;
    let service = R::service(&state);
    let entity = service.get(id).await?;

    match service.delete(id).await? {
        DeleteOutcome::Deleted => Ok(Redirect::to(&R::KIND.list_path()).into_response()),
        DeleteOutcome::Blocked(children) => Ok((
            StatusCode::CONFLICT,
            RefuseDeleteTemplate::new(&entity, children),
        )
            .into_response()),
    }
}
