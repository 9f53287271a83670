//! Generic view handlers shared by all entity kinds.

mod delete;
mod detail;
mod form;
mod list;

pub use delete::{
    ConfirmDeleteTemplate, RefuseDeleteTemplate, delete_confirm_handler, delete_handler,
};
pub use detail::{DetailRow, DetailTemplate, detail_handler};
pub use form::{
    FormTemplate, create_form_handler, create_handler, update_form_handler, update_handler,
};
pub use list::{ListRow, ListTemplate, PageQuery, list_handler};

use serde_json::json;

use crate::domain::kind::EntityKind;
use crate::error::AppError;

/// Parses the `{id}` path segment; anything but a positive integer is a 404.
pub(crate) fn parse_id(kind: EntityKind, raw: &str) -> Result<i64, AppError> {
    match raw.parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(AppError::not_found(
            format!("{kind} not found"),
            json!({ "kind": kind.slug(), "id": raw }),
        )),
    }
}

/// Page shown for unknown URLs.
pub async fn not_found_handler() -> AppError {
    AppError::not_found("Page not found", json!({}))
}
