//! List view.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Query, State};

use crate::domain::entities::Cell;
use crate::domain::pagination::PageWindow;
use crate::error::AppError;
use crate::state::AppState;
use crate::web::resource::Resource;

/// Query parameters of a list page.
///
/// Built from the raw query pairs: `page` stays text so non-numeric values
/// clamp to the first page, and a repeated `page` takes the last value.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct PageQuery {
    pub page: Option<String>,
}

impl PageQuery {
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let page = pairs
            .into_iter()
            .rev()
            .find(|(key, _)| key == "page")
            .map(|(_, value)| value);

        Self { page }
    }
}

pub struct ListRow {
    pub cells: Vec<Cell>,
    pub update_url: String,
    pub delete_url: String,
}

/// Template for `templates/list.html`.
#[derive(Template, WebTemplate)]
#[template(path = "list.html")]
pub struct ListTemplate {
    pub title: &'static str,
    pub singular: &'static str,
    pub headings: &'static [&'static str],
    pub rows: Vec<ListRow>,
    pub window: PageWindow,
    pub create_url: String,
}

/// Renders one page of the entity listing.
///
/// # Endpoint
///
/// `GET /{kind}?page=N`
pub async fn list_handler<R: Resource>(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<ListTemplate, AppError> {
    let query = PageQuery::from_pairs(pairs);
    let page = R::service(&state).list(query.page.as_deref()).await?;

    let rows = page
        .items
        .iter()
        .map(|entity| ListRow {
            cells: entity.cells(),
            update_url: R::KIND.update_path(entity.id()),
            delete_url: R::KIND.delete_path(entity.id()),
        })
        .collect();

    Ok(ListTemplate {
        title: R::KIND.plural(),
        singular: R::KIND.singular(),
        headings: R::HEADINGS,
        rows,
        window: page.window,
        create_url: R::KIND.create_path(),
    })
}
