//! Route table for the catalog pages.

use axum::Router;
use axum::response::Redirect;
use axum::routing::get;

use crate::domain::entities::{Course, Instructor, Registration, Section, Semester, Student};
use crate::domain::kind::EntityKind;
use crate::state::AppState;
use crate::web::handlers::{
    create_form_handler, create_handler, delete_confirm_handler, delete_handler, detail_handler,
    list_handler, update_form_handler, update_handler,
};
use crate::web::resource::Resource;

/// The five views of one entity kind.
///
/// # Endpoints
///
/// - `GET       /{kind}`             - Paginated list (`?page=N`)
/// - `GET|POST  /{kind}/create`      - Create form / submission
/// - `GET       /{kind}/{id}`        - Detail with child records
/// - `GET|POST  /{kind}/{id}/update` - Update form / submission
/// - `GET|POST  /{kind}/{id}/delete` - Confirmation or refusal / guarded delete
pub fn resource_routes<R: Resource>() -> Router<AppState> {
    let list = R::KIND.list_path();

    Router::new()
        .route(&list, get(list_handler::<R>))
        .route(
            &R::KIND.create_path(),
            get(create_form_handler::<R>).post(create_handler::<R>),
        )
        .route(&format!("{list}/{{id}}"), get(detail_handler::<R>))
        .route(
            &format!("{list}/{{id}}/update"),
            get(update_form_handler::<R>).post(update_handler::<R>),
        )
        .route(
            &format!("{list}/{{id}}/delete"),
            get(delete_confirm_handler::<R>).post(delete_handler::<R>),
        )
}

/// All catalog pages. `/` redirects to the instructor list.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(|| async { Redirect::to(&EntityKind::Instructor.list_path()) }),
        )
        .merge(resource_routes::<Instructor>())
        .merge(resource_routes::<Course>())
        .merge(resource_routes::<Semester>())
        .merge(resource_routes::<Section>())
        .merge(resource_routes::<Student>())
        .merge(resource_routes::<Registration>())
}

