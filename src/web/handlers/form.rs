//! Create and update views.
//!
//! A submission that fails validation, or that the database rejects as a
//! duplicate or a dangling reference, is rendered again with the submitted
//! values and `422 Unprocessable Entity`. A successful submission redirects to
//! the entity's detail page.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Form, Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};

use super::parse_id;
use crate::error::AppError;
use crate::state::AppState;
use crate::web::forms::{EntityForm, FormErrors, FormField, bind, fields_with_errors};
use crate::web::resource::{Resource, populate_choices};

/// Template for `templates/form.html`.
#[derive(Template, WebTemplate)]
#[template(path = "form.html")]
pub struct FormTemplate {
    pub title: String,
    pub action: String,
    pub fields: Vec<FormField>,
    pub errors: Vec<String>,
    pub submit_label: &'static str,
    pub cancel_url: String,
}

struct FormPage {
    title: String,
    action: String,
    submit_label: &'static str,
    cancel_url: String,
}

impl FormPage {
    fn create<R: Resource>() -> Self {
        Self {
            title: format!("Create {}", R::KIND.singular().to_lowercase()),
            action: R::KIND.create_path(),
            submit_label: "Create",
            cancel_url: R::KIND.list_path(),
        }
    }

    fn update<R: Resource>(entity: &R) -> Self {
        Self {
            title: format!("Update {}: {}", R::KIND.singular().to_lowercase(), entity.label()),
            action: R::KIND.update_path(entity.id()),
            submit_label: "Update",
            cancel_url: entity.detail_path(),
        }
    }

    async fn render<R: Resource>(
        self,
        state: &AppState,
        form: &R::Form,
        errors: &FormErrors,
    ) -> Result<FormTemplate, AppError> {
        let fields = populate_choices(state, fields_with_errors(form.fields(), errors)).await?;

        Ok(FormTemplate {
            title: self.title,
            action: self.action,
            fields,
            errors: errors.general().to_vec(),
            submit_label: self.submit_label,
            cancel_url: self.cancel_url,
        })
    }
}

/// Turns a database rejection into a form-level error; other errors pass
/// through.
fn conflict_to_form_error(error: AppError) -> Result<FormErrors, AppError> {
    match error {
        AppError::Conflict { message, .. } => {
            let mut errors = FormErrors::default();
            errors.add_general(message);
            Ok(errors)
        }
        other => Err(other),
    }
}

async fn rerender<R: Resource>(
    page: FormPage,
    state: &AppState,
    form: &R::Form,
    errors: &FormErrors,
) -> Result<Response, AppError> {
    let template = page.render::<R>(state, form, errors).await?;
    Ok((StatusCode::UNPROCESSABLE_ENTITY, template).into_response())
}

/// Renders an empty create form.
///
/// # Endpoint
///
/// `GET /{kind}/create`
pub async fn create_form_handler<R: Resource>(
    State(state): State<AppState>,
) -> Result<FormTemplate, AppError> {
    FormPage::create::<R>()
        .render::<R>(&state, &R::Form::default(), &FormErrors::default())
        .await
}

/// Creates an entity from a submitted form.
///
/// # Endpoint
///
/// `POST /{kind}/create`
///
/// # Responses
///
/// - **303 See Other** to the new entity's detail page
/// - **422 Unprocessable Entity** with the form and its errors
pub async fn create_handler<R: Resource>(
    State(state): State<AppState>,
    Form(form): Form<R::Form>,
) -> Result<Response, AppError> {
    let errors = match bind(&form) {
        Ok(input) => match R::service(&state).create(input).await {
            Ok(created) => return Ok(Redirect::to(&created.detail_path()).into_response()),
            Err(e) => conflict_to_form_error(e)?,
        },
        Err(errors) => errors,
    };

    rerender::<R>(FormPage::create::<R>(), &state, &form, &errors).await
}

/// Renders the update form pre-populated with the stored values.
///
/// # Endpoint
///
/// `GET /{kind}/{id}/update`
pub async fn update_form_handler<R: Resource>(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<FormTemplate, AppError> {
    let id = parse_id(R::KIND, &id)?;
    let entity = R::service(&state).get(id).await?;

    FormPage::update::<R>(&entity)
        .render::<R>(&state, &R::Form::from_entity(&entity), &FormErrors::default())
        .await
}

/// Overwrites an entity from a submitted form.
///
/// # Endpoint
///
/// `POST /{kind}/{id}/update`
///
/// # Responses
///
/// - **303 See Other** to the entity's detail page
/// - **404 Not Found** if the entity does not exist
/// - **422 Unprocessable Entity** with the form and its errors
pub async fn update_handler<R: Resource>(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Form(form): Form<R::Form>,
) -> Result<Response, AppError> {
    let id = parse_id(R::KIND, &id)?;
    let service = R::service(&state);
    let entity = service.get(id).await?;

    let errors = match bind(&form) {
        Ok(input) => match service.update(id, input).await {
            Ok(updated) => return Ok(Redirect::to(&updated.detail_path()).into_response()),
            Err(e) => conflict_to_form_error(e)?,
        },
        Err(errors) => errors,
    };

    rerender::<R>(FormPage::update::<R>(&entity), &state, &form, &errors).await
}
