//! Binds each entity kind to its form and service.

use crate::application::services::CrudService;
use crate::domain::entities::{
    Course, Entity, Instructor, Registration, Section, Semester, Student,
};
use crate::domain::kind::EntityKind;
use crate::error::AppError;
use crate::state::AppState;
use crate::web::forms::{
    Choice, CourseForm, EntityForm, FormField, InstructorForm, RegistrationForm, SectionForm,
    SemesterForm, StudentForm,
};

/// An entity kind served by the generic web handlers.
pub trait Resource: Entity {
    type Form: EntityForm<Entity = Self>;

    fn service(state: &AppState) -> &CrudService<Self>;
}

impl Resource for Instructor {
    type Form = InstructorForm;

    fn service(state: &AppState) -> &CrudService<Self> {
        &state.instructors
    }
}

impl Resource for Course {
    type Form = CourseForm;

    fn service(state: &AppState) -> &CrudService<Self> {
        &state.courses
    }
}

impl Resource for Semester {
    type Form = SemesterForm;

    fn service(state: &AppState) -> &CrudService<Self> {
        &state.semesters
    }
}

impl Resource for Section {
    type Form = SectionForm;

    fn service(state: &AppState) -> &CrudService<Self> {
        &state.sections
    }
}

impl Resource for Student {
    type Form = StudentForm;

    fn service(state: &AppState) -> &CrudService<Self> {
        &state.students
    }
}

impl Resource for Registration {
    type Form = RegistrationForm;

    fn service(state: &AppState) -> &CrudService<Self> {
        &state.registrations
    }
}

async fn choices<E: Resource>(state: &AppState) -> Result<Vec<Choice>, AppError> {
    Ok(E::service(state)
        .list_all()
        .await?
        .iter()
        .map(|e| Choice::new(e.id(), e.label()))
        .collect())
}

/// Lists every row of `kind` as select-box options, in the kind's order.
pub async fn choices_for(state: &AppState, kind: EntityKind) -> Result<Vec<Choice>, AppError> {
    match kind {
        EntityKind::Instructor => choices::<Instructor>(state).await,
        EntityKind::Course => choices::<Course>(state).await,
        EntityKind::Semester => choices::<Semester>(state).await,
        EntityKind::Section => choices::<Section>(state).await,
        EntityKind::Student => choices::<Student>(state).await,
        EntityKind::Registration => choices::<Registration>(state).await,
    }
}

/// Fills the choices of every reference field.
pub async fn populate_choices(
    state: &AppState,
    mut fields: Vec<FormField>,
) -> Result<Vec<FormField>, AppError> {
    for field in &mut fields {
        if let Some(kind) = field.references {
            field.choices = choices_for(state, kind).await?;
        }
    }
    Ok(fields)
}
