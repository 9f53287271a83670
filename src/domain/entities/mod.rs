//! Core domain entities of the course catalog.
//!
//! # Entity Types
//!
//! - [`Instructor`] - Teaches sections
//! - [`Course`] - A catalog course offered in sections
//! - [`Semester`] - A year/period pair sections are scheduled in
//! - [`Section`] - A course taught by an instructor in a semester
//! - [`Student`] - Registers for sections
//! - [`Registration`] - A student enrolled in a section
//!
//! # Design Pattern
//!
//! Entities follow the "New Type" pattern with separate structs for writes:
//! `NewInstructor`, `NewCourse`, ... carry validated field values for both
//! create and update. Persisted entities additionally carry their `label`,
//! the human-readable name computed by the database label views.
//!
//! Every entity implements [`Entity`], the descriptor the generic CRUD
//! service, repositories and web handlers are parameterized by.

pub mod course;
pub mod instructor;
pub mod registration;
pub mod section;
pub mod semester;
pub mod student;

pub use course::{Course, NewCourse};
pub use instructor::{Instructor, NewInstructor};
pub use registration::{NewRegistration, Registration};
pub use section::{NewSection, Section};
pub use semester::{NewSemester, Period, Semester, UnknownPeriod};
pub use student::{NewStudent, Student};

use crate::domain::kind::EntityKind;
use chrono::{DateTime, Utc};

/// One value displayed in list and detail views, optionally linking to
/// another entity's detail page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub value: String,
    pub link: Option<String>,
}

impl Cell {
    pub fn text(value: impl ToString) -> Self {
        Self {
            value: value.to_string(),
            link: None,
        }
    }

    pub fn link(value: impl ToString, href: String) -> Self {
        Self {
            value: value.to_string(),
            link: Some(href),
        }
    }
}

/// Entity-kind descriptor.
///
/// Implemented once per entity; everything generic over entities (services,
/// repositories, handlers) reaches entity specifics only through this trait.
pub trait Entity: Clone + Send + Sync + Unpin + std::fmt::Debug + 'static {
    /// Validated field values used for create and update.
    type Input: Clone + Send + Sync + std::fmt::Debug + 'static;

    const KIND: EntityKind;

    /// Column headings, in the order of [`Entity::cells`].
    const HEADINGS: &'static [&'static str];

    fn id(&self) -> i64;

    fn label(&self) -> &str;

    fn cells(&self) -> Vec<Cell>;

    fn created_at(&self) -> DateTime<Utc>;

    fn updated_at(&self) -> DateTime<Utc>;

    fn detail_path(&self) -> String {
        Self::KIND.detail_path(self.id())
    }
}
