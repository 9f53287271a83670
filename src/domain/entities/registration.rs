//! Domain entity representing a student's registration in a section.

use chrono::{DateTime, Utc};

use super::{Cell, Entity};
use crate::domain::kind::EntityKind;

#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Registration {
    pub id: i64,
    pub student_id: i64,
    pub section_id: i64,
    pub student_label: String,
    pub section_label: String,
    pub label: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Field values for creating or updating a registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRegistration {
    pub student_id: i64,
    pub section_id: i64,
}

impl Entity for Registration {
    type Input = NewRegistration;

    const KIND: EntityKind = EntityKind::Registration;
    const HEADINGS: &'static [&'static str] = &["Registration", "Student", "Section"];

    fn id(&self) -> i64 {
        self.id
    }

    fn label(&self) -> &str {
        &self.label
    }

    fn cells(&self) -> Vec<Cell> {
        vec![
            Cell::link(format!("#{}", self.id), self.detail_path()),
            Cell::link(
                &self.student_label,
                EntityKind::Student.detail_path(self.student_id),
            ),
            Cell::link(
                &self.section_label,
                EntityKind::Section.detail_path(self.section_id),
            ),
        ]
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}
