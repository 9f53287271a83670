//! Domain entity representing a course section.

use chrono::{DateTime, Utc};

use super::{Cell, Entity};
use crate::domain::kind::EntityKind;

/// A course taught by an instructor in a semester.
///
/// Parent labels are joined in from the label views so list and detail pages
/// need no extra lookups.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Section {
    pub id: i64,
    pub section_name: String,
    pub semester_id: i64,
    pub course_id: i64,
    pub instructor_id: i64,
    pub semester_label: String,
    pub course_label: String,
    pub instructor_label: String,
    pub label: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Field values for creating or updating a section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSection {
    pub section_name: String,
    pub semester_id: i64,
    pub course_id: i64,
    pub instructor_id: i64,
}

impl Entity for Section {
    type Input = NewSection;

    const KIND: EntityKind = EntityKind::Section;
    const HEADINGS: &'static [&'static str] = &["Section", "Course", "Semester", "Instructor"];

    fn id(&self) -> i64 {
        self.id
    }

    fn label(&self) -> &str {
        &self.label
    }

    fn cells(&self) -> Vec<Cell> {
        vec![
            Cell::link(&self.section_name, self.detail_path()),
            Cell::link(
                &self.course_label,
                EntityKind::Course.detail_path(self.course_id),
            ),
            Cell::link(
                &self.semester_label,
                EntityKind::Semester.detail_path(self.semester_id),
            ),
            Cell::link(
                &self.instructor_label,
                EntityKind::Instructor.detail_path(self.instructor_id),
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
