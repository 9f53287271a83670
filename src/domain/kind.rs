//! Entity kinds and the relationship graph between them.
//!
//! [`EntityKind`] is the single place that knows how the six catalog entities
//! relate to each other and where each of them lives in the URL space. Handlers
//! resolve redirect targets through these builders rather than asking an
//! entity instance for its own URL.

use std::fmt;

/// One of the six catalog entity kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Instructor,
    Course,
    Semester,
    Section,
    Student,
    Registration,
}

/// A one-to-many relation from a parent kind to the child kind that
/// references it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChildRelation {
    pub child: EntityKind,
    /// Foreign key column on the child table.
    pub foreign_key: &'static str,
}

impl EntityKind {
    pub const ALL: [EntityKind; 6] = [
        EntityKind::Instructor,
        EntityKind::Course,
        EntityKind::Semester,
        EntityKind::Section,
        EntityKind::Student,
        EntityKind::Registration,
    ];

    /// URL path segment, also used as the CLI argument.
    pub fn slug(self) -> &'static str {
        match self {
            EntityKind::Instructor => "instructor",
            EntityKind::Course => "course",
            EntityKind::Semester => "semester",
            EntityKind::Section => "section",
            EntityKind::Student => "student",
            EntityKind::Registration => "registration",
        }
    }

    pub fn singular(self) -> &'static str {
        match self {
            EntityKind::Instructor => "Instructor",
            EntityKind::Course => "Course",
            EntityKind::Semester => "Semester",
            EntityKind::Section => "Section",
            EntityKind::Student => "Student",
            EntityKind::Registration => "Registration",
        }
    }

    pub fn plural(self) -> &'static str {
        match self {
            EntityKind::Instructor => "Instructors",
            EntityKind::Course => "Courses",
            EntityKind::Semester => "Semesters",
            EntityKind::Section => "Sections",
            EntityKind::Student => "Students",
            EntityKind::Registration => "Registrations",
        }
    }

    /// Parses a kind from its slug.
    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.slug() == slug)
    }

    /// The relation whose rows block deletion of this kind.
    ///
    /// Registrations are leaves and never block anything.
    pub fn child_relation(self) -> Option<ChildRelation> {
        let (child, foreign_key) = match self {
            EntityKind::Instructor => (EntityKind::Section, "instructor_id"),
            EntityKind::Course => (EntityKind::Section, "course_id"),
            EntityKind::Semester => (EntityKind::Section, "semester_id"),
            EntityKind::Section => (EntityKind::Registration, "section_id"),
            EntityKind::Student => (EntityKind::Registration, "student_id"),
            EntityKind::Registration => return None,
        };

        Some(ChildRelation { child, foreign_key })
    }

    pub fn list_path(self) -> String {
        format!("/{}", self.slug())
    }

    pub fn create_path(self) -> String {
        format!("/{}/create", self.slug())
    }

    pub fn detail_path(self, id: i64) -> String {
        format!("/{}/{}", self.slug(), id)
    }

    pub fn update_path(self, id: i64) -> String {
        format!("/{}/{}/update", self.slug(), id)
    }

    pub fn delete_path(self, id: i64) -> String {
        format!("/{}/{}/delete", self.slug(), id)
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.singular())
    }
}
