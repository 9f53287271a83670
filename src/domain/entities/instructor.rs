//! Domain entity representing an instructor.

use chrono::{DateTime, Utc};

use super::{Cell, Entity};
use crate::domain::kind::EntityKind;

/// A person teaching course sections.
///
/// `disambiguator` tells apart instructors sharing a name and is empty for
/// most rows.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Instructor {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub disambiguator: String,
    pub label: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Field values for creating or updating an instructor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewInstructor {
    pub first_name: String,
    pub last_name: String,
    pub disambiguator: String,
}

impl NewInstructor {
    /// Formats the label the database derives for these values.
    pub fn label(&self) -> String {
        person_label(&self.last_name, &self.first_name, &[self.disambiguator.as_str()])
    }
}

/// `Last, First (extra)` with empty extras left out.
pub(crate) fn person_label(last: &str, first: &str, extras: &[&str]) -> String {
    let mut label = format!("{last}, {first}");
    for extra in extras.iter().filter(|e| !e.is_empty()) {
        label.push_str(&format!(" ({extra})"));
    }
    label
}

impl Entity for Instructor {
    type Input = NewInstructor;

    const KIND: EntityKind = EntityKind::Instructor;
    const HEADINGS: &'static [&'static str] = &["Last name", "First name", "Disambiguator"];

    fn id(&self) -> i64 {
        self.id
    }

    fn label(&self) -> &str {
        &self.label
    }

    fn cells(&self) -> Vec<Cell> {
        vec![
            Cell::link(&self.last_name, self.detail_path()),
            Cell::text(&self.first_name),
            Cell::text(&self.disambiguator),
        ]
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}
