//! Domain entity representing a student.

use chrono::{DateTime, Utc};

use super::instructor::person_label;
use super::{Cell, Entity};
use crate::domain::kind::EntityKind;

/// A student who registers for sections.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Student {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub nickname: String,
    pub disambiguator: String,
    pub label: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Field values for creating or updating a student.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewStudent {
    pub first_name: String,
    pub last_name: String,
    pub nickname: String,
    pub disambiguator: String,
}

impl NewStudent {
    pub fn label(&self) -> String {
        person_label(
            &self.last_name,
            &self.first_name,
            &[self.nickname.as_str(), self.disambiguator.as_str()],
        )
    }
}

impl Entity for Student {
    type Input = NewStudent;

    const KIND: EntityKind = EntityKind::Student;
    const HEADINGS: &'static [&'static str] =
        &["Last name", "First name", "Nickname", "Disambiguator"];

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
            Cell::text(&self.nickname),
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
