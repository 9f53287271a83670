//! Domain entity representing a catalog course.

use chrono::{DateTime, Utc};

use super::{Cell, Entity};
use crate::domain::kind::EntityKind;

/// A course in the catalog, e.g. `IS 439 - Web Development`.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Course {
    pub id: i64,
    pub course_number: String,
    pub course_name: String,
    pub label: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Field values for creating or updating a course.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCourse {
    pub course_number: String,
    pub course_name: String,
}

impl NewCourse {
    pub fn label(&self) -> String {
        format!("{} - {}", self.course_number, self.course_name)
    }
}

impl Entity for Course {
    type Input = NewCourse;

    const KIND: EntityKind = EntityKind::Course;
    const HEADINGS: &'static [&'static str] = &["Number", "Name"];

    fn id(&self) -> i64 {
        self.id
    }

    fn label(&self) -> &str {
        &self.label
    }

    fn cells(&self) -> Vec<Cell> {
        vec![
            Cell::link(&self.course_number, self.detail_path()),
            Cell::text(&self.course_name),
        ]
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label() {
        let course = NewCourse {
            course_number: "IS 439".to_string(),
            course_name: "Web Development".to_string(),
        };

        assert_eq!(course.label(), "IS 439 - Web Development");
    }
}
