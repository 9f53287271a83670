use regex::Regex;
use serde::Deserialize;
use std::sync::LazyLock;
use validator::Validate;

use super::{EntityForm, FormErrors, FormField, trimmed};
use crate::domain::entities::{Course, NewCourse};

/// Letters, digits, spaces, dots and dashes, starting with a letter or digit.
static COURSE_NUMBER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9][A-Za-z0-9 .\-]*$").unwrap());

/// Create/update form for a course.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CourseForm {
    #[serde(default, deserialize_with = "trimmed")]
    #[validate(
        length(min = 1, max = 20, message = "Enter between 1 and 20 characters."),
        regex(
            path = "*COURSE_NUMBER_REGEX",
            message = "Use letters, digits, spaces, dots and dashes only."
        )
    )]
    pub course_number: String,

    #[serde(default, deserialize_with = "trimmed")]
    #[validate(length(min = 1, max = 225, message = "Enter between 1 and 225 characters."))]
    pub course_name: String,
}

impl EntityForm for CourseForm {
    type Entity = Course;

    fn from_entity(entity: &Course) -> Self {
        Self {
            course_number: entity.course_number.clone(),
            course_name: entity.course_name.clone(),
        }
    }

    fn fields(&self) -> Vec<FormField> {
        vec![
            FormField::text("course_number", "Course number", &self.course_number, true),
            FormField::text("course_name", "Course name", &self.course_name, true),
        ]
    }

    fn to_input(&self) -> Result<NewCourse, FormErrors> {
        Ok(NewCourse {
            course_number: self.course_number.clone(),
            course_name: self.course_name.clone(),
        })
    }
}
