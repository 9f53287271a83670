use serde::Deserialize;
use validator::Validate;

use super::{EntityForm, FormErrors, FormField, parse_reference, trimmed};
use crate::domain::entities::{NewSection, Section};
use crate::domain::kind::EntityKind;

/// Create/update form for a section.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct SectionForm {
    #[serde(default, deserialize_with = "trimmed")]
    #[validate(length(min = 1, max = 10, message = "Enter between 1 and 10 characters."))]
    pub section_name: String,

    #[serde(default, deserialize_with = "trimmed")]
    pub semester_id: String,

    #[serde(default, deserialize_with = "trimmed")]
    pub course_id: String,

    #[serde(default, deserialize_with = "trimmed")]
    pub instructor_id: String,
}

impl EntityForm for SectionForm {
    type Entity = Section;

    fn from_entity(entity: &Section) -> Self {
        Self {
            section_name: entity.section_name.clone(),
            semester_id: entity.semester_id.to_string(),
            course_id: entity.course_id.to_string(),
            instructor_id: entity.instructor_id.to_string(),
        }
    }

    fn fields(&self) -> Vec<FormField> {
        vec![
            FormField::text("section_name", "Section name", &self.section_name, true),
            FormField::reference(
                "semester_id",
                "Semester",
                &self.semester_id,
                EntityKind::Semester,
            ),
            FormField::reference("course_id", "Course", &self.course_id, EntityKind::Course),
            FormField::reference(
                "instructor_id",
                "Instructor",
                &self.instructor_id,
                EntityKind::Instructor,
            ),
        ]
    }

    fn to_input(&self) -> Result<NewSection, FormErrors> {
        let mut errors = FormErrors::default();

        let semester_id = parse_reference(&mut errors, "semester_id", &self.semester_id);
        let course_id = parse_reference(&mut errors, "course_id", &self.course_id);
        let instructor_id = parse_reference(&mut errors, "instructor_id", &self.instructor_id);

        match (semester_id, course_id, instructor_id) {
            (Some(semester_id), Some(course_id), Some(instructor_id)) => Ok(NewSection {
                section_name: self.section_name.clone(),
                semester_id,
                course_id,
                instructor_id,
            }),
            _ => Err(errors),
        }
    }
}
