use serde::Deserialize;
use validator::Validate;

use super::{EntityForm, FormErrors, FormField, parse_reference, trimmed};
use crate::domain::entities::{NewRegistration, Registration};
use crate::domain::kind::EntityKind;

/// Create/update form for a registration.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct RegistrationForm {
    #[serde(default, deserialize_with = "trimmed")]
    pub student_id: String,

    #[serde(default, deserialize_with = "trimmed")]
    pub section_id: String,
}

impl EntityForm for RegistrationForm {
    type Entity = Registration;

    fn from_entity(entity: &Registration) -> Self {
        Self {
            student_id: entity.student_id.to_string(),
            section_id: entity.section_id.to_string(),
        }
    }

    fn fields(&self) -> Vec<FormField> {
        vec![
            FormField::reference("student_id", "Student", &self.student_id, EntityKind::Student),
            FormField::reference("section_id", "Section", &self.section_id, EntityKind::Section),
        ]
    }

    fn to_input(&self) -> Result<NewRegistration, FormErrors> {
        let mut errors = FormErrors::default();

        let student_id = parse_reference(&mut errors, "student_id", &self.student_id);
        let section_id = parse_reference(&mut errors, "section_id", &self.section_id);

        match (student_id, section_id) {
            (Some(student_id), Some(section_id)) => Ok(NewRegistration {
                student_id,
                section_id,
            }),
            _ => Err(errors),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::web::forms::{INVALID_CHOICE, bind};

    #[test]
    fn test_bind_registration() {
        let form = RegistrationForm {
            student_id: "4".to_string(),
            section_id: "9".to_string(),
        };

        let input = bind(&form).unwrap();

        assert_eq!(input.student_id, 4);
        assert_eq!(input.section_id, 9);
    }

    #[test]
    fn test_non_numeric_student() {
        let form = RegistrationForm {
            student_id: "bob".to_string(),
            section_id: "9".to_string(),
        };

        assert_eq!(bind(&form).unwrap_err().field("student_id"), [INVALID_CHOICE]);
    }
}
