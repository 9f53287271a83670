use serde::Deserialize;
use validator::Validate;

use super::{EntityForm, FormErrors, FormField, trimmed};
use crate::domain::entities::{Instructor, NewInstructor};

/// Create/update form for an instructor.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct InstructorForm {
    #[serde(default, deserialize_with = "trimmed")]
    #[validate(length(min = 1, max = 45, message = "Enter between 1 and 45 characters."))]
    pub first_name: String,

    #[serde(default, deserialize_with = "trimmed")]
    #[validate(length(min = 1, max = 45, message = "Enter between 1 and 45 characters."))]
    pub last_name: String,

    #[serde(default, deserialize_with = "trimmed")]
    #[validate(length(max = 45, message = "Enter at most 45 characters."))]
    pub disambiguator: String,
}

impl EntityForm for InstructorForm {
    type Entity = Instructor;

    fn from_entity(entity: &Instructor) -> Self {
        Self {
            first_name: entity.first_name.clone(),
            last_name: entity.last_name.clone(),
            disambiguator: entity.disambiguator.clone(),
        }
    }

    fn fields(&self) -> Vec<FormField> {
        vec![
            FormField::text("first_name", "First name", &self.first_name, true),
            FormField::text("last_name", "Last name", &self.last_name, true),
            FormField::text("disambiguator", "Disambiguator", &self.disambiguator, false),
        ]
    }

    fn to_input(&self) -> Result<NewInstructor, FormErrors> {
        Ok(NewInstructor {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            disambiguator: self.disambiguator.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::web::forms::bind;

    #[test]
    fn test_bind_valid_form() {
        let form = InstructorForm {
            first_name: "Ann".to_string(),
            last_name: "Smith".to_string(),
            disambiguator: String::new(),
        };

        let input = bind(&form).unwrap();

        assert_eq!(input.label(), "Smith, Ann");
    }

    #[test]
    fn test_bind_rejects_blank_and_long_names() {
        let form = InstructorForm {
            first_name: String::new(),
            last_name: "x".repeat(46),
            disambiguator: String::new(),
        };

        let errors = bind(&form).unwrap_err();

        assert_eq!(errors.field("first_name").len(), 1);
        assert_eq!(errors.field("last_name").len(), 1);
        assert!(errors.field("disambiguator").is_empty());
    }

    #[test]
    fn test_fields_keep_submitted_values() {
        let form = InstructorForm {
            first_name: "Ann".to_string(),
            last_name: "Smith".to_string(),
            disambiguator: "Harvard".to_string(),
        };

        let fields = form.fields();

        assert_eq!(fields.len(), 3);
        assert_eq!(fields[2].value, "Harvard");
        assert!(!fields[2].required);
    }
}
