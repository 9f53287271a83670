use serde::Deserialize;
use validator::Validate;

use super::{EntityForm, FormErrors, FormField, trimmed};
use crate::domain::entities::{NewStudent, Student};

/// Create/update form for a student.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct StudentForm {
    #[serde(default, deserialize_with = "trimmed")]
    #[validate(length(min = 1, max = 45, message = "Enter between 1 and 45 characters."))]
    pub first_name: String,

    #[serde(default, deserialize_with = "trimmed")]
    #[validate(length(min = 1, max = 45, message = "Enter between 1 and 45 characters."))]
    pub last_name: String,

    #[serde(default, deserialize_with = "trimmed")]
    #[validate(length(max = 45, message = "Enter at most 45 characters."))]
    pub nickname: String,

    #[serde(default, deserialize_with = "trimmed")]
    #[validate(length(max = 45, message = "Enter at most 45 characters."))]
    pub disambiguator: String,
}

impl EntityForm for StudentForm {
    type Entity = Student;

    fn from_entity(entity: &Student) -> Self {
        Self {
            first_name: entity.first_name.clone(),
            last_name: entity.last_name.clone(),
            nickname: entity.nickname.clone(),
            disambiguator: entity.disambiguator.clone(),
        }
    }

    fn fields(&self) -> Vec<FormField> {
        vec![
            FormField::text("first_name", "First name", &self.first_name, true),
            FormField::text("last_name", "Last name", &self.last_name, true),
            FormField::text("nickname", "Nickname", &self.nickname, false),
            FormField::text("disambiguator", "Disambiguator", &self.disambiguator, false),
        ]
    }

    fn to_input(&self) -> Result<NewStudent, FormErrors> {
        Ok(NewStudent {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            nickname: self.nickname.clone(),
            disambiguator: self.disambiguator.clone(),
        })
    }
}
