//! HTML forms for creating and updating entities.
//!
//! Form structs keep every field as submitted text so a failed submission can
//! be shown again exactly as typed. Binding a form runs the `validator` rules
//! first, then typed parsing ([`EntityForm::to_input`]); both contribute to a
//! single [`FormErrors`].

mod course;
mod instructor;
mod registration;
mod section;
mod semester;
mod student;

pub use course::CourseForm;
pub use instructor::InstructorForm;
pub use registration::RegistrationForm;
pub use section::SectionForm;
pub use semester::SemesterForm;
pub use student::StudentForm;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use std::collections::BTreeMap;
use validator::{Validate, ValidationErrors};

use crate::domain::entities::Entity;
use crate::domain::kind::EntityKind;

/// Message for a missing or non-numeric select value.
pub(crate) const INVALID_CHOICE: &str = "Select a valid choice.";

/// One option of a select box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    pub value: String,
    pub label: String,
}

impl Choice {
    pub fn new(value: impl ToString, label: impl Into<String>) -> Self {
        Self {
            value: value.to_string(),
            label: label.into(),
        }
    }
}

/// A rendered form field with its current value and errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub name: &'static str,
    pub label: &'static str,
    pub value: String,
    /// `text`, `number` or `select`.
    pub input_type: &'static str,
    pub required: bool,
    /// Entity kind whose rows populate this select box.
    pub references: Option<EntityKind>,
    pub choices: Vec<Choice>,
    pub errors: Vec<String>,
}

impl FormField {
    pub fn text(name: &'static str, label: &'static str, value: &str, required: bool) -> Self {
        Self {
            name,
            label,
            value: value.to_string(),
            input_type: "text",
            required,
            references: None,
            choices: Vec::new(),
            errors: Vec::new(),
        }
    }

    pub fn number(name: &'static str, label: &'static str, value: &str) -> Self {
        Self {
            input_type: "number",
            ..Self::text(name, label, value, true)
        }
    }

    /// A select box over fixed choices.
    pub fn select(
        name: &'static str,
        label: &'static str,
        value: &str,
        choices: Vec<Choice>,
    ) -> Self {
        Self {
            input_type: "select",
            choices,
            ..Self::text(name, label, value, true)
        }
    }

    /// A select box over the rows of another entity kind, filled in by the
    /// handler before rendering.
    pub fn reference(
        name: &'static str,
        label: &'static str,
        value: &str,
        kind: EntityKind,
    ) -> Self {
        Self {
            input_type: "select",
            references: Some(kind),
            ..Self::text(name, label, value, true)
        }
    }

    pub fn is_select(&self) -> bool {
        self.input_type == "select"
    }
}

/// Field-level and form-level error messages.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    fields: BTreeMap<String, Vec<String>>,
    general: Vec<String>,
}

impl FormErrors {
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty() && self.general.is_empty()
    }

    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.fields
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    /// Adds an error that belongs to the form as a whole.
    pub fn add_general(&mut self, message: impl Into<String>) {
        self.general.push(message.into());
    }

    pub fn field(&self, name: &str) -> &[String] {
        self.fields.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn general(&self) -> &[String] {
        &self.general
    }

    /// Adds `other`'s errors for fields that have none yet, so one bad value
    /// is reported once.
    pub fn merge(&mut self, other: FormErrors) {
        for (field, messages) in other.fields {
            self.fields.entry(field).or_insert(messages);
        }
        self.general.extend(other.general);
    }
}

impl From<ValidationErrors> for FormErrors {
    fn from(errors: ValidationErrors) -> Self {
        let mut form_errors = FormErrors::default();
        for (field, field_errors) in errors.field_errors() {
            for error in field_errors {
                let message = error
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("Invalid value ({}).", error.code));
                form_errors.add(&field, message);
            }
        }
        form_errors
    }
}

/// Form bound to one entity kind.
pub trait EntityForm: Default + DeserializeOwned + Validate + Send + Sync + 'static {
    type Entity: Entity;

    /// Pre-populates the form from a stored entity.
    fn from_entity(entity: &Self::Entity) -> Self;

    /// Fields in display order, carrying the current values.
    fn fields(&self) -> Vec<FormField>;

    /// Parses the text fields into typed input.
    ///
    /// # Errors
    ///
    /// Returns per-field messages for values that cannot be parsed.
    fn to_input(&self) -> Result<<Self::Entity as Entity>::Input, FormErrors>;
}

/// Validates a submitted form and converts it into entity input.
///
/// # Errors
///
/// Returns every field error found by validation and parsing.
pub fn bind<F: EntityForm>(form: &F) -> Result<<F::Entity as Entity>::Input, FormErrors> {
    let mut errors = match form.validate() {
        Ok(()) => FormErrors::default(),
        Err(e) => FormErrors::from(e),
    };

    match form.to_input() {
        Ok(input) if errors.is_empty() => Ok(input),
        Ok(_) => Err(errors),
        Err(parse_errors) => {
            errors.merge(parse_errors);
            Err(errors)
        }
    }
}

/// Attaches errors to the fields they belong to.
pub fn fields_with_errors(mut fields: Vec<FormField>, errors: &FormErrors) -> Vec<FormField> {
    for field in &mut fields {
        field.errors = errors.field(field.name).to_vec();
    }
    fields
}

/// Parses a select value holding a row ID.
pub(crate) fn parse_reference(
    errors: &mut FormErrors,
    field: &'static str,
    value: &str,
) -> Option<i64> {
    match value.parse::<i64>() {
        Ok(id) if id > 0 => Some(id),
        _ => {
            errors.add(field, INVALID_CHOICE);
            None
        }
    }
}

/// Deserializes a form value with surrounding whitespace removed.
pub(crate) fn trimmed<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    Ok(value.trim().to_string())
}
