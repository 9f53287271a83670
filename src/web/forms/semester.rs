use serde::Deserialize;
use validator::Validate;

use super::{Choice, EntityForm, FormErrors, FormField, INVALID_CHOICE, trimmed};
use crate::domain::entities::semester::YEAR_RANGE;
use crate::domain::entities::{NewSemester, Period, Semester};

/// Create/update form for a semester.
///
/// Both fields are parsed in [`EntityForm::to_input`]: the year must be a whole
/// number within [`YEAR_RANGE`] and the period one of [`Period::ALL`].
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct SemesterForm {
    #[serde(default, deserialize_with = "trimmed")]
    pub year: String,

    #[serde(default, deserialize_with = "trimmed")]
    pub period: String,
}

impl EntityForm for SemesterForm {
    type Entity = Semester;

    fn from_entity(entity: &Semester) -> Self {
        Self {
            year: entity.year.to_string(),
            period: entity.period.as_str().to_string(),
        }
    }

    fn fields(&self) -> Vec<FormField> {
        let periods = Period::ALL
            .into_iter()
            .map(|p| Choice::new(p, p.as_str()))
            .collect();

        vec![
            FormField::number("year", "Year", &self.year),
            FormField::select("period", "Period", &self.period, periods),
        ]
    }

    fn to_input(&self) -> Result<NewSemester, FormErrors> {
        let mut errors = FormErrors::default();

        let year = match self.year.parse::<i32>() {
            Ok(year) if YEAR_RANGE.contains(&year) => Some(year),
            Ok(_) => {
                errors.add(
                    "year",
                    format!(
                        "Enter a year between {} and {}.",
                        YEAR_RANGE.start(),
                        YEAR_RANGE.end()
                    ),
                );
                None
            }
            Err(_) if self.year.is_empty() => {
                errors.add("year", "This field is required.");
                None
            }
            Err(_) => {
                errors.add("year", "Enter a whole number.");
                None
            }
        };

        let period = match self.period.parse::<Period>() {
            Ok(period) => Some(period),
            Err(_) => {
                errors.add("period", INVALID_CHOICE);
                None
            }
        };

        match (year, period) {
            (Some(year), Some(period)) => Ok(NewSemester { year, period }),
            _ => Err(errors),
        }
    }
}
