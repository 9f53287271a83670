//! Domain entity representing a semester.

use chrono::{DateTime, Utc};
use sqlx::postgres::PgRow;
use sqlx::{FromRow, Row};
use std::fmt;
use std::str::FromStr;

use super::{Cell, Entity};
use crate::domain::kind::EntityKind;

/// Earliest and latest accepted semester years.
pub const YEAR_RANGE: std::ops::RangeInclusive<i32> = 1900..=2100;

/// Academic period within a year, in calendar order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Period {
    Spring,
    Summer,
    Fall,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("unknown period '{0}'")]
pub struct UnknownPeriod(pub String);

impl Period {
    pub const ALL: [Period; 3] = [Period::Spring, Period::Summer, Period::Fall];

    pub fn as_str(self) -> &'static str {
        match self {
            Period::Spring => "Spring",
            Period::Summer => "Summer",
            Period::Fall => "Fall",
        }
    }
}

impl FromStr for Period {
    type Err = UnknownPeriod;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Period::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownPeriod(s.to_string()))
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A year/period pair in which sections are scheduled.
#[derive(Debug, Clone, PartialEq)]
pub struct Semester {
    pub id: i64,
    pub year: i32,
    pub period: Period,
    pub label: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Field values for creating or updating a semester.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSemester {
    pub year: i32,
    pub period: Period,
}

impl NewSemester {
    pub fn label(&self) -> String {
        format!("{} - {}", self.year, self.period)
    }
}

// `period` is stored as TEXT guarded by a CHECK constraint.
impl<'r> FromRow<'r, PgRow> for Semester {
    fn from_row(row: &'r PgRow) -> Result<Self, sqlx::Error> {
        let period: String = row.try_get("period")?;
        let period = period.parse().map_err(|e| sqlx::Error::ColumnDecode {
            index: "period".to_string(),
            source: Box::new(e),
        })?;

        Ok(Self {
            id: row.try_get("id")?,
            year: row.try_get("year")?,
            period,
            label: row.try_get("label")?,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
        })
    }
}

impl Entity for Semester {
    type Input = NewSemester;

    const KIND: EntityKind = EntityKind::Semester;
    const HEADINGS: &'static [&'static str] = &["Year", "Period"];

    fn id(&self) -> i64 {
        self.id
    }

    fn label(&self) -> &str {
        &self.label
    }

    fn cells(&self) -> Vec<Cell> {
        vec![
            Cell::link(self.year, self.detail_path()),
            Cell::text(self.period),
        ]
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}
