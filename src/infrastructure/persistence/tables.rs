//! Table mappings for each entity kind.
//!
//! Every `SELECT` aliases the entity table as `t` and joins its label view as
//! `l`, so the generic repository can append `WHERE t.id = $1` or an
//! `ORDER BY`/`LIMIT` clause to any of them.

use sqlx::postgres::{PgArguments, PgRow};
use sqlx::query::Query;
use sqlx::{FromRow, Postgres};

use crate::domain::entities::{
    Course, Entity, Instructor, NewCourse, NewInstructor, NewRegistration, NewSection,
    NewSemester, NewStudent, Registration, Section, Semester, Student,
};
use crate::domain::kind::EntityKind;

pub type PgQuery<'q> = Query<'q, Postgres, PgArguments>;

/// SQL needed to store one entity kind.
pub trait PgEntity: Entity + for<'r> FromRow<'r, PgRow> {
    const SELECT: &'static str;
    const ORDER_BY: &'static str;
    /// Inserts the input bound as `$1..` and returns `id`.
    const INSERT: &'static str;
    /// Updates row `$1` with the input bound as `$2..`.
    const UPDATE: &'static str;

    /// Binds the input fields in the order `INSERT` and `UPDATE` expect.
    fn bind_input<'q>(query: PgQuery<'q>, input: &Self::Input) -> PgQuery<'q>;
}

pub fn table_name(kind: EntityKind) -> &'static str {
    match kind {
        EntityKind::Instructor => "instructors",
        EntityKind::Course => "courses",
        EntityKind::Semester => "semesters",
        EntityKind::Section => "sections",
        EntityKind::Student => "students",
        EntityKind::Registration => "registrations",
    }
}

/// View exposing `(id, label)` for every row of the kind's table.
pub fn label_view(kind: EntityKind) -> &'static str {
    match kind {
        EntityKind::Instructor => "instructor_labels",
        EntityKind::Course => "course_labels",
        EntityKind::Semester => "semester_labels",
        EntityKind::Section => "section_labels",
        EntityKind::Student => "student_labels",
        EntityKind::Registration => "registration_labels",
    }
}

impl PgEntity for Instructor {
    const SELECT: &'static str = r#"
        SELECT t.id, t.first_name, t.last_name, t.disambiguator, l.label,
               t.created_at, t.updated_at
        FROM instructors t
        JOIN instructor_labels l ON l.id = t.id
    "#;
    const ORDER_BY: &'static str = "t.last_name, t.first_name, t.disambiguator, t.id";
    const INSERT: &'static str = r#"
        INSERT INTO instructors (first_name, last_name, disambiguator)
        VALUES ($1, $2, $3)
        RETURNING id
    "#;
    const UPDATE: &'static str = r#"
        UPDATE instructors SET
            first_name    = $2,
            last_name     = $3,
            disambiguator = $4,
            updated_at    = NOW()
        WHERE id = $1
    "#;

    fn bind_input<'q>(query: PgQuery<'q>, input: &NewInstructor) -> PgQuery<'q> {
        query
            .bind(input.first_name.clone())
            .bind(input.last_name.clone())
            .bind(input.disambiguator.clone())
    }
}

impl PgEntity for Course {
    const SELECT: &'static str = r#"
        SELECT t.id, t.course_number, t.course_name, l.label,
               t.created_at, t.updated_at
        FROM courses t
        JOIN course_labels l ON l.id = t.id
    "#;
    const ORDER_BY: &'static str = "t.course_number, t.course_name, t.id";
    const INSERT: &'static str = r#"
        INSERT INTO courses (course_number, course_name)
        VALUES ($1, $2)
        RETURNING id
    "#;
    const UPDATE: &'static str = r#"
        UPDATE courses SET
            course_number = $2,
            course_name   = $3,
            updated_at    = NOW()
        WHERE id = $1
    "#;

    fn bind_input<'q>(query: PgQuery<'q>, input: &NewCourse) -> PgQuery<'q> {
        query
            .bind(input.course_number.clone())
            .bind(input.course_name.clone())
    }
}

impl PgEntity for Semester {
    const SELECT: &'static str = r#"
        SELECT t.id, t.year, t.period, l.label, t.created_at, t.updated_at
        FROM semesters t
        JOIN semester_labels l ON l.id = t.id
    "#;
    const ORDER_BY: &'static str = "t.year, t.period_sequence, t.id";
    const INSERT: &'static str = r#"
        INSERT INTO semesters (year, period)
        VALUES ($1, $2)
        RETURNING id
    "#;
    const UPDATE: &'static str = r#"
        UPDATE semesters SET
            year       = $2,
            period     = $3,
            updated_at = NOW()
        WHERE id = $1
    "#;

    fn bind_input<'q>(query: PgQuery<'q>, input: &NewSemester) -> PgQuery<'q> {
        query.bind(input.year).bind(input.period.as_str())
    }
}

impl PgEntity for Section {
    const SELECT: &'static str = r#"
        SELECT t.id, t.section_name, t.semester_id, t.course_id, t.instructor_id,
               sml.label AS semester_label,
               cl.label  AS course_label,
               il.label  AS instructor_label,
               l.label, t.created_at, t.updated_at
        FROM sections t
        JOIN section_labels l     ON l.id = t.id
        JOIN semesters sm         ON sm.id = t.semester_id
        JOIN semester_labels sml  ON sml.id = t.semester_id
        JOIN course_labels cl     ON cl.id = t.course_id
        JOIN instructor_labels il ON il.id = t.instructor_id
    "#;
    const ORDER_BY: &'static str = "cl.label, t.section_name, sm.year, sm.period_sequence, t.id";
    const INSERT: &'static str = r#"
        INSERT INTO sections (section_name, semester_id, course_id, instructor_id)
        VALUES ($1, $2, $3, $4)
        RETURNING id
    "#;
    const UPDATE: &'static str = r#"
        UPDATE sections SET
            section_name  = $2,
            semester_id   = $3,
            course_id     = $4,
            instructor_id = $5,
            updated_at    = NOW()
        WHERE id = $1
    "#;

    fn bind_input<'q>(query: PgQuery<'q>, input: &NewSection) -> PgQuery<'q> {
        query
            .bind(input.section_name.clone())
            .bind(input.semester_id)
            .bind(input.course_id)
            .bind(input.instructor_id)
    }
}

impl PgEntity for Student {
    const SELECT: &'static str = r#"
        SELECT t.id, t.first_name, t.last_name, t.nickname, t.disambiguator, l.label,
               t.created_at, t.updated_at
        FROM students t
        JOIN student_labels l ON l.id = t.id
    "#;
    const ORDER_BY: &'static str =
        "t.last_name, t.first_name, t.nickname, t.disambiguator, t.id";
    const INSERT: &'static str = r#"
        INSERT INTO students (first_name, last_name, nickname, disambiguator)
        VALUES ($1, $2, $3, $4)
        RETURNING id
    "#;
    const UPDATE: &'static str = r#"
        UPDATE students SET
            first_name    = $2,
            last_name     = $3,
            nickname      = $4,
            disambiguator = $5,
            updated_at    = NOW()
        WHERE id = $1
    "#;

    fn bind_input<'q>(query: PgQuery<'q>, input: &NewStudent) -> PgQuery<'q> {
        query
            .bind(input.first_name.clone())
            .bind(input.last_name.clone())
            .bind(input.nickname.clone())
            .bind(input.disambiguator.clone())
    }
}

impl PgEntity for Registration {
    const SELECT: &'static str = r#"
        SELECT t.id, t.student_id, t.section_id,
               stl.label AS student_label,
               scl.label AS section_label,
               l.label, t.created_at, t.updated_at
        FROM registrations t
        JOIN registration_labels l ON l.id = t.id
        JOIN student_labels stl    ON stl.id = t.student_id
        JOIN section_labels scl    ON scl.id = t.section_id
    "#;
    const ORDER_BY: &'static str = "scl.label, stl.label, t.id";
    const INSERT: &'static str = r#"
        INSERT INTO registrations (student_id, section_id)
        VALUES ($1, $2)
        RETURNING id
    "#;
    const UPDATE: &'static str = r#"
        UPDATE registrations SET
            student_id = $2,
            section_id = $3,
            updated_at = NOW()
        WHERE id = $1
    "#;

    fn bind_input<'q>(query: PgQuery<'q>, input: &NewRegistration) -> PgQuery<'q> {
        query.bind(input.student_id).bind(input.section_id)
    }
}
