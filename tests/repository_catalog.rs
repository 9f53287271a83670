//! PostgreSQL repository tests. `#[sqlx::test]` creates a fresh database
//! per test from `DATABASE_URL` and applies `migrations/`.

use sqlx::PgPool;
use std::sync::Arc;

use courseinfo::domain::deletion_guard::DeleteOutcome;
use courseinfo::domain::entities::{
    Course, Instructor, NewCourse, NewInstructor, NewRegistration, NewSection, NewSemester,
    NewStudent, Period, Registration, Section, Semester, Student,
};
use courseinfo::domain::kind::EntityKind;
use courseinfo::domain::repositories::EntityRepository;
use courseinfo::error::AppError;
use courseinfo::infrastructure::persistence::PgEntityRepository;

struct Repos {
    instructors: PgEntityRepository<Instructor>,
    courses: PgEntityRepository<Course>,
    semesters: PgEntityRepository<Semester>,
    sections: PgEntityRepository<Section>,
    students: PgEntityRepository<Student>,
    registrations: PgEntityRepository<Registration>,
}

fn repos(pool: PgPool) -> Repos {
    let pool = Arc::new(pool);
    Repos {
        instructors: PgEntityRepository::new(pool.clone()),
        courses: PgEntityRepository::new(pool.clone()),
        semesters: PgEntityRepository::new(pool.clone()),
        sections: PgEntityRepository::new(pool.clone()),
        students: PgEntityRepository::new(pool.clone()),
        registrations: PgEntityRepository::new(pool),
    }
}

fn instructor(first_name: &str, last_name: &str, disambiguator: &str) -> NewInstructor {
    NewInstructor {
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        disambiguator: disambiguator.to_string(),
    }
}

/// Creates a semester, course and instructor and a section referencing them.
async fn seed_section(repos: &Repos) -> (Instructor, Section) {
    let semester = repos
        .semesters
        .create(NewSemester {
            year: 2025,
            period: Period::Fall,
        })
        .await
        .unwrap();
    let course = repos
        .courses
        .create(NewCourse {
            course_number: "IS 439".to_string(),
            course_name: "Web Development".to_string(),
        })
        .await
        .unwrap();
    let instructor = repos
        .instructors
        .create(instructor("Ann", "Smith", ""))
        .await
        .unwrap();

    let section = repos
        .sections
        .create(NewSection {
            section_name: "AL1".to_string(),
            semester_id: semester.id,
            course_id: course.id,
            instructor_id: instructor.id,
        })
        .await
        .unwrap();

    (instructor, section)
}

#[sqlx::test]
async fn test_labels_come_from_views(pool: PgPool) {
    let repos = repos(pool);

    let plain = repos
        .instructors
        .create(instructor("Ann", "Smith", ""))
        .await
        .unwrap();
    let disambiguated = repos
        .instructors
        .create(instructor("Ann", "Smith", "Harvard"))
        .await
        .unwrap();
    let (_, section) = seed_section(&repos).await;

    assert_eq!(plain.label, "Smith, Ann");
    assert_eq!(disambiguated.label, "Smith, Ann (Harvard)");
    assert_eq!(section.label, "IS 439 - AL1 (2025 - Fall)");
    assert_eq!(section.course_label, "IS 439 - Web Development");
    assert_eq!(section.semester_label, "2025 - Fall");
}

#[sqlx::test]
async fn test_duplicate_is_conflict(pool: PgPool) {
    let repos = repos(pool);
    repos
        .instructors
        .create(instructor("Ann", "Smith", ""))
        .await
        .unwrap();

    let result = repos
        .instructors
        .create(instructor("Ann", "Smith", ""))
        .await;

    assert!(matches!(result, Err(AppError::Conflict { .. })));
}

#[sqlx::test]
async fn test_dangling_reference_is_conflict(pool: PgPool) {
    let repos = repos(pool);

    let result = repos
        .registrations
        .create(NewRegistration {
            student_id: 404,
            section_id: 404,
        })
        .await;

    assert!(matches!(result, Err(AppError::Conflict { .. })));
}

#[sqlx::test]
async fn test_semesters_ordered_by_period_within_year(pool: PgPool) {
    let repos = repos(pool);
    for (year, period) in [
        (2025, Period::Fall),
        (2025, Period::Spring),
        (2024, Period::Summer),
        (2025, Period::Summer),
    ] {
        repos
            .semesters
            .create(NewSemester { year, period })
            .await
            .unwrap();
    }

    let labels: Vec<String> = repos
        .semesters
        .list_all()
        .await
        .unwrap()
        .into_iter()
        .map(|s| s.label)
        .collect();

    assert_eq!(
        labels,
        [
            "2024 - Summer",
            "2025 - Spring",
            "2025 - Summer",
            "2025 - Fall"
        ]
    );
}

#[sqlx::test]
async fn test_list_page_and_count(pool: PgPool) {
    let repos = repos(pool);
    for i in 0..7 {
        repos
            .students
            .create(NewStudent {
                first_name: "Sam".to_string(),
                last_name: format!("Student{i}"),
                nickname: String::new(),
                disambiguator: String::new(),
            })
            .await
            .unwrap();
    }

    assert_eq!(repos.students.count().await.unwrap(), 7);

    let page = repos.students.list_page(5, 5).await.unwrap();
    let names: Vec<_> = page.iter().map(|s| s.last_name.as_str()).collect();
    assert_eq!(names, ["Student5", "Student6"]);
}

#[sqlx::test]
async fn test_guarded_delete(pool: PgPool) {
    let repos = repos(pool);
    let (instructor, section) = seed_section(&repos).await;

    let children = repos.instructors.children(instructor.id).await.unwrap();
    assert_eq!(children.len(), 1);
    assert_eq!(children[0].kind, EntityKind::Section);
    assert_eq!(children[0].id, section.id);
    assert_eq!(children[0].label, "IS 439 - AL1 (2025 - Fall)");

    match repos
        .instructors
        .delete_if_childless(instructor.id)
        .await
        .unwrap()
    {
        DeleteOutcome::Blocked(blocking) => assert_eq!(blocking, children),
        other => panic!("expected Blocked, got {other:?}"),
    }

    assert_eq!(
        repos.sections.delete_if_childless(section.id).await.unwrap(),
        DeleteOutcome::Deleted
    );
    assert_eq!(
        repos
            .instructors
            .delete_if_childless(instructor.id)
            .await
            .unwrap(),
        DeleteOutcome::Deleted
    );
    assert!(matches!(
        repos.instructors.delete_if_childless(instructor.id).await,
        Err(AppError::NotFound { .. })
    ));
    assert!(
        repos
            .instructors
            .find_by_id(instructor.id)
            .await
            .unwrap()
            .is_none()
    );
}

#[sqlx::test]
async fn test_update_keeps_created_at(pool: PgPool) {
    let repos = repos(pool);
    let created = repos
        .courses
        .create(NewCourse {
            course_number: "CS 101".to_string(),
            course_name: "Intro".to_string(),
        })
        .await
        .unwrap();

    let updated = repos
        .courses
        .update(
            created.id,
            NewCourse {
                course_number: "CS 101".to_string(),
                course_name: "Introduction to Computing".to_string(),
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.created_at, created.created_at);
    assert_eq!(updated.label, "CS 101 - Introduction to Computing");

    let missing = repos
        .courses
        .update(
            9999,
            NewCourse {
                course_number: "X".to_string(),
                course_name: "Y".to_string(),
            },
        )
        .await;
    assert!(matches!(missing, Err(AppError::NotFound { .. })));
}
