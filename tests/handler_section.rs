mod common;

use axum::http::StatusCode;
use courseinfo::domain::entities::{NewCourse, NewSemester, Period};
use courseinfo::domain::repositories::EntityRepository;

async fn seed_parents(app: &common::TestApp) -> (i64, i64, i64) {
    let semester = app
        .semesters
        .create(NewSemester {
            year: 2025,
            period: Period::Fall,
        })
        .await
        .unwrap();
    let course = app
        .courses
        .create(NewCourse {
            course_number: "IS 439".to_string(),
            course_name: "Web Development".to_string(),
        })
        .await
        .unwrap();
    let instructor = common::seed_instructor(app, "Ann", "Smith").await;

    (semester.id, course.id, instructor.id)
}

#[tokio::test]
async fn test_create_form_offers_parent_choices() {
    let app = common::create_test_app(25);
    let (semester_id, course_id, instructor_id) = seed_parents(&app).await;

    let response = app.server.get("/section/create").await;

    response.assert_status_ok();
    let body = response.text();
    assert!(body.contains(&format!(r#"<option value="{semester_id}">2025 - Fall</option>"#)));
    assert!(body.contains(&format!(
        r#"<option value="{course_id}">IS 439 - Web Development</option>"#
    )));
    assert!(body.contains(&format!(r#"<option value="{instructor_id}">Smith, Ann</option>"#)));
}

#[tokio::test]
async fn test_create_section() {
    let app = common::create_test_app(25);
    let (semester_id, course_id, instructor_id) = seed_parents(&app).await;

    let response = app
        .server
        .post("/section/create")
        .form(&[
            ("section_name", "AL1".to_string()),
            ("semester_id", semester_id.to_string()),
            ("course_id", course_id.to_string()),
            ("instructor_id", instructor_id.to_string()),
        ])
        .await;

    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(common::location(&response), "/section/1");

    let section = app.sections.get(1).unwrap();
    assert_eq!(section.section_name, "AL1");
    assert_eq!(section.instructor_id, instructor_id);
}

#[tokio::test]
async fn test_missing_choice_keeps_selection() {
    let app = common::create_test_app(25);
    let (semester_id, course_id, _) = seed_parents(&app).await;

    let response = app
        .server
        .post("/section/create")
        .form(&[
            ("section_name", "AL1".to_string()),
            ("semester_id", semester_id.to_string()),
            ("course_id", course_id.to_string()),
            ("instructor_id", String::new()),
        ])
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    let body = response.text();
    assert!(body.contains("Select a valid choice."));
    assert!(body.contains(&format!(r#"<option value="{course_id}" selected>"#)));
    assert_eq!(app.sections.len(), 0);
}

#[tokio::test]
async fn test_section_detail_links_to_parents() {
    let app = common::create_test_app(25);
    let (semester_id, course_id, instructor_id) = seed_parents(&app).await;
    app.server
        .post("/section/create")
        .form(&[
            ("section_name", "AL1".to_string()),
            ("semester_id", semester_id.to_string()),
            ("course_id", course_id.to_string()),
            ("instructor_id", instructor_id.to_string()),
        ])
        .await
        .assert_status(StatusCode::SEE_OTHER);

    let body = app.server.get("/section/1").await.text();

    assert!(body.contains(&format!(r#"href="/semester/{semester_id}""#)));
    assert!(body.contains(&format!(r#"href="/course/{course_id}""#)));
    assert!(body.contains(&format!(r#"href="/instructor/{instructor_id}""#)));
    assert!(body.contains("Registrations"));
}

#[tokio::test]
async fn test_section_blocks_deleting_its_parents() {
    let app = common::create_test_app(25);
    let (semester_id, course_id, instructor_id) = seed_parents(&app).await;

    app.server
        .post("/section/create")
        .form(&[
            ("section_name", "AL1".to_string()),
            ("semester_id", semester_id.to_string()),
            ("course_id", course_id.to_string()),
            ("instructor_id", instructor_id.to_string()),
        ])
        .await
        .assert_status(StatusCode::SEE_OTHER);
    let section = app.sections.get(1).unwrap();

    let url = format!("/instructor/{instructor_id}/delete");
    let response = app.server.get(&url).await;
    response.assert_status_ok();
    let body = response.text();
    assert!(body.contains("Cannot delete"));
    assert!(body.contains(r#"href="/section/1""#));
    assert!(body.contains(&section.label));

    let response = app.server.post(&url).await;
    response.assert_status(StatusCode::CONFLICT);
    assert!(app.instructors.get(instructor_id).is_some());

    for parent_url in [
        format!("/course/{course_id}/delete"),
        format!("/semester/{semester_id}/delete"),
    ] {
        app.server
            .post(&parent_url)
            .await
            .assert_status(StatusCode::CONFLICT);
    }

    app.server
        .post("/section/1/delete")
        .await
        .assert_status(StatusCode::SEE_OTHER);

    let response = app.server.post(&url).await;
    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(common::location(&response), "/instructor");
    assert!(app.instructors.get(instructor_id).is_none());
}

#[tokio::test]
async fn test_registration_blocks_deleting_its_section() {
    let app = common::create_test_app(25);
    let (semester_id, course_id, instructor_id) = seed_parents(&app).await;

    app.server
        .post("/section/create")
        .form(&[
            ("section_name", "AL1".to_string()),
            ("semester_id", semester_id.to_string()),
            ("course_id", course_id.to_string()),
            ("instructor_id", instructor_id.to_string()),
        ])
        .await
        .assert_status(StatusCode::SEE_OTHER);
    app.server
        .post("/student/create")
        .form(&[("first_name", "Bo"), ("last_name", "Lee")])
        .await
        .assert_status(StatusCode::SEE_OTHER);
    app.server
        .post("/registration/create")
        .form(&[("student_id", "1"), ("section_id", "1")])
        .await
        .assert_status(StatusCode::SEE_OTHER);

    let response = app.server.get("/section/1/delete").await;
    response.assert_status_ok();
    assert!(response.text().contains(r#"href="/registration/1""#));

    app.server
        .post("/student/1/delete")
        .await
        .assert_status(StatusCode::CONFLICT);

    app.server
        .post("/registration/1/delete")
        .await
        .assert_status(StatusCode::SEE_OTHER);
    app.server
        .post("/section/1/delete")
        .await
        .assert_status(StatusCode::SEE_OTHER);
}
