#![allow(dead_code)]

use async_trait::async_trait;
use axum_test::TestServer;
use chrono::{DateTime, Utc};
use serde_json::json;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, Mutex, OnceLock};

use courseinfo::application::services::CrudService;
use courseinfo::domain::deletion_guard::{ChildRecord, DeleteOutcome};
use courseinfo::domain::entities::{
    Course, Entity, Instructor, NewCourse, NewInstructor, NewRegistration, NewSection,
    NewSemester, NewStudent, Registration, Section, Semester, Student,
};
use courseinfo::domain::repositories::EntityRepository;
use courseinfo::error::AppError;
use courseinfo::state::AppState;

/// Builds an entity from its input: `(id, input, created_at, updated_at)`.
pub type Builder<E> = fn(i64, &<E as Entity>::Input, DateTime<Utc>, DateTime<Utc>) -> E;

/// In-memory repository for handler tests.
///
/// Finds the child records of a parent row.
pub type ChildFinder = Box<dyn Fn(i64) -> Vec<ChildRecord> + Send + Sync>;

/// Reads the parent ID a child row holds in `foreign_key`.
pub type ParentOf<C> = fn(&C, &str) -> Option<i64>;

/// In-memory repository for handler tests.
///
/// Rows are ordered by label, labels are unique (a duplicate is a conflict,
/// like the unique constraints in PostgreSQL), and children are read from the
/// child kind's repository, wired up by [`link_children`].
pub struct MemoryRepository<E: Entity> {
    rows: Mutex<BTreeMap<i64, E>>,
    children: OnceLock<ChildFinder>,
    next_id: AtomicI64,
    build: Builder<E>,
}

impl<E: Entity> MemoryRepository<E> {
    pub fn new(build: Builder<E>) -> Self {
        Self {
            rows: Mutex::new(BTreeMap::new()),
            children: OnceLock::new(),
            next_id: AtomicI64::new(1),
            build,
        }
    }

    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }

    pub fn get(&self, id: i64) -> Option<E> {
        self.rows.lock().unwrap().get(&id).cloned()
    }

    fn sorted(&self) -> Vec<E> {
        let mut rows: Vec<E> = self.rows.lock().unwrap().values().cloned().collect();
        rows.sort_by(|a, b| a.label().cmp(b.label()).then(a.id().cmp(&b.id())));
        rows
    }

    fn ensure_unique(&self, candidate: &E) -> Result<(), AppError> {
        let rows = self.rows.lock().unwrap();
        let duplicate = rows
            .values()
            .any(|e| e.id() != candidate.id() && e.label() == candidate.label());

        if duplicate {
            return Err(AppError::conflict(
                "A record with these values already exists",
                json!({ "label": candidate.label() }),
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl<E: Entity> EntityRepository<E> for MemoryRepository<E> {
    async fn find_by_id(&self, id: i64) -> Result<Option<E>, AppError> {
        Ok(self.get(id))
    }

    async fn list_all(&self) -> Result<Vec<E>, AppError> {
        Ok(self.sorted())
    }

    async fn list_page(&self, offset: u64, limit: u64) -> Result<Vec<E>, AppError> {
        Ok(self
            .sorted()
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .collect())
    }

    async fn count(&self) -> Result<u64, AppError> {
        Ok(self.len() as u64)
    }

    async fn children(&self, parent_id: i64) -> Result<Vec<ChildRecord>, AppError> {
        Ok(self
            .children
            .get()
            .map(|find| find(parent_id))
            .unwrap_or_default())
    }

    async fn create(&self, input: E::Input) -> Result<E, AppError> {
        let now = Utc::now();
        let id = self.next_id.load(Ordering::SeqCst);
        let entity = (self.build)(id, &input, now, now);

        self.ensure_unique(&entity)?;
        self.next_id.fetch_add(1, Ordering::SeqCst);
        self.rows.lock().unwrap().insert(id, entity.clone());
        Ok(entity)
    }

    async fn update(&self, id: i64, input: E::Input) -> Result<E, AppError> {
        let existing = self
            .get(id)
            .ok_or_else(|| AppError::not_found("not found", json!({ "id": id })))?;
        let entity = (self.build)(id, &input, existing.created_at(), Utc::now());

        self.ensure_unique(&entity)?;
        self.rows.lock().unwrap().insert(id, entity.clone());
        Ok(entity)
    }

    async fn delete_if_childless(&self, id: i64) -> Result<DeleteOutcome, AppError> {
        if self.get(id).is_none() {
            return Err(AppError::not_found("not found", json!({ "id": id })));
        }

        let children = self.children(id).await?;
        if !children.is_empty() {
            return Ok(DeleteOutcome::Blocked(children));
        }

        self.rows.lock().unwrap().remove(&id);
        Ok(DeleteOutcome::Deleted)
    }
}

/// Makes `children` rows block deletion of `parent` rows, following the
/// parent kind's child relation the way the foreign keys do in PostgreSQL.
pub fn link_children<P: Entity, C: Entity>(
    parent: &MemoryRepository<P>,
    children: &Arc<MemoryRepository<C>>,
    parent_of: ParentOf<C>,
) {
    let relation = P::KIND
        .child_relation()
        .expect("parent kind has a child relation");
    assert_eq!(relation.child, C::KIND);

    let children = Arc::clone(children);
    let finder: ChildFinder = Box::new(move |parent_id| {
        children
            .sorted()
            .into_iter()
            .filter(|child| parent_of(child, relation.foreign_key) == Some(parent_id))
            .map(|child| ChildRecord::new(C::KIND, child.id(), child.label()))
            .collect()
    });

    assert!(parent.children.set(finder).is_ok(), "children already linked");
}

fn section_parent(section: &Section, foreign_key: &str) -> Option<i64> {
    match foreign_key {
        "instructor_id" => Some(section.instructor_id),
        "course_id" => Some(section.course_id),
        "semester_id" => Some(section.semester_id),
        _ => None,
    }
}

fn registration_parent(registration: &Registration, foreign_key: &str) -> Option<i64> {
    match foreign_key {
        "section_id" => Some(registration.section_id),
        "student_id" => Some(registration.student_id),
        _ => None,
    }
}

fn build_instructor(
    id: i64,
    input: &NewInstructor,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
) -> Instructor {
    Instructor {
        id,
        first_name: input.first_name.clone(),
        last_name: input.last_name.clone(),
        disambiguator: input.disambiguator.clone(),
        label: input.label(),
        created_at,
        updated_at,
    }
}

fn build_course(
    id: i64,
    input: &NewCourse,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
) -> Course {
    Course {
        id,
        course_number: input.course_number.clone(),
        course_name: input.course_name.clone(),
        label: input.label(),
        created_at,
        updated_at,
    }
}

fn build_semester(
    id: i64,
    input: &NewSemester,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
) -> Semester {
    Semester {
        id,
        year: input.year,
        period: input.period,
        label: input.label(),
        created_at,
        updated_at,
    }
}

fn build_section(
    id: i64,
    input: &NewSection,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
) -> Section {
    Section {
        id,
        section_name: input.section_name.clone(),
        semester_id: input.semester_id,
        course_id: input.course_id,
        instructor_id: input.instructor_id,
        semester_label: format!("semester #{}", input.semester_id),
        course_label: format!("course #{}", input.course_id),
        instructor_label: format!("instructor #{}", input.instructor_id),
        label: format!(
            "course #{} - {} (semester #{})",
            input.course_id, input.section_name, input.semester_id
        ),
        created_at,
        updated_at,
    }
}

fn build_student(
    id: i64,
    input: &NewStudent,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
) -> Student {
    Student {
        id,
        first_name: input.first_name.clone(),
        last_name: input.last_name.clone(),
        nickname: input.nickname.clone(),
        disambiguator: input.disambiguator.clone(),
        label: input.label(),
        created_at,
        updated_at,
    }
}

fn build_registration(
    id: i64,
    input: &NewRegistration,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
) -> Registration {
    Registration {
        id,
        student_id: input.student_id,
        section_id: input.section_id,
        student_label: format!("student #{}", input.student_id),
        section_label: format!("section #{}", input.section_id),
        label: format!("student #{} / section #{}", input.student_id, input.section_id),
        created_at,
        updated_at,
    }
}

/// Router over in-memory repositories, with handles to seed and inspect them.
pub struct TestApp {
    pub server: TestServer,
    pub state: AppState,
    pub instructors: Arc<MemoryRepository<Instructor>>,
    pub courses: Arc<MemoryRepository<Course>>,
    pub semesters: Arc<MemoryRepository<Semester>>,
    pub sections: Arc<MemoryRepository<Section>>,
    pub students: Arc<MemoryRepository<Student>>,
    pub registrations: Arc<MemoryRepository<Registration>>,
}

pub fn create_test_app(page_size: u32) -> TestApp {
    let instructors = Arc::new(MemoryRepository::new(build_instructor as Builder<Instructor>));
    let courses = Arc::new(MemoryRepository::new(build_course as Builder<Course>));
    let semesters = Arc::new(MemoryRepository::new(build_semester as Builder<Semester>));
    let sections = Arc::new(MemoryRepository::new(build_section as Builder<Section>));
    let students = Arc::new(MemoryRepository::new(build_student as Builder<Student>));
    let registrations = Arc::new(MemoryRepository::new(
        build_registration as Builder<Registration>,
    ));

    link_children(&instructors, &sections, section_parent);
    link_children(&courses, &sections, section_parent);
    link_children(&semesters, &sections, section_parent);
    link_children(&sections, &registrations, registration_parent);
    link_children(&students, &registrations, registration_parent);

    let state = AppState {
        instructors: Arc::new(CrudService::<Instructor>::new(instructors.clone(), page_size)),
        courses: Arc::new(CrudService::<Course>::new(courses.clone(), page_size)),
        semesters: Arc::new(CrudService::<Semester>::new(semesters.clone(), page_size)),
        sections: Arc::new(CrudService::<Section>::new(sections.clone(), page_size)),
        students: Arc::new(CrudService::<Student>::new(students.clone(), page_size)),
        registrations: Arc::new(CrudService::<Registration>::new(registrations.clone(), page_size)),
    };

    let server = TestServer::new(courseinfo::routes::router(state.clone())).unwrap();

    TestApp {
        server,
        state,
        instructors,
        courses,
        semesters,
        sections,
        students,
        registrations,
    }
}

pub fn new_instructor(first_name: &str, last_name: &str) -> NewInstructor {
    NewInstructor {
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        disambiguator: String::new(),
    }
}

pub async fn seed_instructor(app: &TestApp, first_name: &str, last_name: &str) -> Instructor {
    app.instructors
        .create(new_instructor(first_name, last_name))
        .await
        .unwrap()
}

/// Extracts the `Location` header of a redirect.
pub fn location(response: &axum_test::TestResponse) -> String {
    response
        .header("location")
        .to_str()
        .unwrap()
        .to_string()
}
