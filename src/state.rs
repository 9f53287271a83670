use sqlx::PgPool;
use std::sync::Arc;

use crate::application::services::CrudService;
use crate::domain::entities::{Course, Instructor, Registration, Section, Semester, Student};
use crate::infrastructure::persistence::PgEntityRepository;

/// Shared application state: one CRUD service per entity kind.
#[derive(Clone)]
pub struct AppState {
    pub instructors: Arc<CrudService<Instructor>>,
    pub courses: Arc<CrudService<Course>>,
    pub semesters: Arc<CrudService<Semester>>,
    pub sections: Arc<CrudService<Section>>,
    pub students: Arc<CrudService<Student>>,
    pub registrations: Arc<CrudService<Registration>>,
}

impl AppState {
    /// Builds services backed by PostgreSQL repositories sharing `pool`.
    pub fn postgres(pool: Arc<PgPool>, page_size: u32) -> Self {
        Self {
            instructors: Arc::new(CrudService::new(
                Arc::new(PgEntityRepository::new(pool.clone())),
                page_size,
            )),
            courses: Arc::new(CrudService::new(
                Arc::new(PgEntityRepository::new(pool.clone())),
                page_size,
            )),
            semesters: Arc::new(CrudService::new(
                Arc::new(PgEntityRepository::new(pool.clone())),
                page_size,
            )),
            sections: Arc::new(CrudService::new(
                Arc::new(PgEntityRepository::new(pool.clone())),
                page_size,
            )),
            students: Arc::new(CrudService::new(
                Arc::new(PgEntityRepository::new(pool.clone())),
                page_size,
            )),
            registrations: Arc::new(CrudService::new(
                Arc::new(PgEntityRepository::new(pool)),
                page_size,
            )),
        }
    }
}
