//! The composition root.
//!
//! [`Registrar`] constructs and owns the two stores and the registration
//! index for the lifetime of the process, and exposes one typed method
//! per operation. Text inputs are validated here before they reach the
//! stores.

use std::sync::Arc;

use enrollment_core::{Course, CourseId, Registration, Student, StudentId};
use enrollment_registration::RegistrationIndex;
use enrollment_storage::{CourseStore, StudentStore};
use tracing::info;

use crate::config::{ConfigError, RegistrarConfig};
use crate::{validate, Result};

/// Owns every store; cheap to share behind an `Arc`
///
/// # Example
///
/// ```
/// use enrollment_executor::Registrar;
///
/// let registrar = Registrar::new();
/// let ann = registrar.register_student("Ann", "ann@x.com")?;
/// let cs = registrar.add_course("CS101", "Intro to CS", "Dr. Smith")?;
/// registrar.register_for_course(ann.id, cs.id)?;
/// assert_eq!(registrar.get_registered_courses(ann.id)?, vec![cs]);
/// # Ok::<(), enrollment_executor::Error>(())
/// ```
#[derive(Debug)]
pub struct Registrar {
    students: Arc<StudentStore>,
    courses: Arc<CourseStore>,
    registrations: RegistrationIndex,
}

impl Registrar {
    /// Create a registrar with empty stores
    pub fn new() -> Self {
        let students = Arc::new(StudentStore::new());
        let courses = Arc::new(CourseStore::new());
        let registrations = RegistrationIndex::new(students.clone(), courses.clone());
        Self {
            students,
            courses,
            registrations,
        }
    }

    /// Create a registrar and apply the config's seed records
    ///
    /// Students are created first, then courses, each in file order.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Seed`] naming the first refused entry.
    pub fn from_config(config: &RegistrarConfig) -> std::result::Result<Self, ConfigError> {
        let registrar = Self::new();

        for (i, seed) in config.students.iter().enumerate() {
            registrar
                .register_student(&seed.name, &seed.email)
                .map_err(|source| ConfigError::Seed {
                    entry: format!("students[{}]", i),
                    source,
                })?;
        }
        for (i, seed) in config.courses.iter().enumerate() {
            registrar
                .add_course(&seed.code, &seed.title, &seed.instructor)
                .map_err(|source| ConfigError::Seed {
                    entry: format!("courses[{}]", i),
                    source,
                })?;
        }

        info!(
            students = config.students.len(),
            courses = config.courses.len(),
            "registrar seeded"
        );
        Ok(registrar)
    }

    // =========================================================================
    // Students
    // =========================================================================

    /// Register a new student
    pub fn register_student(&self, name: &str, email: &str) -> Result<Student> {
        let (name, email) = validate::student(name, email)?;
        Ok(self.students.register_student(name, email)?)
    }

    /// Fetch a student, `None` if the identity was never assigned
    pub fn get_student_by_id(&self, id: StudentId) -> Option<Student> {
        self.students.get_student_by_id(id)
    }

    /// All students in ascending identity order
    pub fn list_all_students(&self) -> Vec<Student> {
        self.students.list_all_students()
    }

    // =========================================================================
    // Courses
    // =========================================================================

    /// Add a new course
    pub fn add_course(&self, code: &str, title: &str, instructor: &str) -> Result<Course> {
        let (code, title, instructor) = validate::course(code, title, instructor)?;
        Ok(self.courses.add_course(code, title, instructor)?)
    }

    /// Fetch a course, `None` if the identity was never assigned
    pub fn get_course_by_id(&self, id: CourseId) -> Option<Course> {
        self.courses.get_course_by_id(id)
    }

    /// Every course created so far
    pub fn list_all_courses(&self) -> Vec<Course> {
        self.courses.list_all_courses()
    }

    // =========================================================================
    // Registrations
    // =========================================================================

    /// Register a student for a course
    pub fn register_for_course(
        &self,
        student_id: StudentId,
        course_id: CourseId,
    ) -> Result<Registration> {
        Ok(self
            .registrations
            .register_for_course(student_id, course_id)?)
    }

    /// Drop an active registration
    pub fn drop_course(&self, student_id: StudentId, course_id: CourseId) -> Result<()> {
        Ok(self.registrations.drop_course(student_id, course_id)?)
    }

    /// Courses a student is registered for
    pub fn get_registered_courses(&self, student_id: StudentId) -> Result<Vec<Course>> {
        Ok(self.registrations.get_registered_courses(student_id)?)
    }

    /// Students registered for a course
    pub fn get_course_roster(&self, course_id: CourseId) -> Result<Vec<Student>> {
        Ok(self.registrations.get_course_roster(course_id)?)
    }

    // =========================================================================
    // Component access
    // =========================================================================

    /// The student store
    pub fn students(&self) -> &StudentStore {
        &self.students
    }

    /// The course store
    pub fn courses(&self) -> &CourseStore {
        &self.courses
    }

    /// The registration index
    pub fn registrations(&self) -> &RegistrationIndex {
        &self.registrations
    }
}

impl Default for Registrar {
    fn default() -> Self {
        Self::new()
    }
}
