//! Read-only lookup traits
//!
//! The registration index validates identities through these traits
//! instead of holding the concrete stores, so it can query but never
//! mutate student or course records.
//!
//! Thread safety: implementations are shared across request handlers,
//! so all methods must be safe to call concurrently (Send + Sync).

use crate::types::{Course, CourseId, Student, StudentId};

/// Read-only view of the student records
pub trait StudentLookup: Send + Sync {
    /// Fetch a student by identity, `None` if it was never created
    fn get_student(&self, id: StudentId) -> Option<Student>;

    /// Whether a student with this identity exists
    fn student_exists(&self, id: StudentId) -> bool {
        self.get_student(id).is_some()
    }
}

/// Read-only view of the course records
pub trait CourseLookup: Send + Sync {
    /// Fetch a course by identity, `None` if it was never created
    fn get_course(&self, id: CourseId) -> Option<Course>;

    /// Whether a course with this identity exists
    fn course_exists(&self, id: CourseId) -> bool {
        self.get_course(id).is_some()
    }
}
