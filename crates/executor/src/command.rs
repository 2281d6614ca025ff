//! Command enum defining all registrar operations.
//!
//! Commands are:
//! - **Self-contained**: All parameters needed for execution are in the variant
//! - **Serializable**: Can be converted to/from JSON by any request layer
//! - **Pure data**: No closures or executable code

use enrollment_core::{CourseId, StudentId};
use serde::{Deserialize, Serialize};

/// A command is a self-contained, serializable operation.
///
/// | Category | Count | Description |
/// |----------|-------|-------------|
/// | Student | 3 | Create, fetch and list students |
/// | Course | 3 | Create, fetch and list courses |
/// | Registration | 4 | Register, drop, list per student, list per course |
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub enum Command {
    // ==================== Student (3) ====================
    /// Register a new student.
    /// Returns: `Output::Student`
    RegisterStudent {
        /// Student name
        name: String,
        /// Student email, unique ignoring case
        email: String,
    },

    /// Fetch a student by identity.
    /// Returns: `Output::MaybeStudent`
    GetStudent {
        /// Student identity
        id: StudentId,
    },

    /// List every student.
    /// Returns: `Output::Students`
    ListStudents,

    // ==================== Course (3) ====================
    /// Add a new course.
    /// Returns: `Output::Course`
    AddCourse {
        /// Course code, unique ignoring case
        code: String,
        /// Course title
        title: String,
        /// Instructor name
        instructor: String,
    },

    /// Fetch a course by identity.
    /// Returns: `Output::MaybeCourse`
    GetCourse {
        /// Course identity
        id: CourseId,
    },

    /// List every course.
    /// Returns: `Output::Courses`
    ListCourses,

    // ==================== Registration (4) ====================
    /// Register a student for a course.
    /// Returns: `Output::Registration`
    RegisterForCourse {
        /// Student to register
        student_id: StudentId,
        /// Course to register for
        course_id: CourseId,
    },

    /// Drop an active registration.
    /// Returns: `Output::Unit`
    DropCourse {
        /// Registered student
        student_id: StudentId,
        /// Course being dropped
        course_id: CourseId,
    },

    /// Courses a student is registered for.
    /// Returns: `Output::Courses`
    RegisteredCourses {
        /// Student identity
        student_id: StudentId,
    },

    /// Students registered for a course.
    /// Returns: `Output::Students`
    CourseRoster {
        /// Course identity
        course_id: CourseId,
    },
}

impl Command {
    /// Stable name used in logs
    pub fn name(&self) -> &'static str {
        match self {
            Command::RegisterStudent { .. } => "RegisterStudent",
            Command::GetStudent { .. } => "GetStudent",
            Command::ListStudents => "ListStudents",
            Command::AddCourse { .. } => "AddCourse",
            Command::GetCourse { .. } => "GetCourse",
            Command::ListCourses => "ListCourses",
            Command::RegisterForCourse { .. } => "RegisterForCourse",
            Command::DropCourse { .. } => "DropCourse",
            Command::RegisteredCourses { .. } => "RegisteredCourses",
            Command::CourseRoster { .. } => "CourseRoster",
        }
    }
}
