//! Output enum for command execution results.
//!
//! Every command produces exactly one output variant; the mapping is
//! documented on each [`Command`](crate::Command) variant.

use enrollment_core::{Course, Registration, Student};
use serde::{Deserialize, Serialize};

/// Successful command execution results.
///
/// # Example
///
/// ```text
/// match executor.execute(Command::GetStudent { id })? {
///     Output::MaybeStudent(Some(s)) => println!("Found: {}", s.name),
///     Output::MaybeStudent(None) => println!("Not found"),
///     _ => unreachable!("GetStudent always returns MaybeStudent"),
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Output {
    /// No return value (drop)
    Unit,

    /// Newly created student
    Student(Student),

    /// Student lookup result; absence is not an error
    MaybeStudent(Option<Student>),

    /// List of students
    Students(Vec<Student>),

    /// Newly created course
    Course(Course),

    /// Course lookup result; absence is not an error
    MaybeCourse(Option<Course>),

    /// List of courses
    Courses(Vec<Course>),

    /// Newly active registration
    Registration(Registration),
}

impl Output {
    /// Success status code for the request layer
    ///
    /// Creations answer 201, a drop (no value) answers 204, and every
    /// other successful command answers 200.
    pub fn status_code(&self) -> u16 {
        match self {
            Output::Student(_) | Output::Course(_) => 201,
            Output::Unit => 204,
            _ => 200,
        }
    }
}
