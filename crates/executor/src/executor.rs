//! The Executor - single entry point for request layers.
//!
//! The Executor is a stateless dispatcher that routes commands to the
//! registrar and converts results to outputs.

use std::sync::Arc;

use tracing::debug;

use crate::{Command, Output, Registrar, Result};

/// The command executor - single entry point to the registrar.
///
/// The Executor is **stateless**: it holds a reference to the registrar but
/// maintains no state of its own.
///
/// # Thread Safety
///
/// Executor is `Send + Sync` and can be shared across threads.
///
/// # Example
///
/// ```
/// use enrollment_executor::{Command, Executor, Output};
///
/// let executor = Executor::default();
/// let output = executor.execute(Command::RegisterStudent {
///     name: "Ann".into(),
///     email: "ann@x.com".into(),
/// })?;
/// assert_eq!(output.status_code(), 201);
/// # Ok::<(), enrollment_executor::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Executor {
    registrar: Arc<Registrar>,
}

impl Executor {
    /// Create a new executor wrapping a registrar.
    pub fn new(registrar: Arc<Registrar>) -> Self {
        Self { registrar }
    }

    /// The registrar commands are dispatched to
    pub fn registrar(&self) -> &Registrar {
        &self.registrar
    }

    /// Execute a single command.
    pub fn execute(&self, cmd: Command) -> Result<Output> {
        let name = cmd.name();
        let result = self.dispatch(cmd);
        match &result {
            Ok(output) => debug!(command = name, status = output.status_code(), "command ok"),
            Err(e) => debug!(
                command = name,
                kind = %e.kind(),
                status = e.status_code(),
                error = %e,
                "command refused"
            ),
        }
        result
    }

    /// Execute commands in order, one result per command.
    ///
    /// A refused command does not stop the batch.
    pub fn execute_many(&self, cmds: Vec<Command>) -> Vec<Result<Output>> {
        cmds.into_iter().map(|cmd| self.execute(cmd)).collect()
    }

    fn dispatch(&self, cmd: Command) -> Result<Output> {
        let registrar = &self.registrar;
        match cmd {
            // Student commands
            Command::RegisterStudent { name, email } => registrar
                .register_student(&name, &email)
                .map(Output::Student),
            Command::GetStudent { id } => Ok(Output::MaybeStudent(registrar.get_student_by_id(id))),
            Command::ListStudents => Ok(Output::Students(registrar.list_all_students())),

            // Course commands
            Command::AddCourse {
                code,
                title,
                instructor,
            } => registrar
                .add_course(&code, &title, &instructor)
                .map(Output::Course),
            Command::GetCourse { id } => Ok(Output::MaybeCourse(registrar.get_course_by_id(id))),
            Command::ListCourses => Ok(Output::Courses(registrar.list_all_courses())),

            // Registration commands
            Command::RegisterForCourse {
                student_id,
                course_id,
            } => registrar
                .register_for_course(student_id, course_id)
                .map(Output::Registration),
            Command::DropCourse {
                student_id,
                course_id,
            } => registrar
                .drop_course(student_id, course_id)
                .map(|()| Output::Unit),
            Command::RegisteredCourses { student_id } => registrar
                .get_registered_courses(student_id)
                .map(Output::Courses),
            Command::CourseRoster { course_id } => registrar
                .get_course_roster(course_id)
                .map(Output::Students),
        }
    }
}

impl Default for Executor {
    fn default() -> Self {
        Self::new(Arc::new(Registrar::new()))
    }
}
