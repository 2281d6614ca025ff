//! Output → human/json string formatting.
//!
//! Two modes:
//! - **Human** (default): Redis-style, e.g. `(student 1) Ann <ann@x.com>`, `(nil)`
//! - **JSON** (`--json`): `serde_json::to_string_pretty`

use enrollment_executor::{Course, Error, Output, Registration, Student};

/// Output formatting mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Human,
    Json,
}

/// Format a successful output.
pub fn format_output(output: &Output, mode: OutputMode) -> String {
    match mode {
        OutputMode::Json => format_json(output),
        OutputMode::Human => format_human(output),
    }
}

/// Format an error.
pub fn format_error(err: &Error, mode: OutputMode) -> String {
    match mode {
        OutputMode::Json => serde_json::to_string_pretty(&serde_json::json!({
            "error": err.to_string(),
            "kind": err.kind().as_str(),
            "status": err.status_code(),
        }))
        .unwrap_or_else(|_| format!("{{\"error\": \"{}\"}}", err)),
        OutputMode::Human => format!("(error) [{}] {}", err.status_code(), err),
    }
}

fn format_json(output: &Output) -> String {
    serde_json::to_string_pretty(output).unwrap_or_else(|e| format!("{{\"error\": \"{}\"}}", e))
}

fn format_human(output: &Output) -> String {
    match output {
        Output::Unit => "OK".to_string(),
        Output::Student(student) => student_line(student),
        Output::MaybeStudent(Some(student)) => student_line(student),
        Output::MaybeStudent(None) | Output::MaybeCourse(None) => "(nil)".to_string(),
        Output::Students(students) => numbered(students.iter().map(student_line)),
        Output::Course(course) => course_line(course),
        Output::MaybeCourse(Some(course)) => course_line(course),
        Output::Courses(courses) => numbered(courses.iter().map(course_line)),
        Output::Registration(registration) => registration_line(registration),
    }
}

fn student_line(student: &Student) -> String {
    format!("(student {}) {} <{}>", student.id, student.name, student.email)
}

fn course_line(course: &Course) -> String {
    format!(
        "(course {}) {} \"{}\" taught by {}",
        course.id, course.code, course.title, course.instructor
    )
}

fn registration_line(registration: &Registration) -> String {
    format!(
        "(registered) student {} in course {} at {}",
        registration.student_id,
        registration.course_id,
        registration.registered_at.to_rfc3339()
    )
}

fn numbered(lines: impl Iterator<Item = String>) -> String {
    let lines: Vec<String> = lines
        .enumerate()
        .map(|(i, line)| format!("{}) {}", i + 1, line))
        .collect();
    if lines.is_empty() {
        "(empty list)".to_string()
    } else {
        lines.join("\n")
    }
}
