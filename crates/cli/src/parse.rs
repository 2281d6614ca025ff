//! ArgMatches → Command conversion.
//!
//! Shell mode and pipe mode produce the same subcommand shapes, so one
//! translation serves both.

use clap::ArgMatches;
use enrollment_executor::{Command, CourseId, StudentId};

/// Translate parsed arguments into an executor command.
pub fn matches_to_command(matches: &ArgMatches) -> Result<Command, String> {
    match matches.subcommand() {
        Some(("student", sub)) => parse_student(sub),
        Some(("course", sub)) => parse_course(sub),
        Some(("register", sub)) => Ok(Command::RegisterForCourse {
            student_id: StudentId::new(id(sub, "student")?),
            course_id: CourseId::new(id(sub, "course")?),
        }),
        Some(("drop", sub)) => Ok(Command::DropCourse {
            student_id: StudentId::new(id(sub, "student")?),
            course_id: CourseId::new(id(sub, "course")?),
        }),
        Some(("courses", sub)) => Ok(Command::RegisteredCourses {
            student_id: StudentId::new(id(sub, "student")?),
        }),
        Some(("roster", sub)) => Ok(Command::CourseRoster {
            course_id: CourseId::new(id(sub, "course")?),
        }),
        Some((other, _)) => Err(format!("Unknown command: {}", other)),
        None => Err("No command given".to_string()),
    }
}

fn parse_student(matches: &ArgMatches) -> Result<Command, String> {
    match matches.subcommand() {
        Some(("add", sub)) => Ok(Command::RegisterStudent {
            name: text(sub, "name")?,
            email: text(sub, "email")?,
        }),
        Some(("get", sub)) => Ok(Command::GetStudent {
            id: StudentId::new(id(sub, "id")?),
        }),
        Some(("list", _)) => Ok(Command::ListStudents),
        Some((other, _)) => Err(format!("Unknown student command: {}", other)),
        None => Err("Missing student subcommand".to_string()),
    }
}

fn parse_course(matches: &ArgMatches) -> Result<Command, String> {
    match matches.subcommand() {
        Some(("add", sub)) => Ok(Command::AddCourse {
            code: text(sub, "code")?,
            title: text(sub, "title")?,
            instructor: text(sub, "instructor")?,
        }),
        Some(("get", sub)) => Ok(Command::GetCourse {
            id: CourseId::new(id(sub, "id")?),
        }),
        Some(("list", _)) => Ok(Command::ListCourses),
        Some((other, _)) => Err(format!("Unknown course command: {}", other)),
        None => Err("Missing course subcommand".to_string()),
    }
}

fn id(matches: &ArgMatches, name: &str) -> Result<u64, String> {
    matches
        .get_one::<u64>(name)
        .copied()
        .ok_or_else(|| format!("Missing argument: {}", name))
}

fn text(matches: &ArgMatches, name: &str) -> Result<String, String> {
    matches
        .get_one::<String>(name)
        .cloned()
        .ok_or_else(|| format!("Missing argument: {}", name))
}
