//! Clap command tree definition.
//!
//! Builds the `clap::Command` tree used by both shell mode (directly)
//! and pipe mode (via `try_get_matches_from`).

use clap::{value_parser, Arg, ArgAction, Command};

/// Build the complete CLI command tree.
pub fn build_cli() -> Command {
    Command::new("registrar")
        .about("Student and course registration backend")
        .version(env!("CARGO_PKG_VERSION"))
        .subcommand_required(false)
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .value_name("PATH")
                .help("Config file, created with defaults if missing (default: ./registrar.toml if present)")
                .global(true),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("JSON output mode")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(build_student())
        .subcommand(build_course())
        .subcommand(build_register())
        .subcommand(build_drop())
        .subcommand(build_courses())
        .subcommand(build_roster())
}

/// Build a command tree for pipe mode (no global flags).
pub fn build_repl_cmd() -> Command {
    Command::new("repl")
        .multicall(true)
        .subcommand_required(true)
        .subcommand(build_student())
        .subcommand(build_course())
        .subcommand(build_register())
        .subcommand(build_drop())
        .subcommand(build_courses())
        .subcommand(build_roster())
}

fn id_arg(name: &'static str, value_name: &'static str) -> Arg {
    Arg::new(name)
        .value_name(value_name)
        .required(true)
        .value_parser(value_parser!(u64))
}

fn text_arg(name: &'static str, value_name: &'static str) -> Arg {
    Arg::new(name).value_name(value_name).required(true)
}

// =========================================================================
// Students
// =========================================================================

fn build_student() -> Command {
    Command::new("student")
        .about("Student operations")
        .subcommand_required(true)
        .subcommand(
            Command::new("add")
                .about("Register a new student")
                .arg(text_arg("name", "NAME"))
                .arg(text_arg("email", "EMAIL")),
        )
        .subcommand(
            Command::new("get")
                .about("Show a student by ID")
                .arg(id_arg("id", "STUDENT_ID")),
        )
        .subcommand(Command::new("list").about("List all students"))
}

// =========================================================================
// Courses
// =========================================================================

fn build_course() -> Command {
    Command::new("course")
        .about("Course operations")
        .subcommand_required(true)
        .subcommand(
            Command::new("add")
                .about("Add a new course")
                .arg(text_arg("code", "CODE"))
                .arg(text_arg("title", "TITLE"))
                .arg(text_arg("instructor", "INSTRUCTOR")),
        )
        .subcommand(
            Command::new("get")
                .about("Show a course by ID")
                .arg(id_arg("id", "COURSE_ID")),
        )
        .subcommand(Command::new("list").about("List all courses"))
}

// =========================================================================
// Registrations
// =========================================================================

fn build_register() -> Command {
    Command::new("register")
        .about("Register a student for a course")
        .arg(id_arg("student", "STUDENT_ID"))
        .arg(id_arg("course", "COURSE_ID"))
}

fn build_drop() -> Command {
    Command::new("drop")
        .about("Drop a student's registration in a course")
        .arg(id_arg("student", "STUDENT_ID"))
        .arg(id_arg("course", "COURSE_ID"))
}

fn build_courses() -> Command {
    Command::new("courses")
        .about("List the courses a student is registered for")
        .arg(id_arg("student", "STUDENT_ID"))
}

fn build_roster() -> Command {
    Command::new("roster")
        .about("List the students registered for a course")
        .arg(id_arg("course", "COURSE_ID"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_tree_is_valid() {
        build_cli().debug_assert();
        build_repl_cmd().debug_assert();
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let matches = build_cli()
            .try_get_matches_from(["registrar", "student", "list", "--json"])
            .unwrap();
        assert!(matches.get_flag("json"));
    }

    #[test]
    fn test_ids_must_be_numbers() {
        let result = build_repl_cmd().try_get_matches_from(["register", "one", "2"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_course_add_needs_all_fields() {
        let result = build_repl_cmd().try_get_matches_from(["course", "add", "CS101", "Intro"]);
        assert!(result.is_err());
    }
}
