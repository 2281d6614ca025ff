//! Registrar CLI for the enrollment backend.
//!
//! Two modes:
//! - **Shell mode**: `registrar [flags] COMMAND`, single command, exit
//! - **Pipe mode**: `echo "student list" | registrar`, line-by-line from stdin
//!
//! State lives in memory for the lifetime of the process; seed data can be
//! supplied through `registrar.toml`.

mod commands;
mod format;
mod parse;
mod pipe;

use std::path::Path;
use std::process;
use std::sync::Arc;

use anyhow::Context;
use enrollment_executor::{Executor, Registrar, RegistrarConfig, CONFIG_FILE_NAME};
use tracing_subscriber::EnvFilter;

use commands::build_cli;
use format::{format_error, format_output, OutputMode};
use parse::matches_to_command;

fn main() {
    let matches = build_cli().get_matches();

    let output_mode = if matches.get_flag("json") {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let executor = match open_registrar(&matches) {
        Ok(executor) => executor,
        Err(e) => {
            eprintln!("(error) {:#}", e);
            process::exit(1);
        }
    };

    let exit_code = if matches.subcommand().is_some() {
        run_shell_mode(&matches, &executor, output_mode)
    } else {
        pipe::run_pipe(&executor, output_mode)
    };
    process::exit(exit_code);
}

/// Load config, install logging and build the seeded registrar.
fn open_registrar(matches: &clap::ArgMatches) -> anyhow::Result<Executor> {
    let config = load_config(matches.get_one::<String>("config").map(Path::new))?;
    init_tracing(&config.log);
    tracing::debug!(
        students = config.students.len(),
        courses = config.courses.len(),
        "config loaded"
    );

    let registrar = Registrar::from_config(&config).context("Failed to apply seed data")?;
    Ok(Executor::new(Arc::new(registrar)))
}

/// An explicit path is created with the commented defaults when missing;
/// otherwise `./registrar.toml` is used when present.
fn load_config(explicit: Option<&Path>) -> anyhow::Result<RegistrarConfig> {
    let path = match explicit {
        Some(path) => {
            RegistrarConfig::write_default_if_missing(path)
                .with_context(|| format!("Failed to create config at {}", path.display()))?;
            path
        }
        None => {
            let default = Path::new(CONFIG_FILE_NAME);
            if !default.exists() {
                return Ok(RegistrarConfig::default());
            }
            default
        }
    };
    RegistrarConfig::from_file(path)
        .with_context(|| format!("Failed to load config from {}", path.display()))
}

fn init_tracing(default_filter: &str) {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run_shell_mode(matches: &clap::ArgMatches, executor: &Executor, mode: OutputMode) -> i32 {
    match matches_to_command(matches) {
        Ok(cmd) => match executor.execute(cmd) {
            Ok(output) => {
                println!("{}", format_output(&output, mode));
                0
            }
            Err(e) => {
                eprintln!("{}", format_error(&e, mode));
                1
            }
        },
        Err(e) => {
            eprintln!("(error) {}", e);
            1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_config_explicit_path() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILE_NAME);
        std::fs::write(
            &path,
            "log = \"debug\"\n\n[[students]]\nname = \"Ann\"\nemail = \"ann@x.com\"\n",
        )
        .unwrap();

        let config = load_config(Some(path.as_path())).unwrap();
        assert_eq!(config.log, "debug");
        assert_eq!(config.students.len(), 1);
    }

    #[test]
    fn test_load_config_creates_missing_explicit_path() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("absent.toml");

        let config = load_config(Some(path.as_path())).unwrap();
        assert_eq!(config, RegistrarConfig::default());
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            RegistrarConfig::default_toml()
        );
    }

    #[test]
    fn test_load_config_unwritable_path_fails() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("no-such-dir").join("absent.toml");

        let err = load_config(Some(path.as_path())).unwrap_err();
        assert!(format!("{:#}", err).contains("absent.toml"));
    }

    #[test]
    fn test_shell_mode_exit_codes() {
        let executor = Executor::default();
        let ok = build_cli()
            .try_get_matches_from(["registrar", "student", "add", "Ann", "ann@x.com"])
            .unwrap();
        assert_eq!(run_shell_mode(&ok, &executor, OutputMode::Human), 0);

        let refused = build_cli()
            .try_get_matches_from(["registrar", "student", "add", "Ann", "ANN@x.com"])
            .unwrap();
        assert_eq!(run_shell_mode(&refused, &executor, OutputMode::Json), 1);
    }
}
