//! Pipe mode: read commands from a reader line by line and execute each.
//!
//! Lines are tokenized with `shlex`, so quoted names such as
//! `student add "Ann Lee" ann@x.com` work. Blank lines and `#` comments
//! are skipped.

use std::io::{self, BufRead, Write};

use enrollment_executor::Executor;

use crate::commands::build_repl_cmd;
use crate::format::{format_error, format_output, OutputMode};
use crate::parse::matches_to_command;

/// Run pipe mode over stdin. Returns the process exit code.
pub fn run_pipe(executor: &Executor, mode: OutputMode) -> i32 {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let stderr = io::stderr();
    run_lines(
        stdin.lock(),
        &mut stdout.lock(),
        &mut stderr.lock(),
        executor,
        mode,
    )
}

/// Execute every line of `input`, writing results to `out` and failures to `err`.
///
/// Returns 1 if any line failed to parse or was refused, 0 otherwise.
/// Stops reading as soon as a result cannot be written to `out`.
pub fn run_lines(
    input: impl BufRead,
    out: &mut impl Write,
    err: &mut impl Write,
    executor: &Executor,
    mode: OutputMode,
) -> i32 {
    let mut exit_code = 0;

    for line in input.lines() {
        let line = match line {
            Ok(l) => l,
            Err(_) => break,
        };
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let tokens = match shlex::split(trimmed) {
            Some(t) => t,
            None => {
                let _ = writeln!(err, "(error) Invalid quoting: {}", trimmed);
                exit_code = 1;
                continue;
            }
        };

        if tokens.is_empty() {
            continue;
        }

        let matches = match build_repl_cmd().try_get_matches_from(tokens) {
            Ok(m) => m,
            Err(e) => {
                let _ = write!(err, "{}", e);
                exit_code = 1;
                continue;
            }
        };

        let cmd = match matches_to_command(&matches) {
            Ok(cmd) => cmd,
            Err(e) => {
                let _ = writeln!(err, "(error) {}", e);
                exit_code = 1;
                continue;
            }
        };

        match executor.execute(cmd) {
            Ok(output) => {
                if writeln!(out, "{}", format_output(&output, mode)).is_err() {
                    exit_code = 1;
                    break;
                }
            }
            Err(e) => {
                let _ = writeln!(err, "{}", format_error(&e, mode));
                exit_code = 1;
            }
        }
    }

    exit_code
}
