//! # Enrollment Executor
//!
//! The public API for the enrollment backend.
//!
//! This is the only crate request layers need to import. It provides:
//! - [`Registrar`] - The composition root owning every store, with typed methods
//! - [`Command`]/[`Output`] - Serializable command interface
//! - [`Executor`] - Dispatches commands to the registrar
//! - [`RegistrarConfig`] - `registrar.toml` configuration and seed data
//!
//! ## Quick Start
//!
//! ```
//! use enrollment_executor::{Command, Executor, Output};
//!
//! let executor = Executor::default();
//! executor.execute(Command::RegisterStudent {
//!     name: "Ann".into(),
//!     email: "ann@x.com".into(),
//! })?;
//! let listed = executor.execute(Command::ListStudents)?;
//! assert!(matches!(listed, Output::Students(ref s) if s.len() == 1));
//! # Ok::<(), enrollment_executor::Error>(())
//! ```
//!
//! ## Status codes
//!
//! | Result | Status |
//! |--------|--------|
//! | `Output::Student` / `Output::Course` | 201 |
//! | `Output::Unit` | 204 |
//! | any other `Output` | 200 |
//! | NotFound | 404 |
//! | Conflict | 409 |
//! | BadRequest (including invalid input) | 400 |

#![warn(missing_docs)]

mod command;
pub mod config;
mod error;
mod executor;
mod output;
mod registrar;
mod validate;

// Test modules
#[cfg(test)]
mod tests;

// =============================================================================
// Public API - Everything users need is re-exported here
// =============================================================================

pub use command::Command;
pub use config::{ConfigError, CourseSeed, RegistrarConfig, StudentSeed, CONFIG_FILE_NAME};
pub use error::{Error, Result};
pub use executor::Executor;
pub use output::Output;
pub use registrar::Registrar;

pub use enrollment_core::Error as DomainError;
pub use enrollment_core::{
    Course, CourseId, ErrorKind, Registration, Student, StudentId, Timestamp,
};
