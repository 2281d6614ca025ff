//! Enrollment - in-memory student and course registration backend
//!
//! Students and courses are created with case-insensitively unique emails
//! and codes, and the registration index records which students are
//! registered for which courses.
//!
//! # Quick Start
//!
//! ```
//! use enrollment::{Command, Executor, Output};
//!
//! let executor = Executor::default();
//! executor.execute(Command::RegisterStudent {
//!     name: "Ann".into(),
//!     email: "ann@x.com".into(),
//! })?;
//! let courses = executor.execute(Command::ListCourses)?;
//! assert_eq!(courses, Output::Courses(vec![]));
//! # Ok::<(), enrollment::Error>(())
//! ```
//!
//! # Architecture
//!
//! All operations go through the [`Executor`] which provides a command-based API.
//! The [`Registrar`] struct owns the stores and provides typed methods.
//!
//! The store and index crates are implementation details; only the
//! executor API is re-exported here.

// Re-export the public API from enrollment-executor
pub use enrollment_executor::*;
