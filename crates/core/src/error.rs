//! Error types for the enrollment domain
//!
//! Every refused operation is reported as exactly one [`Error`] variant.
//! Variants are grouped into three kinds (see [`ErrorKind`]) which the
//! request layer maps onto status codes. We use `thiserror` for automatic
//! `Display` and `Error` trait implementations.

use crate::types::{CourseId, StudentId};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Result type alias for enrollment operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the enrollment domain
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Referenced student identity was never created
    #[error("Student with ID {0} not found.")]
    StudentNotFound(StudentId),

    /// Referenced course identity was never created
    #[error("Course with ID {0} not found.")]
    CourseNotFound(CourseId),

    /// Another student already uses this email (case-insensitive)
    #[error("Student with email '{email}' already exists.")]
    DuplicateEmail {
        /// Email as supplied by the caller
        email: String,
    },

    /// Another course already uses this code (case-insensitive)
    #[error("Course with code '{code}' already exists.")]
    DuplicateCode {
        /// Code as supplied by the caller
        code: String,
    },

    /// The (student, course) pair is already active
    #[error("Student {student} is already registered for course {course}.")]
    AlreadyRegistered {
        /// Student side of the pair
        student: StudentId,
        /// Course side of the pair
        course: CourseId,
    },

    /// The (student, course) pair is not active, so it cannot be dropped
    #[error("Student {student} is not registered for course {course}.")]
    NotRegistered {
        /// Student side of the pair
        student: StudentId,
        /// Course side of the pair
        course: CourseId,
    },
}

impl Error {
    /// Classify this error into one of the three refusal kinds
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::StudentNotFound(_) | Error::CourseNotFound(_) => ErrorKind::NotFound,
            Error::DuplicateEmail { .. }
            | Error::DuplicateCode { .. }
            | Error::AlreadyRegistered { .. } => ErrorKind::Conflict,
            Error::NotRegistered { .. } => ErrorKind::BadRequest,
        }
    }

    /// Status code the request layer should answer with
    pub fn status_code(&self) -> u16 {
        self.kind().status_code()
    }
}

/// Refusal taxonomy shared by every layer
///
/// None of these kinds is retryable: the caller must change its input
/// or accept the existing state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    /// A referenced student or course does not exist
    NotFound,
    /// A uniqueness or duplicate-state invariant would be violated
    Conflict,
    /// The requested transition is invalid in the current state
    BadRequest,
}

impl ErrorKind {
    /// HTTP-style status code for this kind
    pub const fn status_code(self) -> u16 {
        match self {
            ErrorKind::NotFound => 404,
            ErrorKind::Conflict => 409,
            ErrorKind::BadRequest => 400,
        }
    }

    /// Stable lower-case name, used in logs and JSON output
    pub const fn as_str(self) -> &'static str {
        match self {
            ErrorKind::NotFound => "not_found",
            ErrorKind::Conflict => "conflict",
            ErrorKind::BadRequest => "bad_request",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
