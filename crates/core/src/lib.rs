//! Core types and traits for the enrollment backend
//!
//! This crate defines the foundational types used throughout the system:
//! - StudentId / CourseId: process-unique identities for the two record kinds
//! - Student / Course / Registration: the records themselves
//! - Timestamp: microsecond wall-clock time attached to registrations
//! - IdAllocator: atomic monotonic identity counter owned by each store
//! - Error / ErrorKind: the refusal taxonomy (NotFound, Conflict, BadRequest)
//! - Traits: read-only lookup views (StudentLookup, CourseLookup)

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod id;
pub mod timestamp;
pub mod traits;
pub mod types;

pub use error::{Error, ErrorKind, Result};
pub use id::IdAllocator;
pub use timestamp::Timestamp;
pub use traits::{CourseLookup, StudentLookup};
pub use types::{fold_case, Course, CourseId, Registration, Student, StudentId};
