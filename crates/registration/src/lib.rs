//! Registration relation for the enrollment backend
//!
//! [`RegistrationIndex`] owns the many-to-many relation between student
//! and course identities. It depends on the stores only through the
//! read-only `StudentLookup` / `CourseLookup` traits from
//! `enrollment-core`, which it uses to validate identities before any
//! mutation.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod index;

pub use index::RegistrationIndex;
