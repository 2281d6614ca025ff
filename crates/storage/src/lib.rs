//! Record stores for the enrollment backend
//!
//! This crate implements the two leaf stores:
//! - StudentStore: students keyed by identity, unique by folded email
//! - CourseStore: courses keyed by identity, unique by folded code
//!
//! Each store owns its `IdAllocator` and a `parking_lot::RwLock` around a
//! BTreeMap of records plus an FxHashMap secondary index, so uniqueness is
//! an O(1) lookup rather than a scan over all records.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod course;
pub mod student;
mod table;

pub use course::CourseStore;
pub use student::StudentStore;
