//! StudentStore: student records with case-insensitive unique emails
//!
//! ## Concurrency
//!
//! A single `parking_lot::RwLock` guards the record table. The
//! uniqueness check, identity allocation and insert all happen under the
//! write lock, so two concurrent registrations with the same email can
//! never both succeed, and a refused registration never consumes an
//! identity. Lookups take the read lock.

use crate::table::UniqueTable;
use enrollment_core::{fold_case, Error, IdAllocator, Result, Student, StudentId, StudentLookup};
use parking_lot::RwLock;
use std::fmt;
use tracing::debug;

/// Owns every Student record and assigns student identities
pub struct StudentStore {
    table: RwLock<UniqueTable<StudentId, Student>>,
    ids: IdAllocator,
}

impl StudentStore {
    /// Create an empty store; the first student gets identity 1
    pub fn new() -> Self {
        Self {
            table: RwLock::new(UniqueTable::new()),
            ids: IdAllocator::new(),
        }
    }

    /// Register a new student
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateEmail`] if any existing student's email
    /// matches `email` ignoring case. Nothing is stored in that case.
    pub fn register_student(
        &self,
        name: impl Into<String>,
        email: impl Into<String>,
    ) -> Result<Student> {
        let name = name.into();
        let email = email.into();
        let folded = fold_case(&email);

        let mut table = self.table.write();
        if table.owner_of(&folded).is_some() {
            return Err(Error::DuplicateEmail { email });
        }

        let id = StudentId::new(self.ids.next());
        let student = Student { id, name, email };
        table.insert(folded, id, student.clone());
        drop(table);

        debug!(student_id = %id, email = %student.email, "student registered");
        Ok(student)
    }

    /// Fetch a student by identity
    pub fn get_student_by_id(&self, id: StudentId) -> Option<Student> {
        self.table.read().get(&id).cloned()
    }

    /// Whether a student with this identity exists
    pub fn exists(&self, id: StudentId) -> bool {
        self.table.read().contains(&id)
    }

    /// All students in ascending identity order
    pub fn list_all_students(&self) -> Vec<Student> {
        self.table.read().values().cloned().collect()
    }

    /// Number of stored students
    pub fn len(&self) -> usize {
        self.table.read().len()
    }

    /// Whether no student has been registered yet
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for StudentStore {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for StudentStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StudentStore")
            .field("students", &self.len())
            .field("next_id", &self.ids.peek())
            .finish()
    }
}

impl StudentLookup for StudentStore {
    fn get_student(&self, id: StudentId) -> Option<Student> {
        self.get_student_by_id(id)
    }

    fn student_exists(&self, id: StudentId) -> bool {
        self.exists(id)
    }
}
