//! CourseStore: course records with case-insensitive unique codes
//!
//! Same locking discipline as the student store: check, allocate and
//! insert under one write lock.

use crate::table::UniqueTable;
use enrollment_core::{fold_case, Course, CourseId, CourseLookup, Error, IdAllocator, Result};
use parking_lot::RwLock;
use std::fmt;
use tracing::debug;

/// Owns every Course record and assigns course identities
pub struct CourseStore {
    table: RwLock<UniqueTable<CourseId, Course>>,
    ids: IdAllocator,
}

impl CourseStore {
    /// Create an empty store; the first course gets identity 1
    pub fn new() -> Self {
        Self {
            table: RwLock::new(UniqueTable::new()),
            ids: IdAllocator::new(),
        }
    }

    /// Add a new course
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateCode`] if any existing course's code
    /// matches `code` ignoring case.
    pub fn add_course(
        &self,
        code: impl Into<String>,
        title: impl Into<String>,
        instructor: impl Into<String>,
    ) -> Result<Course> {
        let code = code.into();
        let folded = fold_case(&code);

        let mut table = self.table.write();
        if table.owner_of(&folded).is_some() {
            return Err(Error::DuplicateCode { code });
        }

        let id = CourseId::new(self.ids.next());
        let course = Course {
            id,
            code,
            title: title.into(),
            instructor: instructor.into(),
        };
        table.insert(folded, id, course.clone());
        drop(table);

        debug!(course_id = %id, code = %course.code, "course added");
        Ok(course)
    }

    /// Fetch a course by identity
    pub fn get_course_by_id(&self, id: CourseId) -> Option<Course> {
        self.table.read().get(&id).cloned()
    }

    /// Whether a course with this identity exists
    pub fn exists(&self, id: CourseId) -> bool {
        self.table.read().contains(&id)
    }

    /// Every course created so far
    ///
    /// Returned in ascending identity order; callers should not rely on
    /// any particular order.
    pub fn list_all_courses(&self) -> Vec<Course> {
        self.table.read().values().cloned().collect()
    }

    /// Number of stored courses
    pub fn len(&self) -> usize {
        self.table.read().len()
    }

    /// Whether no course has been added yet
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for CourseStore {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for CourseStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CourseStore")
            .field("courses", &self.len())
            .field("next_id", &self.ids.peek())
            .finish()
    }
}

impl CourseLookup for CourseStore {
    fn get_course(&self, id: CourseId) -> Option<Course> {
        self.get_course_by_id(id)
    }

    fn course_exists(&self, id: CourseId) -> bool {
        self.exists(id)
    }
}
