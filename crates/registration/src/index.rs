//! RegistrationIndex: the student ↔ course relation
//!
//! ## State per (student, course) pair
//!
//! ```text
//! NotRegistered --register_for_course--> Registered
//! Registered    --drop_course----------> NotRegistered
//! ```
//!
//! Re-registering after a drop is allowed and stamps a fresh time.
//!
//! ## Check order
//!
//! Mutating calls validate in a fixed order, which decides the error a
//! caller sees when several conditions hold at once:
//! 1. student exists (else `StudentNotFound`)
//! 2. course exists (else `CourseNotFound`)
//! 3. pair state (`AlreadyRegistered` / `NotRegistered`)
//!
//! ## Concurrency
//!
//! The relation is a `DashMap` keyed by student. The pair-state check and
//! the mutation run under that student's shard lock, so two concurrent
//! registrations of the same pair cannot both succeed. Existence checks
//! happen before the shard lock is taken; records are never deleted, so a
//! passed existence check stays true.

use dashmap::mapref::entry::Entry as StudentEntry;
use dashmap::DashMap;
use enrollment_core::{
    Course, CourseId, CourseLookup, Error, Registration, Result, Student, StudentId,
    StudentLookup, Timestamp,
};
use rustc_hash::FxHasher;
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::hash::BuildHasherDefault;
use std::sync::Arc;
use tracing::debug;

/// Active course registrations of one student, with their timestamps
type CourseSet = BTreeMap<CourseId, Timestamp>;

/// Owns the many-to-many relation between students and courses
///
/// Holds read-only views of the two stores; it validates identities
/// through them but never mutates them.
pub struct RegistrationIndex {
    students: Arc<dyn StudentLookup>,
    courses: Arc<dyn CourseLookup>,
    relation: DashMap<StudentId, CourseSet, BuildHasherDefault<FxHasher>>,
}

impl RegistrationIndex {
    /// Create an empty index validating against the given stores
    pub fn new(students: Arc<dyn StudentLookup>, courses: Arc<dyn CourseLookup>) -> Self {
        Self {
            students,
            courses,
            relation: DashMap::with_hasher(BuildHasherDefault::default()),
        }
    }

    fn require_student(&self, student_id: StudentId) -> Result<()> {
        if self.students.student_exists(student_id) {
            Ok(())
        } else {
            Err(Error::StudentNotFound(student_id))
        }
    }

    fn require_course(&self, course_id: CourseId) -> Result<()> {
        if self.courses.course_exists(course_id) {
            Ok(())
        } else {
            Err(Error::CourseNotFound(course_id))
        }
    }

    /// Register a student for a course
    ///
    /// # Errors
    ///
    /// - [`Error::StudentNotFound`] if the student does not exist
    /// - [`Error::CourseNotFound`] if the course does not exist
    /// - [`Error::AlreadyRegistered`] if the pair is already active
    pub fn register_for_course(
        &self,
        student_id: StudentId,
        course_id: CourseId,
    ) -> Result<Registration> {
        self.require_student(student_id)?;
        self.require_course(course_id)?;

        let registration = {
            let mut courses = self.relation.entry(student_id).or_default();
            let slot = match courses.entry(course_id) {
                Entry::Occupied(_) => {
                    return Err(Error::AlreadyRegistered {
                        student: student_id,
                        course: course_id,
                    })
                }
                Entry::Vacant(slot) => slot,
            };
            let registration = Registration::now(student_id, course_id);
            slot.insert(registration.registered_at);
            registration
        };

        debug!(
            student_id = %student_id,
            course_id = %course_id,
            registered_at = %registration.registered_at,
            "registered for course"
        );
        Ok(registration)
    }

    /// Drop an active registration
    ///
    /// # Errors
    ///
    /// - [`Error::StudentNotFound`] if the student does not exist
    /// - [`Error::CourseNotFound`] if the course does not exist
    /// - [`Error::NotRegistered`] if the pair is not currently active
    pub fn drop_course(&self, student_id: StudentId, course_id: CourseId) -> Result<()> {
        self.require_student(student_id)?;
        self.require_course(course_id)?;

        let not_registered = Error::NotRegistered {
            student: student_id,
            course: course_id,
        };

        match self.relation.entry(student_id) {
            StudentEntry::Vacant(_) => return Err(not_registered),
            StudentEntry::Occupied(mut entry) => {
                if entry.get_mut().remove(&course_id).is_none() {
                    return Err(not_registered);
                }
                if entry.get().is_empty() {
                    entry.remove();
                }
            }
        }

        debug!(student_id = %student_id, course_id = %course_id, "dropped course");
        Ok(())
    }

    /// Courses the student is currently registered for
    ///
    /// Course identities that the course store cannot resolve are skipped.
    /// With no deletion in the stores this never happens today.
    ///
    /// # Errors
    ///
    /// Returns [`Error::StudentNotFound`] if the student does not exist.
    pub fn get_registered_courses(&self, student_id: StudentId) -> Result<Vec<Course>> {
        self.require_student(student_id)?;

        // Copy the ids out so the shard lock is not held across store lookups
        let course_ids: Vec<CourseId> = self
            .relation
            .get(&student_id)
            .map(|courses| courses.keys().copied().collect())
            .unwrap_or_default();

        Ok(course_ids
            .into_iter()
            .filter_map(|id| self.courses.get_course(id))
            .collect())
    }

    /// Active registration facts for a student, with their timestamps
    ///
    /// # Errors
    ///
    /// Returns [`Error::StudentNotFound`] if the student does not exist.
    pub fn registrations_for(&self, student_id: StudentId) -> Result<Vec<Registration>> {
        self.require_student(student_id)?;

        Ok(self
            .relation
            .get(&student_id)
            .map(|courses| {
                courses
                    .iter()
                    .map(|(&course_id, &registered_at)| Registration {
                        student_id,
                        course_id,
                        registered_at,
                    })
                    .collect()
            })
            .unwrap_or_default())
    }

    /// Students currently registered for a course, in ascending identity order
    ///
    /// # Errors
    ///
    /// Returns [`Error::CourseNotFound`] if the course does not exist.
    pub fn get_course_roster(&self, course_id: CourseId) -> Result<Vec<Student>> {
        self.require_course(course_id)?;

        let mut student_ids: Vec<StudentId> = self
            .relation
            .iter()
            .filter(|entry| entry.value().contains_key(&course_id))
            .map(|entry| *entry.key())
            .collect();
        student_ids.sort_unstable();

        Ok(student_ids
            .into_iter()
            .filter_map(|id| self.students.get_student(id))
            .collect())
    }

    /// Whether the pair is currently active
    pub fn is_registered(&self, student_id: StudentId, course_id: CourseId) -> bool {
        self.relation
            .get(&student_id)
            .map(|courses| courses.contains_key(&course_id))
            .unwrap_or(false)
    }

    /// Total number of active registrations across all students
    pub fn registration_count(&self) -> usize {
        self.relation.iter().map(|entry| entry.value().len()).sum()
    }
}

impl std::fmt::Debug for RegistrationIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegistrationIndex")
            .field("students_with_registrations", &self.relation.len())
            .field("registration_count", &self.registration_count())
            .finish()
    }
}
