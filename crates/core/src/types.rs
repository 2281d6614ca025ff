//! Core record types
//!
//! This module defines the foundational types:
//! - StudentId / CourseId: identity newtypes, kept distinct so a course id
//!   can never be passed where a student id is expected
//! - Student / Course: immutable records owned by their stores
//! - Registration: a timestamped (student, course) fact

use crate::timestamp::Timestamp;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

macro_rules! identity {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(u64);

        impl $name {
            /// Wrap a raw identity value
            #[inline]
            pub const fn new(raw: u64) -> Self {
                Self(raw)
            }

            /// Raw identity value
            #[inline]
            pub const fn as_u64(&self) -> u64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<u64> for $name {
            fn from(raw: u64) -> Self {
                Self(raw)
            }
        }

        impl From<$name> for u64 {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

identity!(
    /// Identity of a student, assigned by the student store
    StudentId
);

identity!(
    /// Identity of a course, assigned by the course store
    CourseId
);

/// Normalize text for case-insensitive uniqueness checks
///
/// Emails and course codes are compared through this function, so
/// `"CS101"` and `"cs101"` collide. Folding is per character and ignores
/// context: `"ΑΣ"`, `"ασ"` and `"ας"` share a key, as do `"İ"` and `"i"`.
pub fn fold_case(value: &str) -> String {
    value.chars().map(fold_char).collect()
}

/// Simple one-to-one fold: upper-case, then lower-case
///
/// Multi-character expansions (`ß` → `SS`) keep the original character.
fn fold_char(c: char) -> char {
    let mut upper = c.to_uppercase();
    let c = match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    };
    c.to_lowercase().next().unwrap_or(c)
}

/// A registered student
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    /// Assigned identity
    pub id: StudentId,
    /// Display name
    pub name: String,
    /// Contact email, unique across students ignoring case
    pub email: String,
}

/// A course offered for registration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    /// Assigned identity
    pub id: CourseId,
    /// Catalog code, unique across courses ignoring case
    pub code: String,
    /// Course title
    pub title: String,
    /// Instructor name
    pub instructor: String,
}

/// A student's registration in a course
///
/// Two registrations are the same fact when their student and course
/// match; `registered_at` is informational and ignored by `Eq` and `Hash`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Registration {
    /// Registered student
    pub student_id: StudentId,
    /// Course registered for
    pub course_id: CourseId,
    /// When the registration became active
    pub registered_at: Timestamp,
}

impl Registration {
    /// Create a registration fact stamped with the current time
    pub fn now(student_id: StudentId, course_id: CourseId) -> Self {
        Self {
            student_id,
            course_id,
            registered_at: Timestamp::now(),
        }
    }

    /// The (student, course) pair identifying this fact
    pub fn pair(&self) -> (StudentId, CourseId) {
        (self.student_id, self.course_id)
    }
}

impl PartialEq for Registration {
    fn eq(&self, other: &Self) -> bool {
        self.pair() == other.pair()
    }
}

impl Eq for Registration {}

impl Hash for Registration {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.pair().hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_identity_roundtrip() {
        let id = StudentId::new(42);
        assert_eq!(id.as_u64(), 42);
        assert_eq!(u64::from(id), 42);
        assert_eq!(StudentId::from(42u64), id);
        assert_eq!(id.to_string(), "42");
    }

    #[test]
    fn test_identity_ordering() {
        assert!(CourseId::new(1) < CourseId::new(2));
    }

    #[test]
    fn test_identity_serializes_as_plain_number() {
        let json = serde_json::to_string(&CourseId::new(5)).unwrap();
        assert_eq!(json, "5");
        let back: CourseId = serde_json::from_str("5").unwrap();
        assert_eq!(back, CourseId::new(5));
    }

    #[test]
    fn test_fold_case() {
        assert_eq!(fold_case("Ann@X.com"), "ann@x.com");
        assert_eq!(fold_case("CS101"), fold_case("cs101"));
        assert_ne!(fold_case("CS101"), fold_case("CS102"));
    }

    #[test]
    fn test_fold_case_non_ascii() {
        assert_eq!(fold_case("ΑΣ"), "ασ");
        assert_eq!(fold_case("ας"), "ασ");
        assert_eq!(fold_case("ΑΣ"), fold_case("ασ"));
        assert_eq!(fold_case("İ1"), fold_case("i1"));
        assert_eq!(fold_case("ſ"), "s");
        assert_eq!(fold_case("Straße"), "straße");
        assert_eq!(fold_case("İ1").chars().count(), 2);
    }

    #[test]
    fn test_registration_equality_ignores_timestamp() {
        let a = Registration {
            student_id: StudentId::new(1),
            course_id: CourseId::new(1),
            registered_at: Timestamp::from_micros(10),
        };
        let b = Registration {
            registered_at: Timestamp::from_micros(20),
            ..a
        };
        let c = Registration {
            course_id: CourseId::new(2),
            ..a
        };

        assert_eq!(a, b);
        assert_ne!(a, c);

        let mut set = HashSet::new();
        set.insert(a);
        assert!(set.contains(&b));
        assert!(!set.contains(&c));
    }

    #[test]
    fn test_registration_now() {
        let reg = Registration::now(StudentId::new(3), CourseId::new(4));
        assert_eq!(reg.pair(), (StudentId::new(3), CourseId::new(4)));
        assert!(reg.registered_at > Timestamp::EPOCH);
    }

    #[test]
    fn test_student_json_shape() {
        let student = Student {
            id: StudentId::new(1),
            name: "Ann".to_string(),
            email: "ann@x.com".to_string(),
        };
        let value = serde_json::to_value(&student).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"id": 1, "name": "Ann", "email": "ann@x.com"})
        );
    }
}
