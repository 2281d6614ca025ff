//! Concurrent/Multi-threaded Tests for enrollment-registration
//!
//! 1. **Same-pair races** - one registration wins, the rest conflict
//! 2. **Drop races** - one drop wins, the rest are refused
//! 3. **Churn** - many students registering and dropping across shared courses

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Barrier};
use std::thread;

use enrollment_core::{CourseId, Error, ErrorKind, StudentId};
use enrollment_registration::RegistrationIndex;
use enrollment_storage::{CourseStore, StudentStore};

// ============================================================================
// Test Helpers
// ============================================================================

fn create_env(
    num_students: usize,
    num_courses: usize,
) -> (Arc<RegistrationIndex>, Vec<StudentId>, Vec<CourseId>) {
    let students = Arc::new(StudentStore::new());
    let courses = Arc::new(CourseStore::new());

    let student_ids = (0..num_students)
        .map(|i| {
            students
                .register_student(format!("Student {}", i), format!("s{}@x.com", i))
                .unwrap()
                .id
        })
        .collect();
    let course_ids = (0..num_courses)
        .map(|i| {
            courses
                .add_course(format!("C{}", i), "Title", "Instructor")
                .unwrap()
                .id
        })
        .collect();

    let index = Arc::new(RegistrationIndex::new(students, courses));
    (index, student_ids, course_ids)
}

// ============================================================================
// SECTION 1: Same-pair races
// ============================================================================

#[test]
fn test_same_pair_registration_only_one_wins() {
    let (index, students, courses) = create_env(1, 1);
    let (s, c) = (students[0], courses[0]);

    let num_threads = 12;
    let barrier = Arc::new(Barrier::new(num_threads));
    let success_count = Arc::new(AtomicUsize::new(0));
    let conflict_count = Arc::new(AtomicUsize::new(0));

    let handles: Vec<_> = (0..num_threads)
        .map(|_| {
            let index = Arc::clone(&index);
            let barrier = Arc::clone(&barrier);
            let success_count = Arc::clone(&success_count);
            let conflict_count = Arc::clone(&conflict_count);
            thread::spawn(move || {
                barrier.wait();
                match index.register_for_course(s, c) {
                    Ok(_) => success_count.fetch_add(1, Ordering::SeqCst),
                    Err(Error::AlreadyRegistered { .. }) => {
                        conflict_count.fetch_add(1, Ordering::SeqCst)
                    }
                    Err(e) => panic!("unexpected error: {}", e),
                };
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(success_count.load(Ordering::SeqCst), 1);
    assert_eq!(conflict_count.load(Ordering::SeqCst), num_threads - 1);
    assert_eq!(index.registration_count(), 1);
    assert_eq!(index.get_registered_courses(s).unwrap().len(), 1);
}

// ============================================================================
// SECTION 2: Drop races
// ============================================================================

#[test]
fn test_same_pair_drop_only_one_wins() {
    let (index, students, courses) = create_env(1, 1);
    let (s, c) = (students[0], courses[0]);
    index.register_for_course(s, c).unwrap();

    let num_threads = 8;
    let barrier = Arc::new(Barrier::new(num_threads));

    let handles: Vec<_> = (0..num_threads)
        .map(|_| {
            let index = Arc::clone(&index);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                index.drop_course(s, c)
            })
        })
        .collect();

    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    let wins = results.iter().filter(|r| r.is_ok()).count();
    assert_eq!(wins, 1, "Exactly one drop should succeed");
    assert!(results
        .iter()
        .filter_map(|r| r.as_ref().err())
        .all(|e| e.kind() == ErrorKind::BadRequest));
    assert!(!index.is_registered(s, c));
}

// ============================================================================
// SECTION 3: Churn
// ============================================================================

#[test]
fn test_register_drop_churn_leaves_consistent_state() {
    let (index, students, courses) = create_env(8, 4);
    let barrier = Arc::new(Barrier::new(students.len()));

    let handles: Vec<_> = students
        .iter()
        .copied()
        .map(|s| {
            let index = Arc::clone(&index);
            let barrier = Arc::clone(&barrier);
            let courses = courses.clone();
            thread::spawn(move || {
                barrier.wait();
                for round in 0..50 {
                    for &c in &courses {
                        index.register_for_course(s, c).unwrap();
                    }
                    // Keep the first course on the last round
                    let keep_first = round == 49;
                    for &c in courses.iter().skip(usize::from(keep_first)) {
                        index.drop_course(s, c).unwrap();
                    }
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(index.registration_count(), students.len());
    for &s in &students {
        let active = index.get_registered_courses(s).unwrap();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].id, courses[0]);
    }
    assert_eq!(index.get_course_roster(courses[0]).unwrap().len(), students.len());
    assert!(index.get_course_roster(courses[1]).unwrap().is_empty());
}
