//! Concurrent/Multi-threaded Tests for enrollment-storage
//!
//! These tests verify the check-then-insert sequences hold up under real
//! contention:
//!
//! 1. **Same-key races** - exactly one of N registrations with one email wins
//! 2. **Identity monotonicity** - identities stay unique and gap-free under load
//! 3. **Readers during writes** - lookups never observe a half-inserted record
//!
//! ## Running These Tests
//!
//! ```bash
//! cargo test --test concurrent_tests
//! ```

use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Barrier};
use std::thread;

use enrollment_core::{CourseId, Error, StudentId};
use enrollment_storage::{CourseStore, StudentStore};

// ============================================================================
// SECTION 1: Same-key races
// ============================================================================

mod same_key_races {
    use super::*;

    #[test]
    fn test_same_email_only_one_wins() {
        let store = Arc::new(StudentStore::new());
        let num_threads = 16;
        let barrier = Arc::new(Barrier::new(num_threads));
        let success_count = Arc::new(AtomicUsize::new(0));
        let conflict_count = Arc::new(AtomicUsize::new(0));

        let handles: Vec<_> = (0..num_threads)
            .map(|i| {
                let store = Arc::clone(&store);
                let barrier = Arc::clone(&barrier);
                let success_count = Arc::clone(&success_count);
                let conflict_count = Arc::clone(&conflict_count);

                thread::spawn(move || {
                    // Alternate casing so the race also exercises folding
                    let email = if i % 2 == 0 {
                        "race@x.com"
                    } else {
                        "RACE@X.COM"
                    };
                    barrier.wait();
                    match store.register_student(format!("Racer {}", i), email) {
                        Ok(_) => {
                            success_count.fetch_add(1, Ordering::SeqCst);
                        }
                        Err(Error::DuplicateEmail { .. }) => {
                            conflict_count.fetch_add(1, Ordering::SeqCst);
                        }
                        Err(e) => panic!("unexpected error: {}", e),
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(success_count.load(Ordering::SeqCst), 1);
        assert_eq!(conflict_count.load(Ordering::SeqCst), num_threads - 1);
        assert_eq!(store.len(), 1);

        // Refused registrations never consumed an identity
        let next = store.register_student("After", "after@x.com").unwrap();
        assert_eq!(next.id, StudentId::new(2));
    }

    #[test]
    fn test_same_code_only_one_wins() {
        let store = Arc::new(CourseStore::new());
        let num_threads = 8;
        let barrier = Arc::new(Barrier::new(num_threads));

        let handles: Vec<_> = (0..num_threads)
            .map(|_| {
                let store = Arc::clone(&store);
                let barrier = Arc::clone(&barrier);
                thread::spawn(move || {
                    barrier.wait();
                    store.add_course("CS101", "Intro", "Smith").is_ok()
                })
            })
            .collect();

        let wins = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|won| *won)
            .count();

        assert_eq!(wins, 1, "Exactly one add should succeed");
        assert_eq!(store.list_all_courses().len(), 1);
    }
}

// ============================================================================
// SECTION 2: Identity monotonicity
// ============================================================================

mod identity_monotonicity {
    use super::*;

    #[test]
    fn test_distinct_emails_get_distinct_dense_ids() {
        let store = Arc::new(StudentStore::new());
        let num_threads = 8;
        let per_thread = 100;
        let barrier = Arc::new(Barrier::new(num_threads));

        let handles: Vec<_> = (0..num_threads)
            .map(|t| {
                let store = Arc::clone(&store);
                let barrier = Arc::clone(&barrier);
                thread::spawn(move || {
                    barrier.wait();
                    let mut ids = Vec::with_capacity(per_thread);
                    for i in 0..per_thread {
                        let student = store
                            .register_student("S", format!("s{}-{}@x.com", t, i))
                            .unwrap();
                        ids.push(student.id);
                    }
                    ids
                })
            })
            .collect();

        let mut all = HashSet::new();
        for handle in handles {
            let ids = handle.join().unwrap();
            // Within one thread identities strictly increase
            assert!(ids.windows(2).all(|w| w[0] < w[1]));
            all.extend(ids);
        }

        let total = (num_threads * per_thread) as u64;
        assert_eq!(all.len() as u64, total);
        assert!(all.iter().all(|id| (1..=total).contains(&id.as_u64())));
    }

    #[test]
    fn test_course_ids_unique_under_load() {
        let store = Arc::new(CourseStore::new());
        let handles: Vec<_> = (0..4)
            .map(|t| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    (0..50)
                        .map(|i| {
                            store
                                .add_course(format!("C{}-{}", t, i), "T", "I")
                                .unwrap()
                                .id
                        })
                        .collect::<Vec<CourseId>>()
                })
            })
            .collect();

        let mut seen = HashSet::new();
        for handle in handles {
            for id in handle.join().unwrap() {
                assert!(seen.insert(id));
            }
        }
        assert_eq!(seen.len(), 200);
    }
}

// ============================================================================
// SECTION 3: Readers during writes
// ============================================================================

mod readers_during_writes {
    use super::*;

    #[test]
    fn test_lookup_sees_complete_records() {
        let store = Arc::new(StudentStore::new());
        let writer = {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                for i in 0..500 {
                    store
                        .register_student(format!("n{}", i), format!("e{}@x.com", i))
                        .unwrap();
                }
            })
        };

        let readers: Vec<_> = (0..4)
            .map(|_| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    for raw in 1..=500u64 {
                        let id = StudentId::new(raw);
                        if let Some(student) = store.get_student_by_id(id) {
                            let n = raw - 1;
                            assert_eq!(student.name, format!("n{}", n));
                            assert_eq!(student.email, format!("e{}@x.com", n));
                            assert!(store.exists(id));
                        }
                    }
                })
            })
            .collect();

        writer.join().unwrap();
        for reader in readers {
            reader.join().unwrap();
        }
        assert_eq!(store.len(), 500);
    }
}
