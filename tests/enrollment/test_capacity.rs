// Capacity invariant: a subject never holds more students than its
// capacity, no matter how enrollment calls are interleaved or repeated.

use roster_core::sqlite::SqliteRosterStore;
use roster_core::store::RosterStore;
use roster_core::types::RosterError;

#[test]
fn test_roster_never_exceeds_capacity() {
    let mut store = SqliteRosterStore::in_memory().unwrap();
    let subject = store.add_subject("Chemistry", 3).unwrap();

    let mut accepted = 0;
    for i in 0..10 {
        let student = store.add_student(&format!("Student {}", i)).unwrap();
        match store.enroll(student.id, subject.id) {
            Ok(()) => accepted += 1,
            Err(RosterError::CapacityExceeded { capacity, .. }) => assert_eq!(capacity, 3),
            Err(e) => panic!("unexpected error: {}", e),
        }
        assert!(store.get_students_for_subject(subject.id).len() <= 3);
    }
    assert_eq!(accepted, 3);
}

#[test]
fn test_failed_enroll_does_not_mutate_state() {
    let mut store = SqliteRosterStore::in_memory().unwrap();
    let subject = store.add_subject("Chemistry", 1).unwrap();
    let first = store.add_student("First Student").unwrap();
    let second = store.add_student("Second Student").unwrap();
    store.enroll(first.id, subject.id).unwrap();

    let before = store.stats().unwrap();
    assert!(store.enroll(second.id, subject.id).is_err());
    let after = store.stats().unwrap();

    assert_eq!(before.enrollments, after.enrollments);
    let roster = store.get_students_for_subject(subject.id);
    assert_eq!(roster.len(), 1);
    assert_eq!(roster[0].name, "First Student");
}

#[test]
fn test_capacity_is_per_subject() {
    let mut store = SqliteRosterStore::in_memory().unwrap();
    let math = store.add_subject("Mathematics", 1).unwrap();
    let physics = store.add_subject("Physics", 1).unwrap();
    let alice = store.add_student("Alice Johnson").unwrap();
    let bob = store.add_student("Bob Smith").unwrap();

    store.enroll(alice.id, math.id).unwrap();
    // math is full, physics is not
    assert!(store.enroll(bob.id, math.id).is_err());
    store.enroll(bob.id, physics.id).unwrap();

    // now physics is full as well
    assert!(store.enroll(alice.id, physics.id).is_err());
    assert_eq!(store.get_students_for_subject(math.id).len(), 1);
    assert_eq!(store.get_students_for_subject(physics.id).len(), 1);
}

#[test]
fn test_student_can_enroll_in_multiple_subjects() {
    let mut store = SqliteRosterStore::in_memory().unwrap();
    let math = store.add_subject("Mathematics", 2).unwrap();
    let physics = store.add_subject("Physics", 2).unwrap();
    let alice = store.add_student("Alice Johnson").unwrap();

    store.enroll(alice.id, math.id).unwrap();
    store.enroll(alice.id, physics.id).unwrap();

    assert_eq!(store.get_students_for_subject(math.id).len(), 1);
    assert_eq!(store.get_students_for_subject(physics.id).len(), 1);
}
