// The fixed demo scenario, end to end: seed one subject and two students,
// enroll both, reject a third past capacity, read everything back.

use roster_core::sqlite::SqliteRosterStore;
use roster_core::store::RosterStore;
use roster_core::types::RosterError;
use roster_output::human::HumanFormatter;
use roster_output::OutputFormatter;

#[test]
fn test_demo_scenario() {
    let mut store = SqliteRosterStore::in_memory().unwrap();

    let subject = store.add_subject("Mathematics", 2).unwrap();
    let alice = store.add_student("Alice Johnson").unwrap();
    let bob = store.add_student("Bob Smith").unwrap();

    store.enroll(alice.id, subject.id).unwrap();
    store.enroll(bob.id, subject.id).unwrap();

    // The walk-in finds the subject full
    let carol = store.add_student("Carol White").unwrap();
    let err = store.enroll(carol.id, subject.id).unwrap_err();
    assert!(matches!(err, RosterError::CapacityExceeded { .. }));

    // Read side: everything eagerly loaded
    let subjects = store.get_all_subjects();
    assert_eq!(subjects.len(), 1);
    assert_eq!(subjects[0].students.len(), 2);
    assert_eq!(subjects[0].seats_left(), 0);

    let roster = store.get_students_for_subject(subject.id);
    let names: Vec<&str> = roster.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["Alice Johnson", "Bob Smith"]);
}

#[test]
fn test_demo_scenario_human_output() {
    let mut store = SqliteRosterStore::in_memory().unwrap();
    let subject = store.add_subject("Mathematics", 2).unwrap();
    let alice = store.add_student("Alice Johnson").unwrap();
    store.enroll(alice.id, subject.id).unwrap();

    let formatter = HumanFormatter;
    let out = formatter.format_subjects(&store.get_all_subjects());
    assert!(out.contains("Mathematics (1/2 seats taken)"));
    assert!(out.contains("Alice Johnson"));

    let roster = store.get_students_for_subject(subject.id);
    let out = formatter.format_roster(subject.id, Some(&subject.title), &roster);
    assert!(out.starts_with("Roster for 'Mathematics' (1):"));
}

#[test]
fn test_demo_scenario_json_output() {
    let mut store = SqliteRosterStore::in_memory().unwrap();
    let subject = store.add_subject("Mathematics", 2).unwrap();
    let alice = store.add_student("Alice Johnson").unwrap();
    store.enroll(alice.id, subject.id).unwrap();

    let formatter = roster_output::json::JsonFormatter;
    let out = formatter.format_subjects(&store.get_all_subjects());
    let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(parsed[0]["title"], "Mathematics");
    assert_eq!(parsed[0]["capacity"], 2);
    assert_eq!(parsed[0]["students"][0]["name"], "Alice Johnson");
}

#[test]
fn test_reseed_after_clear_is_repeatable() {
    let mut store = SqliteRosterStore::in_memory().unwrap();

    for _ in 0..2 {
        store.clear_all().unwrap();
        let subject = store.add_subject("Mathematics", 2).unwrap();
        let alice = store.add_student("Alice Johnson").unwrap();
        store.enroll(alice.id, subject.id).unwrap();

        let subjects = store.get_all_subjects();
        assert_eq!(subjects.len(), 1);
        assert_eq!(subjects[0].students.len(), 1);
    }
}
