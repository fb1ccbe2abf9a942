use std::fs;

use roster_core::config::RosterConfig;
use roster_core::store::RosterStore;
use roster_core::types::EnrollmentReceipt;
use roster_output::OutputFormatter;

/// Run `roster demo` — the fixed enrollment scenario.
///
/// Seeds one subject and the configured students, enrolls them, attempts
/// one over-capacity enrollment (the rejection is printed and the run
/// continues), then prints all subjects and the seeded subject's roster.
/// Initializes `.roster/` on the fly when missing, and always starts from
/// a cleared database so repeated runs print the same result.
pub fn run(formatter: &dyn OutputFormatter, verbose: bool) -> i32 {
    let cwd = match std::env::current_dir() {
        Ok(p) => p,
        Err(e) => {
            eprintln!("roster demo: failed to get current directory: {}", e);
            return 2;
        }
    };

    let roster_dir = cwd.join(".roster");
    if !roster_dir.exists() {
        if let Err(e) = fs::create_dir_all(&roster_dir) {
            eprintln!("roster demo: failed to create .roster/: {}", e);
            return 2;
        }
        let config_path = roster_dir.join("roster.json");
        let default_config =
            serde_json::to_string_pretty(&RosterConfig::default()).unwrap_or_default();
        if let Err(e) = fs::write(&config_path, default_config) {
            eprintln!("roster demo: failed to write config: {}", e);
            return 2;
        }
        if verbose {
            eprintln!("roster demo: initialized {}", roster_dir.display());
        }
    }

    let config = RosterConfig::load(&roster_dir);
    let db_path = roster_dir.join(&config.database.file);
    let mut store =
        match roster_core::sqlite::SqliteRosterStore::open(db_path.to_str().unwrap_or("")) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("roster demo: failed to open roster database: {}", e);
                return 2;
            }
        };

    if let Err(e) = store.clear_all() {
        eprintln!("roster demo: failed to clear existing data: {}", e);
        return 2;
    }

    let subject = match store.add_subject(&config.demo.subject_title, config.demo.capacity) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("roster demo: failed to seed subject: {}", e);
            return if e.is_domain_error() { 1 } else { 2 };
        }
    };
    println!(
        "Seeded subject '{}' ({} seats)",
        subject.title, subject.capacity
    );

    for name in &config.demo.students {
        let student = match store.add_student(name) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("roster demo: failed to seed student '{}': {}", name, e);
                return if e.is_domain_error() { 1 } else { 2 };
            }
        };
        match store.enroll(student.id, subject.id) {
            Ok(()) => {
                let seats_taken = store.get_students_for_subject(subject.id).len() as u32;
                let receipt = EnrollmentReceipt {
                    student,
                    subject_id: subject.id,
                    subject_title: subject.title.clone(),
                    seats_taken,
                    capacity: subject.capacity,
                };
                print!("{}", formatter.format_enrollment(&receipt));
            }
            // A full subject is part of the demo script; report and move on.
            Err(e) => println!("Enrollment rejected for {}: {}", student.name, e),
        }
    }

    // One walk-in past the seed list, to show the capacity guard.
    match store.add_student(&config.demo.waitlist_student) {
        Ok(walk_in) => match store.enroll(walk_in.id, subject.id) {
            Ok(()) => {
                let seats_taken = store.get_students_for_subject(subject.id).len() as u32;
                let receipt = EnrollmentReceipt {
                    student: walk_in,
                    subject_id: subject.id,
                    subject_title: subject.title.clone(),
                    seats_taken,
                    capacity: subject.capacity,
                };
                print!("{}", formatter.format_enrollment(&receipt));
            }
            Err(e) => println!("Enrollment rejected for {}: {}", walk_in.name, e),
        },
        Err(e) => {
            eprintln!(
                "roster demo: failed to seed student '{}': {}",
                config.demo.waitlist_student, e
            );
            return if e.is_domain_error() { 1 } else { 2 };
        }
    }

    println!();
    print!("{}", formatter.format_subjects(&store.get_all_subjects()));
    let roster = store.get_students_for_subject(subject.id);
    print!(
        "{}",
        formatter.format_roster(subject.id, Some(&subject.title), &roster)
    );

    0
}
