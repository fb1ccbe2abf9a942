use roster_core::config::RosterConfig;
use roster_core::store::RosterStore;
use roster_core::types::EnrollmentReceipt;
use roster_output::OutputFormatter;

/// Run `roster enroll <STUDENT_ID> <SUBJECT_ID>` — add one join row,
/// subject capacity permitting.
pub fn run(
    formatter: &dyn OutputFormatter,
    verbose: bool,
    student_id: i64,
    subject_id: i64,
) -> i32 {
    let cwd = match std::env::current_dir() {
        Ok(p) => p,
        Err(e) => {
            eprintln!("roster enroll: failed to get current directory: {}", e);
            return 2;
        }
    };

    let roster_dir = cwd.join(".roster");
    if !roster_dir.exists() {
        eprintln!("roster enroll: not initialized. Run `roster init` first.");
        return 2;
    }

    let config = RosterConfig::load(&roster_dir);
    let db_path = roster_dir.join(&config.database.file);
    let mut store =
        match roster_core::sqlite::SqliteRosterStore::open(db_path.to_str().unwrap_or("")) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("roster enroll: failed to open roster database: {}", e);
                return 2;
            }
        };

    if let Err(e) = store.enroll(student_id, subject_id) {
        eprintln!("roster enroll: {}", e);
        return if e.is_domain_error() { 1 } else { 2 };
    }

    // Re-read both entities for the receipt; the enrollment is committed
    // at this point.
    let receipt = match (store.get_student(student_id), store.get_subject(subject_id)) {
        (Some(student), Some(subject)) => EnrollmentReceipt {
            student,
            subject_id: subject.id,
            subject_title: subject.title.clone(),
            seats_taken: subject.students.len() as u32,
            capacity: subject.capacity,
        },
        _ => {
            eprintln!("roster enroll: enrollment committed but entities could not be re-read");
            return 2;
        }
    };

    if verbose {
        eprintln!(
            "roster enroll: student {} -> subject {} committed",
            student_id, subject_id
        );
    }
    print!("{}", formatter.format_enrollment(&receipt));
    0
}
