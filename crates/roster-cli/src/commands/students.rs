use roster_core::config::RosterConfig;
use roster_core::store::RosterStore;
use roster_output::OutputFormatter;

/// Run `roster students <SUBJECT_ID>` — list the roster of one subject.
/// An unknown id prints an empty roster; it is not an error.
pub fn run(formatter: &dyn OutputFormatter, verbose: bool, subject_id: i64) -> i32 {
    let cwd = match std::env::current_dir() {
        Ok(p) => p,
        Err(e) => {
            eprintln!("roster students: failed to get current directory: {}", e);
            return 2;
        }
    };

    let roster_dir = cwd.join(".roster");
    if !roster_dir.exists() {
        eprintln!("roster students: not initialized. Run `roster init` first.");
        return 2;
    }

    let config = RosterConfig::load(&roster_dir);
    let db_path = roster_dir.join(&config.database.file);
    let store =
        match roster_core::sqlite::SqliteRosterStore::open(db_path.to_str().unwrap_or("")) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("roster students: failed to open roster database: {}", e);
                return 2;
            }
        };

    let title = store.get_subject(subject_id).map(|s| s.title);
    let students = store.get_students_for_subject(subject_id);
    if verbose && title.is_none() {
        eprintln!("roster students: subject {} not found", subject_id);
    }
    print!(
        "{}",
        formatter.format_roster(subject_id, title.as_deref(), &students)
    );
    0
}
