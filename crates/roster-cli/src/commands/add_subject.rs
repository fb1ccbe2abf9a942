use roster_core::config::RosterConfig;
use roster_core::store::RosterStore;
use roster_output::OutputFormatter;

/// Run `roster add-subject <TITLE> --capacity <N>` — persist a new subject.
pub fn run(formatter: &dyn OutputFormatter, verbose: bool, title: &str, capacity: u32) -> i32 {
    let cwd = match std::env::current_dir() {
        Ok(p) => p,
        Err(e) => {
            eprintln!("roster add-subject: failed to get current directory: {}", e);
            return 2;
        }
    };

    let roster_dir = cwd.join(".roster");
    if !roster_dir.exists() {
        eprintln!("roster add-subject: not initialized. Run `roster init` first.");
        return 2;
    }

    let config = RosterConfig::load(&roster_dir);
    let db_path = roster_dir.join(&config.database.file);
    let mut store =
        match roster_core::sqlite::SqliteRosterStore::open(db_path.to_str().unwrap_or("")) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("roster add-subject: failed to open roster database: {}", e);
                return 2;
            }
        };

    match store.add_subject(title, capacity) {
        Ok(subject) => {
            if verbose {
                eprintln!("roster add-subject: assigned id {}", subject.id);
            }
            print!("{}", formatter.format_subject(&subject));
            0
        }
        Err(e) => {
            eprintln!("roster add-subject: {}", e);
            if e.is_domain_error() {
                1
            } else {
                2
            }
        }
    }
}
