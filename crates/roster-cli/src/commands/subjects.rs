use roster_core::config::RosterConfig;
use roster_core::store::RosterStore;
use roster_output::OutputFormatter;

/// Run `roster subjects` — list all subjects with their rosters.
pub fn run(formatter: &dyn OutputFormatter, verbose: bool) -> i32 {
    let cwd = match std::env::current_dir() {
        Ok(p) => p,
        Err(e) => {
            eprintln!("roster subjects: failed to get current directory: {}", e);
            return 2;
        }
    };

    let roster_dir = cwd.join(".roster");
    if !roster_dir.exists() {
        eprintln!("roster subjects: not initialized. Run `roster init` first.");
        return 2;
    }

    let config = RosterConfig::load(&roster_dir);
    let db_path = roster_dir.join(&config.database.file);
    let store =
        match roster_core::sqlite::SqliteRosterStore::open(db_path.to_str().unwrap_or("")) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("roster subjects: failed to open roster database: {}", e);
                return 2;
            }
        };

    let subjects = store.get_all_subjects();
    if verbose {
        eprintln!("roster subjects: {} subject(s) loaded", subjects.len());
    }
    print!("{}", formatter.format_subjects(&subjects));
    0
}
