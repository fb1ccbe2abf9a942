use roster_core::config::RosterConfig;
use roster_output::OutputFormatter;

/// Run `roster stats` — display entity counts.
pub fn run(formatter: &dyn OutputFormatter, verbose: bool) -> i32 {
    let cwd = match std::env::current_dir() {
        Ok(p) => p,
        Err(e) => {
            eprintln!("roster stats: failed to get current directory: {}", e);
            return 2;
        }
    };

    let roster_dir = cwd.join(".roster");
    if !roster_dir.exists() {
        eprintln!("roster stats: not initialized. Run `roster init` first.");
        return 2;
    }

    let config = RosterConfig::load(&roster_dir);
    let db_path = roster_dir.join(&config.database.file);
    let store =
        match roster_core::sqlite::SqliteRosterStore::open(db_path.to_str().unwrap_or("")) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("roster stats: failed to open roster database: {}", e);
                return 2;
            }
        };

    let stats = match store.stats() {
        Ok(s) => s,
        Err(e) => {
            eprintln!("roster stats: failed to count rows: {}", e);
            return 2;
        }
    };

    print!("{}", formatter.format_stats(&stats));

    if verbose {
        eprintln!("  db_path: {}", db_path.display());
        if let Ok(v) = store.schema_version() {
            eprintln!("  schema:  v{}", v);
        }
    }

    0
}
