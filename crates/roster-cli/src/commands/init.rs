use std::fs;

use roster_core::config::RosterConfig;
use roster_output::OutputFormatter;

/// Run `roster init` — create the .roster/ directory, write the default
/// config, and create the database file.
pub fn run(_formatter: &dyn OutputFormatter, verbose: bool, yes: bool) -> i32 {
    let cwd = match std::env::current_dir() {
        Ok(p) => p,
        Err(e) => {
            eprintln!("roster init: failed to get current directory: {}", e);
            return 2;
        }
    };

    let roster_dir = cwd.join(".roster");
    if roster_dir.exists() {
        if !yes {
            let confirmed = dialoguer::Confirm::new()
                .with_prompt(".roster/ already exists. Rewrite config? (existing data is kept)")
                .default(false)
                .interact()
                .unwrap_or(false);
            if !confirmed {
                eprintln!("roster init: aborted");
                return 2;
            }
        }
    } else if let Err(e) = fs::create_dir_all(&roster_dir) {
        eprintln!("roster init: failed to create .roster/: {}", e);
        return 2;
    }

    // Write config using the typed RosterConfig struct
    let config = RosterConfig::default();
    let config_path = roster_dir.join("roster.json");
    match fs::write(
        &config_path,
        serde_json::to_string_pretty(&config).unwrap_or_default(),
    ) {
        Ok(_) => {}
        Err(e) => {
            eprintln!("roster init: failed to write config: {}", e);
            return 2;
        }
    }

    // Create the database (schema is created idempotently on open)
    let db_path = roster_dir.join(&config.database.file);
    match roster_core::sqlite::SqliteRosterStore::open(db_path.to_str().unwrap_or("")) {
        Ok(_) => {}
        Err(e) => {
            eprintln!("roster init: failed to create roster database: {}", e);
            return 2;
        }
    }

    if verbose {
        eprintln!(
            "roster init: initialized in {} (database: {})",
            roster_dir.display(),
            config.database.file
        );
    }

    println!("Initialized roster in {}", roster_dir.display());
    0
}
