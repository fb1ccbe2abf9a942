use std::fs;

use roster_output::OutputFormatter;

/// Run `roster deinit` — remove the .roster/ directory and its database.
pub fn run(_formatter: &dyn OutputFormatter, verbose: bool, yes: bool) -> i32 {
    let cwd = match std::env::current_dir() {
        Ok(p) => p,
        Err(e) => {
            eprintln!("roster deinit: failed to get current directory: {}", e);
            return 2;
        }
    };

    let roster_dir = cwd.join(".roster");
    if !roster_dir.exists() {
        eprintln!("roster deinit: no .roster/ directory found — nothing to remove");
        return 0;
    }

    if !yes {
        let confirmed = dialoguer::Confirm::new()
            .with_prompt("Remove .roster/ and all enrollment data?")
            .default(false)
            .interact()
            .unwrap_or(false);
        if !confirmed {
            eprintln!("roster deinit: aborted");
            return 2;
        }
    }

    match fs::remove_dir_all(&roster_dir) {
        Ok(_) => {
            if verbose {
                eprintln!("roster deinit: removed {}", roster_dir.display());
            }
            0
        }
        Err(e) => {
            eprintln!("roster deinit: failed to remove .roster/: {}", e);
            2
        }
    }
}
