//! Configuration file loading for roster.
//!
//! Reads `.roster/roster.json` and provides typed access to all settings.
//! Falls back to sensible defaults when the config file is missing or incomplete.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Top-level roster configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterConfig {
    pub version: String,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub demo: DemoConfig,
}

/// Database file location inside `.roster/`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    #[serde(default = "default_db_file")]
    pub file: String,
}

/// Seed data for the demo scenario.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemoConfig {
    #[serde(default = "default_demo_subject")]
    pub subject_title: String,
    #[serde(default = "default_demo_capacity")]
    pub capacity: u32,
    #[serde(default = "default_demo_students")]
    pub students: Vec<String>,
    /// One extra student enrolled after the subject fills, to show the
    /// capacity guard in action.
    #[serde(default = "default_waitlist_student")]
    pub waitlist_student: String,
}

fn default_db_file() -> String {
    "roster.db".to_string()
}
fn default_demo_subject() -> String {
    "Mathematics".to_string()
}
fn default_demo_capacity() -> u32 {
    2
}
fn default_demo_students() -> Vec<String> {
    vec!["Alice Johnson".to_string(), "Bob Smith".to_string()]
}
fn default_waitlist_student() -> String {
    "Carol White".to_string()
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            file: default_db_file(),
        }
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            subject_title: default_demo_subject(),
            capacity: default_demo_capacity(),
            students: default_demo_students(),
            waitlist_student: default_waitlist_student(),
        }
    }
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            version: "0.1.0".to_string(),
            database: DatabaseConfig::default(),
            demo: DemoConfig::default(),
        }
    }
}

impl RosterConfig {
    /// Load configuration from `roster.json` inside the given roster directory.
    /// Returns defaults if the file doesn't exist or can't be parsed.
    pub fn load(roster_dir: &Path) -> Self {
        let config_path = roster_dir.join("roster.json");
        let content = match std::fs::read_to_string(&config_path) {
            Ok(c) => c,
            Err(_) => return Self::default(),
        };
        match serde_json::from_str(&content) {
            Ok(cfg) => cfg,
            Err(e) => {
                eprintln!(
                    "roster: warning: failed to parse {}: {}, using defaults",
                    config_path.display(),
                    e
                );
                Self::default()
            }
        }
    }
}
