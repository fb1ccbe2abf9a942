use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "roster",
    version,
    about = "Capacity-limited student/subject enrollment"
)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as structured JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Include extra detail on stderr
    #[arg(long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub(crate) enum Commands {
    /// Initialize a roster database in the current directory
    Init {
        /// Skip confirmation prompts
        #[arg(long)]
        yes: bool,
    },

    /// Register a new student
    AddStudent {
        /// Full name of the student
        name: String,
    },

    /// Register a new subject
    AddSubject {
        /// Title of the subject
        title: String,
        /// Maximum number of students
        #[arg(long)]
        capacity: u32,
    },

    /// Enroll a student into a subject
    Enroll {
        /// Student identifier
        student_id: i64,
        /// Subject identifier
        subject_id: i64,
    },

    /// List all subjects with their rosters
    Subjects,

    /// List students enrolled in a subject
    Students {
        /// Subject identifier
        subject_id: i64,
    },

    /// Seed and run the demo enrollment scenario
    Demo,

    /// Display entity counts
    Stats,

    /// Remove the .roster/ directory
    Deinit {
        /// Skip confirmation prompts
        #[arg(long)]
        yes: bool,
    },

    /// Generate shell completion scripts
    Completion {
        /// Shell to generate for (bash, zsh, fish, elvish, powershell)
        shell: String,
    },
}

#[cfg(test)]
#[path = "cli_args_tests.rs"]
mod tests;
