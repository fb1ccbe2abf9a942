//! roster CLI — capacity-limited student/subject enrollment.
//!
//! This binary provides the `roster` command with subcommands for
//! initialization, registration, enrollment, and queries. See
//! `roster --help` for usage.

use clap::Parser;

mod cli_args;
mod commands;

use cli_args::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let formatter: Box<dyn roster_output::OutputFormatter> = if cli.json {
        Box::new(roster_output::json::JsonFormatter)
    } else {
        Box::new(roster_output::human::HumanFormatter)
    };

    let exit_code = match cli.command {
        Commands::Init { yes } => commands::init::run(&*formatter, cli.verbose, yes),
        Commands::AddStudent { name } => {
            commands::add_student::run(&*formatter, cli.verbose, &name)
        }
        Commands::AddSubject { title, capacity } => {
            commands::add_subject::run(&*formatter, cli.verbose, &title, capacity)
        }
        Commands::Enroll {
            student_id,
            subject_id,
        } => commands::enroll::run(&*formatter, cli.verbose, student_id, subject_id),
        Commands::Subjects => commands::subjects::run(&*formatter, cli.verbose),
        Commands::Students { subject_id } => {
            commands::students::run(&*formatter, cli.verbose, subject_id)
        }
        Commands::Demo => commands::demo::run(&*formatter, cli.verbose),
        Commands::Stats => commands::stats::run(&*formatter, cli.verbose),
        Commands::Deinit { yes } => commands::deinit::run(&*formatter, cli.verbose, yes),
        Commands::Completion { shell } => commands::completion::run(&shell),
    };

    std::process::exit(exit_code);
}
