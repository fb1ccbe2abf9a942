//! Output formatters for roster command results.
//!
//! Provides two output modes:
//! - **Human** (default): Plain formatted output for terminal users
//! - **JSON** (`--json`): Machine-readable structured output

pub mod human;
pub mod json;

use roster_core::types::{EnrollmentReceipt, RosterStats, Student, Subject};

pub trait OutputFormatter {
    fn format_student(&self, student: &Student) -> String;
    fn format_subject(&self, subject: &Subject) -> String;
    fn format_enrollment(&self, receipt: &EnrollmentReceipt) -> String;
    fn format_subjects(&self, subjects: &[Subject]) -> String;
    fn format_roster(&self, subject_id: i64, title: Option<&str>, students: &[Student]) -> String;
    fn format_stats(&self, stats: &RosterStats) -> String;
}
