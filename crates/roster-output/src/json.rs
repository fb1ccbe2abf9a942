use crate::OutputFormatter;
use roster_core::types::{EnrollmentReceipt, RosterStats, Student, Subject};

pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format_student(&self, student: &Student) -> String {
        serde_json::to_string_pretty(student).unwrap_or_default()
    }

    fn format_subject(&self, subject: &Subject) -> String {
        serde_json::to_string_pretty(subject).unwrap_or_default()
    }

    fn format_enrollment(&self, receipt: &EnrollmentReceipt) -> String {
        serde_json::to_string_pretty(receipt).unwrap_or_default()
    }

    fn format_subjects(&self, subjects: &[Subject]) -> String {
        serde_json::to_string_pretty(subjects).unwrap_or_default()
    }

    fn format_roster(&self, subject_id: i64, title: Option<&str>, students: &[Student]) -> String {
        let value = serde_json::json!({
            "subject_id": subject_id,
            "title": title,
            "students": students,
        });
        serde_json::to_string_pretty(&value).unwrap_or_default()
    }

    fn format_stats(&self, stats: &RosterStats) -> String {
        serde_json::to_string_pretty(stats).unwrap_or_default()
    }
}
