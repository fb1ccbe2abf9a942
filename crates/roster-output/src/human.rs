use crate::OutputFormatter;
use roster_core::types::{EnrollmentReceipt, RosterStats, Student, Subject};

pub struct HumanFormatter;

impl OutputFormatter for HumanFormatter {
    fn format_student(&self, student: &Student) -> String {
        format!(
            "Student #{}: {} (registered {})\n",
            student.id, student.name, student.enrolled_at
        )
    }

    fn format_subject(&self, subject: &Subject) -> String {
        format!(
            "Subject #{}: {} ({}/{} seats taken)\n",
            subject.id,
            subject.title,
            subject.students.len(),
            subject.capacity
        )
    }

    fn format_enrollment(&self, receipt: &EnrollmentReceipt) -> String {
        format!(
            "Enrolled {} in {} ({}/{} seats taken)\n",
            receipt.student.name, receipt.subject_title, receipt.seats_taken, receipt.capacity
        )
    }

    fn format_subjects(&self, subjects: &[Subject]) -> String {
        if subjects.is_empty() {
            return "No subjects.\n".to_string();
        }

        let mut out = String::new();
        out.push_str(&format!("Subjects ({}):\n", subjects.len()));
        for s in subjects {
            out.push_str(&format!(
                "  #{} {} ({}/{} seats taken)\n",
                s.id,
                s.title,
                s.students.len(),
                s.capacity
            ));
            for student in &s.students {
                out.push_str(&format!("      - {} [#{}]\n", student.name, student.id));
            }
        }
        out
    }

    fn format_roster(&self, subject_id: i64, title: Option<&str>, students: &[Student]) -> String {
        let mut out = String::new();
        match title {
            Some(t) => out.push_str(&format!("Roster for '{}' ({}):\n", t, students.len())),
            None => out.push_str(&format!(
                "Roster for subject #{} ({}):\n",
                subject_id,
                students.len()
            )),
        }
        if students.is_empty() {
            out.push_str("  (no students enrolled)\n");
            return out;
        }
        for s in students {
            out.push_str(&format!("  #{} {} (registered {})\n", s.id, s.name, s.enrolled_at));
        }
        out
    }

    fn format_stats(&self, stats: &RosterStats) -> String {
        let mut out = String::new();
        out.push_str("roster stats\n");
        out.push_str(&format!("  students:    {}\n", stats.students));
        out.push_str(&format!("  subjects:    {}\n", stats.subjects));
        out.push_str(&format!("  enrollments: {}\n", stats.enrollments));
        out
    }
}
