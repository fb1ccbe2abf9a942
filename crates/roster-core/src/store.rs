use crate::types::{RosterError, Student, Subject};

/// Persistence operations for the enrollment roster.
///
/// Writes commit a transaction before returning; reads return `Option` or
/// `Vec` and degrade to empty results instead of failing the caller.
pub trait RosterStore {
    /// Persist a new student. Assigns the identifier and enrollment date.
    fn add_student(&mut self, name: &str) -> Result<Student, RosterError>;

    /// Persist a new subject with a fixed seat capacity.
    fn add_subject(&mut self, title: &str, capacity: u32) -> Result<Subject, RosterError>;

    /// Enroll a student into a subject.
    ///
    /// Fails when either id is unknown, when the subject is full, or when
    /// the pair is already enrolled. A failed call leaves the database
    /// unchanged.
    fn enroll(&mut self, student_id: i64, subject_id: i64) -> Result<(), RosterError>;

    /// Look up a student by id.
    fn get_student(&self, id: i64) -> Option<Student>;

    /// Look up a subject by id, with its students loaded.
    fn get_subject(&self, id: i64) -> Option<Subject>;

    /// Get all subjects, students eagerly loaded.
    fn get_all_subjects(&self) -> Vec<Subject>;

    /// Get the students enrolled in a subject. Unknown ids yield an empty
    /// roster, not an error.
    fn get_students_for_subject(&self, subject_id: i64) -> Vec<Student>;
}
