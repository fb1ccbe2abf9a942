use serde::{Deserialize, Serialize};

/// A registered student. `id` and `enrolled_at` are assigned by the store
/// when the record is persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    pub id: i64,
    pub name: String,
    pub enrolled_at: String,
}

/// A subject with a fixed number of seats.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subject {
    pub id: i64,
    pub title: String,
    pub capacity: u32,
    pub created_at: String,
    /// Enrolled students. Populated by the read operations; empty on a
    /// freshly inserted subject.
    #[serde(default)]
    pub students: Vec<Student>,
}

impl Subject {
    /// Seats still available given the loaded roster.
    pub fn seats_left(&self) -> u32 {
        self.capacity.saturating_sub(self.students.len() as u32)
    }
}

/// Outcome of a successful enrollment call, for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnrollmentReceipt {
    pub student: Student,
    pub subject_id: i64,
    pub subject_title: String,
    pub seats_taken: u32,
    pub capacity: u32,
}

/// Row counts across the whole database.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct RosterStats {
    pub students: u64,
    pub subjects: u64,
    pub enrollments: u64,
}

/// Errors that can occur during roster operations.
#[derive(Debug, thiserror::Error)]
pub enum RosterError {
    #[error("Student name must not be empty")]
    EmptyName,

    #[error("Subject title must not be empty")]
    EmptyTitle,

    #[error("Subject capacity must be positive, got {0}")]
    InvalidCapacity(u32),

    #[error("Student not found: {0}")]
    StudentNotFound(i64),

    #[error("Subject not found: {0}")]
    SubjectNotFound(i64),

    #[error("Subject '{title}' is full ({capacity} seats taken)")]
    CapacityExceeded { title: String, capacity: u32 },

    #[error("Student {student_id} is already enrolled in subject {subject_id}")]
    AlreadyEnrolled { student_id: i64, subject_id: i64 },

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl RosterError {
    /// True for failures caused by the caller's input (validation, unknown
    /// ids, full subjects) as opposed to storage faults.
    pub fn is_domain_error(&self) -> bool {
        !matches!(self, RosterError::Database(_) | RosterError::Internal(_))
    }
}

impl From<rusqlite::Error> for RosterError {
    fn from(e: rusqlite::Error) -> Self {
        RosterError::Database(e.to_string())
    }
}
