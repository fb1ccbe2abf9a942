use rusqlite::params;

use crate::sqlite::SqliteRosterStore;
use crate::store::RosterStore;
use crate::types::{RosterError, Student, Subject};

impl RosterStore for SqliteRosterStore {
    fn add_student(&mut self, name: &str) -> Result<Student, RosterError> {
        if name.trim().is_empty() {
            return Err(RosterError::EmptyName);
        }
        let tx = self.conn.transaction()?;
        tx.execute("INSERT INTO students (name) VALUES (?1)", params![name])?;
        let id = tx.last_insert_rowid();
        let student = tx.query_row(
            "SELECT id, name, enrolled_at FROM students WHERE id = ?1",
            params![id],
            Self::row_to_student,
        )?;
        tx.commit()?;
        Ok(student)
    }

    fn add_subject(&mut self, title: &str, capacity: u32) -> Result<Subject, RosterError> {
        if title.trim().is_empty() {
            return Err(RosterError::EmptyTitle);
        }
        if capacity == 0 {
            return Err(RosterError::InvalidCapacity(capacity));
        }
        let tx = self.conn.transaction()?;
        tx.execute(
            "INSERT INTO subjects (title, capacity) VALUES (?1, ?2)",
            params![title, capacity],
        )?;
        let id = tx.last_insert_rowid();
        let subject = tx.query_row(
            "SELECT id, title, capacity, created_at FROM subjects WHERE id = ?1",
            params![id],
            Self::row_to_subject,
        )?;
        tx.commit()?;
        Ok(subject)
    }

    fn enroll(&mut self, student_id: i64, subject_id: i64) -> Result<(), RosterError> {
        let tx = self.conn.transaction()?;

        let student_exists: bool = tx
            .query_row(
                "SELECT 1 FROM students WHERE id = ?1",
                params![student_id],
                |_| Ok(true),
            )
            .unwrap_or(false);
        if !student_exists {
            return Err(RosterError::StudentNotFound(student_id));
        }

        let subject: Option<(String, u32)> = tx
            .query_row(
                "SELECT title, capacity FROM subjects WHERE id = ?1",
                params![subject_id],
                |row| Ok((row.get(0)?, row.get(1)?)),
            )
            .ok();
        let (title, capacity) = match subject {
            Some(s) => s,
            None => return Err(RosterError::SubjectNotFound(subject_id)),
        };

        // Capacity check and insert run under the same transaction, so the
        // seat count cannot move between the two statements.
        let enrolled: u32 = tx.query_row(
            "SELECT COUNT(*) FROM enrollments WHERE subject_id = ?1",
            params![subject_id],
            |row| row.get(0),
        )?;
        if enrolled >= capacity {
            return Err(RosterError::CapacityExceeded { title, capacity });
        }

        match tx.execute(
            "INSERT INTO enrollments (student_id, subject_id) VALUES (?1, ?2)",
            params![student_id, subject_id],
        ) {
            Ok(_) => {}
            Err(rusqlite::Error::SqliteFailure(e, _))
                if e.code == rusqlite::ErrorCode::ConstraintViolation =>
            {
                return Err(RosterError::AlreadyEnrolled {
                    student_id,
                    subject_id,
                });
            }
            Err(e) => return Err(e.into()),
        }

        tx.commit()?;
        Ok(())
    }

    fn get_student(&self, id: i64) -> Option<Student> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name, enrolled_at FROM students WHERE id = ?1")
            .ok()?;
        stmt.query_row(params![id], Self::row_to_student).ok()
    }

    fn get_subject(&self, id: i64) -> Option<Subject> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, title, capacity, created_at FROM subjects WHERE id = ?1")
            .ok()?;
        let subject = stmt.query_row(params![id], Self::row_to_subject).ok()?;
        Some(self.subject_with_students(subject))
    }

    fn get_all_subjects(&self) -> Vec<Subject> {
        let mut stmt = match self
            .conn
            .prepare("SELECT id, title, capacity, created_at FROM subjects ORDER BY id")
        {
            Ok(s) => s,
            Err(e) => {
                eprintln!("[roster] get_all_subjects: prepare failed: {e}");
                return Vec::new();
            }
        };
        let subjects: Vec<Subject> = match stmt.query_map([], Self::row_to_subject) {
            Ok(rows) => rows.filter_map(|r| r.ok()).collect(),
            Err(e) => {
                eprintln!("[roster] get_all_subjects: query failed: {e}");
                return Vec::new();
            }
        };
        // Batch-load rosters: 1 query total instead of N
        self.subjects_with_students_batch(subjects)
    }

    fn get_students_for_subject(&self, subject_id: i64) -> Vec<Student> {
        self.load_students(subject_id)
    }
}
