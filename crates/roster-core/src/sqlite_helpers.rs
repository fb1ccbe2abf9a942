use std::collections::HashMap;

use rusqlite::params;

use crate::sqlite::SqliteRosterStore;
use crate::types::{Student, Subject};

impl SqliteRosterStore {
    /// Load the roster for a single subject.
    pub(crate) fn load_students(&self, subject_id: i64) -> Vec<Student> {
        let mut stmt = match self.conn.prepare(
            "SELECT s.id, s.name, s.enrolled_at
             FROM students s
             JOIN enrollments e ON e.student_id = s.id
             WHERE e.subject_id = ?1
             ORDER BY s.id",
        ) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("[roster] load_students: prepare failed: {e}");
                return Vec::new();
            }
        };

        let result = match stmt.query_map(params![subject_id], Self::row_to_student) {
            Ok(rows) => rows.filter_map(|r| r.ok()).collect(),
            Err(e) => {
                eprintln!("[roster] load_students: query failed: {e}");
                Vec::new()
            }
        };
        result
    }

    /// Batch-load rosters for multiple subjects in a single query.
    /// Replaces N individual load_students() calls with 1 query.
    pub(crate) fn batch_load_students(&self, subject_ids: &[i64]) -> HashMap<i64, Vec<Student>> {
        if subject_ids.is_empty() {
            return HashMap::new();
        }
        let placeholders: Vec<String> = (1..=subject_ids.len()).map(|i| format!("?{}", i)).collect();
        let sql = format!(
            "SELECT e.subject_id, s.id, s.name, s.enrolled_at
             FROM students s
             JOIN enrollments e ON e.student_id = s.id
             WHERE e.subject_id IN ({})
             ORDER BY e.subject_id, s.id",
            placeholders.join(", ")
        );
        let mut stmt = match self.conn.prepare(&sql) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("[roster] batch_load_students: prepare failed: {e}");
                return HashMap::new();
            }
        };
        let sql_params: Vec<&dyn rusqlite::ToSql> = subject_ids
            .iter()
            .map(|id| id as &dyn rusqlite::ToSql)
            .collect();
        let rows = match stmt.query_map(sql_params.as_slice(), |row| {
            Ok((
                row.get::<_, i64>(0)?,
                Student {
                    id: row.get(1)?,
                    name: row.get(2)?,
                    enrolled_at: row.get(3)?,
                },
            ))
        }) {
            Ok(r) => r,
            Err(e) => {
                eprintln!("[roster] batch_load_students: query failed: {e}");
                return HashMap::new();
            }
        };
        let mut map: HashMap<i64, Vec<Student>> = HashMap::new();
        for row in rows.filter_map(|r| r.ok()) {
            map.entry(row.0).or_default().push(row.1);
        }
        map
    }

    /// Attach rosters to a batch of subjects using 1 query total instead of N.
    pub(crate) fn subjects_with_students_batch(&self, subjects: Vec<Subject>) -> Vec<Subject> {
        if subjects.is_empty() {
            return subjects;
        }
        let ids: Vec<i64> = subjects.iter().map(|s| s.id).collect();
        let mut students_map = self.batch_load_students(&ids);
        subjects
            .into_iter()
            .map(|mut s| {
                s.students = students_map.remove(&s.id).unwrap_or_default();
                s
            })
            .collect()
    }
}
