use rusqlite::{params, Connection, Result as SqlResult};

use crate::types::{RosterError, RosterStats, Student, Subject};

const SCHEMA_VERSION: u32 = 2;

/// SQLite-backed implementation of the RosterStore trait.
pub struct SqliteRosterStore {
    pub(crate) conn: Connection,
}

impl SqliteRosterStore {
    /// Open or create a roster database at the given path.
    pub fn open(path: &str) -> Result<Self, RosterError> {
        let conn = Connection::open(path)?;
        Self::set_performance_pragmas(&conn)?;
        let store = SqliteRosterStore { conn };
        store.initialize_schema()?;
        Ok(store)
    }

    /// Create an in-memory roster database (for testing).
    pub fn in_memory() -> Result<Self, RosterError> {
        let conn = Connection::open_in_memory()?;
        Self::set_performance_pragmas(&conn)?;
        let store = SqliteRosterStore { conn };
        store.initialize_schema()?;
        Ok(store)
    }

    /// Apply SQLite performance pragmas for faster reads and writes.
    fn set_performance_pragmas(conn: &Connection) -> Result<(), RosterError> {
        conn.execute_batch(
            "
            PRAGMA journal_mode = WAL;
            PRAGMA synchronous = NORMAL;
            PRAGMA temp_store = MEMORY;
            PRAGMA foreign_keys = ON;
            ",
        )?;
        Ok(())
    }

    fn initialize_schema(&self) -> Result<(), RosterError> {
        self.conn.execute_batch(
            "
            -- Schema version tracking
            CREATE TABLE IF NOT EXISTS roster_meta (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            );

            -- Students
            CREATE TABLE IF NOT EXISTS students (
                id INTEGER PRIMARY KEY,
                name TEXT NOT NULL CHECK (length(name) > 0),
                enrolled_at TEXT NOT NULL DEFAULT (datetime('now'))
            );

            -- Subjects
            CREATE TABLE IF NOT EXISTS subjects (
                id INTEGER PRIMARY KEY,
                title TEXT NOT NULL CHECK (length(title) > 0),
                capacity INTEGER NOT NULL CHECK (capacity > 0),
                created_at TEXT NOT NULL DEFAULT (datetime('now'))
            );

            -- Enrollments (join table); the composite key keeps a pair unique
            CREATE TABLE IF NOT EXISTS enrollments (
                student_id INTEGER NOT NULL REFERENCES students(id) ON DELETE CASCADE,
                subject_id INTEGER NOT NULL REFERENCES subjects(id) ON DELETE CASCADE,
                enrolled_at TEXT NOT NULL DEFAULT (datetime('now')),
                PRIMARY KEY (student_id, subject_id)
            );
            CREATE INDEX IF NOT EXISTS idx_enrollments_subject ON enrollments(subject_id);
            CREATE INDEX IF NOT EXISTS idx_enrollments_student ON enrollments(student_id);
            ",
        )?;

        // Set schema version if not present (new databases get current version)
        self.conn.execute(
            "INSERT OR IGNORE INTO roster_meta (key, value) VALUES ('schema_version', ?1)",
            params![SCHEMA_VERSION.to_string()],
        )?;

        // Run migrations for existing databases
        self.run_migrations()?;

        Ok(())
    }

    /// Run schema migrations from current version to SCHEMA_VERSION.
    fn run_migrations(&self) -> Result<(), RosterError> {
        let current = self.schema_version()?;
        if current >= SCHEMA_VERSION {
            return Ok(());
        }
        if current < 2 {
            self.migrate_v1_to_v2()?;
        }
        Ok(())
    }

    /// Migrate from schema v1 to v2: add enrolled_at to enrollments.
    fn migrate_v1_to_v2(&self) -> Result<(), RosterError> {
        // Add enrolled_at column to enrollments (ignore if already exists).
        // ALTER TABLE only allows constant defaults; old rows get ''.
        let _ = self
            .conn
            .execute_batch("ALTER TABLE enrollments ADD COLUMN enrolled_at TEXT NOT NULL DEFAULT ''");
        self.conn.execute(
            "UPDATE roster_meta SET value = '2' WHERE key = 'schema_version'",
            [],
        )?;
        Ok(())
    }

    /// Get the current schema version.
    pub fn schema_version(&self) -> Result<u32, RosterError> {
        let version: String = self.conn.query_row(
            "SELECT value FROM roster_meta WHERE key = 'schema_version'",
            [],
            |row| row.get(0),
        )?;
        version
            .parse()
            .map_err(|e| RosterError::Internal(format!("Invalid schema version: {}", e)))
    }

    /// Clear all roster data (students, subjects, enrollments) for a fresh
    /// seed. Preserves schema and metadata.
    pub fn clear_all(&mut self) -> Result<(), RosterError> {
        self.conn.execute_batch(
            "
            DELETE FROM enrollments;
            DELETE FROM students;
            DELETE FROM subjects;
            ",
        )?;
        Ok(())
    }

    /// Row counts for `roster stats`.
    pub fn stats(&self) -> Result<RosterStats, RosterError> {
        let students: u64 =
            self.conn
                .query_row("SELECT COUNT(*) FROM students", [], |row| row.get(0))?;
        let subjects: u64 =
            self.conn
                .query_row("SELECT COUNT(*) FROM subjects", [], |row| row.get(0))?;
        let enrollments: u64 =
            self.conn
                .query_row("SELECT COUNT(*) FROM enrollments", [], |row| row.get(0))?;
        Ok(RosterStats {
            students,
            subjects,
            enrollments,
        })
    }

    pub(crate) fn row_to_student(row: &rusqlite::Row) -> SqlResult<Student> {
        Ok(Student {
            id: row.get("id")?,
            name: row.get("name")?,
            enrolled_at: row.get("enrolled_at")?,
        })
    }

    pub(crate) fn row_to_subject(row: &rusqlite::Row) -> SqlResult<Subject> {
        Ok(Subject {
            id: row.get("id")?,
            title: row.get("title")?,
            capacity: row.get("capacity")?,
            created_at: row.get("created_at")?,
            students: Vec::new(), // loaded separately
        })
    }

    pub(crate) fn subject_with_students(&self, mut subject: Subject) -> Subject {
        subject.students = self.load_students(subject.id);
        subject
    }
}

#[cfg(test)]
#[path = "sqlite_tests.rs"]
mod tests;
