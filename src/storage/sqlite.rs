//! SQLite session implementation

use rusqlite::{Connection, params};
use tracing::debug;
use crate::{Result, Error};
use super::schema;

/// Owning handle around one in-memory SQLite session.
///
/// The connection lives exactly as long as the handle, so the session is
/// released on every exit path; `close` additionally surfaces close-time
/// engine errors on the normal path instead of discarding them.
pub struct GradebookStore {
    conn: Connection,
}

impl GradebookStore {
    /// Open a fresh in-memory session with foreign-key enforcement on and
    /// the gradebook schema created
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(schema::ENABLE_FOREIGN_KEYS)?;
        let store = Self { conn };
        store.initialize_schema()?;
        debug!("opened in-memory gradebook session");
        Ok(store)
    }

    /// Initialize the database schema
    fn initialize_schema(&self) -> Result<()> {
        for stmt in schema::all_schema_statements() {
            self.conn.execute(stmt, [])?;
        }
        Ok(())
    }

    /// Borrow the underlying connection for read queries
    pub fn conn(&self) -> &Connection {
        &self.conn
    }

    /// Borrow the underlying connection mutably for transactional writes
    pub fn conn_mut(&mut self) -> &mut Connection {
        &mut self.conn
    }

    // ========== Session Checks ==========

    /// Check whether foreign-key enforcement is active on this session
    pub fn foreign_keys_enabled(&self) -> Result<bool> {
        let enabled: i64 = self
            .conn
            .query_row("PRAGMA foreign_keys", [], |row| row.get(0))?;
        Ok(enabled == 1)
    }

    // ========== Row Counts ==========

    /// Count rows in the student table
    pub fn count_students(&self) -> Result<i64> {
        let count = self
            .conn
            .query_row("SELECT COUNT(*) FROM student", [], |row| row.get(0))?;
        Ok(count)
    }

    /// Count rows in the registered_courses table
    pub fn count_registrations(&self) -> Result<i64> {
        let count = self
            .conn
            .query_row("SELECT COUNT(*) FROM registered_courses", [], |row| {
                row.get(0)
            })?;
        Ok(count)
    }

    /// Count rows in the grades table
    pub fn count_grades(&self) -> Result<i64> {
        let count = self
            .conn
            .query_row("SELECT COUNT(*) FROM grades", [], |row| row.get(0))?;
        Ok(count)
    }

    // ========== Mutations ==========

    /// Delete a student, cascading through their registrations into grades.
    ///
    /// Returns the number of student rows removed (0 or 1).
    pub fn delete_student(&self, student_id: i64) -> Result<usize> {
        let deleted = self.conn.execute(
            "DELETE FROM student WHERE student_id = ?1",
            params![student_id],
        )?;
        Ok(deleted)
    }

    /// Close the session, surfacing any close-time engine error
    pub fn close(self) -> Result<()> {
        debug!("closing gradebook session");
        self.conn.close().map_err(|(_, e)| Error::Storage(e))
    }
}
