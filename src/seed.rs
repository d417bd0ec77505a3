//! Seed data - transactional batch loaders and the sample dataset
//!
//! Each loader inserts one table's rows inside a single transaction: a
//! batch either lands completely or rolls back completely before the error
//! propagates. `seed_sample` loads the fixed demonstration dataset in
//! dependency order (students, then registrations, then grades).

use rusqlite::{Connection, Statement, params};
use tracing::debug;
use crate::model::{Grade, Registration, Student};
use crate::{Error, Result};

/// Insert template for the student table.
///
/// Inputs: `student_id`, `name`, `age`.
pub const INSERT_STUDENT: &str = r#"
INSERT INTO student (student_id, name, age) VALUES (?1, ?2, ?3)
"#;

/// Insert template for the registered_courses table.
///
/// Inputs: `student_id`, `course_id`.
pub const INSERT_REGISTRATION: &str = r#"
INSERT INTO registered_courses (student_id, course_id) VALUES (?1, ?2)
"#;

/// Insert template for the grades table.
///
/// Inputs: `student_id`, `course_id`, `grade`.
pub const INSERT_GRADE: &str = r#"
INSERT INTO grades (student_id, course_id, grade) VALUES (?1, ?2, ?3)
"#;

/// Insert a batch of students, all or nothing
pub fn insert_students(conn: &mut Connection, rows: &[Student]) -> Result<usize> {
    bulk_insert(conn, "student", INSERT_STUDENT, rows, |row, stmt| {
        stmt.execute(params![row.student_id, row.name, row.age])
    })
}

/// Insert a batch of course registrations, all or nothing
pub fn insert_registrations(conn: &mut Connection, rows: &[Registration]) -> Result<usize> {
    bulk_insert(
        conn,
        "registered_courses",
        INSERT_REGISTRATION,
        rows,
        |row, stmt| stmt.execute(params![row.student_id, row.course_id]),
    )
}

/// Insert a batch of grades, all or nothing
pub fn insert_grades(conn: &mut Connection, rows: &[Grade]) -> Result<usize> {
    bulk_insert(conn, "grades", INSERT_GRADE, rows, |row, stmt| {
        stmt.execute(params![row.student_id, row.course_id, row.grade])
    })
}

/// Run one table's batch inside a scoped transaction.
///
/// The transaction commits only after every row executed; any failure drops
/// it uncommitted, rolling the whole batch back.
fn bulk_insert<T>(
    conn: &mut Connection,
    table: &'static str,
    sql: &str,
    rows: &[T],
    bind: impl Fn(&T, &mut Statement<'_>) -> rusqlite::Result<usize>,
) -> Result<usize> {
    let tx = conn
        .transaction()
        .map_err(|e| Error::Seed { table, source: e })?;
    {
        let mut stmt = tx
            .prepare(sql)
            .map_err(|e| Error::Seed { table, source: e })?;
        for row in rows {
            bind(row, &mut stmt).map_err(|e| Error::Seed { table, source: e })?;
        }
    }
    tx.commit().map_err(|e| Error::Seed { table, source: e })?;

    debug!("seeded {} row(s) into {}", rows.len(), table);
    Ok(rows.len())
}

/// The fixed demonstration students
pub fn sample_students() -> Vec<Student> {
    vec![
        Student::new(1001, "Alice", 20),
        Student::new(1002, "Bob", 22),
        Student::new(1003, "Charlie", 21),
        Student::new(1004, "Dana", 23),
    ]
}

/// The fixed demonstration registrations
pub fn sample_registrations() -> Vec<Registration> {
    vec![
        Registration::new(1001, "MATH201"),
        Registration::new(1001, "PHYS101"),
        Registration::new(1002, "MATH201"),
        Registration::new(1002, "CS150"),
        Registration::new(1003, "PHYS101"),
        Registration::new(1003, "CS150"),
        Registration::new(1004, "HIST210"),
    ]
}

/// The fixed demonstration grades.
///
/// Student 1003 scores 88.0 in both courses, giving the max-grade report a
/// tie to keep; student 1004 has no grades, giving the average report a
/// NULL to show.
pub fn sample_grades() -> Vec<Grade> {
    vec![
        Grade::new(1001, "MATH201", 92.0),
        Grade::new(1001, "PHYS101", 84.5),
        Grade::new(1002, "MATH201", 73.5),
        Grade::new(1002, "CS150", 81.0),
        Grade::new(1003, "PHYS101", 88.0),
        Grade::new(1003, "CS150", 88.0),
    ]
}

/// Load the sample dataset in dependency order.
///
/// Any constraint violation aborts the load; the failing table's batch
/// rolls back before the error propagates.
pub fn seed_sample(conn: &mut Connection) -> Result<()> {
    insert_students(conn, &sample_students())?;
    insert_registrations(conn, &sample_registrations())?;
    insert_grades(conn, &sample_grades())?;
    Ok(())
}
