//! Reporting - full-table dumps and the two fixed grade reports
//!
//! All SQL lives in documented module constants; callers never embed query
//! text. The two reports:
//! - Max grade per student: every course at the student's maximum, ties
//!   kept as separate rows
//! - Average grade per student: arithmetic mean rounded to 2 decimals,
//!   NULL for students with no grades

use std::fmt;

use rusqlite::Connection;
use rusqlite::types::ValueRef;
use serde::{Deserialize, Serialize};

use crate::Result;

/// Query returning, per student, every course at their maximum grade.
///
/// Inputs: none. Output columns: `student_id`, `name`, `course_id`,
/// `max_grade`. A student tied at the maximum across several courses
/// produces one row per tied course. Ordered by student id, then course id.
pub const MAX_GRADE_PER_STUDENT: &str = r#"
SELECT g.student_id, s.name, g.course_id, g.grade AS max_grade
FROM grades g
JOIN student s ON s.student_id = g.student_id
JOIN (
    SELECT student_id, MAX(grade) AS max_grade
    FROM grades
    GROUP BY student_id
) m ON m.student_id = g.student_id AND m.max_grade = g.grade
ORDER BY g.student_id, g.course_id
"#;

/// Query returning each student's average grade.
///
/// Inputs: none. Output columns: `student_id`, `name`, `avg_grade`
/// (rounded to 2 decimal places, NULL when the student has no grades -
/// the outer join keeps gradeless students in the report). Ordered by
/// student id.
pub const AVERAGE_GRADE_PER_STUDENT: &str = r#"
SELECT s.student_id, s.name, ROUND(AVG(g.grade), 2) AS avg_grade
FROM student s
LEFT JOIN grades g ON g.student_id = s.student_id
GROUP BY s.student_id, s.name
ORDER BY s.student_id
"#;

/// A full table snapshot: column names plus every row rendered to text.
///
/// Displays as the dump format: a blank line, `Table: <name>`, the column
/// names joined by " | ", a 30-dash separator, then one " | "-joined line
/// per row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableDump {
    /// Table name as passed to the query
    pub name: String,
    /// Column names in declaration order
    pub columns: Vec<String>,
    /// All rows in storage order, every value in display text form
    pub rows: Vec<Vec<String>>,
}

impl fmt::Display for TableDump {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "Table: {}", self.name)?;
        writeln!(f, "{}", self.columns.join(" | "))?;
        writeln!(f, "{}", "-".repeat(30))?;
        for row in &self.rows {
            writeln!(f, "{}", row.join(" | "))?;
        }
        Ok(())
    }
}

/// One row of the max-grade report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaxGradeRow {
    pub student_id: i64,
    pub name: String,
    pub course_id: String,
    pub max_grade: f64,
}

impl fmt::Display for MaxGradeRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | {} | {} | {}",
            self.student_id, self.name, self.course_id, self.max_grade
        )
    }
}

/// One row of the average-grade report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AverageGradeRow {
    pub student_id: i64,
    pub name: String,
    /// None when the student has no grades
    pub avg_grade: Option<f64>,
}

impl fmt::Display for AverageGradeRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.avg_grade {
            Some(avg) => write!(f, "{} | {} | {}", self.student_id, self.name, avg),
            None => write!(f, "{} | {} | NULL", self.student_id, self.name),
        }
    }
}

/// Fetch a table's columns and all rows in storage order.
///
/// The table name is interpolated into the statement, so a missing table
/// propagates the engine's "no such table" error to the caller.
pub fn fetch_table(conn: &Connection, table: &str) -> Result<TableDump> {
    let mut stmt = conn.prepare(&format!("SELECT * FROM {}", table))?;
    let columns: Vec<String> = stmt.column_names().iter().map(|c| c.to_string()).collect();

    let mut rows = Vec::new();
    let mut raw = stmt.query([])?;
    while let Some(row) = raw.next()? {
        let mut values = Vec::with_capacity(columns.len());
        for i in 0..columns.len() {
            values.push(display_value(row.get_ref(i)?));
        }
        rows.push(values);
    }

    Ok(TableDump {
        name: table.to_string(),
        columns,
        rows,
    })
}

/// Run the max-grade report
pub fn max_grade_per_student(conn: &Connection) -> Result<Vec<MaxGradeRow>> {
    let mut stmt = conn.prepare(MAX_GRADE_PER_STUDENT)?;

    let report = stmt
        .query_map([], |row| row_to_max_grade(row))?
        .filter_map(|r| r.ok())
        .collect();

    Ok(report)
}

/// Run the average-grade report
pub fn average_grade_per_student(conn: &Connection) -> Result<Vec<AverageGradeRow>> {
    let mut stmt = conn.prepare(AVERAGE_GRADE_PER_STUDENT)?;

    let report = stmt
        .query_map([], |row| row_to_average_grade(row))?
        .filter_map(|r| r.ok())
        .collect();

    Ok(report)
}

fn row_to_max_grade(row: &rusqlite::Row) -> rusqlite::Result<MaxGradeRow> {
    Ok(MaxGradeRow {
        student_id: row.get(0)?,
        name: row.get(1)?,
        course_id: row.get(2)?,
        max_grade: row.get(3)?,
    })
}

fn row_to_average_grade(row: &rusqlite::Row) -> rusqlite::Result<AverageGradeRow> {
    Ok(AverageGradeRow {
        student_id: row.get(0)?,
        name: row.get(1)?,
        avg_grade: row.get(2)?,
    })
}

fn display_value(value: ValueRef<'_>) -> String {
    match value {
        ValueRef::Null => "NULL".to_string(),
        ValueRef::Integer(i) => i.to_string(),
        ValueRef::Real(r) => r.to_string(),
        ValueRef::Text(t) => String::from_utf8_lossy(t).into_owned(),
        ValueRef::Blob(b) => format!("<{} byte blob>", b.len()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GradebookStore;
    use crate::seed;

    fn seeded_store() -> GradebookStore {
        let mut store = GradebookStore::open_in_memory().unwrap();
        seed::seed_sample(store.conn_mut()).unwrap();
        store
    }

    #[test]
    fn test_table_dump_format() {
        let store = seeded_store();
        let dump = fetch_table(store.conn(), "student").unwrap();

        let expected = "\nTable: student\n\
                        student_id | name | age\n\
                        ------------------------------\n\
                        1001 | Alice | 20\n\
                        1002 | Bob | 22\n\
                        1003 | Charlie | 21\n\
                        1004 | Dana | 23\n";
        assert_eq!(dump.to_string(), expected);
    }

    #[test]
    fn test_dump_rows_match_seeded_counts() {
        let store = seeded_store();

        let students = fetch_table(store.conn(), "student").unwrap();
        let registrations = fetch_table(store.conn(), "registered_courses").unwrap();
        let grades = fetch_table(store.conn(), "grades").unwrap();

        assert_eq!(students.rows.len() as i64, store.count_students().unwrap());
        assert_eq!(
            registrations.rows.len() as i64,
            store.count_registrations().unwrap()
        );
        assert_eq!(grades.rows.len() as i64, store.count_grades().unwrap());
    }

    #[test]
    fn test_fetch_missing_table_propagates() {
        let store = GradebookStore::open_in_memory().unwrap();
        assert!(fetch_table(store.conn(), "no_such_table").is_err());
    }

    #[test]
    fn test_real_values_render_in_dump() {
        let store = seeded_store();
        let dump = fetch_table(store.conn(), "grades").unwrap();

        assert_eq!(dump.rows[0], vec!["1001", "MATH201", "92"]);
        assert_eq!(dump.rows[1], vec!["1001", "PHYS101", "84.5"]);
    }

    #[test]
    fn test_max_grade_report_keeps_ties() {
        let store = seeded_store();
        let report = max_grade_per_student(store.conn()).unwrap();

        let expected = vec![
            MaxGradeRow {
                student_id: 1001,
                name: "Alice".into(),
                course_id: "MATH201".into(),
                max_grade: 92.0,
            },
            MaxGradeRow {
                student_id: 1002,
                name: "Bob".into(),
                course_id: "CS150".into(),
                max_grade: 81.0,
            },
            MaxGradeRow {
                student_id: 1003,
                name: "Charlie".into(),
                course_id: "CS150".into(),
                max_grade: 88.0,
            },
            MaxGradeRow {
                student_id: 1003,
                name: "Charlie".into(),
                course_id: "PHYS101".into(),
                max_grade: 88.0,
            },
        ];
        assert_eq!(report, expected);
    }

    #[test]
    fn test_average_grade_report_keeps_gradeless_student() {
        let store = seeded_store();
        let report = average_grade_per_student(store.conn()).unwrap();

        assert_eq!(report.len(), 4);
        assert_eq!(report[0].avg_grade, Some(88.25));
        assert_eq!(report[1].avg_grade, Some(77.25));
        assert_eq!(report[2].avg_grade, Some(88.0));
        assert_eq!(report[3].avg_grade, None);
        assert_eq!(report[3].to_string(), "1004 | Dana | NULL");
    }

    #[test]
    fn test_max_grade_row_display() {
        let row = MaxGradeRow {
            student_id: 1001,
            name: "Alice".into(),
            course_id: "MATH201".into(),
            max_grade: 92.0,
        };
        assert_eq!(row.to_string(), "1001 | Alice | MATH201 | 92");
    }
}
