//! Database schema - DDL statements for the gradebook tables
//!
//! Three tables form a dependency chain: grades reference registrations,
//! registrations reference students. Both foreign keys cascade on delete,
//! so removing a student clears their registrations and grades in one
//! statement. Enforcement requires `PRAGMA foreign_keys = ON` on the
//! session connection (SQLite defaults it off per connection).

/// Pragma enabling foreign-key enforcement for the session
pub const ENABLE_FOREIGN_KEYS: &str = "PRAGMA foreign_keys = ON;";

/// SQL to create the student table
pub const CREATE_STUDENT_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS student (
    student_id INT PRIMARY KEY,
    name TEXT NOT NULL CHECK (length(name) > 0),
    age INT NOT NULL CHECK (age > 0)
)
"#;

/// SQL to create the registered_courses table
pub const CREATE_REGISTERED_COURSES_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS registered_courses (
    student_id INT NOT NULL,
    course_id TEXT NOT NULL,
    PRIMARY KEY (student_id, course_id),
    FOREIGN KEY (student_id) REFERENCES student(student_id) ON DELETE CASCADE
)
"#;

/// SQL to create the grades table
pub const CREATE_GRADES_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS grades (
    student_id INT NOT NULL,
    course_id TEXT NOT NULL,
    grade REAL NOT NULL CHECK (grade BETWEEN 0 AND 100),
    PRIMARY KEY (student_id, course_id),
    FOREIGN KEY (student_id, course_id)
        REFERENCES registered_courses(student_id, course_id)
        ON DELETE CASCADE
)
"#;

/// Get all schema statements in dependency order
pub fn all_schema_statements() -> Vec<&'static str> {
    vec![
        CREATE_STUDENT_TABLE,
        CREATE_REGISTERED_COURSES_TABLE,
        CREATE_GRADES_TABLE,
    ]
}

/// Table names in creation order, as printed by the table dumps
pub fn all_table_names() -> Vec<&'static str> {
    vec!["student", "registered_courses", "grades"]
}
