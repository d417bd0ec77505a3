//! Storage Layer - embedded SQLite session
//!
//! System of record is an in-memory SQLite database with tables:
//! - student(student_id, name, age)
//! - registered_courses(student_id, course_id)
//! - grades(student_id, course_id, grade)

pub mod schema;
pub mod sqlite;

pub use sqlite::GradebookStore;
