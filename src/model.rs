//! Core entities - students, course registrations, and grades
//!
//! All three are transient: they exist only for the lifetime of the
//! in-memory session and mirror the table schema one to one:
//! - `Student`: identified by `student_id`
//! - `Registration`: one `(student_id, course_id)` pair, at most once
//! - `Grade`: one graded score per registration pair

use serde::{Deserialize, Serialize};

/// A student row.
///
/// Inserted once at seed time and never updated; removal happens only
/// through `GradebookStore::delete_student`, which cascades into the
/// student's registrations and grades.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    /// Primary key
    pub student_id: i64,
    /// Display name, non-empty
    pub name: String,
    /// Age in years, strictly positive
    pub age: i64,
}

impl Student {
    /// Create a new student
    pub fn new(student_id: i64, name: impl Into<String>, age: i64) -> Self {
        Self {
            student_id,
            name: name.into(),
            age,
        }
    }
}

/// A course registration row.
///
/// The `(student_id, course_id)` pair is the primary key: a student may
/// register for a course at most once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Registration {
    /// References `Student::student_id`, cascade on delete
    pub student_id: i64,
    /// Course identifier (e.g. "MATH201")
    pub course_id: String,
}

impl Registration {
    /// Create a new registration
    pub fn new(student_id: i64, course_id: impl Into<String>) -> Self {
        Self {
            student_id,
            course_id: course_id.into(),
        }
    }
}

/// A grade row.
///
/// The `(student_id, course_id)` pair is both the primary key and a
/// composite foreign key into the registrations table: a grade can only
/// exist for a course the student is registered in, and at most one grade
/// is recorded per registration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grade {
    /// References `Registration::student_id`
    pub student_id: i64,
    /// References `Registration::course_id`
    pub course_id: String,
    /// Score in [0, 100]
    pub grade: f64,
}

impl Grade {
    /// Create a new grade
    pub fn new(student_id: i64, course_id: impl Into<String>, grade: f64) -> Self {
        Self {
            student_id,
            course_id: course_id.into(),
            grade,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_student_creation() {
        let student = Student::new(1001, "Alice", 20);

        assert_eq!(student.student_id, 1001);
        assert_eq!(student.name, "Alice");
        assert_eq!(student.age, 20);
    }

    #[test]
    fn test_registration_pair_equality() {
        let a = Registration::new(1001, "MATH201");
        let b = Registration::new(1001, "MATH201");
        let c = Registration::new(1001, "PHYS101");

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_grade_creation() {
        let grade = Grade::new(1002, "CS150", 81.0);

        assert_eq!(grade.student_id, 1002);
        assert_eq!(grade.course_id, "CS150");
        assert_eq!(grade.grade, 81.0);
    }
}
