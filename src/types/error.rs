//! Error types for the gradebook engine
//!
//! This module defines all error values the core can return. Every variant is
//! recoverable: the dispatcher reports it to the operator and the process
//! continues. Nothing here terminates the process.
//!
//! # Error Categories
//!
//! - **Input validation**: empty required fields, out-of-scale grade letters
//! - **Lookup failures**: unknown student, unknown semester, duplicate id
//! - **File problems**: I/O failures, malformed rows during bulk load

use thiserror::Error;

/// Main error type for the gradebook engine
///
/// Variants carry the context needed to render a useful operator-facing
/// message. A partial grades load is reported through `MalformedRecord`,
/// which also carries how many rows were consumed before the failure so the
/// caller knows what survived.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GradebookError {
    /// I/O error while reading or writing one of the data files
    #[error("I/O error: {message}")]
    Io {
        /// Description of the underlying I/O failure
        message: String,
    },

    /// A required field was empty after trimming
    #[error("{field} cannot be empty")]
    InvalidInput {
        /// Name of the offending field
        field: String,
    },

    /// A student with this id is already registered
    #[error("student '{id}' already exists")]
    DuplicateId {
        /// The id that collided
        id: String,
    },

    /// No student with this id is registered
    #[error("student '{id}' not found")]
    StudentNotFound {
        /// The id that was looked up
        id: String,
    },

    /// The grade letter is not on the fixed scale
    #[error("invalid grade '{grade}': allowed letters are A+, A, B+, B, C, D, F")]
    InvalidGrade {
        /// The rejected letter, as entered
        grade: String,
    },

    /// The student exists but has no course records at all
    #[error("student '{id}' has no course records")]
    NoRecords {
        /// The student's id
        id: String,
    },

    /// The student has records, but none for the requested semester
    #[error("no records for semester '{semester}' of student '{id}'")]
    SemesterNotFound {
        /// The student's id
        id: String,
        /// The semester label that matched nothing
        semester: String,
    },

    /// A grades row failed to parse during bulk load
    ///
    /// Aborts the remainder of that load call only; rows loaded before the
    /// failure are kept and the process continues.
    #[error("grades row {line}: {message} ({loaded} records loaded before the failure were kept)")]
    MalformedRecord {
        /// 1-based row number within the grades file
        line: usize,
        /// Description of the parse failure
        message: String,
        /// Number of records successfully loaded before this row
        loaded: usize,
    },
}

// Conversion from io::Error to GradebookError
impl From<std::io::Error> for GradebookError {
    fn from(error: std::io::Error) -> Self {
        GradebookError::Io {
            message: error.to_string(),
        }
    }
}

// Helper functions for creating common errors

impl GradebookError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: &str) -> Self {
        GradebookError::InvalidInput {
            field: field.to_string(),
        }
    }

    /// Create a DuplicateId error
    pub fn duplicate_id(id: &str) -> Self {
        GradebookError::DuplicateId { id: id.to_string() }
    }

    /// Create a StudentNotFound error
    pub fn student_not_found(id: &str) -> Self {
        GradebookError::StudentNotFound { id: id.to_string() }
    }

    /// Create an InvalidGrade error
    pub fn invalid_grade(grade: &str) -> Self {
        GradebookError::InvalidGrade {
            grade: grade.to_string(),
        }
    }

    /// Create a NoRecords error
    pub fn no_records(id: &str) -> Self {
        GradebookError::NoRecords { id: id.to_string() }
    }

    /// Create a SemesterNotFound error
    pub fn semester_not_found(id: &str, semester: &str) -> Self {
        GradebookError::SemesterNotFound {
            id: id.to_string(),
            semester: semester.to_string(),
        }
    }

    /// Create a MalformedRecord error
    pub fn malformed_record(line: usize, message: &str, loaded: usize) -> Self {
        GradebookError::MalformedRecord {
            line,
            message: message.to_string(),
            loaded,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::io(
        GradebookError::Io { message: "permission denied".to_string() },
        "I/O error: permission denied"
    )]
    #[case::invalid_input(
        GradebookError::invalid_input("student id"),
        "student id cannot be empty"
    )]
    #[case::duplicate_id(
        GradebookError::duplicate_id("S1"),
        "student 'S1' already exists"
    )]
    #[case::student_not_found(
        GradebookError::student_not_found("S9"),
        "student 'S9' not found"
    )]
    #[case::invalid_grade(
        GradebookError::invalid_grade("Z"),
        "invalid grade 'Z': allowed letters are A+, A, B+, B, C, D, F"
    )]
    #[case::no_records(
        GradebookError::no_records("S1"),
        "student 'S1' has no course records"
    )]
    #[case::semester_not_found(
        GradebookError::semester_not_found("S1", "S3"),
        "no records for semester 'S3' of student 'S1'"
    )]
    #[case::malformed_record(
        GradebookError::malformed_record(4, "malformed credit 'abc'", 3),
        "grades row 4: malformed credit 'abc' (3 records loaded before the failure were kept)"
    )]
    fn test_error_display(#[case] error: GradebookError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error =
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "permission denied");
        let error: GradebookError = io_error.into();
        assert!(matches!(error, GradebookError::Io { .. }));
        assert_eq!(error.to_string(), "I/O error: permission denied");
    }
}
