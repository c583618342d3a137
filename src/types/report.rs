//! Report value types produced by the aggregation engine
//!
//! These are plain data carriers: the engine fills them in and the dispatcher
//! formats them. GPA values are already rounded to three decimal places by
//! the engine's rounding policy; credit totals are exact sums.

use super::record::CourseRecord;
use super::student::Student;
use rust_decimal::Decimal;

/// Credit-weighted summary of one batch of course records
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SemesterSummary {
    /// Rounded credit-weighted grade-point average, 0 when no credits
    pub gpa: Decimal,

    /// Sum of the credits in the batch
    pub credits: Decimal,
}

/// One semester's slice of a transcript
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SemesterGroup {
    /// Semester label
    pub semester: String,

    /// Course rows for this semester, sorted by course code
    pub records: Vec<CourseRecord>,

    /// Rounded GPA for this semester alone
    pub gpa: Decimal,

    /// Credits earned this semester
    pub credits: Decimal,
}

/// Full academic history for one student
///
/// Semesters appear in ascending lexicographic order of their label. The
/// cumulative figures are accumulated over unrounded per-course sums across
/// every semester, then rounded once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transcript {
    /// The student the transcript belongs to
    pub student: Student,

    /// Per-semester groups, ascending by label
    pub semesters: Vec<SemesterGroup>,

    /// Rounded cumulative grade-point average across all semesters
    pub cgpa: Decimal,

    /// Total credits across all semesters
    pub total_credits: Decimal,
}

/// Single-semester report with whole-history cumulative figures
///
/// The cumulative numbers always cover the student's entire record, not a
/// running-to-date prefix, regardless of which semester was requested.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SemesterReport {
    /// The requested semester label
    pub semester: String,

    /// Course rows for the requested semester, sorted by course code
    pub records: Vec<CourseRecord>,

    /// Rounded GPA for the requested semester
    pub gpa: Decimal,

    /// Credits in the requested semester
    pub credits: Decimal,

    /// Rounded cumulative GPA across all semesters on record
    pub cgpa: Decimal,

    /// Total credits across all semesters on record
    pub total_credits: Decimal,
}
