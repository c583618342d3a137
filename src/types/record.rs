//! Course record types and the grade scale
//!
//! This module defines the CourseRecord entity and the GradeLetter enum that
//! models the fixed grade scale. Modeling the scale as a closed enum makes an
//! out-of-scale letter a construction-time-rejected condition instead of a
//! runtime map miss.

use super::error::GradebookError;
use super::student::StudentId;
use rust_decimal::Decimal;
use std::fmt;
use std::str::FromStr;

/// Letter grades recognized by the fixed grade scale
///
/// Parsing is case-insensitive (`"b+"` parses to `BPlus`); display is the
/// canonical uppercase form (`"B+"`). The scale maps each letter to a
/// grade-point value: A+=10, A=9, B+=8, B=7, C=6, D=5, F=0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GradeLetter {
    /// Highest grade, 10 points
    APlus,
    /// 9 points
    A,
    /// 8 points
    BPlus,
    /// 7 points
    B,
    /// 6 points
    C,
    /// 5 points
    D,
    /// Fail, 0 points
    F,
}

impl GradeLetter {
    /// All letters in descending point order
    pub const ALL: [GradeLetter; 7] = [
        GradeLetter::APlus,
        GradeLetter::A,
        GradeLetter::BPlus,
        GradeLetter::B,
        GradeLetter::C,
        GradeLetter::D,
        GradeLetter::F,
    ];

    /// Grade-point value on the fixed scale
    ///
    /// Total function: every letter has a value, so aggregation can never
    /// miss a lookup.
    pub fn points(self) -> Decimal {
        let value: u32 = match self {
            GradeLetter::APlus => 10,
            GradeLetter::A => 9,
            GradeLetter::BPlus => 8,
            GradeLetter::B => 7,
            GradeLetter::C => 6,
            GradeLetter::D => 5,
            GradeLetter::F => 0,
        };
        Decimal::from(value)
    }

    /// Canonical uppercase spelling of the letter
    pub fn as_str(self) -> &'static str {
        match self {
            GradeLetter::APlus => "A+",
            GradeLetter::A => "A",
            GradeLetter::BPlus => "B+",
            GradeLetter::B => "B",
            GradeLetter::C => "C",
            GradeLetter::D => "D",
            GradeLetter::F => "F",
        }
    }
}

impl FromStr for GradeLetter {
    type Err = GradebookError;

    /// Parse a grade letter, case-insensitively
    ///
    /// # Errors
    ///
    /// Returns `InvalidGrade` if the trimmed input is not one of the seven
    /// recognized letters.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "A+" => Ok(GradeLetter::APlus),
            "A" => Ok(GradeLetter::A),
            "B+" => Ok(GradeLetter::BPlus),
            "B" => Ok(GradeLetter::B),
            "C" => Ok(GradeLetter::C),
            "D" => Ok(GradeLetter::D),
            "F" => Ok(GradeLetter::F),
            _ => Err(GradebookError::invalid_grade(s.trim())),
        }
    }
}

impl fmt::Display for GradeLetter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One graded course entry for a student
///
/// Records are immutable once created: there is no edit operation, and they
/// are removed only when the owning student is deleted. The store keeps them
/// as an append-only sequence; duplicates of the same course and semester are
/// allowed and all count toward aggregation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseRecord {
    /// Owning student's id
    ///
    /// Must reference an existing student at creation time. Aggregation
    /// tolerates orphans left behind by inconsistent files: they never match
    /// a report lookup.
    pub student_id: StudentId,

    /// Semester label, free-form (e.g. "S1", "2024-1")
    ///
    /// Sorted lexicographically for grouping; no date semantics.
    pub semester: String,

    /// Course code (e.g. "CS101")
    pub course_code: String,

    /// Course display name
    pub course_name: String,

    /// Credit weight, non-negative
    pub credit: Decimal,

    /// Letter grade, stored in canonical form
    pub grade: GradeLetter,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("A+", GradeLetter::APlus, 10)]
    #[case("A", GradeLetter::A, 9)]
    #[case("B+", GradeLetter::BPlus, 8)]
    #[case("B", GradeLetter::B, 7)]
    #[case("C", GradeLetter::C, 6)]
    #[case("D", GradeLetter::D, 5)]
    #[case("F", GradeLetter::F, 0)]
    fn test_parse_and_points(
        #[case] input: &str,
        #[case] expected: GradeLetter,
        #[case] points: u32,
    ) {
        let grade: GradeLetter = input.parse().unwrap();
        assert_eq!(grade, expected);
        assert_eq!(grade.points(), Decimal::from(points));
    }

    #[rstest]
    #[case::lowercase("a+", GradeLetter::APlus)]
    #[case::lowercase_plain("b", GradeLetter::B)]
    #[case::mixed_whitespace("  f  ", GradeLetter::F)]
    fn test_parse_is_case_insensitive(#[case] input: &str, #[case] expected: GradeLetter) {
        assert_eq!(input.parse::<GradeLetter>().unwrap(), expected);
    }

    #[rstest]
    #[case("z")]
    #[case("Z")]
    #[case("C+")]
    #[case("")]
    #[case("A-")]
    fn test_parse_rejects_unknown_letters(#[case] input: &str) {
        let result = input.parse::<GradeLetter>();
        assert!(matches!(
            result,
            Err(GradebookError::InvalidGrade { .. })
        ));
    }

    #[test]
    fn test_display_round_trips_every_letter() {
        for letter in GradeLetter::ALL {
            let parsed: GradeLetter = letter.as_str().parse().unwrap();
            assert_eq!(parsed, letter);
        }
    }
}
