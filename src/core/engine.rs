//! GPA aggregation engine
//!
//! This module computes semester GPAs and cumulative CGPAs from course
//! records. All arithmetic is exact `Decimal` math; rounding happens once
//! per published figure.
//!
//! # Rounding policy
//!
//! GPAs are rounded to three decimal places, ties away from zero (the
//! scaled round-half-up the file format's consumers expect). Cumulative
//! figures are accumulated over unrounded per-course sums and rounded once
//! at the end, so accumulation order cannot change the result.

use crate::core::store::RecordStore;
use crate::types::{
    CourseRecord, GradebookError, SemesterGroup, SemesterReport, SemesterSummary, Transcript,
};
use rust_decimal::{Decimal, RoundingStrategy};
use std::collections::BTreeMap;

/// Grade-point value of a record's letter grade
///
/// Total over the grade scale; no record can miss the lookup.
pub fn points_for(record: &CourseRecord) -> Decimal {
    record.grade.points()
}

/// Round a GPA to three decimal places, ties away from zero
fn round_gpa(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(3, RoundingStrategy::MidpointAwayFromZero)
}

/// Sum quality points (points x credit) and credits over records
fn tally<'a, I>(records: I) -> (Decimal, Decimal)
where
    I: IntoIterator<Item = &'a CourseRecord>,
{
    let mut points = Decimal::ZERO;
    let mut credits = Decimal::ZERO;
    for record in records {
        points += points_for(record) * record.credit;
        credits += record.credit;
    }
    (points, credits)
}

/// Credit-weighted average, rounded; zero when there are no credits
fn weighted_gpa(points: Decimal, credits: Decimal) -> Decimal {
    if credits > Decimal::ZERO {
        round_gpa(points / credits)
    } else {
        Decimal::ZERO
    }
}

/// Summarize one batch of records (typically a single semester)
///
/// The GPA is `round(sum(points_i * credit_i) / sum(credit_i), 3)` when the
/// credit sum is positive, else zero.
pub fn semester_summary<'a, I>(records: I) -> SemesterSummary
where
    I: IntoIterator<Item = &'a CourseRecord>,
{
    let (points, credits) = tally(records);
    SemesterSummary {
        gpa: weighted_gpa(points, credits),
        credits,
    }
}

/// Report generator over a record store
///
/// Borrows the store read-only; reports never mutate stored data.
pub struct ReportEngine<'a> {
    store: &'a RecordStore,
}

impl<'a> ReportEngine<'a> {
    /// Create a report engine over the given store
    pub fn new(store: &'a RecordStore) -> Self {
        ReportEngine { store }
    }

    /// Full transcript: every semester on record plus cumulative figures
    ///
    /// Semesters are grouped by their label in ascending lexicographic
    /// order; the engine attaches no date semantics to labels. Each group
    /// carries its own rounded GPA and credit total; the cumulative CGPA is
    /// computed from the unrounded sums across all groups.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The student id is unknown (`StudentNotFound`)
    /// - The student has no course records (`NoRecords`)
    pub fn transcript(&self, student_id: &str) -> Result<Transcript, GradebookError> {
        let student = self
            .store
            .student(student_id)
            .ok_or_else(|| GradebookError::student_not_found(student_id))?
            .clone();

        let records = self.store.records_for(student_id);
        if records.is_empty() {
            return Err(GradebookError::no_records(student_id));
        }

        // records_for sorts by (semester, course code), so each group's rows
        // arrive already ordered by code
        let mut by_semester: BTreeMap<String, Vec<CourseRecord>> = BTreeMap::new();
        for record in records {
            by_semester
                .entry(record.semester.clone())
                .or_default()
                .push(record.clone());
        }

        let mut semesters = Vec::with_capacity(by_semester.len());
        let mut total_points = Decimal::ZERO;
        let mut total_credits = Decimal::ZERO;
        for (semester, group) in by_semester {
            let (points, credits) = tally(&group);
            total_points += points;
            total_credits += credits;
            semesters.push(SemesterGroup {
                semester,
                gpa: weighted_gpa(points, credits),
                credits,
                records: group,
            });
        }

        Ok(Transcript {
            student,
            semesters,
            cgpa: weighted_gpa(total_points, total_credits),
            total_credits,
        })
    }

    /// Report for one semester, with whole-history cumulative figures
    ///
    /// The cumulative CGPA and credit total cover the student's entire
    /// record regardless of which semester is requested.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The student id is unknown (`StudentNotFound`)
    /// - The student has no course records at all (`NoRecords`)
    /// - The student has records but none for this semester
    ///   (`SemesterNotFound`)
    ///
    /// Stored data is never affected by a failed request.
    pub fn semester_report(
        &self,
        student_id: &str,
        semester: &str,
    ) -> Result<SemesterReport, GradebookError> {
        if self.store.student(student_id).is_none() {
            return Err(GradebookError::student_not_found(student_id));
        }

        let all = self.store.records_for(student_id);
        if all.is_empty() {
            return Err(GradebookError::no_records(student_id));
        }

        let in_semester: Vec<CourseRecord> = all
            .iter()
            .filter(|record| record.semester == semester)
            .map(|record| (*record).clone())
            .collect();
        if in_semester.is_empty() {
            return Err(GradebookError::semester_not_found(student_id, semester));
        }

        let (semester_points, semester_credits) = tally(&in_semester);
        let (total_points, total_credits) = tally(all.iter().copied());

        Ok(SemesterReport {
            semester: semester.to_string(),
            gpa: weighted_gpa(semester_points, semester_credits),
            credits: semester_credits,
            cgpa: weighted_gpa(total_points, total_credits),
            total_credits,
            records: in_semester,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::GradeLetter;
    use rstest::rstest;
    use std::str::FromStr;

    fn record(semester: &str, code: &str, credit: &str, grade: &str) -> CourseRecord {
        CourseRecord {
            student_id: "S1".to_string(),
            semester: semester.to_string(),
            course_code: code.to_string(),
            course_name: format!("{} course", code),
            credit: Decimal::from_str(credit).unwrap(),
            grade: grade.parse::<GradeLetter>().unwrap(),
        }
    }

    fn seeded_store() -> RecordStore {
        let mut store = RecordStore::new();
        store.add_student("S1", "Jane Doe").unwrap();
        store.add_student("S2", "John Doe").unwrap();
        store
            .add_record("S1", "S1", "CS101", "Intro", Decimal::from(3), "A")
            .unwrap();
        store
            .add_record("S1", "S1", "MA101", "Calculus", Decimal::from(4), "B+")
            .unwrap();
        store
            .add_record("S1", "S2", "PH101", "Physics", Decimal::from(3), "F")
            .unwrap();
        store
    }

    #[rstest]
    #[case("A+", 10)]
    #[case("F", 0)]
    fn test_points_for(#[case] grade: &str, #[case] expected: u32) {
        let record = record("S1", "CS101", "3", grade);
        assert_eq!(points_for(&record), Decimal::from(expected));
    }

    #[test]
    fn test_semester_summary_worked_example() {
        // (9 x 3 + 8 x 4) / 7 = 59/7 = 8.428571... -> 8.429
        let records = vec![record("S1", "CS101", "3", "A"), record("S1", "MA101", "4", "B+")];
        let summary = semester_summary(&records);
        assert_eq!(summary.gpa, Decimal::new(8429, 3));
        assert_eq!(summary.credits, Decimal::from(7));
    }

    #[test]
    fn test_semester_summary_zero_credits() {
        let records = vec![record("S1", "SEM1", "0", "A")];
        let summary = semester_summary(&records);
        assert_eq!(summary.gpa, Decimal::ZERO);
        assert_eq!(summary.credits, Decimal::ZERO);
    }

    #[test]
    fn test_semester_summary_empty() {
        let records: Vec<CourseRecord> = Vec::new();
        let summary = semester_summary(&records);
        assert_eq!(summary.gpa, Decimal::ZERO);
        assert_eq!(summary.credits, Decimal::ZERO);
    }

    #[test]
    fn test_gpa_stays_on_scale() {
        let records = vec![record("S1", "A1", "2.5", "A+"), record("S1", "A2", "1.5", "D")];
        let summary = semester_summary(&records);
        assert!(summary.gpa >= Decimal::ZERO);
        assert!(summary.gpa <= Decimal::from(10));
    }

    #[test]
    fn test_rounding_ties_away_from_zero() {
        // 8.5 x 1 would not tie; construct 7.0005 exactly: credits 2,
        // points 14.001 -> 7.0005 -> rounds up to 7.001 (away from zero)
        let gpa = weighted_gpa(Decimal::from_str("14.001").unwrap(), Decimal::from(2));
        assert_eq!(gpa, Decimal::from_str("7.001").unwrap());
    }

    #[test]
    fn test_transcript_groups_and_cumulative() {
        let store = seeded_store();
        let engine = ReportEngine::new(&store);
        let transcript = engine.transcript("S1").unwrap();

        assert_eq!(transcript.student.id, "S1");
        let labels: Vec<&str> = transcript
            .semesters
            .iter()
            .map(|g| g.semester.as_str())
            .collect();
        assert_eq!(labels, ["S1", "S2"]);

        // first semester: 59/7 -> 8.429
        assert_eq!(transcript.semesters[0].gpa, Decimal::new(8429, 3));
        assert_eq!(transcript.semesters[0].credits, Decimal::from(7));
        // second semester: all failed -> 0
        assert_eq!(transcript.semesters[1].gpa, Decimal::ZERO);

        // cumulative: (59 + 0x3) / (7 + 3) = 5.9
        assert_eq!(transcript.cgpa, Decimal::new(59, 1));
        assert_eq!(transcript.total_credits, Decimal::from(10));
    }

    #[test]
    fn test_transcript_unknown_student() {
        let store = seeded_store();
        let engine = ReportEngine::new(&store);
        assert!(matches!(
            engine.transcript("S9"),
            Err(GradebookError::StudentNotFound { .. })
        ));
    }

    #[test]
    fn test_transcript_student_without_records() {
        let store = seeded_store();
        let engine = ReportEngine::new(&store);
        assert!(matches!(
            engine.transcript("S2"),
            Err(GradebookError::NoRecords { .. })
        ));
    }

    #[test]
    fn test_semester_report_cumulative_covers_all_history() {
        let store = seeded_store();
        let engine = ReportEngine::new(&store);
        let report = engine.semester_report("S1", "S2").unwrap();

        // the requested semester is the failed one
        assert_eq!(report.gpa, Decimal::ZERO);
        assert_eq!(report.credits, Decimal::from(3));
        // cumulative still reflects the whole record, not just S2
        assert_eq!(report.cgpa, Decimal::new(59, 1));
        assert_eq!(report.total_credits, Decimal::from(10));
        assert_eq!(report.records.len(), 1);
        assert_eq!(report.records[0].course_code, "PH101");
    }

    #[test]
    fn test_semester_report_unknown_semester() {
        let store = seeded_store();
        let engine = ReportEngine::new(&store);
        assert!(matches!(
            engine.semester_report("S1", "S9"),
            Err(GradebookError::SemesterNotFound { .. })
        ));
    }

    #[test]
    fn test_semester_report_precedence_no_records_first() {
        let store = seeded_store();
        let engine = ReportEngine::new(&store);
        // S2 exists but has no records at all: NoRecords wins over
        // SemesterNotFound
        assert!(matches!(
            engine.semester_report("S2", "S1"),
            Err(GradebookError::NoRecords { .. })
        ));
    }

    #[test]
    fn test_deleted_student_cannot_be_reported() {
        let mut store = seeded_store();
        store.delete_student("S1").unwrap();
        let engine = ReportEngine::new(&store);
        assert!(matches!(
            engine.transcript("S1"),
            Err(GradebookError::StudentNotFound { .. })
        ));
    }
}
