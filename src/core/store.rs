//! Record store
//!
//! This module provides the `RecordStore` struct which owns the in-memory
//! student and course-record collections and their persistence to the two
//! flat files.
//!
//! The RecordStore is responsible for:
//! - Registering, renaming, and deleting students (delete cascades)
//! - Appending immutable course records with referential and grade checks
//! - Ordered listings for display
//! - Loading from and saving to the students and grades files
//!
//! It is a plain owned value with no global state; the dispatcher holds the
//! single instance for the session and persists it explicitly on save.

use crate::io::csv_format::{
    logical_rows, parse_record_line, parse_student_line, write_records_csv, write_students_csv,
};
use crate::types::{CourseRecord, GradeLetter, GradebookError, Student, StudentId};
use rust_decimal::Decimal;
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{BufWriter, ErrorKind, Write};
use std::path::Path;
use std::str::FromStr;

/// In-memory student and course-record collections
///
/// Students are keyed by id in a BTreeMap so listing iterates ascending by
/// id without a separate sort. Course records are an append-only sequence in
/// insertion order; per-student views are sorted on demand.
pub struct RecordStore {
    /// Map of student ids to students, ascending iteration order
    students: BTreeMap<StudentId, Student>,

    /// All course records in insertion order
    records: Vec<CourseRecord>,
}

impl RecordStore {
    /// Create an empty store
    pub fn new() -> Self {
        RecordStore {
            students: BTreeMap::new(),
            records: Vec::new(),
        }
    }

    /// Register a new student
    ///
    /// Both fields are trimmed before validation.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The trimmed id or name is empty (`InvalidInput`)
    /// - A student with the same id already exists (`DuplicateId`)
    pub fn add_student(&mut self, id: &str, name: &str) -> Result<&Student, GradebookError> {
        let id = id.trim();
        let name = name.trim();
        if id.is_empty() {
            return Err(GradebookError::invalid_input("student id"));
        }
        if name.is_empty() {
            return Err(GradebookError::invalid_input("student name"));
        }
        match self.students.entry(id.to_string()) {
            Entry::Occupied(_) => Err(GradebookError::duplicate_id(id)),
            Entry::Vacant(entry) => Ok(&*entry.insert(Student::new(id, name))),
        }
    }

    /// Rename a student in place
    ///
    /// An empty trimmed name is a no-op, not an error: the current name is
    /// kept and `Ok(false)` is returned. Returns `Ok(true)` when the name
    /// changed.
    ///
    /// # Errors
    ///
    /// Returns `StudentNotFound` if no student has this id.
    pub fn edit_student_name(&mut self, id: &str, new_name: &str) -> Result<bool, GradebookError> {
        let student = self
            .students
            .get_mut(id)
            .ok_or_else(|| GradebookError::student_not_found(id))?;
        let new_name = new_name.trim();
        if new_name.is_empty() {
            return Ok(false);
        }
        student.name = new_name.to_string();
        Ok(true)
    }

    /// Delete a student and every course record referencing it
    ///
    /// Returns the number of course records removed by the cascade.
    /// Records of other students are untouched.
    ///
    /// # Errors
    ///
    /// Returns `StudentNotFound` if no student has this id; nothing is
    /// removed in that case.
    pub fn delete_student(&mut self, id: &str) -> Result<usize, GradebookError> {
        if self.students.remove(id).is_none() {
            return Err(GradebookError::student_not_found(id));
        }
        let before = self.records.len();
        self.records.retain(|record| record.student_id != id);
        Ok(before - self.records.len())
    }

    /// Append a course record for an existing student
    ///
    /// The grade letter is accepted case-insensitively and stored in
    /// canonical form. Textual fields are trimmed. Records are immutable
    /// once appended.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The student id is unknown (`StudentNotFound`)
    /// - The grade letter is not on the scale (`InvalidGrade`)
    ///
    /// The record collection is not mutated on either failure.
    pub fn add_record(
        &mut self,
        student_id: &str,
        semester: &str,
        course_code: &str,
        course_name: &str,
        credit: Decimal,
        grade: &str,
    ) -> Result<&CourseRecord, GradebookError> {
        if !self.students.contains_key(student_id) {
            return Err(GradebookError::student_not_found(student_id));
        }
        let grade = GradeLetter::from_str(grade)?;
        self.records.push(CourseRecord {
            student_id: student_id.to_string(),
            semester: semester.trim().to_string(),
            course_code: course_code.trim().to_string(),
            course_name: course_name.trim().to_string(),
            credit,
            grade,
        });
        Ok(&self.records[self.records.len() - 1])
    }

    /// Look up a student by id
    pub fn student(&self, id: &str) -> Option<&Student> {
        self.students.get(id)
    }

    /// All students, ascending by id
    pub fn list_students(&self) -> Vec<&Student> {
        self.students.values().collect()
    }

    /// All course records in insertion order
    pub fn records(&self) -> &[CourseRecord] {
        &self.records
    }

    /// A student's course records, sorted by semester then course code
    ///
    /// Both keys sort ascending lexicographically. Returns an empty vector
    /// for unknown ids; the caller decides whether that is an error.
    pub fn records_for(&self, student_id: &str) -> Vec<&CourseRecord> {
        let mut records: Vec<&CourseRecord> = self
            .records
            .iter()
            .filter(|record| record.student_id == student_id)
            .collect();
        records.sort_by(|a, b| {
            a.semester
                .cmp(&b.semester)
                .then_with(|| a.course_code.cmp(&b.course_code))
        });
        records
    }

    /// Number of registered students
    pub fn student_count(&self) -> usize {
        self.students.len()
    }

    /// Number of course records
    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    /// Load the students file, replacing the in-memory collection
    ///
    /// Rows that don't produce an id and a name (no comma) are skipped.
    /// A missing file is not an error and leaves the collection empty.
    ///
    /// # Errors
    ///
    /// Returns `Io` for any read failure other than the file being absent.
    pub fn load_students(&mut self, path: &Path) -> Result<(), GradebookError> {
        self.students.clear();
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(()),
            Err(e) => return Err(e.into()),
        };
        for row in logical_rows(&text) {
            if row.trim().is_empty() {
                continue;
            }
            if let Some(student) = parse_student_line(&row) {
                self.students.insert(student.id.clone(), student);
            }
        }
        Ok(())
    }

    /// Load the grades file, replacing the in-memory collection
    ///
    /// Returns the number of records loaded. A missing file is not an error
    /// and leaves the collection empty.
    ///
    /// # Errors
    ///
    /// Returns `Io` for read failures other than absence. A row whose credit
    /// or grade fails to parse aborts the remainder of the load and returns
    /// `MalformedRecord` with the row number; every record loaded before the
    /// failing row is kept, so the session can continue with partial data.
    pub fn load_grades(&mut self, path: &Path) -> Result<usize, GradebookError> {
        self.records.clear();
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(0),
            Err(e) => return Err(e.into()),
        };
        for (index, row) in logical_rows(&text).iter().enumerate() {
            if row.trim().is_empty() {
                continue;
            }
            match parse_record_line(row) {
                Ok(record) => self.records.push(record),
                Err(message) => {
                    return Err(GradebookError::malformed_record(
                        index + 1,
                        &message,
                        self.records.len(),
                    ));
                }
            }
        }
        Ok(self.records.len())
    }

    /// Save the students file, overwriting the destination
    ///
    /// One row per student in ascending id order, fields encoded by the
    /// codec.
    ///
    /// # Errors
    ///
    /// Returns `Io` if the file cannot be created or written.
    pub fn save_students(&self, path: &Path) -> Result<(), GradebookError> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        write_students_csv(&self.list_students(), &mut writer)?;
        writer.flush()?;
        Ok(())
    }

    /// Save the grades file, overwriting the destination
    ///
    /// One row per record in insertion order, fields encoded by the codec.
    ///
    /// # Errors
    ///
    /// Returns `Io` if the file cannot be created or written.
    pub fn save_grades(&self, path: &Path) -> Result<(), GradebookError> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        write_records_csv(&self.records, &mut writer)?;
        writer.flush()?;
        Ok(())
    }
}

impl Default for RecordStore {
    fn default() -> Self {
        Self::new()
    }
}
