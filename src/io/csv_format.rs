//! CSV format handling for the students and grades files
//!
//! This module centralizes all file format concerns, providing:
//! - Field encoding with minimal quoting
//! - A forgiving, quote-aware line decoder
//! - Row splitting that keeps quoted newlines intact
//! - Pure parse functions for the two row shapes
//! - Writers for the two files
//!
//! All functions are pure (no file I/O) for easy testing. Both files are
//! headerless; the store decides what to do with each parsed row.
//!
//! # Decoding policy
//!
//! Decoding is deliberately forgiving. An unterminated quote at the end of a
//! row is accepted as-is, short rows are padded with empty fields, and long
//! rows keep their excess fields. Hand-edited files should load, not error.

use crate::types::{CourseRecord, GradeLetter, Student, GradebookError};
use rust_decimal::Decimal;
use std::io::Write;
use std::str::FromStr;

/// Number of fields in a grades-file row
pub const RECORD_FIELD_COUNT: usize = 6;

/// Encode a single field for output
///
/// If the field contains a comma, a double quote, or a newline it is wrapped
/// in double quotes with every embedded quote doubled; otherwise it is
/// returned unchanged.
pub fn encode_field(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        let mut out = String::with_capacity(field.len() + 2);
        out.push('"');
        for ch in field.chars() {
            if ch == '"' {
                out.push('"');
            }
            out.push(ch);
        }
        out.push('"');
        out
    } else {
        field.to_string()
    }
}

/// Decode one row into its fields
///
/// Scans character by character, tracking an in-quotes flag. Inside quotes a
/// doubled quote emits one literal quote and is consumed as a unit; any other
/// quote toggles quote mode. A comma outside quotes ends the current field,
/// and the last field is emitted at end of row.
///
/// The result is padded with empty strings up to `expected` fields; excess
/// fields are preserved, never truncated. Pass `expected == 0` for the raw
/// field sequence.
///
/// Malformed quoting (an unterminated quote at end of row) is accepted as-is;
/// the decoder never fails.
pub fn decode_line(line: &str, expected: usize) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' if in_quotes => {
                if chars.peek() == Some(&'"') {
                    // doubled quote: literal quote, consumed as one unit
                    current.push('"');
                    chars.next();
                } else {
                    in_quotes = false;
                }
            }
            '"' => in_quotes = true,
            ',' if !in_quotes => fields.push(std::mem::take(&mut current)),
            _ => current.push(ch),
        }
    }
    fields.push(current);

    while fields.len() < expected {
        fields.push(String::new());
    }
    fields
}

/// Split a document into logical rows
///
/// A newline outside quotes ends a row; a newline inside quotes belongs to
/// the field, which is how quoted names containing line breaks survive a
/// save-then-load round trip. A trailing carriage return on each row is
/// dropped so hand-edited CRLF files load cleanly.
pub fn logical_rows(text: &str) -> Vec<String> {
    let mut rows = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for ch in text.chars() {
        match ch {
            '"' => {
                in_quotes = !in_quotes;
                current.push('"');
            }
            '\n' if !in_quotes => {
                if current.ends_with('\r') {
                    current.pop();
                }
                rows.push(std::mem::take(&mut current));
            }
            _ => current.push(ch),
        }
    }
    if !current.is_empty() {
        rows.push(current);
    }
    rows
}

/// Parse one students-file row
///
/// Decodes the row and treats the first field as the id and everything after
/// it, rejoined with `","`, as the name. Rejoining keeps hand-edited rows
/// with unquoted commas in the name (`S1,Doe, Jane`) meaning the same thing
/// as writer-quoted rows (`S1,"Doe, Jane"`). A hand-edited name containing a
/// literal double quote must be quote-escaped to survive.
///
/// Returns `None` for rows that produce fewer than two fields; the loader
/// skips them.
pub fn parse_student_line(line: &str) -> Option<Student> {
    let fields = decode_line(line, 0);
    if fields.len() < 2 {
        return None;
    }
    let id = fields[0].trim();
    let name = fields[1..].join(",");
    Some(Student::new(id, name.trim()))
}

/// Parse one grades-file row
///
/// Expects six fields: studentId, semester, courseCode, courseName, credit,
/// gradeLetter. Short rows are padded by the decoder; fields beyond the
/// sixth are ignored. All fields are trimmed. The grade letter is accepted
/// case-insensitively and normalized by the enum.
///
/// # Errors
///
/// Returns a message describing the failure when the credit is not a valid
/// decimal number or the grade letter is not on the scale. The caller turns
/// this into a `MalformedRecord` carrying the row number.
pub fn parse_record_line(line: &str) -> Result<CourseRecord, String> {
    let fields = decode_line(line, RECORD_FIELD_COUNT);

    let credit_text = fields[4].trim();
    let credit = Decimal::from_str(credit_text)
        .map_err(|_| format!("malformed credit '{}'", credit_text))?;

    let grade_text = fields[5].trim();
    let grade = GradeLetter::from_str(grade_text)
        .map_err(|_| format!("invalid grade '{}'", grade_text))?;

    Ok(CourseRecord {
        student_id: fields[0].trim().to_string(),
        semester: fields[1].trim().to_string(),
        course_code: fields[2].trim().to_string(),
        course_name: fields[3].trim().to_string(),
        credit,
        grade,
    })
}

/// Write students in CSV format
///
/// One `id,name` row per student in the given order, each field passed
/// through `encode_field`, newline-terminated, no header.
///
/// # Errors
///
/// Returns `Io` if a write fails.
pub fn write_students_csv(
    students: &[&Student],
    output: &mut dyn Write,
) -> Result<(), GradebookError> {
    for student in students {
        writeln!(
            output,
            "{},{}",
            encode_field(&student.id),
            encode_field(&student.name)
        )?;
    }
    Ok(())
}

/// Write course records in CSV format
///
/// One six-field row per record in the given order. Textual fields go
/// through `encode_field`; the credit is written as a plain unquoted
/// decimal; the grade is its canonical uppercase letter.
///
/// # Errors
///
/// Returns `Io` if a write fails.
pub fn write_records_csv(
    records: &[CourseRecord],
    output: &mut dyn Write,
) -> Result<(), GradebookError> {
    for record in records {
        writeln!(
            output,
            "{},{},{},{},{},{}",
            encode_field(&record.student_id),
            encode_field(&record.semester),
            encode_field(&record.course_code),
            encode_field(&record.course_name),
            record.credit,
            record.grade.as_str()
        )?;
    }
    Ok(())
}
