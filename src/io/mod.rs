//! I/O module
//!
//! Handles the flat-file CSV format.
//!
//! # Components
//!
//! - `csv_format` - Field encoding/decoding, row parsing, and file writers

pub mod csv_format;

pub use csv_format::{
    decode_line, encode_field, logical_rows, parse_record_line, parse_student_line,
    write_records_csv, write_students_csv,
};
