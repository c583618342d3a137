//! Gradebook Engine Library
//! # Overview
//!
//! This library provides a file-backed student result keeper: register
//! students, record per-course grades, and compute credit-weighted GPA and
//! CGPA report cards.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Student, CourseRecord, GradeLetter, etc.)
//! - [`cli`] - CLI argument parsing and the interactive menu dispatcher
//! - [`core`] - Business logic components:
//!   - [`core::store`] - In-memory collections with flat-file persistence
//!   - [`core::engine`] - Semester grouping and GPA/CGPA aggregation
//! - [`io`] - The CSV codec for the two headerless data files
//!
//! # Data files
//!
//! State persists in two newline-terminated files with no header row:
//!
//! - **Students file**: one `id,name` row per student
//! - **Grades file**: one six-field row per course record:
//!   `studentId,semester,courseCode,courseName,credit,gradeLetter`
//!
//! Fields containing commas, quotes, or newlines are quoted with doubled
//! embedded quotes; decoding is forgiving toward hand-edited files.
//!
//! # Grade scale
//!
//! A fixed, process-wide mapping from letter to grade points:
//! A+=10, A=9, B+=8, B=7, C=6, D=5, F=0. Letters are accepted
//! case-insensitively and stored uppercase.

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod types;

pub use crate::core::{points_for, semester_summary, RecordStore, ReportEngine};
pub use crate::io::{decode_line, encode_field};
pub use crate::types::{
    CourseRecord, GradeLetter, GradebookError, SemesterGroup, SemesterReport, SemesterSummary,
    Student, StudentId, Transcript,
};
