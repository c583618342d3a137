//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `student`: Student identity types
//! - `record`: Course records and the grade scale
//! - `report`: Value types produced by the aggregation engine
//! - `error`: Error types for the gradebook engine

pub mod error;
pub mod record;
pub mod report;
pub mod student;

pub use error::GradebookError;
pub use record::{CourseRecord, GradeLetter};
pub use report::{SemesterGroup, SemesterReport, SemesterSummary, Transcript};
pub use student::{Student, StudentId};
