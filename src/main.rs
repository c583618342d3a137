//! Gradebook CLI
//!
//! Interactive student result management over two flat CSV files.
//!
//! # Usage
//!
//! ```bash
//! cargo run
//! cargo run -- --students-file students.csv --grades-file grades.csv
//! ```
//!
//! The program loads both files on startup (missing files start empty),
//! then presents a menu of record-keeping and report actions. State is
//! persisted only by the explicit save actions.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (terminal unavailable, unrecoverable I/O failure in the menu)

use gradebook_engine::cli;
use gradebook_engine::core::RecordStore;
use std::process;

fn main() {
    let args = cli::parse_args();

    let mut store = RecordStore::new();

    // Load failures are recoverable: report and continue with what loaded.
    if let Err(e) = store.load_students(&args.students_file) {
        eprintln!("Warning: failed to load students: {}", e);
    }
    if let Err(e) = store.load_grades(&args.grades_file) {
        eprintln!("Warning: {}", e);
    }

    if let Err(e) = cli::main_menu(store, &args.students_file, &args.grades_file) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
