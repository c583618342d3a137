use clap::Parser;
use std::path::PathBuf;

/// Manage student course records and GPA report cards
#[derive(Parser, Debug)]
#[command(name = "gradebook")]
#[command(about = "File-backed student result keeper with GPA/CGPA reports", long_about = None)]
pub struct CliArgs {
    /// Students file path
    #[arg(
        long = "students-file",
        value_name = "PATH",
        default_value = "students.csv",
        help = "Path to the students CSV file"
    )]
    pub students_file: PathBuf,

    /// Grades file path
    #[arg(
        long = "grades-file",
        value_name = "PATH",
        default_value = "grades.csv",
        help = "Path to the grades CSV file"
    )]
    pub grades_file: PathBuf,
}
