// Interactive menu dispatcher.
// Translates operator input into store/engine operations and formats the
// structured results; the core never prints. All core errors are recoverable
// here: they are shown and the loop continues.

use crate::core::{points_for, RecordStore, ReportEngine};
use crate::types::{CourseRecord, SemesterReport, Transcript};
use anyhow::Result;
use dialoguer::{Confirm, Input, Select};
use rust_decimal::Decimal;
use std::path::Path;
use std::str::FromStr;

/// Main interactive menu. Owns the store for the session and runs a select
/// loop until the operator chooses "Save and exit".
///
/// State is only persisted by the two save actions; everything else operates
/// on memory.
pub fn main_menu(mut store: RecordStore, students_path: &Path, grades_path: &Path) -> Result<()> {
    loop {
        let items = [
            "Add student",
            "Add course record",
            "Edit student name",
            "Delete student (and their records)",
            "List students",
            "List records for a student",
            "Report card (semester GPA + CGPA)",
            "Save",
            "Save and exit",
        ];
        let selection = Select::new()
            .with_prompt("Student Result Management")
            .items(&items)
            .default(0)
            .interact()?;

        match selection {
            0 => add_student(&mut store)?,
            1 => add_course_record(&mut store)?,
            2 => edit_student(&mut store)?,
            3 => delete_student(&mut store)?,
            4 => list_students(&store),
            5 => list_student_records(&store)?,
            6 => report_card(&store)?,
            7 => save_all(&store, students_path, grades_path),
            8 => {
                save_all(&store, students_path, grades_path);
                println!("Exiting.");
                return Ok(());
            }
            _ => {}
        }
        println!();
    }
}

fn add_student(store: &mut RecordStore) -> Result<()> {
    let id: String = Input::new()
        .with_prompt("Student ID (unique)")
        .allow_empty(true)
        .interact_text()?;
    let name: String = Input::new()
        .with_prompt("Full name")
        .allow_empty(true)
        .interact_text()?;

    match store.add_student(&id, &name) {
        Ok(student) => println!("Student added: {} : {}", student.id, student.name),
        Err(e) => println!("{}", e),
    }
    Ok(())
}

fn add_course_record(store: &mut RecordStore) -> Result<()> {
    let id: String = Input::new().with_prompt("Student ID").interact_text()?;
    let id = id.trim().to_string();
    if store.student(&id).is_none() {
        println!("Student not found. Add the student first.");
        return Ok(());
    }

    let semester: String = Input::new()
        .with_prompt("Semester (e.g. S1, S2, 2024-1)")
        .interact_text()?;
    let code: String = Input::new()
        .with_prompt("Course code (e.g. CS101)")
        .interact_text()?;
    let name: String = Input::new().with_prompt("Course name").interact_text()?;

    let credit_text: String = Input::new().with_prompt("Credit (e.g. 3)").interact_text()?;
    let credit = match Decimal::from_str(credit_text.trim()) {
        Ok(credit) if credit >= Decimal::ZERO => credit,
        Ok(_) => {
            println!("Credit cannot be negative.");
            return Ok(());
        }
        Err(_) => {
            println!("Invalid credit.");
            return Ok(());
        }
    };

    let grade: String = Input::new()
        .with_prompt("Grade letter (A+, A, B+, B, C, D, F)")
        .interact_text()?;

    match store.add_record(&id, &semester, &code, &name, credit, &grade) {
        Ok(record) => println!(
            "Record added: [{}] {} - {} ({}cr) : {}",
            record.semester, record.course_code, record.course_name, record.credit, record.grade
        ),
        Err(e) => println!("{}", e),
    }
    Ok(())
}

fn edit_student(store: &mut RecordStore) -> Result<()> {
    let id: String = Input::new()
        .with_prompt("Student ID to edit")
        .interact_text()?;
    let id = id.trim().to_string();

    match store.student(&id) {
        Some(student) => println!("Current name: {}", student.name),
        None => {
            println!("Not found.");
            return Ok(());
        }
    }

    let new_name: String = Input::new()
        .with_prompt("New name (blank keeps current)")
        .allow_empty(true)
        .interact_text()?;

    match store.edit_student_name(&id, &new_name) {
        Ok(true) => println!("Updated."),
        Ok(false) => println!("No change."),
        Err(e) => println!("{}", e),
    }
    Ok(())
}

fn delete_student(store: &mut RecordStore) -> Result<()> {
    let id: String = Input::new()
        .with_prompt("Student ID to delete")
        .interact_text()?;
    let id = id.trim().to_string();

    let prompt = match store.student(&id) {
        Some(student) => format!(
            "Delete {} ({}) and all their course records?",
            student.name, student.id
        ),
        None => {
            println!("Not found.");
            return Ok(());
        }
    };
    if !Confirm::new().with_prompt(prompt).default(false).interact()? {
        println!("Cancelled.");
        return Ok(());
    }

    match store.delete_student(&id) {
        Ok(removed) => println!("Deleted student '{}' and {} course record(s).", id, removed),
        Err(e) => println!("{}", e),
    }
    Ok(())
}

fn list_students(store: &RecordStore) {
    let students = store.list_students();
    if students.is_empty() {
        println!("No students found.");
        return;
    }
    println!("Students:");
    for student in students {
        println!("  {} : {}", student.id, student.name);
    }
}

fn list_student_records(store: &RecordStore) -> Result<()> {
    let id: String = Input::new().with_prompt("Student ID").interact_text()?;
    let id = id.trim().to_string();

    let name = match store.student(&id) {
        Some(student) => student.name.clone(),
        None => {
            println!("Student not found.");
            return Ok(());
        }
    };

    let records = store.records_for(&id);
    if records.is_empty() {
        println!("No records for this student.");
        return Ok(());
    }

    println!("Records for {} - {}", id, name);
    for record in records {
        println!(
            "  [{}] {} - {} ({}cr) : {}",
            record.semester, record.course_code, record.course_name, record.credit, record.grade
        );
    }
    Ok(())
}

fn report_card(store: &RecordStore) -> Result<()> {
    let id: String = Input::new().with_prompt("Student ID").interact_text()?;
    let id = id.trim().to_string();

    let engine = ReportEngine::new(store);
    let transcript = match engine.transcript(&id) {
        Ok(transcript) => transcript,
        Err(e) => {
            println!("{}", e);
            return Ok(());
        }
    };

    let mut items: Vec<String> = vec!["Full transcript (all semesters)".to_string()];
    items.extend(transcript.semesters.iter().map(|g| g.semester.clone()));
    let selection = Select::new()
        .with_prompt("Report for")
        .items(&items)
        .default(0)
        .interact()?;

    if selection == 0 {
        print_transcript(&transcript);
    } else {
        match engine.semester_report(&id, &items[selection]) {
            Ok(report) => print_semester_report(&report),
            Err(e) => println!("{}", e),
        }
    }
    Ok(())
}

fn save_all(store: &RecordStore, students_path: &Path, grades_path: &Path) {
    let result = store
        .save_students(students_path)
        .and_then(|_| store.save_grades(grades_path));
    match result {
        Ok(()) => println!("Data saved."),
        Err(e) => println!("Save failed: {}", e),
    }
}

fn print_course_table(records: &[CourseRecord]) {
    println!(
        "{:<10} {:<30} {:>6} {:<5} {:>6}",
        "Code", "Course Name", "Credit", "Grade", "Points"
    );
    println!("{}", "-".repeat(61));
    for record in records {
        println!(
            "{:<10} {:<30} {:>6} {:<5} {:>6}",
            record.course_code,
            record.course_name,
            format!("{:.2}", record.credit),
            record.grade.as_str(),
            format!("{:.2}", points_for(record)),
        );
    }
}

fn print_transcript(transcript: &Transcript) {
    println!(
        "===== Transcript for {} ({}) =====",
        transcript.student.name, transcript.student.id
    );
    for group in &transcript.semesters {
        println!();
        println!("--- Semester: {} ---", group.semester);
        print_course_table(&group.records);
        println!("Semester GPA: {}  (Credits: {})", group.gpa, group.credits);
    }
    println!();
    println!(
        "Cumulative CGPA: {}  (Total credits: {})",
        transcript.cgpa, transcript.total_credits
    );
}

fn print_semester_report(report: &SemesterReport) {
    println!("--- Semester: {} ---", report.semester);
    print_course_table(&report.records);
    println!("Semester GPA: {}  (Credits: {})", report.gpa, report.credits);
    println!(
        "Cumulative CGPA (all semesters): {}  (Total credits: {})",
        report.cgpa, report.total_credits
    );
}
