//! Console formatting of records
//!
//! The core never formats output; everything user-facing renders here.

use crate::record::Student;

/// Message shown when a view matches no records
pub const NO_MATCH: &str = "There are no students matching that criteria.";

/// Render one record for the console (gpa at 2 decimal places)
pub fn render_student(student: &Student) -> String {
    format!(
        "{}:\n    ID - {}\n    GPA - {:.2}\n    Credit Hours - {}",
        student.name, student.id, student.gpa, student.credit_hours
    )
}

/// Print every record of a view, or the no-match message if it is empty
pub fn print_records<'a>(records: impl Iterator<Item = &'a Student>) {
    let mut any = false;
    for student in records {
        println!("{}", render_student(student));
        any = true;
    }
    if !any {
        println!("{}", NO_MATCH);
    }
}
