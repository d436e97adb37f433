//! Interactive menu loop
//!
//! Thin collaborator over the registry: every menu action maps 1:1 to a
//! registry operation or an ordered index view. All prompts read from stdin
//! line by line; EOF exits cleanly.

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use tracing_subscriber::EnvFilter;

use super::args::Cli;
use super::display::{print_records, render_student};
use super::errors::CliResult;
use crate::loader;
use crate::record::Student;
use crate::registry::{Admission, Registry, RegistryError};

/// Number of rows shown by the head view
const HEAD_ROWS: usize = 10;

/// CLI entry point: parse args, set up logging, load the optional source,
/// then serve the menu until exit or EOF.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    init_tracing(&cli.log_level);

    let mut registry = Registry::new();

    if let Some(path) = &cli.load {
        let outcome = loader::load_path(&mut registry, path)?;
        println!("Loaded {} students from the file.", outcome.admitted);
        if let Some(e) = outcome.error {
            println!("Stopped reading the file early: {}", e);
        }
    }

    let stdin = io::stdin();
    let mut input = stdin.lock();
    menu_loop(&mut registry, &mut input)
}

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn menu_loop(registry: &mut Registry, input: &mut impl BufRead) -> CliResult<()> {
    loop {
        println!();
        println!("Enter: \tC to create a new student and add them to the database,");
        println!("\tR to read from the database,");
        println!("\tD to delete a student from the database, or");
        println!("\tX to exit the program.");

        let choice = match prompt(input, "Your choice --> ")? {
            Some(line) => line,
            None => return Ok(()), // EOF
        };

        match choice.trim() {
            "C" | "c" => create_student(registry, input)?,
            "R" | "r" => read_menu(registry, input)?,
            "D" | "d" => delete_student(registry, input)?,
            "X" | "x" => {
                println!("Exiting...");
                return Ok(());
            }
            _ => println!("Invalid option. Try again."),
        }
    }
}

fn create_student(registry: &mut Registry, input: &mut impl BufRead) -> CliResult<()> {
    let Some(name) = prompt(input, "Enter the name of the new student: ")? else {
        return Ok(());
    };
    let Some(id) = prompt(input, "Enter the ID of the new student: ")? else {
        return Ok(());
    };
    let Some(gpa) = prompt_number::<f64>(input, "Enter the GPA of the new student: ")? else {
        return Ok(());
    };
    let Some(hours) = prompt_number::<u32>(input, "Enter the credit hours of the new student: ")?
    else {
        return Ok(());
    };

    let student = Student::new(name.trim(), id.trim(), gpa, hours);
    let preview = render_student(&student);
    match registry.insert(student) {
        Ok(Admission::Admitted) => {
            println!("Successfully added the following student to the database!");
            println!("{}", preview);
        }
        Ok(Admission::SkippedSentinel) => {
            println!("A blank student cannot be added to the database.");
        }
        Err(RegistryError::DuplicateId(id)) => {
            println!("A student with the ID {} is already in the database.", id);
        }
        Err(e) => println!("Could not add the student: {}", e),
    }
    Ok(())
}

fn delete_student(registry: &mut Registry, input: &mut impl BufRead) -> CliResult<()> {
    let Some(id) = prompt(input, "Enter the ID of the student to be removed: ")? else {
        return Ok(());
    };
    let id = id.trim();
    match registry.remove_by_id(id) {
        Ok(_) => println!("Removed the student with the ID {}.", id),
        Err(RegistryError::RecordNotFound(_)) => {
            println!("Sorry, there is no student in the database with the ID {}.", id);
        }
        Err(e) => println!("Could not remove the student: {}", e),
    }
    Ok(())
}

fn read_menu(registry: &Registry, input: &mut impl BufRead) -> CliResult<()> {
    println!("Select one of the following:");
    println!("\t1) Display the head (first {} rows) of the database", HEAD_ROWS);
    println!("\t2) Display students on the honor roll, in order of their GPA");
    println!("\t3) Display students on academic probation, in order of their GPA");
    println!("\t4) Display freshmen students, in order of their name");
    println!("\t5) Display sophomore students, in order of their name");
    println!("\t6) Display junior students, in order of their name");
    println!("\t7) Display senior students, in order of their name");
    println!("\t8) Display the information of a particular student");

    loop {
        let Some(choice) = prompt(input, "Your choice --> ")? else {
            return Ok(());
        };
        match choice.trim() {
            "1" => {
                let head = registry.take_first(registry.identity(), HEAD_ROWS);
                print_records(head.into_iter());
            }
            "2" => print_records(registry.records(registry.honor_roll())),
            "3" => print_records(registry.records(registry.probation())),
            "4" => print_records(registry.records(registry.freshman())),
            "5" => print_records(registry.records(registry.sophomore())),
            "6" => print_records(registry.records(registry.junior())),
            "7" => print_records(registry.records(registry.senior())),
            "8" => {
                let Some(id) = prompt(input, "Enter the ID of the student to find: ")? else {
                    return Ok(());
                };
                let id = id.trim();
                match registry.find_by_id(id) {
                    Some(student) => println!("{}", render_student(student)),
                    None => println!(
                        "Sorry, there is no student in the database with the ID {}.",
                        id
                    ),
                }
            }
            _ => {
                println!("Sorry, that input was invalid. Please try again.");
                continue;
            }
        }
        return Ok(());
    }
}

/// Print a prompt and read one line. Returns None on EOF.
fn prompt(input: &mut impl BufRead, text: &str) -> CliResult<Option<String>> {
    print!("{}", text);
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
}

/// Prompt until the line parses as a number. Returns None on EOF.
fn prompt_number<T: FromStr>(input: &mut impl BufRead, text: &str) -> CliResult<Option<T>> {
    loop {
        let Some(line) = prompt(input, text)? else {
            return Ok(None);
        };
        match line.trim().parse::<T>() {
            Ok(v) => return Ok(Some(v)),
            Err(_) => println!("Sorry, that input was invalid. Please try again."),
        }
    }
}
