//! Loader Tests
//!
//! Tests for the delimited-source loader against real files:
//! - Header row is skipped
//! - A malformed row aborts the remainder but keeps prior admissions
//! - The registry is left fully consistent either way

use std::io::Write;

use tempfile::NamedTempFile;

use rosterdb::loader::{load_path, LoaderError};
use rosterdb::registry::Registry;

// =============================================================================
// Helper Functions
// =============================================================================

fn source_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(contents.as_bytes()).expect("write source");
    file.flush().expect("flush source");
    file
}

// =============================================================================
// Well-Formed Sources
// =============================================================================

/// All rows of a well-formed source are admitted and classified.
#[test]
fn test_load_well_formed_source() {
    let file = source_file(
        "Name,ID,GPA,Credit Hours\n\
         Alice,A1,3.8,15\n\
         Brad,B2,1.5,75\n\
         Cara,C3,2.7,45\n",
    );

    let mut registry = Registry::new();
    let outcome = load_path(&mut registry, file.path()).expect("open source");

    assert_eq!(outcome.admitted, 3);
    assert!(outcome.error.is_none());
    assert_eq!(registry.len(), 3);
    assert!(registry.honor_roll().contains("A1"));
    assert!(registry.probation().contains("B2"));
    assert!(registry.sophomore().contains("C3"));
}

/// Blank (sentinel) rows are skipped, not errors.
#[test]
fn test_blank_rows_skipped() {
    let file = source_file(
        "Name,ID,GPA,Credit Hours\n\
         ,,0.0,0\n\
         Alice,A1,3.8,15\n",
    );

    let mut registry = Registry::new();
    let outcome = load_path(&mut registry, file.path()).expect("open source");

    assert_eq!(outcome.admitted, 1);
    assert_eq!(outcome.skipped, 1);
    assert!(outcome.error.is_none());
}

// =============================================================================
// Malformed Sources
// =============================================================================

/// A non-numeric gpa aborts the remainder; prior rows stay admitted and the
/// registry is fully consistent.
#[test]
fn test_malformed_gpa_aborts_but_keeps_prior_rows() {
    let file = source_file(
        "Name,ID,GPA,Credit Hours\n\
         Alice,A1,3.8,15\n\
         Brad,B2,oops,75\n\
         Cara,C3,2.7,45\n",
    );

    let mut registry = Registry::new();
    let outcome = load_path(&mut registry, file.path()).expect("open source");

    assert_eq!(outcome.admitted, 1);
    assert!(matches!(
        outcome.error,
        Some(LoaderError::MalformedRow { line: 3, .. })
    ));

    // Prior row fully classified, failed and later rows absent everywhere
    assert_eq!(registry.len(), 1);
    assert!(registry.identity().contains("A1"));
    assert!(registry.honor_roll().contains("A1"));
    assert!(!registry.identity().contains("B2"));
    assert!(!registry.probation().contains("B2"));
    assert!(!registry.identity().contains("C3"));
}

/// A duplicate id in the source stops the load with the registry error.
#[test]
fn test_duplicate_id_in_source_stops_load() {
    let file = source_file(
        "Name,ID,GPA,Credit Hours\n\
         Alice,A1,3.8,15\n\
         Copy,A1,2.0,40\n\
         Cara,C3,2.7,45\n",
    );

    let mut registry = Registry::new();
    let outcome = load_path(&mut registry, file.path()).expect("open source");

    assert_eq!(outcome.admitted, 1);
    assert!(matches!(
        outcome.error,
        Some(LoaderError::Registry(_))
    ));
    assert_eq!(registry.find_by_id("A1").map(|s| s.name.as_str()), Some("Alice"));
    assert!(registry.find_by_id("C3").is_none());
}

/// A missing file surfaces as an I/O error before any row is read.
#[test]
fn test_missing_file_is_io_error() {
    let mut registry = Registry::new();
    let result = load_path(&mut registry, "/no/such/students.csv");

    assert!(matches!(result, Err(LoaderError::Io(_))));
    assert!(registry.is_empty());
}
