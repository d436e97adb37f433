//! CSV source reading
//!
//! Rows carry four comma-separated fields in order: name, id, gpa, credit
//! hours. The first row is a header and is skipped. Rows are admitted as
//! they parse; a malformed row aborts the remainder of the load but leaves
//! every previously admitted row in place.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use tracing::{info, warn};

use super::errors::{LoaderError, LoaderResult};
use crate::record::Student;
use crate::registry::{Admission, Registry};

/// One raw source row, in source field order
#[derive(Debug, Deserialize)]
pub struct RawRow {
    /// Student name
    pub name: String,
    /// Student id
    pub id: String,
    /// Gpa as decimal text
    pub gpa: f64,
    /// Credit hours as integer text
    pub credit_hours: u32,
}

impl RawRow {
    /// Convert the raw row into a record
    pub fn into_student(self) -> Student {
        Student::new(self.name, self.id, self.gpa, self.credit_hours)
    }
}

/// Outcome of loading one source
#[derive(Debug)]
pub struct LoadOutcome {
    /// Rows admitted into the registry
    pub admitted: usize,
    /// Sentinel (blank) rows skipped
    pub skipped: usize,
    /// The error that stopped the load, if any
    pub error: Option<LoaderError>,
}

/// Load rows from a file path.
///
/// Errs only if the file cannot be opened; row-level failures are reported
/// in the returned outcome.
pub fn load_path(registry: &mut Registry, path: impl AsRef<Path>) -> LoaderResult<LoadOutcome> {
    let file = File::open(path.as_ref())?;
    info!(path = %path.as_ref().display(), "loading students from file");
    Ok(load_reader(registry, file))
}

/// Load rows from any reader, admitting each row as it parses.
pub fn load_reader(registry: &mut Registry, reader: impl Read) -> LoadOutcome {
    let mut rows = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut outcome = LoadOutcome {
        admitted: 0,
        skipped: 0,
        error: None,
    };

    for record in rows.records() {
        let record = match record {
            Ok(r) => r,
            Err(e) => {
                outcome.error = Some(malformed(&e));
                break;
            }
        };
        let line = record.position().map(|p| p.line()).unwrap_or(0);

        // Positional deserialization: the header row names are not trusted
        let row: RawRow = match record.deserialize(None) {
            Ok(r) => r,
            Err(e) => {
                warn!(line, error = %e, "malformed row, aborting load");
                outcome.error = Some(LoaderError::MalformedRow {
                    line,
                    reason: e.to_string(),
                });
                break;
            }
        };

        match registry.insert(row.into_student()) {
            Ok(Admission::Admitted) => outcome.admitted += 1,
            Ok(Admission::SkippedSentinel) => outcome.skipped += 1,
            Err(e) => {
                warn!(line, error = %e, "registry rejected row, aborting load");
                outcome.error = Some(e.into());
                break;
            }
        }
    }

    info!(
        admitted = outcome.admitted,
        skipped = outcome.skipped,
        "finished loading source"
    );
    outcome
}

fn malformed(e: &csv::Error) -> LoaderError {
    let line = e.position().map(|p| p.line()).unwrap_or(0);
    LoaderError::MalformedRow {
        line,
        reason: e.to_string(),
    }
}
