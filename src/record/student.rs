//! The student record
//!
//! A `Student` is the unit of storage: the registry owns exactly one copy per
//! admitted record, and every index refers back to it by `id`.

/// A single student record.
///
/// The `id` is the stable identity key and never changes after construction.
/// `gpa` is nominally in [0.0, 4.0] but is not validated here; out-of-range
/// values classify and order through the same thresholds as everything else.
#[derive(Debug, Clone, PartialEq)]
pub struct Student {
    /// Full name
    pub name: String,
    /// Unique identifier (stable identity key)
    pub id: String,
    /// Grade point average
    pub gpa: f64,
    /// Completed credit hours
    pub credit_hours: u32,
}

impl Student {
    /// Create a new student record
    pub fn new(name: impl Into<String>, id: impl Into<String>, gpa: f64, credit_hours: u32) -> Self {
        Self {
            name: name.into(),
            id: id.into(),
            gpa,
            credit_hours,
        }
    }

    /// Whether this record is the blank-parse sentinel.
    ///
    /// A sentinel has an empty name, empty id, zero gpa and zero credit hours.
    /// It stands for a blank or failed row and is skipped at admission.
    pub fn is_sentinel(&self) -> bool {
        self.name.is_empty() && self.id.is_empty() && self.gpa == 0.0 && self.credit_hours == 0
    }
}
