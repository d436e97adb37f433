//! The registry: owning store plus seven mutually consistent indexes
//!
//! One owning copy of every admitted record lives in the store, keyed by id.
//! The seven indexes hold id slots only. A record holds one identity slot,
//! at most one tier slot and exactly one standing slot; removal excises all
//! of them before the owning copy is released.

use std::collections::HashMap;

use tracing::{debug, info, warn};

use super::classify::{classify, ClassStanding, TierList};
use super::errors::{RegistryError, RegistryResult};
use crate::index::{RosterIndex, SortOrder};
use crate::record::Student;

/// Outcome of an admission attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admission {
    /// Record was admitted into the identity index and its classified indexes
    Admitted,
    /// Record was the blank-parse sentinel and was skipped without mutation
    SkippedSentinel,
}

/// Outcome of a bulk row load.
///
/// `admitted` counts records actually admitted; rows after the first error
/// are not attempted, and rows admitted before it stay in place.
#[derive(Debug)]
pub struct LoadReport {
    /// Number of rows admitted
    pub admitted: usize,
    /// Number of sentinel rows skipped
    pub skipped: usize,
    /// The error that stopped the load, if any
    pub error: Option<RegistryError>,
}

/// The student registry.
///
/// Every public operation either fully applies or leaves the registry
/// unchanged: validation happens before the first mutation.
pub struct Registry {
    /// Owning store: exactly one copy per admitted id
    students: HashMap<String, Student>,

    /// Master identity index, ordered by id; one slot per live record
    identity: RosterIndex,

    /// gpa >= 3.5, ordered by gpa
    honor_roll: RosterIndex,
    /// gpa < 2.0, ordered by gpa
    probation: RosterIndex,

    /// Class-standing indexes, ordered by name; exactly one holds each record
    freshman: RosterIndex,
    sophomore: RosterIndex,
    junior: RosterIndex,
    senior: RosterIndex,
}

impl Registry {
    /// Creates an empty registry
    pub fn new() -> Self {
        Self {
            students: HashMap::new(),
            identity: RosterIndex::new(SortOrder::ById),
            honor_roll: RosterIndex::new(SortOrder::ByGpa),
            probation: RosterIndex::new(SortOrder::ByGpa),
            freshman: RosterIndex::new(SortOrder::ByName),
            sophomore: RosterIndex::new(SortOrder::ByName),
            junior: RosterIndex::new(SortOrder::ByName),
            senior: RosterIndex::new(SortOrder::ByName),
        }
    }

    /// Admit a record.
    ///
    /// Sentinels are skipped without mutation. A duplicate id is rejected
    /// before any index is touched. Otherwise the record enters the identity
    /// index plus every index its classification selects, then the owning
    /// copy moves into the store.
    pub fn insert(&mut self, student: Student) -> RegistryResult<Admission> {
        if student.is_sentinel() {
            debug!("skipping sentinel record");
            return Ok(Admission::SkippedSentinel);
        }
        if self.students.contains_key(&student.id) {
            return Err(RegistryError::DuplicateId(student.id.clone()));
        }

        let placement = classify(&student);

        self.identity.insert(&student);
        match placement.tier {
            Some(TierList::HonorRoll) => self.honor_roll.insert(&student),
            Some(TierList::Probation) => self.probation.insert(&student),
            None => {}
        }
        self.standing_index_mut(placement.standing).insert(&student);

        info!(id = %student.id, ?placement, "admitted student");
        self.students.insert(student.id.clone(), student);
        Ok(Admission::Admitted)
    }

    /// Remove a record by id.
    ///
    /// Unknown ids err without mutation. Otherwise every secondary index is
    /// excised first (each tolerating absence), then the identity slot, and
    /// only then is the owning copy taken out of the store and returned, so
    /// no index ever holds a slot for a released record.
    pub fn remove_by_id(&mut self, id: &str) -> RegistryResult<Student> {
        if !self.students.contains_key(id) {
            return Err(RegistryError::RecordNotFound(id.to_string()));
        }

        self.honor_roll.remove_by_id(id);
        self.probation.remove_by_id(id);
        self.freshman.remove_by_id(id);
        self.sophomore.remove_by_id(id);
        self.junior.remove_by_id(id);
        self.senior.remove_by_id(id);
        self.identity.remove_by_id(id);

        info!(id, "removed student");
        self.students
            .remove(id)
            .ok_or_else(|| RegistryError::RecordNotFound(id.to_string()))
    }

    /// Read-only lookup by id
    pub fn find_by_id(&self, id: &str) -> Option<&Student> {
        self.students.get(id)
    }

    /// Admit a sequence of pre-parsed rows.
    ///
    /// Stops at the first error, leaving rows admitted before it intact.
    /// Sentinel rows are skipped and counted, not errors.
    pub fn load_rows(&mut self, rows: impl IntoIterator<Item = Student>) -> LoadReport {
        let mut report = LoadReport {
            admitted: 0,
            skipped: 0,
            error: None,
        };

        for row in rows {
            match self.insert(row) {
                Ok(Admission::Admitted) => report.admitted += 1,
                Ok(Admission::SkippedSentinel) => report.skipped += 1,
                Err(e) => {
                    warn!(error = %e, "stopping row load");
                    report.error = Some(e);
                    break;
                }
            }
        }

        report
    }

    /// Resolve an index's id slots to records, in the index's stored order
    pub fn records<'a>(&'a self, index: &'a RosterIndex) -> impl Iterator<Item = &'a Student> {
        index.iter().filter_map(|id| self.students.get(id))
    }

    /// Up to n leading records of an index, in stored order
    pub fn take_first<'a>(&'a self, index: &'a RosterIndex, n: usize) -> Vec<&'a Student> {
        self.records(index).take(n).collect()
    }

    /// Release every record and all index storage.
    ///
    /// Each owning copy is dropped exactly once; index slots go first so no
    /// index outlives the records it refers to.
    pub fn teardown(&mut self) {
        self.honor_roll.clear();
        self.probation.clear();
        self.freshman.clear();
        self.sophomore.clear();
        self.junior.clear();
        self.senior.clear();
        self.identity.clear();
        self.students.clear();
    }

    /// Number of live records
    pub fn len(&self) -> usize {
        self.students.len()
    }

    /// Whether the registry holds no records
    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    /// Master identity index (by id)
    pub fn identity(&self) -> &RosterIndex {
        &self.identity
    }

    /// Honor roll index (by gpa)
    pub fn honor_roll(&self) -> &RosterIndex {
        &self.honor_roll
    }

    /// Academic probation index (by gpa)
    pub fn probation(&self) -> &RosterIndex {
        &self.probation
    }

    /// Freshman index (by name)
    pub fn freshman(&self) -> &RosterIndex {
        &self.freshman
    }

    /// Sophomore index (by name)
    pub fn sophomore(&self) -> &RosterIndex {
        &self.sophomore
    }

    /// Junior index (by name)
    pub fn junior(&self) -> &RosterIndex {
        &self.junior
    }

    /// Senior index (by name)
    pub fn senior(&self) -> &RosterIndex {
        &self.senior
    }

    fn standing_index_mut(&mut self, standing: ClassStanding) -> &mut RosterIndex {
        match standing {
            ClassStanding::Freshman => &mut self.freshman,
            ClassStanding::Sophomore => &mut self.sophomore,
            ClassStanding::Junior => &mut self.junior,
            ClassStanding::Senior => &mut self.senior,
        }
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn student(name: &str, id: &str, gpa: f64, hours: u32) -> Student {
        Student::new(name, id, gpa, hours)
    }

    #[test]
    fn test_insert_populates_classified_indexes() {
        let mut registry = Registry::new();
        registry.insert(student("Alice", "A1", 3.8, 15)).unwrap();

        assert!(registry.identity().contains("A1"));
        assert!(registry.honor_roll().contains("A1"));
        assert!(registry.freshman().contains("A1"));
        assert!(!registry.probation().contains("A1"));
        assert!(!registry.sophomore().contains("A1"));
        assert!(!registry.junior().contains("A1"));
        assert!(!registry.senior().contains("A1"));
    }

    #[test]
    fn test_sentinel_skipped_without_mutation() {
        let mut registry = Registry::new();
        let outcome = registry.insert(Student::new("", "", 0.0, 0)).unwrap();

        assert_eq!(outcome, Admission::SkippedSentinel);
        assert!(registry.is_empty());
        assert!(registry.identity().is_empty());
    }

    #[test]
    fn test_duplicate_id_rejected_before_mutation() {
        let mut registry = Registry::new();
        registry.insert(student("Amy", "A1", 3.0, 10)).unwrap();

        let err = registry.insert(student("Other", "A1", 1.0, 95)).unwrap_err();
        assert_eq!(err, RegistryError::DuplicateId("A1".to_string()));

        // First record untouched, second never entered any index
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.find_by_id("A1").map(|s| s.name.as_str()), Some("Amy"));
        assert!(registry.probation().is_empty());
        assert!(registry.senior().is_empty());
    }

    #[test]
    fn test_remove_excises_every_index() {
        let mut registry = Registry::new();
        registry.insert(student("Alice", "A1", 3.8, 15)).unwrap();

        let removed = registry.remove_by_id("A1").unwrap();
        assert_eq!(removed.name, "Alice");

        assert!(registry.is_empty());
        assert!(registry.identity().is_empty());
        assert!(registry.honor_roll().is_empty());
        assert!(registry.freshman().is_empty());
    }

    #[test]
    fn test_remove_unknown_id_errs_without_mutation() {
        let mut registry = Registry::new();
        registry.insert(student("Amy", "A1", 3.0, 10)).unwrap();

        let err = registry.remove_by_id("Z9").unwrap_err();
        assert_eq!(err, RegistryError::RecordNotFound("Z9".to_string()));
        assert_eq!(registry.len(), 1);
        assert!(registry.identity().contains("A1"));
    }

    #[test]
    fn test_load_rows_stops_at_first_error() {
        let mut registry = Registry::new();
        let report = registry.load_rows(vec![
            student("Amy", "A1", 3.0, 10),
            student("", "", 0.0, 0),
            student("Dup", "A1", 1.0, 10),
            student("Never", "N1", 2.0, 10),
        ]);

        assert_eq!(report.admitted, 1);
        assert_eq!(report.skipped, 1);
        assert_eq!(report.error, Some(RegistryError::DuplicateId("A1".to_string())));
        // Row after the error was never attempted
        assert!(registry.find_by_id("N1").is_none());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_teardown_releases_everything() {
        let mut registry = Registry::new();
        registry.insert(student("Amy", "A1", 3.9, 10)).unwrap();
        registry.insert(student("Bob", "B2", 1.5, 95)).unwrap();

        registry.teardown();

        assert!(registry.is_empty());
        assert!(registry.identity().is_empty());
        assert!(registry.honor_roll().is_empty());
        assert!(registry.probation().is_empty());
        assert!(registry.senior().is_empty());
    }

    #[test]
    fn test_records_resolves_in_index_order() {
        let mut registry = Registry::new();
        registry.insert(student("Cara", "C3", 3.0, 10)).unwrap();
        registry.insert(student("Amy", "A1", 3.0, 10)).unwrap();
        registry.insert(student("Bob", "B2", 3.0, 10)).unwrap();

        let names: Vec<&str> = registry
            .records(registry.freshman())
            .map(|s| s.name.as_str())
            .collect();
        assert_eq!(names, vec!["Amy", "Bob", "Cara"]);
    }
}
