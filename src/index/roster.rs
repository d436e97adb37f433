//! BTreeMap-based roster index
//!
//! Each index maps an [`OrderKey`] to the ids of the students sharing that
//! key. Buckets keep arrival order, so equal keys iterate
//! first-inserted-first (stable tie-break).

use std::collections::BTreeMap;

use super::order::{OrderKey, SortOrder};
use crate::record::Student;

/// One ordered index over student records.
///
/// Holds id slots, not records: every slot is a handle into the registry's
/// owning store. A student may hold slots in several indexes at once; the
/// registry is responsible for keeping them consistent.
#[derive(Debug)]
pub struct RosterIndex {
    /// Comparator this index is ordered by
    order: SortOrder,
    /// Maps ordering keys to id slots in arrival order
    tree: BTreeMap<OrderKey, Vec<String>>,
    /// Total slot count across all buckets
    len: usize,
}

impl RosterIndex {
    /// Creates a new empty index ordered by the given comparator
    pub fn new(order: SortOrder) -> Self {
        Self {
            order,
            tree: BTreeMap::new(),
            len: 0,
        }
    }

    /// The comparator this index is ordered by
    pub fn order(&self) -> SortOrder {
        self.order
    }

    /// Insert a slot for a student in sorted position.
    ///
    /// The slot lands after every existing slot whose key compares not
    /// greater, which keeps equal keys in insertion order.
    pub fn insert(&mut self, student: &Student) {
        let key = self.order.key_for(student);
        self.tree.entry(key).or_default().push(student.id.clone());
        self.len += 1;
    }

    /// Remove the first slot holding the given id.
    ///
    /// Scans buckets front-to-back. Returns whether a removal occurred;
    /// absence is not an error, since some indexes legitimately never held
    /// the record. An emptied bucket is pruned.
    pub fn remove_by_id(&mut self, id: &str) -> bool {
        let mut emptied = None;
        let mut removed = false;

        for (key, slots) in self.tree.iter_mut() {
            if let Some(pos) = slots.iter().position(|slot| slot == id) {
                slots.remove(pos);
                removed = true;
                if slots.is_empty() {
                    emptied = Some(key.clone());
                }
                break;
            }
        }

        if let Some(key) = emptied {
            self.tree.remove(&key);
        }
        if removed {
            self.len -= 1;
        }
        removed
    }

    /// Whether any slot holds the given id
    pub fn contains(&self, id: &str) -> bool {
        self.tree.values().any(|slots| slots.iter().any(|slot| slot == id))
    }

    /// Iterate ids in stored order.
    ///
    /// Lazy, finite and restartable; does not mutate the index.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tree.values().flatten().map(String::as_str)
    }

    /// Up to n leading ids in stored order, without mutation
    pub fn take_first(&self, n: usize) -> Vec<&str> {
        self.iter().take(n).collect()
    }

    /// Total number of slots
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the index holds no slots
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Drop every slot
    pub fn clear(&mut self) {
        self.tree.clear();
        self.len = 0;
    }
}
