//! Index ordering keys and comparators
//!
//! Keys use BTreeMap-friendly total ordering. Gpa keys store f64 bits mapped
//! so that the natural numeric order (including negatives) is preserved.

use crate::record::Student;

/// Ordering key for one index position.
///
/// Supports Number (f64 bits with total ordering) and Text (lexicographic by
/// byte). An index only ever mixes keys of one variant, determined by its
/// [`SortOrder`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum OrderKey {
    /// Numeric value (stored as bits for total ordering)
    Number(u64),
    /// Text value
    Text(String),
}

impl OrderKey {
    /// Create a key from a gpa.
    ///
    /// Uses bit representation for total ordering.
    pub fn from_gpa(v: f64) -> Self {
        let bits = v.to_bits();
        // Negative: flip all bits. Positive: flip sign bit.
        let ordered = if (bits >> 63) == 1 {
            !bits
        } else {
            bits ^ (1 << 63)
        };
        OrderKey::Number(ordered)
    }

    /// Create a key from a text field
    pub fn from_text(v: impl Into<String>) -> Self {
        OrderKey::Text(v.into())
    }
}

/// The closed set of comparators an index can be ordered by.
///
/// Passed explicitly at index construction; there is no ambient comparator
/// state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    /// Lexicographic by student id
    ById,
    /// Numeric by gpa
    ByGpa,
    /// Lexicographic by student name
    ByName,
}

impl SortOrder {
    /// Extract the ordering key this comparator uses from a record
    pub fn key_for(&self, student: &Student) -> OrderKey {
        match self {
            SortOrder::ById => OrderKey::from_text(&student.id),
            SortOrder::ByGpa => OrderKey::from_gpa(student.gpa),
            SortOrder::ByName => OrderKey::from_text(&student.name),
        }
    }
}
