//! Record classification
//!
//! Pure mapping from a record's gpa and credit hours to the set of
//! non-identity indexes it belongs to. Called once per insertion; the result
//! is immediately consumed by the registry.

use crate::record::Student;

/// Minimum gpa for honor roll membership
pub const HONOR_ROLL_MIN_GPA: f64 = 3.5;

/// Gpa below which a student is on academic probation
pub const PROBATION_MAX_GPA: f64 = 2.0;

/// Performance-tier membership.
///
/// The thresholds make the variants mutually exclusive; a record holds at
/// most one tier slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TierList {
    /// gpa >= 3.5
    HonorRoll,
    /// gpa < 2.0
    Probation,
}

/// Class standing by completed credit hours.
///
/// Every record holds exactly one standing slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassStanding {
    /// Fewer than 30 credit hours
    Freshman,
    /// 30 to 59 credit hours
    Sophomore,
    /// 60 to 89 credit hours
    Junior,
    /// 90 or more credit hours
    Senior,
}

/// The non-identity index memberships of one record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    /// Tier membership, if any
    pub tier: Option<TierList>,
    /// Class standing (always exactly one)
    pub standing: ClassStanding,
}

/// Classify a record by gpa and credit hours.
///
/// Out-of-range gpas are not special-cased; the thresholds apply as-is.
pub fn classify(student: &Student) -> Placement {
    let tier = if student.gpa >= HONOR_ROLL_MIN_GPA {
        Some(TierList::HonorRoll)
    } else if student.gpa < PROBATION_MAX_GPA {
        Some(TierList::Probation)
    } else {
        None
    };

    let standing = match student.credit_hours {
        0..=29 => ClassStanding::Freshman,
        30..=59 => ClassStanding::Sophomore,
        60..=89 => ClassStanding::Junior,
        _ => ClassStanding::Senior,
    };

    Placement { tier, standing }
}
