//! Student record types

mod student;

pub use student::Student;
