//! Record and Batch types for the personnel dataset.
//!
//! Fields keep the text form they had in the source file; numeric coercion
//! happens at read time. Load-time validation guarantees that `age` and
//! `salary` coerce cleanly for every record in an active Batch.

use serde::Serialize;

/// One person's entry within a Batch.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record {
    pub name: String,
    pub age: String,
    pub salary: String,
    pub department: String,
}

impl Record {
    /// `age` coerced to an integer.
    pub fn age_value(&self) -> Option<i64> {
        self.age.trim().parse().ok()
    }

    /// `salary` coerced to a float.
    pub fn salary_value(&self) -> Option<f64> {
        self.salary.trim().parse().ok()
    }
}

/// The validated in-memory dataset, insertion order preserved.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Batch {
    records: Vec<Record>,
}

impl Batch {
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
