// 👤 Record Model - one person's entry + the append-only collection
//
// Records have no identity: the position in the collection is the only
// thing that distinguishes two entries with identical values.

use serde::{Deserialize, Serialize};

// ============================================================================
// RECORD
// ============================================================================

/// One person's entered data.
///
/// Field names match the store file exactly (`name`, `age`, `balance`,
/// `interests`). Records loaded from the store are trusted, so the types
/// here are wider than what the prompt accepts (age is any `i32`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub name: String,
    pub age: i32,
    pub balance: f64,
    /// Ordered tokens; empty strings from `a,,b` style input are kept
    pub interests: Vec<String>,
}

impl Record {
    pub fn new(name: impl Into<String>, age: i32, balance: f64, interests: Vec<String>) -> Self {
        Self {
            name: name.into(),
            age,
            balance,
            interests,
        }
    }
}

// ============================================================================
// COLLECTION
// ============================================================================

/// Ordered sequence of records, serialized as a bare JSON array.
///
/// Append-only: nothing here modifies or removes a record once pushed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Collection {
    records: Vec<Record>,
}

impl Collection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: Vec<Record>) -> Self {
        Self { records }
    }

    pub fn push(&mut self, record: Record) {
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn into_records(self) -> Vec<Record> {
        self.records
    }
}

impl<'a> IntoIterator for &'a Collection {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

// ============================================================================
// TESTS
// ============================================================================
