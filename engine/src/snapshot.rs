//! The persisted form of the record list.
//!
//! A snapshot is the full ordered record list as a JSON array. It is the only
//! thing written to session storage; there is no version field and no
//! migration.

use crate::{error::Result, EmployeeRecord, Error};
use serde::{Deserialize, Serialize};

/// The full record list as persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordSnapshot {
    pub records: Vec<EmployeeRecord>,
}

impl RecordSnapshot {
    pub fn new(records: Vec<EmployeeRecord>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Serialize to the persisted JSON array.
    pub fn to_json(&self) -> Result<String> {
        Self::encode(&self.records)
    }

    /// Serialize a borrowed record list without building a snapshot.
    pub fn encode(records: &[EmployeeRecord]) -> Result<String> {
        serde_json::to_string(records).map_err(|e| Error::InvalidSnapshot(e.to_string()))
    }

    /// Parse a persisted JSON array.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::InvalidSnapshot(e.to_string()))
    }
}
