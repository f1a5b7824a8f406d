//! Time-based id generation.
//!
//! Ids are a tag followed by epoch milliseconds, e.g. `EMP1706745600000`.
//! The clock never issues a value at or below one it already issued, so two
//! adds inside the same millisecond still get distinct ids.

use crate::{EmployeeId, Timestamp};

/// Issues employee ids from wall-clock milliseconds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdClock {
    /// Tag prefixed to every id
    prefix: String,
    /// Highest millisecond value issued or observed
    last: Timestamp,
}

impl IdClock {
    /// Create a clock that has issued nothing yet.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            last: 0,
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Highest millisecond value issued or observed so far.
    pub fn last(&self) -> Timestamp {
        self.last
    }

    /// Current wall-clock time in milliseconds since the epoch.
    pub fn now() -> Timestamp {
        u64::try_from(chrono::Utc::now().timestamp_millis()).unwrap_or(0)
    }

    /// Issue an id for `now`, bumped past anything already issued.
    pub fn next_id_at(&mut self, now: Timestamp) -> EmployeeId {
        self.last = now.max(self.last.saturating_add(1));
        format!("{}{}", self.prefix, self.last)
    }

    /// Account for an id that exists already, e.g. one loaded from storage.
    ///
    /// Ids with a different tag or a non-numeric tail are ignored.
    pub fn observe(&mut self, id: &str) {
        if let Some(millis) = self.millis_of(id) {
            self.last = self.last.max(millis);
        }
    }

    /// The millisecond part of an id issued with this clock's tag.
    pub fn millis_of(&self, id: &str) -> Option<Timestamp> {
        let tail = id.strip_prefix(self.prefix.as_str())?;
        if tail.is_empty() || !tail.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        tail.parse().ok()
    }
}
