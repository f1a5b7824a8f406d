//! Store - the ordered employee list and its session storage mirror.
//!
//! Every mutation writes the whole list through to storage before it is
//! committed in memory, so the two never disagree.

use crate::{
    clock::IdClock, config::RosterConfig, error::Result, snapshot::RecordSnapshot,
    storage::SessionStorage, Employee, EmployeeId, EmployeeRecord, Error, Validator,
};

/// The authoritative record list plus its persistence sync.
#[derive(Debug, Clone)]
pub struct RecordStore<S: SessionStorage> {
    /// Injected session storage
    storage: S,
    /// Key the list is stored under
    key: String,
    /// Records in insertion order
    records: Vec<EmployeeRecord>,
    /// Id generator
    ids: IdClock,
    /// Rules checked before every write
    validator: Validator,
}

impl<S: SessionStorage> RecordStore<S> {
    /// Load the store from `storage` at component start.
    ///
    /// An absent or unparsable persisted copy yields an empty store. The
    /// list is then written back once, as the page does on mount.
    pub fn load(storage: S, config: &RosterConfig) -> Result<Self> {
        let records = match storage.get_item(&config.storage_key) {
            None => Vec::new(),
            Some(raw) => match RecordSnapshot::from_json(&raw) {
                Ok(snapshot) => snapshot.records,
                Err(e) => {
                    tracing::warn!(
                        key = %config.storage_key,
                        bytes = raw.len(),
                        "discarding unreadable employee list: {}",
                        e
                    );
                    Vec::new()
                }
            },
        };

        let mut ids = IdClock::new(config.id_prefix.clone());
        for record in &records {
            ids.observe(&record.id);
        }

        let mut store = Self {
            storage,
            key: config.storage_key.clone(),
            records,
            ids,
            validator: Validator::from_config(config),
        };
        store.persist()?;

        tracing::debug!(count = store.records.len(), "employee store loaded");
        Ok(store)
    }

    /// Get all records in insertion order.
    pub fn records(&self) -> &[EmployeeRecord] {
        &self.records
    }

    /// Get a record by id.
    pub fn get(&self, id: &str) -> Option<&EmployeeRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Position of the first record with this id.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.records.iter().position(|r| r.id == id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Get the injected storage.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Storage key the list is persisted under.
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn validator(&self) -> &Validator {
        &self.validator
    }

    /// Append a new record with a fresh id.
    pub fn add(&mut self, employee: Employee) -> Result<EmployeeId> {
        self.add_at(employee, IdClock::now())
    }

    /// [`RecordStore::add`] with an explicit clock reading.
    pub fn add_at(&mut self, employee: Employee, now: crate::Timestamp) -> Result<EmployeeId> {
        self.check(&employee)?;

        let id = self.ids.next_id_at(now);
        if self.position(&id).is_some() {
            return Err(Error::RecordAlreadyExists(id));
        }

        let mut next = self.records.clone();
        next.push(EmployeeRecord::new(id.clone(), employee));
        self.commit(next)?;

        tracing::info!(%id, "employee added");
        Ok(id)
    }

    /// Replace the record with this id in place, keeping its id.
    pub fn update(&mut self, id: &str, employee: Employee) -> Result<()> {
        self.check(&employee)?;

        let index = self
            .position(id)
            .ok_or_else(|| Error::RecordNotFound(id.to_string()))?;

        let mut next = self.records.clone();
        next[index].employee = employee;
        self.commit(next)?;

        tracing::info!(%id, index, "employee updated");
        Ok(())
    }

    /// Delete the record with this id, keeping the order of the rest.
    pub fn remove(&mut self, id: &str) -> Result<EmployeeRecord> {
        let index = self
            .position(id)
            .ok_or_else(|| Error::RecordNotFound(id.to_string()))?;

        let mut next = self.records.clone();
        let removed = next.remove(index);
        self.commit(next)?;

        tracing::info!(%id, "employee removed");
        Ok(removed)
    }

    /// Write the current list to storage.
    pub fn persist(&mut self) -> Result<()> {
        let json = RecordSnapshot::encode(&self.records)?;
        self.write(&json)
    }

    /// The list as it is persisted.
    pub fn to_json(&self) -> Result<String> {
        RecordSnapshot::encode(&self.records)
    }

    /// Export the list as a snapshot.
    pub fn export_state(&self) -> RecordSnapshot {
        RecordSnapshot::new(self.records.clone())
    }

    fn check(&self, employee: &Employee) -> Result<()> {
        let errors = self.validator.validate(&crate::FormDraft::from(employee));
        if errors.is_empty() {
            Ok(())
        } else {
            Err(Error::Validation(errors))
        }
    }

    fn commit(&mut self, next: Vec<EmployeeRecord>) -> Result<()> {
        let json = RecordSnapshot::encode(&next)?;
        self.write(&json)?;
        self.records = next;
        Ok(())
    }

    fn write(&mut self, json: &str) -> Result<()> {
        if let Err(e) = self.storage.set_item(&self.key, json) {
            tracing::warn!(key = %self.key, "failed to persist employee list: {}", e);
            return Err(e);
        }
        tracing::debug!(key = %self.key, bytes = json.len(), "employee list persisted");
        Ok(())
    }
}
