//! In-memory record store.
//!
//! Same semantics as the SQLite store without persistence. Used by tests and
//! by hosts that supply their own durability.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::domain::NotarisationId;

use super::database::{RecordStore, StoreError};

#[derive(Default)]
pub struct MemoryRecordStore {
    records: RwLock<HashMap<NotarisationId, Vec<u8>>>,
}

impl MemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RecordStore for MemoryRecordStore {
    fn put(&self, key: &NotarisationId, value: &[u8]) -> Result<(), StoreError> {
        let mut records = self.records.write().map_err(|_| StoreError::LockPoisoned)?;
        records.insert(*key, value.to_vec());
        Ok(())
    }

    fn get(&self, key: &NotarisationId) -> Result<Option<Vec<u8>>, StoreError> {
        let records = self.records.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(records.get(key).cloned())
    }

    fn count(&self) -> Result<usize, StoreError> {
        let records = self.records.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(records.len())
    }
}
