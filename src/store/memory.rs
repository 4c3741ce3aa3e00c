use std::sync::{Arc, Mutex};

use super::BookingStore;
use crate::models::BookingRecord;

/// Shares its contents between clones, so a test can keep a handle after
/// giving the store to a ledger.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    records: Arc<Mutex<Vec<BookingRecord>>>,
}

impl InMemoryStore {
    pub fn snapshot(&self) -> Vec<BookingRecord> {
        self.records
            .lock()
            .map(|r| r.clone())
            .unwrap_or_default()
    }
}

impl BookingStore for InMemoryStore {
    fn load(&self) -> anyhow::Result<Vec<BookingRecord>> {
        let records = self
            .records
            .lock()
            .map_err(|_| anyhow::anyhow!("in-memory store poisoned"))?;
        Ok(records.clone())
    }

    fn save(&mut self, records: &[BookingRecord]) -> anyhow::Result<()> {
        let mut stored = self
            .records
            .lock()
            .map_err(|_| anyhow::anyhow!("in-memory store poisoned"))?;
        *stored = records.to_vec();
        Ok(())
    }
}
