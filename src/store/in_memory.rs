use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

use super::{seed, FeedbackStore, StoreError};
use crate::feedback::{Feedback, NewFeedback};

/// In-memory feedback store backed by a `Vec` behind an `RwLock`.
///
/// Ids come from a monotonic counter and are never handed out twice, even
/// after the record that held one is deleted. Clone-friendly via Arc; all
/// clones share the same records and counter.
#[derive(Clone)]
pub struct InMemoryFeedbackStore {
    records: Arc<RwLock<Vec<Feedback>>>,
    /// Last id handed out, or the largest seeded one.
    last_id: Arc<AtomicU64>,
}

impl Default for InMemoryFeedbackStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryFeedbackStore {
    /// Create an empty store. The first record gets id `"1"`.
    pub fn new() -> Self {
        Self::with_records(Vec::new())
    }

    /// Create a store holding `records` in the given order.
    ///
    /// The counter resumes after the largest numeric id present.
    pub fn with_records(records: Vec<Feedback>) -> Self {
        let highest = records
            .iter()
            .filter_map(|r| r.id.parse::<u64>().ok())
            .max()
            .unwrap_or(0);

        Self {
            records: Arc::new(RwLock::new(records)),
            last_id: Arc::new(AtomicU64::new(highest)),
        }
    }

    /// Create a store holding the eight sample records.
    pub fn seeded() -> Self {
        Self::with_records(seed::sample_records())
    }
}

impl FeedbackStore for InMemoryFeedbackStore {
    fn append(&self, record: NewFeedback) -> Result<Feedback, StoreError> {
        let mut records = self
            .records
            .write()
            .map_err(|_| StoreError::LockPoisoned("append"))?;

        let previous = self
            .last_id
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_add(1))
            .map_err(|_| StoreError::IdsExhausted)?;
        let stored = record.with_id((previous + 1).to_string());
        records.push(stored.clone());
        Ok(stored)
    }

    fn find_by_id(&self, id: &str) -> Result<Option<Feedback>, StoreError> {
        let records = self
            .records
            .read()
            .map_err(|_| StoreError::LockPoisoned("read"))?;

        Ok(records.iter().find(|r| r.id == id).cloned())
    }

    fn update_by_id<E, F>(&self, id: &str, f: F) -> Result<Option<Feedback>, E>
    where
        E: From<StoreError>,
        F: FnOnce(&mut Feedback) -> Result<(), E>,
    {
        let mut records = self
            .records
            .write()
            .map_err(|_| StoreError::LockPoisoned("update"))?;

        let Some(slot) = records.iter_mut().find(|r| r.id == id) else {
            return Ok(None);
        };

        let mut candidate = slot.clone();
        f(&mut candidate)?;
        // Identity is owned by the store.
        candidate.id = slot.id.clone();
        *slot = candidate.clone();
        Ok(Some(candidate))
    }

    fn remove_by_id(&self, id: &str) -> Result<bool, StoreError> {
        let mut records = self
            .records
            .write()
            .map_err(|_| StoreError::LockPoisoned("remove"))?;

        match records.iter().position(|r| r.id == id) {
            Some(index) => {
                records.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn all(&self) -> Result<Vec<Feedback>, StoreError> {
        let records = self
            .records
            .read()
            .map_err(|_| StoreError::LockPoisoned("read"))?;
        Ok(records.clone())
    }

    fn len(&self) -> Result<usize, StoreError> {
        let records = self
            .records
            .read()
            .map_err(|_| StoreError::LockPoisoned("read"))?;
        Ok(records.len())
    }
}
