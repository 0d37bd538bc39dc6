//! Record store - owns the ordered feedback collection.
//!
//! [`FeedbackStore`] is the seam between the CRUD service and wherever the
//! records live. [`InMemoryFeedbackStore`] keeps them in process memory
//! behind a lock, so every lookup and mutation is a single critical section.
//!
//! ## Example
//!
//! ```
//! use feedback_board::{Category, FeedbackStore, InMemoryFeedbackStore, NewFeedback, Status};
//!
//! let store = InMemoryFeedbackStore::new();
//! let stored = store
//!     .append(NewFeedback {
//!         name: "Ada".into(),
//!         email: "ada@example.com".into(),
//!         content: "Please add keyboard shortcuts.".into(),
//!         category: Category::Feature,
//!         status: Status::Pending,
//!     })
//!     .unwrap();
//!
//! assert_eq!(store.find_by_id(&stored.id).unwrap(), Some(stored.clone()));
//! ```

mod in_memory;
mod seed;

use thiserror::Error;

use crate::feedback::{Feedback, NewFeedback};

pub use in_memory::InMemoryFeedbackStore;
pub use seed::sample_records;

/// Errors raised by a store implementation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("feedback store lock poisoned during {0}")]
    LockPoisoned(&'static str),
    #[error("no feedback ids left to assign")]
    IdsExhausted,
}

/// Ordered storage for feedback records.
pub trait FeedbackStore: Send + Sync {
    /// Assign a fresh id and insert the record at the end.
    fn append(&self, record: NewFeedback) -> Result<Feedback, StoreError>;

    /// Look a record up by id.
    fn find_by_id(&self, id: &str) -> Result<Option<Feedback>, StoreError>;

    /// Apply `f` to a copy of the record with the given id and write the copy
    /// back only if `f` succeeds. Returns `Ok(None)` when no record matches.
    ///
    /// Lookup, `f`, and write-back run under one exclusive lock.
    fn update_by_id<E, F>(&self, id: &str, f: F) -> Result<Option<Feedback>, E>
    where
        E: From<StoreError>,
        F: FnOnce(&mut Feedback) -> Result<(), E>;

    /// Remove the first record with the given id. Returns whether one was found.
    fn remove_by_id(&self, id: &str) -> Result<bool, StoreError>;

    /// Every record, in insertion order.
    fn all(&self) -> Result<Vec<Feedback>, StoreError>;

    fn len(&self) -> Result<usize, StoreError>;

    fn is_empty(&self) -> Result<bool, StoreError> {
        Ok(self.len()? == 0)
    }
}
