use tracing::{debug, info, warn};

use super::error::ServiceError;
#[cfg(feature = "emitter")]
use super::events::{FeedbackEvent, FeedbackEvents};
use super::input::{CreateFeedback, UpdateFeedback};
use crate::feedback::{Category, Feedback, Status};
use crate::query::{self, FeedbackPage, ListQuery};
use crate::store::FeedbackStore;
use crate::validation;

/// CRUD operations over a feedback store.
///
/// Generic over `S`, the store. The service is the only writer: every
/// mutation goes through [`create`](Self::create), [`update`](Self::update)
/// or [`delete`](Self::delete).
pub struct FeedbackService<S> {
    store: S,
    #[cfg(feature = "emitter")]
    events: FeedbackEvents,
}

impl<S: FeedbackStore> FeedbackService<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            #[cfg(feature = "emitter")]
            events: FeedbackEvents::new(),
        }
    }

    /// One page of the records matching `query`. Never fails on filter values.
    pub fn list(&self, query: &ListQuery) -> Result<FeedbackPage, ServiceError> {
        let page = query::apply(self.store.all()?, query);
        debug!(
            page = query.page,
            limit = query.limit,
            count = page.pagination.count,
            "listed feedback"
        );
        Ok(page)
    }

    pub fn get(&self, id: &str) -> Result<Feedback, ServiceError> {
        self.store
            .find_by_id(id)?
            .ok_or_else(|| ServiceError::NotFound(id.to_string()))
    }

    /// Validate and store a new record. Category defaults to `Request`,
    /// status to `Pending`.
    pub fn create(&self, input: CreateFeedback) -> Result<Feedback, ServiceError> {
        let draft = input.into_draft();
        let record = validation::admit(&draft).map_err(|errors| {
            warn!(errors = ?errors, "rejected new feedback");
            ServiceError::ValidationFailed(errors)
        })?;

        let stored = self.store.append(record)?;
        info!(id = %stored.id, category = %stored.category, "created feedback");

        #[cfg(feature = "emitter")]
        self.notify(FeedbackEvent::Created, &stored);

        Ok(stored)
    }

    /// Validate the stored record with `input` laid over it, then persist
    /// the supplied `content` and `status`. Other supplied fields take part
    /// in validation but are not written.
    pub fn update(&self, id: &str, input: UpdateFeedback) -> Result<Feedback, ServiceError> {
        let incoming = input.into_draft();

        let updated = self
            .store
            .update_by_id::<ServiceError, _>(id, |record| {
                let merged = validation::admit(&incoming.merged_over(record)).map_err(|errors| {
                    warn!(id = %record.id, errors = ?errors, "rejected feedback update");
                    ServiceError::ValidationFailed(errors)
                })?;

                if incoming.content.is_some() {
                    record.content = merged.content;
                }
                if incoming.status.is_some() {
                    record.status = merged.status;
                }
                Ok(())
            })?
            .ok_or_else(|| ServiceError::NotFound(id.to_string()))?;

        info!(id = %updated.id, status = %updated.status, "updated feedback");

        #[cfg(feature = "emitter")]
        self.notify(FeedbackEvent::Updated, &updated);

        Ok(updated)
    }

    pub fn delete(&self, id: &str) -> Result<(), ServiceError> {
        if !self.store.remove_by_id(id)? {
            return Err(ServiceError::NotFound(id.to_string()));
        }
        info!(id, "deleted feedback");

        #[cfg(feature = "emitter")]
        self.notify(FeedbackEvent::Deleted, &serde_json::json!({ "id": id }));

        Ok(())
    }

    pub fn categories(&self) -> [Category; 3] {
        Category::ALL
    }

    pub fn statuses(&self) -> [Status; 3] {
        Status::ALL
    }
}

#[cfg(feature = "emitter")]
impl<S: FeedbackStore> FeedbackService<S> {
    /// Register a listener for a change notification.
    ///
    /// The listener receives the JSON payload: the record for created and
    /// updated, `{"id": ..}` for deleted.
    pub fn on<F>(&self, event: FeedbackEvent, listener: F) -> Result<(), ServiceError>
    where
        F: Fn(String) + Send + Sync + 'static,
    {
        if self.events.on(event, listener) {
            Ok(())
        } else {
            Err(crate::store::StoreError::LockPoisoned("listener registration").into())
        }
    }

    fn notify<T: serde::Serialize>(&self, event: FeedbackEvent, payload: &T) {
        match serde_json::to_string(payload) {
            Ok(json) => self.events.emit(event, json),
            Err(e) => warn!(event = event.as_str(), error = %e, "could not encode event payload"),
        }
    }
}
