use std::sync::Mutex;

use event_emitter_rs::EventEmitter;
use tracing::warn;

/// Change notifications raised after a successful mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackEvent {
    Created,
    Updated,
    Deleted,
}

impl FeedbackEvent {
    pub fn as_str(&self) -> &'static str {
        match self {
            FeedbackEvent::Created => "feedback.created",
            FeedbackEvent::Updated => "feedback.updated",
            FeedbackEvent::Deleted => "feedback.deleted",
        }
    }
}

/// In-process listeners for [`FeedbackEvent`]s.
///
/// Listeners receive the JSON payload as a string and run on the
/// emitter's own threads, so delivery is asynchronous.
pub(crate) struct FeedbackEvents {
    emitter: Mutex<EventEmitter>,
}

impl FeedbackEvents {
    pub(crate) fn new() -> Self {
        Self {
            emitter: Mutex::new(EventEmitter::new()),
        }
    }

    pub(crate) fn on<F>(&self, event: FeedbackEvent, listener: F) -> bool
    where
        F: Fn(String) + Send + Sync + 'static,
    {
        match self.emitter.lock() {
            Ok(mut emitter) => {
                emitter.on(event.as_str(), listener);
                true
            }
            Err(_) => false,
        }
    }

    pub(crate) fn emit(&self, event: FeedbackEvent, payload: String) {
        match self.emitter.lock() {
            Ok(mut emitter) => {
                emitter.emit(event.as_str(), payload);
            }
            Err(_) => warn!(event = event.as_str(), "emitter lock poisoned, dropping event"),
        }
    }
}
