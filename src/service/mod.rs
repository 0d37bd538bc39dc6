//! Feedback Service - the CRUD operations over a record store.
//!
//! `FeedbackService<S>` composes the store, validation and the query engine
//! into the list / get / create / update / delete contract. The store is
//! passed in, so tests get an isolated store and a persistent backend can
//! be swapped in behind [`FeedbackStore`](crate::FeedbackStore).
//!
//! ## Quick Start
//!
//! ```
//! use feedback_board::{CreateFeedback, FeedbackService, InMemoryFeedbackStore, UpdateFeedback};
//!
//! let service = FeedbackService::new(InMemoryFeedbackStore::new());
//!
//! let created = service
//!     .create(CreateFeedback::new("Ada", "ada@example.com", "Please add dark mode.").category("Feature"))
//!     .unwrap();
//! assert_eq!(created.status.as_str(), "Pending");
//!
//! let updated = service
//!     .update(&created.id, UpdateFeedback::new().status("Resolved"))
//!     .unwrap();
//! assert_eq!(updated.status.as_str(), "Resolved");
//!
//! service.delete(&created.id).unwrap();
//! assert!(service.get(&created.id).is_err());
//! ```

mod error;
#[cfg(feature = "emitter")]
mod events;
mod feedback_service;
mod input;

pub use error::ServiceError;
#[cfg(feature = "emitter")]
pub use events::FeedbackEvent;
pub use feedback_service::FeedbackService;
pub use input::{CreateFeedback, UpdateFeedback};
