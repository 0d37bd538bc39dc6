//! Feedback board backend.
//!
//! An in-memory collection of feedback records behind a small CRUD service:
//! field validation, search / category / status filtering, sorting and
//! pagination, and (with the `http` feature) a JSON REST surface.

pub mod config;
mod feedback;
#[cfg(feature = "http")]
pub mod http;
mod query;
mod service;
mod store;
pub mod validation;

pub use config::{Config, ConfigError};
pub use feedback::{Category, Feedback, FeedbackDraft, NewFeedback, Status, UnknownVariant};
pub use query::{
    apply, FeedbackPage, ListParams, ListQuery, Pagination, Sort, SortDirection, SortKey,
    DEFAULT_LIMIT, DEFAULT_PAGE,
};
#[cfg(feature = "emitter")]
pub use service::FeedbackEvent;
pub use service::{CreateFeedback, FeedbackService, ServiceError, UpdateFeedback};
pub use store::{sample_records, FeedbackStore, InMemoryFeedbackStore, StoreError};
