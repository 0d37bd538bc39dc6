//! Feedback records and their fixed enumerations.
//!
//! A [`Feedback`] is one submission: an immutable id assigned by the store,
//! the submitter's name and email, free-text content, a [`Category`] and a
//! [`Status`]. [`FeedbackDraft`] is the unvalidated shape that create and
//! update requests are checked in.

mod kind;
mod record;

pub use kind::{Category, Status, UnknownVariant};
pub use record::{Feedback, FeedbackDraft, NewFeedback};
