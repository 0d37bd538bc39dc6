use serde::{Deserialize, Serialize};

use super::{Category, Status};

/// A stored feedback submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feedback {
    pub id: String,
    pub name: String,
    pub email: String,
    pub content: String,
    pub category: Category,
    pub status: Status,
}

/// A validated record waiting for the store to assign its id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewFeedback {
    pub name: String,
    pub email: String,
    pub content: String,
    pub category: Category,
    pub status: Status,
}

impl NewFeedback {
    pub(crate) fn with_id(self, id: String) -> Feedback {
        Feedback {
            id,
            name: self.name,
            email: self.email,
            content: self.content,
            category: self.category,
            status: self.status,
        }
    }
}

/// Candidate field values as submitted, before validation.
///
/// Category and status stay as raw strings so values outside the
/// enumerations are reported by validation instead of failing to decode.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedbackDraft {
    pub name: Option<String>,
    pub email: Option<String>,
    pub content: Option<String>,
    pub category: Option<String>,
    pub status: Option<String>,
}

impl FeedbackDraft {
    /// The view of `existing` with every supplied field of `self` laid over it.
    pub fn merged_over(&self, existing: &Feedback) -> FeedbackDraft {
        FeedbackDraft {
            name: Some(self.name.clone().unwrap_or_else(|| existing.name.clone())),
            email: Some(self.email.clone().unwrap_or_else(|| existing.email.clone())),
            content: Some(
                self.content
                    .clone()
                    .unwrap_or_else(|| existing.content.clone()),
            ),
            category: Some(
                self.category
                    .clone()
                    .unwrap_or_else(|| existing.category.to_string()),
            ),
            status: Some(
                self.status
                    .clone()
                    .unwrap_or_else(|| existing.status.to_string()),
            ),
        }
    }
}
