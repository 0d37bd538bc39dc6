//! Create and update payloads.
//!
//! Fields are kept as raw JSON values: a value of the wrong type is not a
//! decode failure, it is a field that fails validation.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::feedback::{Category, FeedbackDraft, Status};

/// Body of a create request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreateFeedback {
    pub name: Option<Value>,
    pub email: Option<Value>,
    pub content: Option<Value>,
    pub category: Option<Value>,
    pub status: Option<Value>,
}

impl CreateFeedback {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            name: Some(Value::String(name.into())),
            email: Some(Value::String(email.into())),
            content: Some(Value::String(content.into())),
            category: None,
            status: None,
        }
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(Value::String(category.into()));
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(Value::String(status.into()));
        self
    }

    /// The candidate record, with category and status defaulted when omitted.
    pub fn into_draft(self) -> FeedbackDraft {
        FeedbackDraft {
            name: text(self.name),
            email: text(self.email),
            content: text(self.content),
            category: match self.category {
                None => Some(Category::default().to_string()),
                supplied => text(supplied),
            },
            status: match self.status {
                None => Some(Status::default().to_string()),
                supplied => text(supplied),
            },
        }
    }
}

/// Body of an update request. Omitted fields keep their stored value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UpdateFeedback {
    pub name: Option<Value>,
    pub email: Option<Value>,
    pub content: Option<Value>,
    pub category: Option<Value>,
    pub status: Option<Value>,
}

impl UpdateFeedback {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(Value::String(name.into()));
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(Value::String(email.into()));
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(Value::String(content.into()));
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(Value::String(category.into()));
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(Value::String(status.into()));
        self
    }

    /// Supplied fields only. A supplied non-string becomes an empty string
    /// so that it still counts as supplied and fails validation.
    pub fn into_draft(self) -> FeedbackDraft {
        let supplied = |v: Option<Value>| v.map(|v| text(Some(v)).unwrap_or_default());
        FeedbackDraft {
            name: supplied(self.name),
            email: supplied(self.email),
            content: supplied(self.content),
            category: supplied(self.category),
            status: supplied(self.status),
        }
    }
}

fn text(value: Option<Value>) -> Option<String> {
    match value {
        Some(Value::String(s)) => Some(s),
        _ => None,
    }
}
