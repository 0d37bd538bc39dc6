//! Field rules applied before a record is admitted to the store.
//!
//! [`validate`] is the server rule set: it collects every violation so a
//! caller can fix all of them in one round trip. The stricter rules a form
//! applies before submitting live in [`form`].

pub mod form;

use std::str::FromStr;

use crate::feedback::{Category, FeedbackDraft, NewFeedback, Status};

/// Check a candidate record. An empty result means it is acceptable.
pub fn validate(draft: &FeedbackDraft) -> Vec<String> {
    let mut errors = Vec::new();

    if is_blank(draft.name.as_deref()) {
        errors.push("Name is required".to_string());
    }

    if !draft.email.as_deref().is_some_and(|e| e.contains('@')) {
        errors.push("Valid email is required".to_string());
    }

    if is_blank(draft.content.as_deref()) {
        errors.push("Feedback content is required".to_string());
    }

    if !is_member::<Category>(draft.category.as_deref()) {
        errors.push(format!(
            "Category must be one of: {}",
            join(Category::ALL.iter().map(Category::as_str))
        ));
    }

    if !is_member::<Status>(draft.status.as_deref()) {
        errors.push(format!(
            "Status must be one of: {}",
            join(Status::ALL.iter().map(Status::as_str))
        ));
    }

    errors
}

/// Validate `draft` and, if it passes, turn it into a storable record.
pub fn admit(draft: &FeedbackDraft) -> Result<NewFeedback, Vec<String>> {
    let errors = validate(draft);
    let category: Option<Category> = draft.category.as_deref().and_then(|c| c.parse().ok());
    let status: Option<Status> = draft.status.as_deref().and_then(|s| s.parse().ok());

    match (errors.is_empty(), category, status) {
        (true, Some(category), Some(status)) => Ok(NewFeedback {
            name: draft.name.clone().unwrap_or_default(),
            email: draft.email.clone().unwrap_or_default(),
            content: draft.content.clone().unwrap_or_default(),
            category,
            status,
        }),
        _ => Err(errors),
    }
}

fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, |v| v.trim().is_empty())
}

fn is_member<T: FromStr>(value: Option<&str>) -> bool {
    value.is_some_and(|v| v.parse::<T>().is_ok())
}

fn join<'a>(names: impl Iterator<Item = &'a str>) -> String {
    names.collect::<Vec<_>>().join(", ")
}
