//! Submission-form rules.
//!
//! Stricter than the server rules and independent of them: a form only
//! enables submission when every field is filled in and none of these
//! checks fails. The edit dialog only touches content, so it runs
//! [`validate_content`] alone.

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

pub const MIN_NAME_CHARACTERS: usize = 3;
pub const MIN_FEEDBACK_CHARACTERS: usize = 20;

/// Length as a browser form counts it: UTF-16 code units.
fn form_length(value: &str) -> usize {
    value.encode_utf16().count()
}

fn name_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[a-zA-Z\s]+$").expect("name pattern is valid"))
}

fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
    })
}

/// The text fields a submission form collects.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackForm {
    pub name: String,
    pub email: String,
    pub content: String,
}

/// Per-field messages; `None` means the field passed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormErrors {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl FormErrors {
    pub fn is_valid(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.content.is_none()
    }
}

impl FeedbackForm {
    pub fn validate(&self) -> FormErrors {
        FormErrors {
            name: validate_name(&self.name),
            email: validate_email(&self.email),
            content: validate_content(&self.content),
        }
    }

    /// Every field has non-whitespace input.
    pub fn is_filled(&self) -> bool {
        [&self.name, &self.email, &self.content]
            .iter()
            .all(|v| !v.trim().is_empty())
    }

    /// Whether the form may be sent to the server.
    pub fn can_submit(&self) -> bool {
        self.is_filled() && self.validate().is_valid()
    }
}

pub fn validate_name(name: &str) -> Option<String> {
    let name = name.trim();
    if form_length(name) < MIN_NAME_CHARACTERS {
        return Some(format!(
            "Name must be at least {MIN_NAME_CHARACTERS} characters long"
        ));
    }
    if !name_pattern().is_match(name) {
        return Some("Name must contain only alphabetical characters and spaces".to_string());
    }
    None
}

pub fn validate_email(email: &str) -> Option<String> {
    let email = email.trim();
    if email.is_empty() {
        return Some("Email is required".to_string());
    }
    if !email_pattern().is_match(email) {
        return Some("Please enter a valid email address".to_string());
    }
    None
}

pub fn validate_content(content: &str) -> Option<String> {
    if form_length(content.trim()) < MIN_FEEDBACK_CHARACTERS {
        return Some(format!(
            "Feedback must be at least {MIN_FEEDBACK_CHARACTERS} characters long"
        ));
    }
    None
}
