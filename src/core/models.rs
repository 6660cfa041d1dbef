use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// Note text accepted for summarization. Never blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryRequest {
    note_text: String,
}

impl SummaryRequest {
    /// # Errors
    ///
    /// Returns [`AppError::EmptyNote`] if the text is empty after trimming.
    pub fn new(note_text: impl Into<String>) -> Result<Self, AppError> {
        let note_text = note_text.into();
        if note_text.trim().is_empty() {
            return Err(AppError::EmptyNote);
        }
        Ok(Self { note_text })
    }

    /// The text exactly as entered; it is not trimmed.
    #[must_use]
    pub fn note_text(&self) -> &str {
        &self.note_text
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryResult {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryRecord {
    pub id: String,
    pub original_text: String,
    pub summary: String,
    pub user_id: String,
    pub created_at: DateTime<Utc>,
}

/// Insert payload; the store assigns `id` and `created_at`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewSummaryRecord {
    pub original_text: String,
    pub summary: String,
    pub user_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Session {
    Authenticated(User),
    Anonymous,
}

impl Session {
    #[must_use]
    pub fn user(&self) -> Option<&User> {
        match self {
            Session::Authenticated(user) => Some(user),
            Session::Anonymous => None,
        }
    }
}
