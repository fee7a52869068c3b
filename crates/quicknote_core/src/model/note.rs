//! Note domain model.
//!
//! # Responsibility
//! - Define the canonical `Note` record and its creation/update inputs.
//! - Own presence validation and partial-update field semantics.
//!
//! # Invariants
//! - `id` is assigned by the store and never reused for another note.
//! - `title` and `content` are never empty on a stored note.
//! - `created_at` is set once; `updated_at` stays `None` until first update.
//!
//! # See also
//! - `crate::repo::note_repo` for id assignment and storage.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Store-assigned note identifier.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type NoteId = u64;

/// Canonical note record.
///
/// Serialized in camelCase to match the external REST schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    /// Monotonic id, starting at 1 per store instance.
    pub id: NoteId,
    pub title: String,
    pub content: String,
    /// Set once at creation.
    pub created_at: DateTime<Utc>,
    /// Absent until the first successful update.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Validation errors for note creation input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteValidationError {
    /// `title` is absent or empty.
    MissingTitle,
    /// `content` is absent or empty.
    MissingContent,
}

impl Display for NoteValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingTitle => write!(f, "note title is required"),
            Self::MissingContent => write!(f, "note content is required"),
        }
    }
}

impl Error for NoteValidationError {}

/// Creation input. Both fields must be present and non-empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct NewNote {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

impl NewNote {
    /// Builds a creation input with both fields present.
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            content: Some(content.into()),
        }
    }

    /// Checks presence of both fields and returns them.
    ///
    /// Whitespace-only values count as present; only `None` and `""` fail.
    pub fn validate(&self) -> Result<(&str, &str), NoteValidationError> {
        let title = present(self.title.as_deref()).ok_or(NoteValidationError::MissingTitle)?;
        let content =
            present(self.content.as_deref()).ok_or(NoteValidationError::MissingContent)?;
        Ok((title, content))
    }
}

/// Partial update input.
///
/// A field is applied only when it is `Some` and non-empty; anything else
/// leaves the stored value untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct NoteUpdate {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

impl NoteUpdate {
    /// Update that replaces only the title.
    pub fn title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            content: None,
        }
    }

    /// Update that replaces only the content.
    pub fn content(content: impl Into<String>) -> Self {
        Self {
            title: None,
            content: Some(content.into()),
        }
    }

    /// Applies present fields to `note` and stamps `updated_at`.
    ///
    /// `updated_at` is refreshed even when no field is applied.
    pub fn apply(&self, note: &mut Note, now: DateTime<Utc>) {
        if let Some(title) = present(self.title.as_deref()) {
            note.title = title.to_string();
        }
        if let Some(content) = present(self.content.as_deref()) {
            note.content = content.to_string();
        }
        note.updated_at = Some(now);
    }
}

fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|value| !value.is_empty())
}
