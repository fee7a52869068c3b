//! Note use-case service.
//!
//! # Responsibility
//! - Provide note create/list/get/update/delete APIs to the HTTP layer.
//! - Collapse repository errors into the two domain error kinds.
//! - Emit metadata-only diagnostic events.
//!
//! # Invariants
//! - `update_note` uses partial-update semantics.
//! - Note list is always in creation order.
//! - Log events never include note title or content.

use crate::model::note::{NewNote, Note, NoteId, NoteUpdate, NoteValidationError};
use crate::repo::note_repo::{NoteRepository, RepoError};
use log::{debug, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Service error for note use-cases.
#[derive(Debug)]
pub enum NoteServiceError {
    /// Creation input is missing a required field.
    Validation(NoteValidationError),
    /// Target note does not exist.
    NoteNotFound(NoteId),
    /// Storage-layer failure.
    Repo(RepoError),
}

impl Display for NoteServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::NoteNotFound(id) => write!(f, "note not found: {id}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for NoteServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Repo(err) => Some(err),
            Self::NoteNotFound(_) => None,
        }
    }
}

impl From<RepoError> for NoteServiceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::NotFound(id) => Self::NoteNotFound(id),
            RepoError::Validation(err) => Self::Validation(err),
            other => Self::Repo(other),
        }
    }
}

/// List result envelope used by service callers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotesListResult {
    /// Notes in creation order.
    pub items: Vec<Note>,
    /// Number of notes in `items`.
    pub count: usize,
}

/// Note service facade over repository implementations.
pub struct NoteService<R: NoteRepository> {
    repo: R,
}

impl<R: NoteRepository> NoteService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Borrows the underlying repository.
    pub fn repo(&self) -> &R {
        &self.repo
    }

    /// Creates one note from a title/content pair.
    pub fn create_note(&self, input: &NewNote) -> Result<Note, NoteServiceError> {
        match self.repo.create_note(input) {
            Ok(note) => {
                info!(
                    "event=note_create module=service status=ok note_id={}",
                    note.id
                );
                Ok(note)
            }
            Err(err) => {
                warn!(
                    "event=note_create module=service status=rejected reason={}",
                    err
                );
                Err(err.into())
            }
        }
    }

    /// Lists every note in creation order.
    pub fn list_notes(&self) -> Result<NotesListResult, NoteServiceError> {
        let items = self.repo.list_notes()?;
        let count = items.len();
        debug!("event=note_list module=service status=ok count={count}");
        Ok(NotesListResult { items, count })
    }

    /// Gets one note by id.
    pub fn get_note(&self, id: NoteId) -> Result<Note, NoteServiceError> {
        Ok(self.repo.get_note(id)?)
    }

    /// Applies a partial update to one note.
    pub fn update_note(&self, id: NoteId, update: &NoteUpdate) -> Result<Note, NoteServiceError> {
        let note = self.repo.update_note(id, update)?;
        info!(
            "event=note_update module=service status=ok note_id={} title_changed={} content_changed={}",
            id,
            update.title.as_deref().is_some_and(|v| !v.is_empty()),
            update.content.as_deref().is_some_and(|v| !v.is_empty()),
        );
        Ok(note)
    }

    /// Deletes one note and returns its last snapshot.
    pub fn delete_note(&self, id: NoteId) -> Result<Note, NoteServiceError> {
        let note = self.repo.delete_note(id)?;
        info!("event=note_delete module=service status=ok note_id={id}");
        Ok(note)
    }
}
