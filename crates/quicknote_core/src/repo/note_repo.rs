//! Note repository contract and in-memory implementation.
//!
//! # Responsibility
//! - Own the note collection and the next-id counter.
//! - Provide create/list/get/update/delete without any I/O or serialization.
//!
//! # Invariants
//! - Ids start at 1, increase by one per successful create, and are never
//!   reused, even after deletion.
//! - Collection order is creation order; updates never reorder.
//! - Every mutation runs inside one lock acquisition and is all-or-nothing.
//!
//! # See also
//! - `crate::model::note` for validation and partial-update rules.

use crate::model::note::{NewNote, Note, NoteId, NoteUpdate, NoteValidationError};
use chrono::{DateTime, Utc};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::{Mutex, MutexGuard};

const FIRST_NOTE_ID: NoteId = 1;

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for note storage operations.
#[derive(Debug)]
pub enum RepoError {
    Validation(NoteValidationError),
    NotFound(NoteId),
    /// A previous holder of the store lock panicked mid-operation.
    LockPoisoned,
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "note not found: {id}"),
            Self::LockPoisoned => write!(f, "note store lock poisoned"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::NotFound(_) | Self::LockPoisoned => None,
        }
    }
}

impl From<NoteValidationError> for RepoError {
    fn from(value: NoteValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Time source used to stamp `created_at` / `updated_at`.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time source.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Repository interface for note CRUD operations.
pub trait NoteRepository: Send + Sync {
    /// Validates input, assigns the next id and appends the note.
    fn create_note(&self, input: &NewNote) -> RepoResult<Note>;
    /// Returns all notes in creation order.
    fn list_notes(&self) -> RepoResult<Vec<Note>>;
    /// Gets one note by id.
    fn get_note(&self, id: NoteId) -> RepoResult<Note>;
    /// Applies a partial update and returns the mutated note.
    fn update_note(&self, id: NoteId, update: &NoteUpdate) -> RepoResult<Note>;
    /// Removes one note and returns it as it was before removal.
    fn delete_note(&self, id: NoteId) -> RepoResult<Note>;
}

struct StoreState {
    notes: Vec<Note>,
    next_id: NoteId,
}

impl StoreState {
    fn position(&self, id: NoteId) -> RepoResult<usize> {
        self.notes
            .iter()
            .position(|note| note.id == id)
            .ok_or(RepoError::NotFound(id))
    }
}

/// Process-local note store.
///
/// One instance is constructed at startup and shared with the API layer;
/// tests build their own isolated instances.
pub struct NoteStore<C: Clock = SystemClock> {
    state: Mutex<StoreState>,
    clock: C,
}

impl NoteStore<SystemClock> {
    /// Creates an empty store stamped by the system clock.
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for NoteStore<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> NoteStore<C> {
    /// Creates an empty store using the provided time source.
    pub fn with_clock(clock: C) -> Self {
        Self {
            state: Mutex::new(StoreState {
                notes: Vec::new(),
                next_id: FIRST_NOTE_ID,
            }),
            clock,
        }
    }

    /// Number of notes currently stored.
    pub fn len(&self) -> RepoResult<usize> {
        Ok(self.lock()?.notes.len())
    }

    /// Returns whether the store holds no notes.
    pub fn is_empty(&self) -> RepoResult<bool> {
        Ok(self.lock()?.notes.is_empty())
    }

    fn lock(&self) -> RepoResult<MutexGuard<'_, StoreState>> {
        self.state.lock().map_err(|_| RepoError::LockPoisoned)
    }
}

impl<C: Clock> NoteRepository for NoteStore<C> {
    fn create_note(&self, input: &NewNote) -> RepoResult<Note> {
        let (title, content) = input.validate()?;

        let mut state = self.lock()?;
        let note = Note {
            id: state.next_id,
            title: title.to_string(),
            content: content.to_string(),
            created_at: self.clock.now(),
            updated_at: None,
        };
        state.next_id += 1;
        state.notes.push(note.clone());
        Ok(note)
    }

    fn list_notes(&self) -> RepoResult<Vec<Note>> {
        Ok(self.lock()?.notes.clone())
    }

    fn get_note(&self, id: NoteId) -> RepoResult<Note> {
        let state = self.lock()?;
        let index = state.position(id)?;
        Ok(state.notes[index].clone())
    }

    fn update_note(&self, id: NoteId, update: &NoteUpdate) -> RepoResult<Note> {
        let mut state = self.lock()?;
        let index = state.position(id)?;
        let note = &mut state.notes[index];
        update.apply(note, self.clock.now());
        Ok(note.clone())
    }

    fn delete_note(&self, id: NoteId) -> RepoResult<Note> {
        let mut state = self.lock()?;
        let index = state.position(id)?;
        // `remove` keeps the remaining notes in creation order.
        Ok(state.notes.remove(index))
    }
}
