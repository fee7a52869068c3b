//! JSON response envelopes for the notes API.

use quicknote_core::Note;
use serde::Serialize;

pub const DELETED_MESSAGE: &str = "Note deleted successfully";

/// Single-note envelope for create/get/update.
#[derive(Debug, Serialize)]
pub struct NoteResponse {
    pub success: bool,
    pub note: Note,
}

impl NoteResponse {
    pub fn new(note: Note) -> Self {
        Self {
            success: true,
            note,
        }
    }
}

/// List envelope; `notes` is in creation order.
#[derive(Debug, Serialize)]
pub struct NotesListResponse {
    pub success: bool,
    pub count: usize,
    pub notes: Vec<Note>,
}

/// Delete envelope carrying the removed snapshot.
#[derive(Debug, Serialize)]
pub struct DeleteNoteResponse {
    pub success: bool,
    pub message: &'static str,
    pub note: Note,
}

impl DeleteNoteResponse {
    pub fn new(note: Note) -> Self {
        Self {
            success: true,
            message: DELETED_MESSAGE,
            note,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub success: bool,
    pub status: &'static str,
    pub version: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}
