//! Core domain logic for QuickNote.
//! This crate is the single source of truth for note invariants.

pub mod config;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use config::{ConfigError, ServerConfig};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::note::{NewNote, Note, NoteId, NoteUpdate, NoteValidationError};
pub use repo::note_repo::{
    Clock, NoteRepository, NoteStore, RepoError, RepoResult, SystemClock,
};
pub use service::note_service::{NoteService, NoteServiceError, NotesListResult};

/// Minimal health-check API for smoke integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
