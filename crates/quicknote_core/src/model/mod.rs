//! Domain model for notes.
//!
//! # Responsibility
//! - Define canonical data structures used by core business logic.
//! - Keep input validation next to the types it guards.
//!
//! # Invariants
//! - Every note is identified by a store-assigned `NoteId`.
//! - Deletion is a hard removal; ids are still never reused.

pub mod note;
