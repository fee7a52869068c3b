//! Repository layer abstractions and storage implementations.
//!
//! # Responsibility
//! - Define use-case oriented data access contracts.
//! - Keep collection and id-counter details out of service orchestration.
//!
//! # Invariants
//! - Repository writes must enforce `NewNote::validate()` before mutation.
//! - Repository APIs return semantic errors (`NotFound`) in addition to
//!   storage failures.

pub mod note_repo;
