//! HTTP layer for QuickNote.
//!
//! # Responsibility
//! - Expose the note service as a JSON REST API.
//! - Keep status-code and envelope decisions out of core.
//!
//! # Invariants
//! - Every response body carries a `success` flag.
//! - Domain errors map to 400/404; everything else is 500.

pub mod error;
pub mod response;
pub mod routes;
pub mod server;

pub use error::ApiError;
pub use routes::{configure_app, SharedNoteService};
pub use server::{build_app, run_server};
