//! HTTP error mapping.
//!
//! # Responsibility
//! - Translate service errors into status codes and `{success:false, message}`
//!   bodies.
//!
//! # Invariants
//! - Validation is always 400 and not-found is always 404.
//! - Anything else is a 500 carrying the underlying error message.

use crate::response::ErrorResponse;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use log::error;
use quicknote_core::NoteServiceError;
use std::fmt::{Display, Formatter};

pub const MISSING_FIELDS_MESSAGE: &str = "Please provide both title and content";
pub const NOT_FOUND_MESSAGE: &str = "Note not found";

/// Error returned by note handlers.
#[derive(Debug)]
pub enum ApiError {
    /// Title or content missing on create.
    Validation,
    /// No note for the requested id, or the id did not parse.
    NotFound,
    /// Request body is not a JSON object of the expected shape.
    BadRequest(String),
    /// Unexpected failure below the handler.
    Internal(String),
}

impl Display for ApiError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation => write!(f, "{MISSING_FIELDS_MESSAGE}"),
            Self::NotFound => write!(f, "{NOT_FOUND_MESSAGE}"),
            Self::BadRequest(message) | Self::Internal(message) => write!(f, "{message}"),
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation | Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse::new(self.to_string()))
    }
}

impl From<NoteServiceError> for ApiError {
    fn from(value: NoteServiceError) -> Self {
        match value {
            NoteServiceError::Validation(_) => Self::Validation,
            NoteServiceError::NoteNotFound(_) => Self::NotFound,
            NoteServiceError::Repo(err) => {
                error!("event=request_failed module=api status=error reason={err}");
                Self::Internal(err.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ApiError, MISSING_FIELDS_MESSAGE};
    use actix_web::http::StatusCode;
    use actix_web::ResponseError;
    use quicknote_core::{NoteServiceError, NoteValidationError, RepoError};

    #[test]
    fn service_errors_map_to_status_codes() {
        let validation: ApiError =
            NoteServiceError::Validation(NoteValidationError::MissingContent).into();
        assert_eq!(validation.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(validation.to_string(), MISSING_FIELDS_MESSAGE);

        let not_found: ApiError = NoteServiceError::NoteNotFound(4).into();
        assert_eq!(not_found.status_code(), StatusCode::NOT_FOUND);

        let internal: ApiError = NoteServiceError::Repo(RepoError::LockPoisoned).into();
        assert_eq!(internal.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(internal.to_string(), "note store lock poisoned");
    }
}
