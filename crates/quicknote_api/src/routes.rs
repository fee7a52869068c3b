//! Notes REST API.
//!
//! # Responsibility
//! - Map `/notes` and `/notes/{id}` requests onto `NoteService` calls.
//! - Decode JSON bodies and path ids; shape success envelopes.
//!
//! # Invariants
//! - Handlers never touch the store directly; all access goes through the
//!   shared service instance.
//! - Path ids are read by their leading integer; a segment without one is
//!   reported as "not found", never as a separate error class.

use crate::error::ApiError;
use crate::response::{DeleteNoteResponse, HealthResponse, NoteResponse, NotesListResponse};
use actix_web::{web, HttpResponse};
use log::debug;
use quicknote_core::{NewNote, NoteId, NoteService, NoteStore, NoteUpdate};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Service instance shared by every worker.
pub type SharedNoteService = web::Data<NoteService<NoteStore>>;

/// Registers shared state and note routes under `prefix`.
///
/// `build_app` layers middleware on top of this route table.
pub fn configure_app(
    service: SharedNoteService,
    prefix: &str,
) -> impl FnOnce(&mut web::ServiceConfig) {
    let prefix = prefix.to_string();
    move |cfg: &mut web::ServiceConfig| {
        cfg.app_data(service).service(
            web::scope(&prefix)
                .route("/health", web::get().to(health_check))
                .service(
                    web::resource("/notes")
                        .route(web::get().to(list_notes))
                        .route(web::post().to(create_note)),
                )
                .service(
                    web::resource("/notes/{id}")
                        .route(web::get().to(get_note))
                        .route(web::put().to(update_note))
                        .route(web::delete().to(delete_note)),
                ),
        );
    }
}

async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        success: true,
        status: "ok",
        version: quicknote_core::core_version(),
    })
}

// POST /notes
async fn create_note(
    service: SharedNoteService,
    body: web::Bytes,
) -> Result<HttpResponse, ApiError> {
    let input: NewNote = parse_json_body(&body)?;
    let note = service.create_note(&input)?;
    Ok(HttpResponse::Created().json(NoteResponse::new(note)))
}

// GET /notes
async fn list_notes(service: SharedNoteService) -> Result<HttpResponse, ApiError> {
    let listed = service.list_notes()?;
    Ok(HttpResponse::Ok().json(NotesListResponse {
        success: true,
        count: listed.count,
        notes: listed.items,
    }))
}

// GET /notes/{id}
async fn get_note(
    service: SharedNoteService,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let id = parse_note_id(&path)?;
    let note = service.get_note(id)?;
    Ok(HttpResponse::Ok().json(NoteResponse::new(note)))
}

// PUT /notes/{id}
async fn update_note(
    service: SharedNoteService,
    path: web::Path<String>,
    body: web::Bytes,
) -> Result<HttpResponse, ApiError> {
    let id = parse_note_id(&path)?;
    let update: NoteUpdate = parse_json_body(&body)?;
    let note = service.update_note(id, &update)?;
    Ok(HttpResponse::Ok().json(NoteResponse::new(note)))
}

// DELETE /notes/{id}
async fn delete_note(
    service: SharedNoteService,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let id = parse_note_id(&path)?;
    let note = service.delete_note(id)?;
    Ok(HttpResponse::Ok().json(DeleteNoteResponse::new(note)))
}

/// Reads the leading integer of a path segment.
///
/// Leading whitespace and one sign are accepted and trailing characters are
/// ignored, so `1abc` and `1.5` both address note 1. No digits, a negative
/// value, or overflow all report not found.
fn parse_note_id(raw: &str) -> Result<NoteId, ApiError> {
    let trimmed = raw.trim_start();
    let (negative, unsigned) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let digits_end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    let digits = &unsigned[..digits_end];

    let reject = |reason: &str| {
        debug!("event=note_id_parse module=api status=rejected reason={reason}");
        ApiError::NotFound
    };
    if digits.is_empty() {
        return Err(reject("no_digits"));
    }
    let id = digits.parse::<NoteId>().map_err(|_| reject("overflow"))?;
    if negative && id != 0 {
        return Err(reject("negative"));
    }
    Ok(id)
}

/// Decodes a JSON object body; a blank body decodes as `T::default()`.
///
/// Arrays and scalars are rejected even when serde could map them onto the
/// target's fields positionally.
fn parse_json_body<T>(body: &[u8]) -> Result<T, ApiError>
where
    T: DeserializeOwned + Default,
{
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }
    let value: Value = serde_json::from_slice(body)
        .map_err(|err| ApiError::BadRequest(format!("invalid JSON body: {err}")))?;
    if !value.is_object() {
        return Err(ApiError::BadRequest(
            "invalid JSON body: expected an object".to_string(),
        ));
    }
    serde_json::from_value(value)
        .map_err(|err| ApiError::BadRequest(format!("invalid JSON body: {err}")))
}

#[cfg(test)]
mod tests {
    use super::{parse_json_body, parse_note_id};
    use crate::error::ApiError;
    use quicknote_core::{NewNote, NoteUpdate};

    #[test]
    fn note_ids_use_leading_integer_prefix() {
        for (raw, expected) in [
            ("42", 42),
            ("1abc", 1),
            ("1.5", 1),
            ("+1", 1),
            ("01", 1),
            (" 7", 7),
            ("-0", 0),
        ] {
            assert_eq!(parse_note_id(raw).unwrap(), expected, "raw `{raw}`");
        }
    }

    #[test]
    fn note_ids_without_usable_digits_are_not_found() {
        for raw in ["abc", "-1", "-", "", ".5", "99999999999999999999999"] {
            assert!(
                matches!(parse_note_id(raw), Err(ApiError::NotFound)),
                "`{raw}` should map to not found"
            );
        }
    }

    #[test]
    fn blank_body_decodes_as_default() {
        let update: NoteUpdate = parse_json_body(b"  \n").unwrap();
        assert_eq!(update, NoteUpdate::default());
    }

    #[test]
    fn body_fields_are_optional() {
        let input: NewNote = parse_json_body(br#"{"title":"A"}"#).unwrap();
        assert_eq!(input.title.as_deref(), Some("A"));
        assert!(input.content.is_none());
    }

    #[test]
    fn malformed_body_is_bad_request() {
        let result: Result<NewNote, _> = parse_json_body(b"{title:");
        assert!(matches!(result, Err(ApiError::BadRequest(_))));

        let wrong_type: Result<NewNote, _> = parse_json_body(br#"{"title":5,"content":"x"}"#);
        assert!(matches!(wrong_type, Err(ApiError::BadRequest(_))));
    }

    #[test]
    fn non_object_bodies_are_bad_request() {
        let array: Result<NewNote, _> = parse_json_body(br#"["X","Y"]"#);
        assert!(matches!(array, Err(ApiError::BadRequest(_))));

        let scalars: [&[u8]; 4] = [b"\"X\"", b"5", b"null", b"true"];
        for scalar in scalars {
            let result: Result<NoteUpdate, _> = parse_json_body(scalar);
            assert!(matches!(result, Err(ApiError::BadRequest(_))));
        }
    }
}
