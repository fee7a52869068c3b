//! HTTP server bootstrap.
//!
//! # Responsibility
//! - Compose the note routes with CORS and access logging.
//! - Bind the configured address and run until shutdown.

use crate::routes::{configure_app, SharedNoteService};
use actix_cors::Cors;
use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use log::info;
use quicknote_core::{NoteService, NoteStore, ServerConfig};

/// Builds the full application: CORS, access log, state and note routes.
///
/// The server calls this once per worker; tests call it directly.
pub fn build_app(
    service: SharedNoteService,
    prefix: &str,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    // The browser UI may be served from a different origin during development.
    let cors = Cors::default()
        .allow_any_origin()
        .allow_any_method()
        .allow_any_header()
        .max_age(3600);

    App::new()
        .wrap(Logger::default())
        .wrap(cors)
        .configure(configure_app(service, prefix))
}

/// Runs the HTTP server until it receives a shutdown signal.
///
/// The given service is the single store owner for the process lifetime.
pub async fn run_server(
    config: &ServerConfig,
    service: NoteService<NoteStore>,
) -> std::io::Result<()> {
    let data = web::Data::new(service);
    let prefix = config.api_prefix.clone();

    let server = HttpServer::new(move || build_app(data.clone(), &prefix))
        .bind((config.host.as_str(), config.port))?;

    info!(
        "event=server_start module=api status=ok addr={} prefix={}",
        config.bind_addr(),
        config.api_prefix
    );

    server.run().await?;

    info!("event=server_stop module=api status=ok");
    Ok(())
}
