//! # Plantilla Service Module
//!
//! HTTP surface of the microservice. Every route lives under `/plantilla` and
//! answers JSON. Failures of any kind (bad body, unknown id, database error)
//! answer `500` with `{ "error": <description> }`.
//!
//! ## Sub-modules:
//! - `info`: the home and "acerca de" messages.
//! - `get_all`: the full collection, plus the `test_db` probe.
//! - `get_by_id`: one athlete by document id.
//! - `set_all`: the athlete update.

mod get_all;
mod get_by_id;
mod info;
mod set_all;

use crate::store::StoreError;
use actix_web::middleware::DefaultHeaders;
use actix_web::web::{get, post, scope};
use actix_web::{HttpResponse, Scope};
use common::responses::ErrorResponse;
use log::error;
use std::fmt::Display;
use thiserror::Error;

/// The base path for all routes of the service.
const API_PATH: &str = "/plantilla";

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("cuerpo de la petición no válido: {0}")]
    Body(String),
    #[error("falta el id del deportista")]
    MissingId,
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Configures and returns the Actix `Scope` for the service routes.
///
/// # Registered Routes:
///
/// *   **`GET /`**: home message.
/// *   **`GET /acercade`**: author info.
/// *   **`GET /test_db`**: every document, as a connectivity probe.
/// *   **`GET /getTodas`**: every document, as `{ data: [...] }`.
/// *   **`GET /getPorId/{id}`**: one document.
/// *   **`POST /setTodo`** and **`POST /setTodo/`**: update one athlete, see
///     `set_all` for the accepted bodies.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("/", get().to(info::home))
        .route("/acercade", get().to(info::about))
        .route("/test_db", get().to(get_all::test_db))
        .route("/getTodas", get().to(get_all::process))
        .route("/getPorId/{id}", get().to(get_by_id::process))
        .route("/setTodo", post().to(set_all::process))
        .route("/setTodo/", post().to(set_all::process))
}

/// Headers that let any origin call the service.
pub fn cors() -> DefaultHeaders {
    DefaultHeaders::new()
        .add(("Access-Control-Allow-Origin", "*"))
        .add((
            "Access-Control-Allow-Headers",
            "Origin, X-Requested-With, Content-Type, Accept",
        ))
}

pub(crate) fn error_response(e: impl Display) -> HttpResponse {
    error!("{}", e);
    HttpResponse::InternalServerError().json(ErrorResponse {
        error: e.to_string(),
    })
}
