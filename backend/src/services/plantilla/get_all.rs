//! # Athlete Listing Service
//!
//! Reads the whole `Deportistas` collection for `GET /plantilla/getTodas` and
//! for the `GET /plantilla/test_db` connectivity check.
//!
//! ## Workflow
//!
//! 1.  **HTTP Request**: `process` receives the GET request and the shared
//!     `DocumentStore`.
//! 2.  **Store Query**: every document is loaded, in insertion order. Ordering
//!     for display is the front-end's job.
//! 3.  **HTTP Response**: the documents are wrapped in a `Page` so the body is
//!     `{ "data": [...] }`, the envelope the front-end unwraps.
//!
//! A store failure answers `500` with `{ "error": ... }`.

use super::error_response;
use crate::store::DocumentStore;
use actix_web::{web, HttpResponse, Responder};
use common::responses::Page;
use log::debug;

/// Actix web handler for the `GET /plantilla/getTodas` endpoint.
///
/// # Arguments
/// * `store` - The document store shared by the workers.
///
/// # Returns
/// - `200 OK` with `{ "data": [Athlete, ...] }` on success.
/// - `500 Internal Server Error` with `{ "error": ... }` if the store fails.
pub async fn process(store: web::Data<dyn DocumentStore>) -> impl Responder {
    match store.all() {
        Ok(data) => {
            debug!("getTodas: {} deportistas", data.len());
            HttpResponse::Ok().json(Page { data })
        }
        Err(e) => error_response(e),
    }
}

/// Actix web handler for the `GET /plantilla/test_db` endpoint.
///
/// Answers exactly like `process`; a `200` proves the database is reachable.
pub async fn test_db(store: web::Data<dyn DocumentStore>) -> impl Responder {
    process(store).await
}
