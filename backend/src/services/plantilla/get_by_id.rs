//! # Athlete Retrieval Service
//!
//! Backend logic for `GET /plantilla/getPorId/{id}`: one athlete looked up by
//! its document id. The document is answered as stored, without the
//! `{ data }` envelope of the listing.

use super::error_response;
use crate::store::DocumentStore;
use actix_web::{web, HttpResponse, Responder};

/// Actix web handler for the `GET /plantilla/getPorId/{id}` endpoint.
///
/// # Arguments
/// * `id` - The document id, extracted from the URL path.
/// * `store` - The document store shared by the workers.
///
/// # Returns
/// - `200 OK` with the `Athlete` document on success.
/// - `500 Internal Server Error` with `{ "error": ... }` when the id is unknown
///   or the store fails.
pub async fn process(id: web::Path<String>, store: web::Data<dyn DocumentStore>) -> impl Responder {
    match store.get(&id) {
        Ok(athlete) => HttpResponse::Ok().json(athlete),
        Err(e) => error_response(e),
    }
}
