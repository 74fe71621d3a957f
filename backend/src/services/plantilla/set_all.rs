//! # Athlete Update Service
//!
//! `POST /plantilla/setTodo/` overwrites the editable fields of one athlete
//! and answers with the updated document.
//!
//! The body comes in one of three encodings:
//!
//! 1. Plain JSON, as sent by programmatic clients.
//! 2. The front-end form submission: the JSON text posted with a
//!    `application/x-www-form-urlencoded` content type. Read as a form, it is a
//!    single key (the JSON text) with an empty value.
//! 3. Ordinary `key=value` form pairs.
//!
//! The id travels in the body (`id_deportista`). Only `nombre`, `apellidos`,
//! `nacionalidad`, `años_de_participacion_mundial` and
//! `numero_de_participaciones_juegos_olimpicos` are written.

use super::{error_response, ServiceError};
use crate::store::DocumentStore;
use actix_web::{web, HttpResponse, Responder};
use common::model::Athlete;
use common::requests::SaveAthleteRequest;
use log::info;
use serde_json::{Map, Value};

/// Actix web handler for the `POST /plantilla/setTodo` and
/// `POST /plantilla/setTodo/` endpoints.
///
/// # Arguments
/// * `body` - The raw request body, in any of the three encodings above.
/// * `store` - The document store shared by the workers.
///
/// # Returns
/// - `200 OK` with the updated `Athlete` document on success.
/// - `500 Internal Server Error` with `{ "error": ... }` when the body can not
///   be read or names no known athlete.
pub async fn process(body: web::Bytes, store: web::Data<dyn DocumentStore>) -> impl Responder {
    match save_athlete(&body, store.get_ref()) {
        Ok(athlete) => HttpResponse::Ok().json(athlete),
        Err(e) => error_response(e),
    }
}

/// Decodes `body` and merges its fields into the stored athlete. Fields absent
/// from the body keep their stored value and shape.
pub fn save_athlete(body: &[u8], store: &dyn DocumentStore) -> Result<Athlete, ServiceError> {
    let request = parse_save_body(body)?;
    let id = request.id_deportista.trim();
    if id.is_empty() {
        return Err(ServiceError::MissingId);
    }

    let athlete = store.update(id, &request.to_patch())?;
    info!("setTodo: deportista {} actualizado", id);
    Ok(athlete)
}

/// Decodes a save body in any of the accepted encodings.
pub fn parse_save_body(body: &[u8]) -> Result<SaveAthleteRequest, ServiceError> {
    if let Ok(request) = serde_json::from_slice::<SaveAthleteRequest>(body) {
        return Ok(request);
    }

    let pairs: Vec<(String, String)> =
        serde_urlencoded::from_bytes(body).map_err(|e| ServiceError::Body(e.to_string()))?;

    match pairs.as_slice() {
        [(key, value)] if value.is_empty() => {
            serde_json::from_str(key).map_err(|e| ServiceError::Body(e.to_string()))
        }
        [] => Err(ServiceError::Body("cuerpo vacío".to_string())),
        _ => {
            let fields: Map<String, Value> = pairs
                .into_iter()
                .map(|(key, value)| (key, Value::String(value)))
                .collect();
            serde_json::from_value(Value::Object(fields))
                .map_err(|e| ServiceError::Body(e.to_string()))
        }
    }
}
