//! # Service Information
//!
//! Fixed answers of the two informational routes:
//!
//! - `GET /plantilla/` identifies the microservice with a single message.
//! - `GET /plantilla/acercade` adds the author and contact details.
//!
//! Neither route touches the store, so both keep answering when the database
//! is unavailable.

use actix_web::{HttpResponse, Responder};
use common::responses::{AboutResponse, HomeResponse};

pub const HOME_MESSAGE: &str = "Microservicio MS Plantilla: home";
pub const ABOUT_MESSAGE: &str = "Microservicio MS Plantilla: acerca de";

/// Actix web handler for the `GET /plantilla/` endpoint.
///
/// # Returns
/// - `200 OK` with `{ "mensaje": HOME_MESSAGE }`.
pub async fn home() -> impl Responder {
    HttpResponse::Ok().json(HomeResponse {
        mensaje: HOME_MESSAGE.to_string(),
    })
}

/// Actix web handler for the `GET /plantilla/acercade` endpoint.
///
/// # Returns
/// - `200 OK` with `{ "mensaje", "autor", "email", "fecha" }`, the four fields
///   the front-end requires before it renders the "acerca de" block.
pub async fn about() -> impl Responder {
    HttpResponse::Ok().json(AboutResponse {
        mensaje: ABOUT_MESSAGE.to_string(),
        autor: "Francisco Javier Martinez Lomas".to_string(),
        email: "fjml0023@red.ujaen.es".to_string(),
        fecha: "14/03/2023".to_string(),
    })
}
