//! Calls to the plantilla microservice.
//!
//! Every call returns a `Result`; turning a failure into the blocking alert
//! the user sees is the caller's job (`helpers::report`).

use crate::config;
use common::model::Athlete;
use common::requests::SaveAthleteRequest;
use common::responses::Page;
use gloo_net::http::Request;
use serde_json::Value;
use thiserror::Error;
use web_sys::{ReferrerPolicy, RequestCache, RequestCredentials, RequestMode};

/// Message shown to the user for any failed call.
pub const GATEWAY_ERROR: &str = "Error: No se han podido acceder al API Gateway";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Error: No se han podido acceder al API Gateway: {0}")]
    Network(#[from] gloo_net::Error),
    #[error("Error: No se han podido acceder al API Gateway: el microservicio respondió {status}: {body}")]
    Status { status: u16, body: String },
}

async fn get_json<T: serde::de::DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let response = Request::get(&config::url(path)).send().await?;
    if !response.ok() {
        return Err(ApiError::Status {
            status: response.status(),
            body: response.text().await.unwrap_or_default(),
        });
    }
    Ok(response.json::<T>().await?)
}

/// `GET /plantilla/getTodas`, unwrapped from its `{ data }` envelope.
pub async fn fetch_all() -> Result<Vec<Athlete>, ApiError> {
    let page: Page<Athlete> = get_json("/plantilla/getTodas").await?;
    Ok(page.data)
}

pub async fn fetch_by_id(id: &str) -> Result<Athlete, ApiError> {
    get_json(&format!("/plantilla/getPorId/{}", id)).await
}

/// Raw JSON of the home (`/plantilla/`) or about (`/plantilla/acercade`) routes.
pub async fn fetch_info(path: &str) -> Result<Value, ApiError> {
    get_json(path).await
}

/// Posts the edited athlete. The request is sent `no-cors`, so the response is
/// opaque and is not read: a failed update on the server goes unnoticed here,
/// and callers re-fetch the record to show what was actually stored.
pub async fn save(request: &SaveAthleteRequest) -> Result<(), ApiError> {
    let body = serde_json::to_string(request).map_err(gloo_net::Error::from)?;
    Request::post(&config::url("/plantilla/setTodo/"))
        .mode(RequestMode::NoCors)
        .cache(RequestCache::NoCache)
        .credentials(RequestCredentials::Omit)
        .referrer_policy(ReferrerPolicy::NoReferrer)
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(body)?
        .send()
        .await?;
    Ok(())
}
