use serde::{Deserialize, Serialize};

/// Envelope of list responses: `{ "data": [...] }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub data: Vec<T>,
}

/// Body of every failed microservice call: `{ "error": "..." }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Body of the home route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HomeResponse {
    pub mensaje: String,
}

/// Body of the "acerca de" route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AboutResponse {
    pub mensaje: String,
    pub autor: String,
    pub email: String,
    pub fecha: String,
}
