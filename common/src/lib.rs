//! Shared model and rendering core for the deportistas front-end and the
//! `ms-plantilla` microservice.
//!
//! Everything in this crate is target independent: it builds natively for the
//! backend and its tests, and to wasm for the yew front-end.

pub mod model;
pub mod requests;
pub mod responses;
pub mod sort;
pub mod template;
pub mod views;

#[cfg(test)]
mod proptests;
