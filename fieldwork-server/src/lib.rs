//! # Fieldwork Server
//!
//! HTTP API for the fieldwork job-dispatch tracker.
//!
//! The server is built on Axum and exposes inspector CRUD plus the job
//! lifecycle endpoints under `/api`. Request bodies cross a strict
//! validation boundary (unknown fields rejected, violations collected per
//! field) before reaching the domain layer in `fieldwork-core`.

pub mod config;
pub mod errors;
pub mod inspector_handlers;
pub mod job_handlers;
pub mod requests;
pub mod routes;
pub mod state;
pub mod validation;
pub mod views;

pub use routes::create_api_router;
pub use state::AppState;
