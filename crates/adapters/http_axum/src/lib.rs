//! # sensorhub-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve a small JSON API over the sensor document:
//!   - `GET  /current` : current value of every sensor
//!   - `GET  /history` : history of every sensor
//!   - `POST /generate`: run a simulation tick now and return the document
//! - Serve a plain-text banner at `/`
//! - Map application results into HTTP responses
//!
//! ## Dependency rule
//! Depends on `sensorhub-app` (for the engine and port traits) and
//! `sensorhub-domain` (for the response types). Never leaks axum types
//! into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
