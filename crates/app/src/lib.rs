//! # sensorhub-app
//!
//! Application layer: use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `DocumentStore`: whole-document load & save
//!   - `Entropy`: uniform random draws
//! - Define **driving/inbound** use-cases:
//!   - `SimulationEngine`: one tick of the sensor random walk, and the
//!     fixed-interval loop driving it
//!   - `MotionScheduler`: delayed on/off cycles of the dynamic motion sensor
//! - Serialize every load-mutate-save sequence through `SharedDocument`
//! - Provide **in-process infrastructure** that doesn't need IO (`RngEntropy`)
//!
//! ## Dependency rule
//! Depends on `sensorhub-domain` only (plus `tokio` for timers and locks).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod config;
pub mod entropy;
pub mod motion_scheduler;
pub mod ports;
pub mod shared_document;
pub mod simulation_engine;

#[cfg(test)]
pub(crate) mod testing;
