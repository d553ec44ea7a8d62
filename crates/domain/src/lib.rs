//! # sensorhub-domain
//!
//! Pure domain model for the sensorhub smart-home simulator.
//!
//! ## Responsibilities
//! - Foundational types: error conventions, timestamps
//! - Define the **sensor document** persisted as a whole (lights, binary and
//!   numeric sensors)
//! - Define **history entries** (toggle events, on-durations, numeric readings)
//! - Define the **bounds** numeric sensors walk within
//! - Enforce change-triggered history recording
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod time;

pub mod document;
pub mod light;
pub mod sensor;
