//! # sensorhub-adapter-storage-json
//!
//! Whole-document persistence in a single JSON file.
//!
//! ## Responsibilities
//! - Implement the `DocumentStore` port defined in `sensorhub-app::ports::storage`
//! - Fall back to the default document when the file is missing or corrupt
//! - Replace the file atomically (write to a sibling, then rename) so readers
//!   never observe a torn write
//!
//! ## Dependency rule
//! Depends on `sensorhub-app` (for port traits) and `sensorhub-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

pub mod error;
pub mod store;

pub use error::StorageError;
pub use store::JsonFileStore;
