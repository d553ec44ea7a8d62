//! Storage port: whole-document persistence.

use std::future::Future;

use sensorhub_domain::document::SensorDocument;
use sensorhub_domain::error::SensorHubError;

/// Persists the [`SensorDocument`] as a single unit.
///
/// There are no partial updates: every write replaces the whole document.
pub trait DocumentStore {
    /// Read the stored document.
    ///
    /// A missing or unreadable document must yield
    /// [`SensorDocument::default`] rather than an error.
    fn load(&self) -> impl Future<Output = Result<SensorDocument, SensorHubError>> + Send;

    /// Replace the stored document.
    ///
    /// Implementations must never let a concurrent [`load`](Self::load)
    /// observe a partially written document.
    fn save(
        &self,
        document: &SensorDocument,
    ) -> impl Future<Output = Result<(), SensorHubError>> + Send;
}
