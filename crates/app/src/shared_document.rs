//! Serialized access to the persisted sensor document.

use tokio::sync::Mutex;

use sensorhub_domain::document::SensorDocument;
use sensorhub_domain::error::SensorHubError;

use crate::ports::DocumentStore;

/// Wraps a [`DocumentStore`] so that load-mutate-save sequences never
/// interleave.
///
/// Every writer (engine ticks, motion cycle transitions) goes through
/// [`update`](Self::update). Readers go straight to the store, which
/// guarantees they never see a torn write.
pub struct SharedDocument<S> {
    store: S,
    write_lock: Mutex<()>,
}

impl<S: DocumentStore> SharedDocument<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            write_lock: Mutex::new(()),
        }
    }

    /// Load the current document.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the store.
    pub async fn read(&self) -> Result<SensorDocument, SensorHubError> {
        self.store.load().await
    }

    /// Load the document fresh, apply `mutate` and persist the result, all
    /// while holding the write lock.
    ///
    /// Returns the persisted document alongside whatever `mutate` produced.
    ///
    /// # Errors
    ///
    /// Returns a storage error if loading or saving fails. Nothing is
    /// persisted in that case.
    pub async fn update<T, F>(&self, mutate: F) -> Result<(SensorDocument, T), SensorHubError>
    where
        F: FnOnce(&mut SensorDocument) -> T,
    {
        let _guard = self.write_lock.lock().await;
        let mut document = self.store.load().await?;
        let outcome = mutate(&mut document);
        self.store.save(&document).await?;
        Ok((document, outcome))
    }

    #[cfg(test)]
    pub(crate) fn store(&self) -> &S {
        &self.store
    }
}
