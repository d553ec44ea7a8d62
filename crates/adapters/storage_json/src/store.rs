//! [`DocumentStore`] backed by a single JSON file.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use sensorhub_app::ports::DocumentStore;
use sensorhub_domain::document::SensorDocument;
use sensorhub_domain::error::SensorHubError;

use crate::error::StorageError;

/// Stores the whole sensor document as pretty-printed JSON.
///
/// Writes go to a `.tmp` sibling first and are renamed over the target, so
/// the target always holds a complete document.
pub struct JsonFileStore {
    path: PathBuf,
    staging: PathBuf,
}

impl JsonFileStore {
    /// Create a store persisting to `path`. The file is created on the first save.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let mut staging = path.clone().into_os_string();
        staging.push(".tmp");
        Self {
            path,
            staging: staging.into(),
        }
    }

    /// Location of the document.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DocumentStore for JsonFileStore {
    async fn load(&self) -> Result<SensorDocument, SensorHubError> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "no stored document, using defaults");
                return Ok(SensorDocument::default());
            }
            Err(err) => {
                tracing::warn!(path = %self.path.display(), error = %err, "unreadable document, using defaults");
                return Ok(SensorDocument::default());
            }
        };

        match serde_json::from_slice(&bytes) {
            Ok(document) => Ok(document),
            Err(err) => {
                tracing::warn!(path = %self.path.display(), error = %err, "corrupt document, using defaults");
                Ok(SensorDocument::default())
            }
        }
    }

    async fn save(&self, document: &SensorDocument) -> Result<(), SensorHubError> {
        let bytes = serde_json::to_vec_pretty(document).map_err(StorageError::from)?;

        tokio::fs::write(&self.staging, &bytes)
            .await
            .map_err(|source| StorageError::Io {
                path: self.staging.clone(),
                source,
            })?;
        tokio::fs::rename(&self.staging, &self.path)
            .await
            .map_err(|source| StorageError::Io {
                path: self.path.clone(),
                source,
            })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sensorhub_domain::time::now;

    fn store_in(dir: &tempfile::TempDir) -> JsonFileStore {
        JsonFileStore::new(dir.path().join("data.json"))
    }

    #[tokio::test]
    async fn should_return_default_when_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        let doc = store.load().await.unwrap();

        assert_eq!(doc, SensorDocument::default());
        assert!(!store.path().exists());
    }

    #[tokio::test]
    async fn should_return_default_when_file_corrupt() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        std::fs::write(store.path(), b"{ not json").unwrap();

        let doc = store.load().await.unwrap();

        assert_eq!(doc, SensorDocument::default());
    }

    #[tokio::test]
    async fn should_return_default_when_path_is_a_directory() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path());

        let doc = store.load().await.unwrap();

        assert_eq!(doc, SensorDocument::default());
    }

    #[tokio::test]
    async fn should_load_what_was_saved() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        let mut doc = SensorDocument::default();
        doc.light_mut(4).switch(true, now());
        doc.humidity.current = 61.2;

        store.save(&doc).await.unwrap();
        let loaded = store.load().await.unwrap();

        assert_eq!(loaded.lights[&4].state, doc.lights[&4].state);
        assert_eq!(
            loaded.lights[&4].timer_start.map(|t| t.timestamp_millis()),
            doc.lights[&4].timer_start.map(|t| t.timestamp_millis())
        );
        assert!((loaded.humidity.current - 61.2).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn should_write_pretty_json_and_leave_no_staging_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        store.save(&SensorDocument::default()).await.unwrap();

        let text = std::fs::read_to_string(store.path()).unwrap();
        assert!(text.contains("\n  \"lights\": {"));
        assert!(text.contains("\"motionSensorStatic\""));
        assert!(!dir.path().join("data.json.tmp").exists());
    }

    #[tokio::test]
    async fn should_replace_previous_content_wholesale() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        std::fs::write(store.path(), r#"{"unknown": 1, "temperature": {"current": 19.0}}"#).unwrap();

        let mut doc = store.load().await.unwrap();
        assert!((doc.temperature.current - 19.0).abs() < f64::EPSILON);
        doc.temperature.current = 20.0;
        store.save(&doc).await.unwrap();

        let text = std::fs::read_to_string(store.path()).unwrap();
        assert!(!text.contains("unknown"));
        assert!((store.load().await.unwrap().temperature.current - 20.0).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn should_fail_when_directory_is_missing() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("missing").join("data.json"));

        let result = store.save(&SensorDocument::default()).await;

        assert!(matches!(result, Err(SensorHubError::Storage(_))));
    }
}
