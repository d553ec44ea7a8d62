//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts them into
//! [`SensorHubError`] via `From`.

/// Top-level error for sensorhub use-cases.
#[derive(Debug, thiserror::Error)]
pub enum SensorHubError {
    /// The persistent store could not be written (or read in a way that
    /// cannot fall back to defaults).
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_expose_storage_source() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only");
        let err = SensorHubError::Storage(Box::new(io));

        assert_eq!(err.to_string(), "storage error");
        let source = std::error::Error::source(&err).unwrap();
        assert_eq!(source.to_string(), "read-only");
    }
}
