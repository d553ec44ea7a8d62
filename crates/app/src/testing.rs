//! Test doubles shared by the unit tests of this crate.

use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use sensorhub_domain::document::SensorDocument;
use sensorhub_domain::error::SensorHubError;

use crate::ports::{DocumentStore, Entropy};

/// Document store kept in memory, with an optional write failure.
#[derive(Default)]
pub struct InMemoryStore {
    document: Mutex<Option<SensorDocument>>,
    saves: AtomicUsize,
    fail_saves: AtomicBool,
}

impl InMemoryStore {
    pub fn with_document(document: SensorDocument) -> Self {
        Self {
            document: Mutex::new(Some(document)),
            ..Self::default()
        }
    }

    pub fn failing() -> Self {
        let store = Self::default();
        store.fail_saves.store(true, Ordering::SeqCst);
        store
    }

    pub fn stored(&self) -> Option<SensorDocument> {
        self.document.lock().unwrap().clone()
    }

    pub fn saves(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }
}

impl DocumentStore for InMemoryStore {
    async fn load(&self) -> Result<SensorDocument, SensorHubError> {
        Ok(self.stored().unwrap_or_default())
    }

    async fn save(&self, document: &SensorDocument) -> Result<(), SensorHubError> {
        self.saves.fetch_add(1, Ordering::SeqCst);
        if self.fail_saves.load(Ordering::SeqCst) {
            let err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only");
            return Err(SensorHubError::Storage(Box::new(err)));
        }
        *self.document.lock().unwrap() = Some(document.clone());
        Ok(())
    }
}

/// Entropy replaying scripted fractions of each requested range.
///
/// A fraction `f` yields `low + f * (high - low)`; once the script is
/// exhausted every draw lands on the midpoint.
pub struct ScriptedEntropy {
    fractions: Mutex<VecDeque<f64>>,
}

impl ScriptedEntropy {
    pub fn new(fractions: impl IntoIterator<Item = f64>) -> Self {
        Self {
            fractions: Mutex::new(fractions.into_iter().collect()),
        }
    }
}

impl Entropy for ScriptedEntropy {
    fn uniform(&self, low: f64, high: f64) -> f64 {
        let fraction = self.fractions.lock().unwrap().pop_front().unwrap_or(0.5);
        low + fraction * (high - low)
    }
}
