//! Motion scheduler: drives the dynamic motion sensor through delayed
//! on/off cycles, independently of the main tick.
//!
//! ```text
//! IDLE --(idle delay)--> ACTIVE --(active delay)--> IDLE
//! ```
//!
//! A cycle is tracked by two handle slots. Arming fills the activation slot,
//! entering ACTIVE fills the deactivation slot, and returning to IDLE clears
//! both. A new cycle can only be armed once both slots are empty.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::task::JoinHandle;

use sensorhub_domain::time::now;

use crate::config::DelayRange;
use crate::ports::{DocumentStore, Entropy};
use crate::shared_document::SharedDocument;

/// Where the scheduler currently is in its cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CyclePhase {
    /// No cycle in flight; the next tick may arm one.
    Idle,
    /// Waiting for the idle delay to elapse.
    Pending,
    /// Sensor is on, waiting for the active delay to elapse.
    Active,
}

#[derive(Default)]
struct CycleSlots {
    activation: Option<JoinHandle<()>>,
    deactivation: Option<JoinHandle<()>>,
}

impl CycleSlots {
    fn is_empty(&self) -> bool {
        self.activation.is_none() && self.deactivation.is_none()
    }
}

/// Runs at most one motion cycle at a time.
pub struct MotionScheduler<S, E> {
    document: Arc<SharedDocument<S>>,
    entropy: Arc<E>,
    idle_delay: DelayRange,
    active_delay: DelayRange,
    slots: Mutex<CycleSlots>,
}

impl<S, E> MotionScheduler<S, E>
where
    S: DocumentStore + Send + Sync + 'static,
    E: Entropy + 'static,
{
    /// Create an idle scheduler writing to `document`.
    pub fn new(
        document: Arc<SharedDocument<S>>,
        entropy: Arc<E>,
        idle_delay: DelayRange,
        active_delay: DelayRange,
    ) -> Self {
        Self {
            document,
            entropy,
            idle_delay,
            active_delay,
            slots: Mutex::new(CycleSlots::default()),
        }
    }

    /// Current phase of the cycle.
    pub fn phase(&self) -> CyclePhase {
        let slots = self.lock_slots();
        if slots.deactivation.is_some() {
            CyclePhase::Active
        } else if slots.activation.is_some() {
            CyclePhase::Pending
        } else {
            CyclePhase::Idle
        }
    }

    /// Arm a new cycle unless one is already in flight.
    ///
    /// Must be called from within a tokio runtime. Returns `true` when a
    /// cycle was armed.
    pub fn arm(self: &Arc<Self>) -> bool {
        let mut slots = self.lock_slots();
        if !slots.is_empty() {
            return false;
        }

        let delay = self.idle_delay.sample(self.entropy.as_ref());
        let scheduler = Arc::clone(self);
        slots.activation = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            scheduler.activate().await;
        }));
        tracing::debug!(delay_ms = delay.as_millis(), "motion cycle armed");
        true
    }

    async fn activate(self: Arc<Self>) {
        let result = self
            .document
            .update(|doc| doc.motion_sensor_dynamic.set_state(true, now()))
            .await;
        match result {
            Ok(_) => tracing::debug!("dynamic motion sensor active"),
            Err(err) => tracing::error!(error = %err, "failed to persist motion activation"),
        }

        let hold = self.active_delay.sample(self.entropy.as_ref());
        let scheduler = Arc::clone(&self);
        // the slot is filled before the spawned task can reach `deactivate`
        let mut slots = self.lock_slots();
        slots.deactivation = Some(tokio::spawn(async move {
            tokio::time::sleep(hold).await;
            scheduler.deactivate().await;
        }));
    }

    async fn deactivate(&self) {
        let result = self
            .document
            .update(|doc| doc.motion_sensor_dynamic.set_state(false, now()))
            .await;
        match result {
            Ok(_) => tracing::debug!("dynamic motion sensor idle"),
            Err(err) => tracing::error!(error = %err, "failed to persist motion deactivation"),
        }

        let mut slots = self.lock_slots();
        slots.activation = None;
        slots.deactivation = None;
    }

    fn lock_slots(&self) -> MutexGuard<'_, CycleSlots> {
        self.slots.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
