//! Simulation engine: mutates every sensor once per tick.
//!
//! Each tick reloads the document from the store, walks every sensor
//! according to its rules, persists the whole document and returns it. The
//! engine also owns the [`MotionScheduler`] and arms a new motion cycle after
//! every tick if none is in flight.

use std::sync::Arc;
use std::time::Duration;

use tokio::time::MissedTickBehavior;

use sensorhub_domain::document::SensorDocument;
use sensorhub_domain::error::SensorHubError;
use sensorhub_domain::light::light_ids;
use sensorhub_domain::sensor::NumericBounds;
use sensorhub_domain::time::{Timestamp, now};

use crate::config::SimulationConfig;
use crate::motion_scheduler::MotionScheduler;
use crate::ports::{DocumentStore, Entropy};
use crate::shared_document::SharedDocument;

/// What a single tick changed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickReport {
    /// Number of lights whose state flipped.
    pub flipped_lights: usize,
    pub temperature_changed: bool,
    pub humidity_changed: bool,
}

/// Apply one simulation step to `document` at time `at`.
///
/// Draws, in order: one value per light, the temperature delta, the
/// humidity delta.
pub fn advance<E: Entropy + ?Sized>(
    document: &mut SensorDocument,
    entropy: &E,
    at: Timestamp,
) -> TickReport {
    let mut report = TickReport::default();

    for id in light_ids() {
        let state = entropy.uniform(0.0, 1.0) > 0.5;
        if document.light_mut(id).switch(state, at) {
            report.flipped_lights += 1;
        }
    }

    // Nothing ever turns these on; this only repairs stale documents.
    document.motion_sensor_static.force_off(at);
    document.gas_sensor.force_off(at);

    let bounds = NumericBounds::TEMPERATURE;
    let delta = entropy.uniform(-bounds.max_step, bounds.max_step);
    report.temperature_changed = document.temperature.apply_delta(delta, &bounds, at);

    let bounds = NumericBounds::HUMIDITY;
    let delta = entropy.uniform(-bounds.max_step, bounds.max_step);
    report.humidity_changed = document.humidity.apply_delta(delta, &bounds, at);

    report
}

/// Drives the sensor simulation.
pub struct SimulationEngine<S, E> {
    document: Arc<SharedDocument<S>>,
    entropy: Arc<E>,
    scheduler: Arc<MotionScheduler<S, E>>,
    tick_interval: Duration,
}

impl<S, E> SimulationEngine<S, E>
where
    S: DocumentStore + Send + Sync + 'static,
    E: Entropy + 'static,
{
    /// Create an engine persisting to `store` and drawing from `entropy`.
    pub fn new(store: S, entropy: E, config: SimulationConfig) -> Self {
        let document = Arc::new(SharedDocument::new(store));
        let entropy = Arc::new(entropy);
        let scheduler = Arc::new(MotionScheduler::new(
            Arc::clone(&document),
            Arc::clone(&entropy),
            config.motion_idle,
            config.motion_active,
        ));
        Self {
            document,
            entropy,
            scheduler,
            tick_interval: config.tick_interval,
        }
    }

    /// The motion scheduler owned by this engine.
    pub fn scheduler(&self) -> &Arc<MotionScheduler<S, E>> {
        &self.scheduler
    }

    /// Load the current document without mutating it.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the store.
    pub async fn load(&self) -> Result<SensorDocument, SensorHubError> {
        self.document.read().await
    }

    /// Run one tick: reload, mutate, persist, then arm the motion
    /// scheduler if it is idle.
    ///
    /// Must be called from within a tokio runtime.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the document cannot be persisted; the
    /// stored document is left untouched and no motion cycle is armed.
    pub async fn tick(&self) -> Result<SensorDocument, SensorHubError> {
        let entropy = self.entropy.as_ref();
        let (document, report) = self
            .document
            .update(|doc| advance(doc, entropy, now()))
            .await?;

        tracing::debug!(
            flipped_lights = report.flipped_lights,
            temperature = document.temperature.current,
            temperature_changed = report.temperature_changed,
            humidity = document.humidity.current,
            humidity_changed = report.humidity_changed,
            "simulation tick applied"
        );

        self.scheduler.arm();
        Ok(document)
    }

    /// Tick forever at the configured interval, starting immediately.
    ///
    /// A failed tick is logged and the loop carries on with the next one.
    pub async fn run(self: Arc<Self>) {
        tracing::info!(
            interval_secs = self.tick_interval.as_secs(),
            "simulation loop started"
        );
        let mut interval = tokio::time::interval(self.tick_interval);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            interval.tick().await;
            if let Err(err) = self.tick().await {
                tracing::error!(error = %err, "simulation tick failed");
            }
        }
    }
}
