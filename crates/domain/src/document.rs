//! The sensor document: the single root object persisted as a whole.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::light::{Light, LightHistoryEntry, LightId, light_ids};
use crate::sensor::{BinarySensor, NumericSensor, Reading, ToggleEntry};

/// Temperature reported by a freshly created document.
pub const DEFAULT_TEMPERATURE: f64 = 22.0;
/// Humidity reported by a freshly created document.
pub const DEFAULT_HUMIDITY: f64 = 50.0;

/// Complete state of the simulated sensor network.
///
/// Fields missing from a stored document fall back to their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SensorDocument {
    pub lights: BTreeMap<LightId, Light>,
    /// Always off.
    pub motion_sensor_static: BinarySensor,
    /// Always off.
    pub gas_sensor: BinarySensor,
    /// Driven by the motion scheduler.
    pub motion_sensor_dynamic: BinarySensor,
    pub temperature: NumericSensor,
    pub humidity: NumericSensor,
}

impl Default for SensorDocument {
    fn default() -> Self {
        Self {
            lights: light_ids().map(|id| (id, Light::default())).collect(),
            motion_sensor_static: BinarySensor::default(),
            gas_sensor: BinarySensor::default(),
            motion_sensor_dynamic: BinarySensor::default(),
            temperature: NumericSensor::new(DEFAULT_TEMPERATURE),
            humidity: NumericSensor::new(DEFAULT_HUMIDITY),
        }
    }
}

impl SensorDocument {
    /// Mutable access to a light, creating it with defaults if the stored
    /// document lacks it.
    pub fn light_mut(&mut self, id: LightId) -> &mut Light {
        self.lights.entry(id).or_default()
    }

    /// Project the current values, without history.
    #[must_use]
    pub fn current(&self) -> CurrentReadings {
        CurrentReadings {
            lights: light_ids()
                .map(|id| (id, self.lights.get(&id).is_some_and(|light| light.state)))
                .collect(),
            motion_sensor_static: self.motion_sensor_static.state,
            gas_sensor: self.gas_sensor.state,
            motion_sensor_dynamic: self.motion_sensor_dynamic.state,
            temperature: self.temperature.current,
            humidity: self.humidity.current,
        }
    }

    /// Project the history arrays, without current values.
    #[must_use]
    pub fn history(&self) -> HistoryLog {
        HistoryLog {
            lights: light_ids()
                .map(|id| {
                    let history = self
                        .lights
                        .get(&id)
                        .map(|light| light.history.clone())
                        .unwrap_or_default();
                    (id, history)
                })
                .collect(),
            motion_sensor_static: self.motion_sensor_static.history.clone(),
            gas_sensor: self.gas_sensor.history.clone(),
            motion_sensor_dynamic: self.motion_sensor_dynamic.history.clone(),
            temperature: self.temperature.history.clone(),
            humidity: self.humidity.history.clone(),
        }
    }
}

/// Flattened view of every sensor's current value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentReadings {
    pub lights: BTreeMap<LightId, bool>,
    pub motion_sensor_static: bool,
    pub gas_sensor: bool,
    pub motion_sensor_dynamic: bool,
    pub temperature: f64,
    pub humidity: f64,
}

/// Every sensor's history, without current values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryLog {
    pub lights: BTreeMap<LightId, Vec<LightHistoryEntry>>,
    pub motion_sensor_static: Vec<ToggleEntry>,
    pub gas_sensor: Vec<ToggleEntry>,
    pub motion_sensor_dynamic: Vec<ToggleEntry>,
    pub temperature: Vec<Reading>,
    pub humidity: Vec<Reading>,
}
