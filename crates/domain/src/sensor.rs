//! Binary and numeric sensors with change-triggered history.

use serde::{Deserialize, Serialize};

use crate::time::Timestamp;

/// A `{timestamp, state}` record appended when a boolean sensor changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToggleEntry {
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub timestamp: Timestamp,
    pub state: bool,
}

/// A `{timestamp, value}` record appended when a numeric sensor changes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub timestamp: Timestamp,
    pub value: f64,
}

/// An on/off sensor (motion, gas).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BinarySensor {
    pub state: bool,
    #[serde(default)]
    pub history: Vec<ToggleEntry>,
}

impl BinarySensor {
    /// Set the sensor state, recording a toggle entry when the last
    /// recorded state differs.
    ///
    /// Returns `true` when the state actually changed.
    pub fn set_state(&mut self, state: bool, at: Timestamp) -> bool {
        let changed = self.state != state;
        self.state = state;
        if self.history.last().is_none_or(|last| last.state != state) {
            self.history.push(ToggleEntry {
                timestamp: at,
                state,
            });
        }
        changed
    }

    /// Force the sensor off. History is only touched if it was on.
    pub fn force_off(&mut self, at: Timestamp) -> bool {
        if self.state {
            self.set_state(false, at)
        } else {
            false
        }
    }
}

/// Closed range a numeric sensor walks within, plus the largest step per tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumericBounds {
    pub min: f64,
    pub max: f64,
    pub max_step: f64,
}

impl NumericBounds {
    /// Temperature in °C.
    pub const TEMPERATURE: Self = Self {
        min: 18.0,
        max: 26.0,
        max_step: 0.1,
    };

    /// Relative humidity in %.
    pub const HUMIDITY: Self = Self {
        min: 30.0,
        max: 80.0,
        max_step: 3.0,
    };

    /// Round to one decimal place, then clamp into `[min, max]`.
    #[must_use]
    pub fn settle(&self, value: f64) -> f64 {
        round_tenths(value).clamp(self.min, self.max)
    }

    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

/// Round half away from zero to one decimal place.
#[must_use]
pub fn round_tenths(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// A sensor reporting a floating-point value (temperature, humidity).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumericSensor {
    pub current: f64,
    #[serde(default)]
    pub history: Vec<Reading>,
}

impl NumericSensor {
    #[must_use]
    pub fn new(current: f64) -> Self {
        Self {
            current,
            history: Vec::new(),
        }
    }

    /// Apply `delta` to the current value, settle it within `bounds` and
    /// record a reading if the settled value differs.
    ///
    /// Returns `true` when the value changed.
    #[allow(clippy::float_cmp)]
    pub fn apply_delta(&mut self, delta: f64, bounds: &NumericBounds, at: Timestamp) -> bool {
        let next = bounds.settle(self.current + delta);
        if next == self.current {
            return false;
        }
        self.current = next;
        self.history.push(Reading {
            timestamp: at,
            value: next,
        });
        true
    }
}
