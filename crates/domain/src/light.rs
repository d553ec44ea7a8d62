//! Lights: on/off sensors that also track how long they stayed on.

use serde::{Deserialize, Serialize};

use crate::sensor::ToggleEntry;
use crate::time::{Timestamp, elapsed_millis};

/// Number of lights in the network, numbered `1..=LIGHT_COUNT`.
pub const LIGHT_COUNT: u8 = 6;

/// Identifier of a light (`1..=LIGHT_COUNT`).
pub type LightId = u8;

/// Iterate over every light identifier.
pub fn light_ids() -> impl Iterator<Item = LightId> {
    1..=LIGHT_COUNT
}

/// One entry of a light's history.
///
/// Lights interleave toggle events with the duration (in milliseconds) of
/// each completed on-period. On the wire a duration is a bare number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LightHistoryEntry {
    Toggle(ToggleEntry),
    OnDuration(i64),
}

/// A light and its on-timer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Light {
    pub state: bool,
    /// Set exactly while the light is on.
    #[serde(default, with = "chrono::serde::ts_milliseconds_option")]
    pub timer_start: Option<Timestamp>,
    #[serde(default)]
    pub history: Vec<LightHistoryEntry>,
}

impl Light {
    /// Switch the light to `state` at `at`.
    ///
    /// Turning on starts the timer. Turning off appends the elapsed on-time
    /// and clears the timer. A toggle entry follows unless the most recent
    /// entry already is a toggle to the same state.
    ///
    /// Returns `true` when the state flipped; nothing is recorded otherwise.
    pub fn switch(&mut self, state: bool, at: Timestamp) -> bool {
        if self.state == state {
            return false;
        }

        if state {
            self.timer_start = Some(at);
        } else if let Some(started) = self.timer_start.take() {
            self.history
                .push(LightHistoryEntry::OnDuration(elapsed_millis(started, at)));
        }
        self.state = state;

        let repeats = matches!(
            self.history.last(),
            Some(LightHistoryEntry::Toggle(last)) if last.state == state
        );
        if !repeats {
            self.history.push(LightHistoryEntry::Toggle(ToggleEntry {
                timestamp: at,
                state,
            }));
        }
        true
    }

    /// Iterate over the recorded on-durations in milliseconds.
    pub fn on_durations(&self) -> impl Iterator<Item = i64> + '_ {
        self.history.iter().filter_map(|entry| match entry {
            LightHistoryEntry::OnDuration(ms) => Some(*ms),
            LightHistoryEntry::Toggle(_) => None,
        })
    }

    /// Iterate over the recorded toggle events.
    pub fn toggles(&self) -> impl Iterator<Item = &ToggleEntry> + '_ {
        self.history.iter().filter_map(|entry| match entry {
            LightHistoryEntry::Toggle(toggle) => Some(toggle),
            LightHistoryEntry::OnDuration(_) => None,
        })
    }
}
