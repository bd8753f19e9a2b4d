//! Resource tracks (health, magic, luck).
//!
//! A track is a clamped value between a floor and a ceiling. The ceiling
//! can move (health and magic follow Endurance) and the current value is
//! pulled back inside whenever it does.

use serde::{Deserialize, Serialize};

/// A named numeric resource clamped between `min` and `max`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    /// Display name of the track.
    pub name: String,
    /// Current value.
    pub current: i32,
    /// Maximum value.
    pub max: i32,
    /// Minimum value.
    pub min: i32,
}

impl Track {
    /// Create a track with a floor of zero, starting full.
    pub fn new(name: impl Into<String>, max: i32) -> Self {
        Self {
            name: name.into(),
            current: max,
            max,
            min: 0,
        }
    }

    /// Create a track with a floor of zero, starting empty.
    pub fn empty(name: impl Into<String>, max: i32) -> Self {
        Self {
            current: 0,
            ..Self::new(name, max)
        }
    }

    /// Adjust by `delta`, clamping to bounds. Returns the new value.
    pub fn adjust(&mut self, delta: i32) -> i32 {
        self.set(self.current.saturating_add(delta))
    }

    /// Set the current value, clamping to bounds. Returns the new value.
    pub fn set(&mut self, value: i32) -> i32 {
        self.current = value.clamp(self.min, self.max.max(self.min));
        self.current
    }

    /// Move the ceiling, keeping the current value in range.
    pub fn set_max(&mut self, max: i32) {
        self.max = max.max(self.min);
        self.set(self.current);
    }

    /// Take one point if any is left. Returns whether a point was spent.
    pub fn spend_one(&mut self) -> bool {
        if self.is_empty() {
            return false;
        }
        self.adjust(-1);
        true
    }

    /// Returns true if the track is at its minimum.
    pub fn is_empty(&self) -> bool {
        self.current <= self.min
    }

    /// Returns true if the track is at its maximum.
    pub fn is_full(&self) -> bool {
        self.current >= self.max
    }
}

impl std::fmt::Display for Track {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}/{}", self.name, self.current, self.max)
    }
}
