//! Log levels and level enablement.
//!
//! A [`Level`] is a small signed ordinal. Five values are named, in ascending
//! severity: `DEBUG < INFO < WARN < ERROR < OFF`. `OFF` is a sentinel meaning
//! "never enabled"; it is a threshold, never a severity to log *at*.
//!
//! Ordinals outside the named set are legal. They render as `OFF` and are
//! otherwise compared by their raw numeric value.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::LoggingError;

/// A log level.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Level(i32);

impl Level {
    /// Debug level.
    pub const DEBUG: Level = Level(-1);
    /// Info level, the default.
    pub const INFO: Level = Level(0);
    /// Warn level.
    pub const WARN: Level = Level(1);
    /// Error level.
    pub const ERROR: Level = Level(2);
    /// Prevents logging entirely.
    pub const OFF: Level = Level(3);

    /// Name table shared by rendering and parsing.
    pub const NAMES: [(Level, &'static str); 5] = [
        (Level::DEBUG, "DEBUG"),
        (Level::INFO, "INFO"),
        (Level::WARN, "WARN"),
        (Level::ERROR, "ERROR"),
        (Level::OFF, "OFF"),
    ];

    pub const fn from_raw(raw: i32) -> Self {
        Self(raw)
    }

    pub const fn as_raw(self) -> i32 {
        self.0
    }

    /// Canonical uppercase name. Unnamed ordinals render as `OFF`.
    pub fn name(self) -> &'static str {
        Self::NAMES
            .iter()
            .find(|(level, _)| *level == self)
            .map(|(_, name)| *name)
            .unwrap_or("OFF")
    }

    /// Whether `candidate` would be logged under this threshold.
    ///
    /// True for the threshold itself and every higher level, except `OFF` and
    /// anything above it. A threshold of `OFF` enables nothing.
    pub fn enabled(self, candidate: Level) -> bool {
        candidate < Level::OFF && self <= candidate
    }
}

impl Default for Level {
    fn default() -> Self {
        Level::INFO
    }
}

impl From<Level> for i32 {
    fn from(value: Level) -> Self {
        value.0
    }
}

impl From<i32> for Level {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Level {
    type Err = LoggingError;

    /// Case-insensitive match against [`Level::NAMES`], after stripping any
    /// surrounding single or double quotes.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim_matches(|c: char| c == '"' || c == '\'');
        Self::NAMES
            .iter()
            .find(|(_, name)| name.eq_ignore_ascii_case(trimmed))
            .map(|(level, _)| *level)
            .ok_or_else(|| LoggingError::unknown_level(s))
    }
}

impl Serialize for Level {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for Level {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

/// Decides whether a given level is enabled when logging a message.
pub trait LevelEnabler {
    fn enabled(&self, level: Level) -> bool;
}

/// A bare `Level` acts as a static threshold.
impl LevelEnabler for Level {
    fn enabled(&self, level: Level) -> bool {
        Level::enabled(*self, level)
    }
}
