// Lumen scene identifiers and playback speed

use serde::{Deserialize, Serialize};
use std::fmt;
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

use crate::errors::{LumenError, LumenResult};

/// Animated lighting scenes
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum SceneId {
    /// Red/blue strobe
    Police,
    /// Warm random flicker
    Fire,
    /// Dark sky with bursts of lightning
    Storm,
}

impl SceneId {
    /// Parse a scene name coming from a button, key binding or CLI argument
    pub fn parse(name: &str) -> LumenResult<Self> {
        name.trim()
            .parse()
            .map_err(|_| LumenError::UnknownScene(name.to_string()))
    }
}

/// Positive, finite factor applied to every scene duration.
///
/// Values above 1.0 make scenes run faster.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct SpeedMultiplier(f64);

impl SpeedMultiplier {
    pub const NORMAL: SpeedMultiplier = SpeedMultiplier(1.0);

    pub fn new(value: f64) -> LumenResult<Self> {
        if !value.is_finite() || value <= 0.0 {
            return Err(LumenError::InvalidSpeed(value));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    /// Effective duration of a base duration at this speed
    pub fn scale(&self, base_ms: f64) -> f64 {
        base_ms / self.0
    }
}

impl Default for SpeedMultiplier {
    fn default() -> Self {
        Self::NORMAL
    }
}

impl fmt::Display for SpeedMultiplier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x", self.0)
    }
}

impl TryFrom<f64> for SpeedMultiplier {
    type Error = LumenError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<SpeedMultiplier> for f64 {
    fn from(speed: SpeedMultiplier) -> Self {
        speed.0
    }
}
