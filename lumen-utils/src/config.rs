// Lumen configuration
//
// Loaded from a JSON file. Every field has a default so a partial file
// (or no file at all) is fine.

use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::color::Color;
use crate::errors::{LumenError, LumenResult};
use crate::scene::SpeedMultiplier;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Static color shown before anything is picked
    pub initial_color: Color,
    /// Speed the scheduler starts with
    pub default_speed: SpeedMultiplier,
    /// Speeds offered by the speed selector
    pub speed_presets: Vec<SpeedMultiplier>,
    /// Preset swatches, bound to keys 1..=N in order
    pub presets: Vec<Color>,
    /// Maximum number of remembered custom colors
    pub recent_capacity: usize,
    /// Host frame loop rate
    pub frame_rate: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            initial_color: Color::rgb(0x2A, 0x2A, 0x2A),
            default_speed: SpeedMultiplier::NORMAL,
            speed_presets: [0.5, 1.0, 2.0]
                .into_iter()
                .filter_map(|s| SpeedMultiplier::new(s).ok())
                .collect(),
            presets: vec![
                Color::WHITE,
                Color::rgb(0xFF, 0xD6, 0xAA),
                Color::rgb(0xFF, 0x00, 0x00),
                Color::rgb(0x00, 0xFF, 0x00),
                Color::rgb(0x00, 0x44, 0xFF),
                Color::rgb(0x80, 0x00, 0xFF),
            ],
            recent_capacity: 5,
            frame_rate: 60,
        }
    }
}

impl EngineConfig {
    /// Read, parse and validate a config file
    pub fn load(path: &Path) -> LumenResult<Self> {
        let raw = fs::read_to_string(path).map_err(|source| LumenError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&raw)?;
        debug!("Lumen: loaded config from {}", path.display());
        Ok(config)
    }

    pub fn from_json(raw: &str) -> LumenResult<Self> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> LumenResult<()> {
        if self.frame_rate == 0 || self.frame_rate > 240 {
            return Err(LumenError::InvalidConfig(format!(
                "frame_rate must be within 1..=240, got {}",
                self.frame_rate
            )));
        }
        if self.recent_capacity == 0 {
            return Err(LumenError::InvalidConfig(
                "recent_capacity must be at least 1".to_string(),
            ));
        }
        if self.speed_presets.is_empty() {
            return Err(LumenError::InvalidConfig(
                "speed_presets must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Frame period of the host loop in milliseconds
    pub fn frame_period_ms(&self) -> f64 {
        1000.0 / f64::from(self.frame_rate.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.initial_color.to_hex(), "#2A2A2A");
        assert_eq!(config.default_speed.value(), 1.0);
        assert_eq!(config.speed_presets.len(), 3);
        assert_eq!(config.presets.len(), 6);
        assert_eq!(config.recent_capacity, 5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = EngineConfig::from_json(r##"{"initial_color": "#102030", "frame_rate": 30}"##)
            .unwrap();
        assert_eq!(config.initial_color, Color::rgb(0x10, 0x20, 0x30));
        assert_eq!(config.frame_rate, 30);
        assert_eq!(config.recent_capacity, 5);
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(matches!(
            EngineConfig::from_json(r#"{"frame_rate": 0}"#),
            Err(LumenError::InvalidConfig(_))
        ));
        assert!(matches!(
            EngineConfig::from_json(r#"{"default_speed": -2}"#),
            Err(LumenError::ConfigParse(_))
        ));
        assert!(matches!(
            EngineConfig::from_json(r##"{"presets": ["#12"]}"##),
            Err(LumenError::ConfigParse(_))
        ));
        assert!(matches!(
            EngineConfig::from_json(r#"{"unknown": 1}"#),
            Err(LumenError::ConfigParse(_))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"recent_capacity": 3, "speed_presets": [1.0, 3.0]}}"#).unwrap();

        let config = EngineConfig::load(file.path()).unwrap();
        assert_eq!(config.recent_capacity, 3);
        assert_eq!(config.speed_presets.len(), 2);
    }

    #[test]
    fn test_load_missing_file() {
        let result = EngineConfig::load(Path::new("/definitely/not/here/lumen.json"));
        assert!(matches!(result, Err(LumenError::ConfigRead { .. })));
    }

    #[test]
    fn test_frame_period() {
        let config = EngineConfig::default();
        assert!((config.frame_period_ms() - 16.666).abs() < 0.01);
    }
}
