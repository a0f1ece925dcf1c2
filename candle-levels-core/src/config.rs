//! Indicator configuration.
//!
//! Mirrors the parameter surface a charting host exposes for this indicator.
//! `validate` covers the two ranges a host parameter UI would enforce and a
//! config file cannot.

use crate::chart::LineStyle;
use crate::domain::Color;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from configuration range checks.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("look_back must be >= 1")]
    ZeroLookBack,

    #[error("line_thickness must be in 1..=5, got {0}")]
    ThicknessOutOfRange(u8),
}

/// Indicator parameters.
///
/// `custom_levels` is deliberately never validated: malformed tokens degrade
/// to fewer levels at parse time, never to an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LevelConfig {
    /// Candle used for level geometry = current bar − `look_back`.
    pub look_back: usize,
    /// Comma-separated level percentages.
    pub custom_levels: String,
    /// Draw a percentage label at each line's end point.
    pub show_level_text: bool,
    /// Forwarded to the drawing call. Valid range 1..=5.
    pub line_thickness: u8,
    /// Forwarded to the drawing call.
    pub line_style: LineStyle,
    /// Cyclic five-slot palette.
    pub level_colors: [Color; 5],
}

impl Default for LevelConfig {
    fn default() -> Self {
        Self {
            look_back: 1,
            custom_levels: "0,25,50,75,100".to_string(),
            show_level_text: true,
            line_thickness: 1,
            line_style: LineStyle::DotsVeryRare,
            level_colors: [
                Color::RED,
                Color::GREEN,
                Color::YELLOW,
                Color::BLUE,
                Color::MAGENTA,
            ],
        }
    }
}

impl LevelConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.look_back == 0 {
            return Err(ConfigError::ZeroLookBack);
        }
        if !(1..=5).contains(&self.line_thickness) {
            return Err(ConfigError::ThicknessOutOfRange(self.line_thickness));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_parameter_table() {
        let config = LevelConfig::default();
        assert_eq!(config.look_back, 1);
        assert_eq!(config.custom_levels, "0,25,50,75,100");
        assert!(config.show_level_text);
        assert_eq!(config.line_thickness, 1);
        assert_eq!(config.line_style, LineStyle::DotsVeryRare);
        assert_eq!(config.level_colors[0], Color::RED);
        assert_eq!(config.level_colors[4], Color::MAGENTA);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn toml_roundtrip() {
        let mut config = LevelConfig::default();
        config.look_back = 3;
        config.custom_levels = "0,38.2,61.8,100".to_string();
        config.line_style = LineStyle::Dashed;
        config.level_colors[2] = Color::rgb(16, 32, 48);

        let text = toml::to_string(&config).unwrap();
        let back: LevelConfig = toml::from_str(&text).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let config: LevelConfig = toml::from_str("custom_levels = \"0,50,100\"").unwrap();
        assert_eq!(config.custom_levels, "0,50,100");
        assert_eq!(config.look_back, 1);
        assert_eq!(config.level_colors[1], Color::GREEN);
    }

    #[test]
    fn validate_rejects_zero_look_back() {
        let config = LevelConfig {
            look_back: 0,
            ..LevelConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroLookBack));
    }

    #[test]
    fn validate_rejects_out_of_range_thickness() {
        for thickness in [0, 6] {
            let config = LevelConfig {
                line_thickness: thickness,
                ..LevelConfig::default()
            };
            assert_eq!(
                config.validate(),
                Err(ConfigError::ThicknessOutOfRange(thickness))
            );
        }
    }
}
