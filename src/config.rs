use std::fs;
use std::path::{Path, PathBuf};

use egui::Color32;
use serde::{Deserialize, Serialize};

use crate::error::{SketchError, SketchResult};

/// Environment variable naming a JSON config file
pub const CONFIG_ENV_VAR: &str = "SKETCHPAD_CONFIG";

/// Application settings. Missing fields fall back to defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)] // if we add new fields, give them default values when deserializing old files
pub struct SketchConfig {
    pub canvas_width: f32,
    pub canvas_height: f32,
    /// Pen widths offered in the tool panel
    pub stroke_widths: Vec<f32>,
    /// Stamp glyphs available at startup
    pub stamps: Vec<String>,
    pub stamp_size: f32,
    pub preview_opacity: f32,
    pub export_scale: f32,
    pub export_path: PathBuf,
    /// Opaque RGB used behind the canvas and in exports
    pub background: [u8; 3],
}

impl Default for SketchConfig {
    fn default() -> Self {
        Self {
            canvas_width: 500.0,
            canvas_height: 500.0,
            stroke_widths: vec![2.0, 5.0, 10.0],
            stamps: ["⭐", "❤", "☀", "✿"].into_iter().map(String::from).collect(),
            stamp_size: 32.0,
            preview_opacity: 0.5,
            export_scale: 2.0,
            export_path: PathBuf::from("sketch.png"),
            background: [255, 255, 255],
        }
    }
}

impl SketchConfig {
    /// Read and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> SketchResult<Self> {
        let text = fs::read_to_string(path.as_ref())?;
        let config: Self = serde_json::from_str(&text)?;
        config.validate()
    }

    /// Load from `SKETCHPAD_CONFIG` if set, otherwise defaults.
    /// A broken file is reported and replaced by defaults.
    pub fn from_env() -> Self {
        let Ok(path) = std::env::var(CONFIG_ENV_VAR) else {
            return Self::default();
        };
        match Self::load(&path) {
            Ok(config) => {
                log::info!("Loaded config from {}", path);
                config
            }
            Err(err) => {
                log::warn!("Ignoring config {}: {}", path, err);
                Self::default()
            }
        }
    }

    /// Reject unusable values and clamp the soft ones
    pub fn validate(mut self) -> SketchResult<Self> {
        let positive = |v: f32| v.is_finite() && v > 0.0;

        if !positive(self.canvas_width) || !positive(self.canvas_height) {
            return Err(SketchError::InvalidConfig(format!(
                "canvas size must be positive, got {}x{}",
                self.canvas_width, self.canvas_height
            )));
        }
        if self.stroke_widths.is_empty() {
            return Err(SketchError::InvalidConfig("no stroke widths".to_owned()));
        }
        if let Some(width) = self.stroke_widths.iter().find(|w| !positive(**w)) {
            return Err(SketchError::InvalidConfig(format!("invalid stroke width {}", width)));
        }
        if !positive(self.stamp_size) {
            return Err(SketchError::InvalidConfig(format!("invalid stamp size {}", self.stamp_size)));
        }
        if !positive(self.export_scale) {
            return Err(SketchError::InvalidConfig(format!("invalid export scale {}", self.export_scale)));
        }

        self.preview_opacity = if self.preview_opacity.is_finite() {
            self.preview_opacity.clamp(0.0, 1.0)
        } else {
            0.5
        };
        self.stamps.retain(|glyph| !glyph.trim().is_empty());
        Ok(self)
    }

    pub fn background_color(&self) -> Color32 {
        let [r, g, b] = self.background;
        Color32::from_rgb(r, g, b)
    }

    pub fn canvas_size(&self) -> egui::Vec2 {
        egui::vec2(self.canvas_width, self.canvas_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = SketchConfig::default().validate().unwrap();
        assert_eq!(config, SketchConfig::default());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: SketchConfig = serde_json::from_str(r#"{ "export_scale": 4.0 }"#).unwrap();
        assert_eq!(config.export_scale, 4.0);
        assert_eq!(config.canvas_width, 500.0);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let config = SketchConfig {
            stroke_widths: vec![],
            ..SketchConfig::default()
        };
        assert!(matches!(config.validate(), Err(SketchError::InvalidConfig(_))));

        let config = SketchConfig {
            export_scale: 0.0,
            ..SketchConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_clamps_opacity_and_drops_blank_stamps() {
        let config = SketchConfig {
            preview_opacity: 3.0,
            stamps: vec!["⭐".into(), "  ".into()],
            ..SketchConfig::default()
        }
        .validate()
        .unwrap();
        assert_eq!(config.preview_opacity, 1.0);
        assert_eq!(config.stamps, vec!["⭐".to_owned()]);
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let result = SketchConfig::load("/nonexistent/sketchpad.json");
        assert!(matches!(result, Err(SketchError::Io(_))));
    }
}
