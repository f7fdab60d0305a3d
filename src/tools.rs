use egui::Color32;
use egui::ecolor::rgb_from_hsv;

use crate::drawable::{Command, Preview, StampCommand, StampPreview, StrokeCommand, StrokePreview};
use crate::geometry::Point;

/// Stamps keep a fixed ink; only strokes follow the hue.
pub const STAMP_COLOR: Color32 = Color32::BLACK;

/// The active drawing tool
#[derive(Debug, Clone, PartialEq)]
pub enum Tool {
    Pen { width: f32 },
    Stamp { glyph: String },
}

impl Tool {
    pub fn name(&self) -> &'static str {
        match self {
            Tool::Pen { .. } => "Pen",
            Tool::Stamp { .. } => "Stamp",
        }
    }
}

impl Default for Tool {
    fn default() -> Self {
        Tool::Pen { width: 2.0 }
    }
}

/// Current tool plus the shared hue/rotation parameter.
///
/// `param` is in degrees, `[0, 360)`. Pens read it as hue, stamps as
/// rotation. Changing it only affects commands and previews built later.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ToolState {
    tool: Tool,
    param: f32,
}

impl ToolState {
    pub fn new(tool: Tool, param: f32) -> Self {
        let mut state = Self { tool, param: 0.0 };
        state.set_param(param);
        state
    }

    pub fn tool(&self) -> &Tool {
        &self.tool
    }

    pub fn set_tool(&mut self, tool: Tool) {
        self.tool = tool;
    }

    pub fn param(&self) -> f32 {
        self.param
    }

    /// Wraps into `[0, 360)`; non-finite input is ignored
    pub fn set_param(&mut self, degrees: f32) {
        if degrees.is_finite() {
            self.param = degrees.rem_euclid(360.0);
            // tiny negative inputs round up to exactly 360
            if self.param >= 360.0 {
                self.param = 0.0;
            }
        }
    }

    /// Stroke color for the current hue: fully saturated, mid lightness.
    ///
    /// The HSV channels are taken as sRGB values directly, the way CSS
    /// `hsl()` does, without egui's linear-space conversion.
    pub fn stroke_color(&self) -> Color32 {
        let [r, g, b] = rgb_from_hsv((self.param / 360.0, 1.0, 1.0));
        let channel = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        Color32::from_rgb(channel(r), channel(g), channel(b))
    }

    /// Stamp rotation for the current parameter, in radians
    pub fn stamp_rotation(&self) -> f32 {
        self.param.to_radians()
    }

    /// Build the command a press at `point` starts
    pub fn new_command(&self, point: Point, stamp_size: f32) -> Command {
        match &self.tool {
            Tool::Pen { width } => Command::Stroke(StrokeCommand::new(point, *width, self.stroke_color())),
            Tool::Stamp { glyph } => Command::Stamp(StampCommand::new(
                point,
                glyph.clone(),
                self.stamp_rotation(),
                stamp_size,
                STAMP_COLOR,
            )),
        }
    }

    /// Build the hover ghost at `point`
    pub fn new_preview(&self, point: Point, stamp_size: f32, opacity: f32) -> Preview {
        match &self.tool {
            Tool::Pen { width } => {
                Preview::Stroke(StrokePreview::new(point, *width, self.stroke_color(), opacity))
            }
            Tool::Stamp { glyph } => Preview::Stamp(StampPreview::new(
                point,
                glyph.clone(),
                self.stamp_rotation(),
                stamp_size,
                STAMP_COLOR,
                opacity,
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::Pos2;

    #[test]
    fn test_param_wraps() {
        let mut state = ToolState::default();
        state.set_param(370.0);
        assert!((state.param() - 10.0).abs() < 1e-4);
        state.set_param(-90.0);
        assert!((state.param() - 270.0).abs() < 1e-4);
        state.set_param(f32::NAN);
        assert!((state.param() - 270.0).abs() < 1e-4);
    }

    #[test]
    fn test_hue_zero_is_red() {
        let state = ToolState::new(Tool::Pen { width: 3.0 }, 0.0);
        assert_eq!(state.stroke_color(), Color32::from_rgb(255, 0, 0));
    }

    #[test]
    fn test_param_never_reaches_full_turn() {
        let mut state = ToolState::default();
        state.set_param(-1e-6);
        assert!(state.param() >= 0.0 && state.param() < 360.0, "param = {}", state.param());
    }

    #[test]
    fn test_hue_between_primaries_matches_hsl() {
        let mut state = ToolState::new(Tool::Pen { width: 3.0 }, 30.0);
        assert_eq!(state.stroke_color(), Color32::from_rgb(255, 128, 0));
        state.set_param(210.0);
        assert_eq!(state.stroke_color(), Color32::from_rgb(0, 128, 255));
        state.set_param(120.0);
        assert_eq!(state.stroke_color(), Color32::from_rgb(0, 255, 0));
    }

    #[test]
    fn test_stamp_uses_param_as_rotation() {
        let state = ToolState::new(Tool::Stamp { glyph: "⭐".into() }, 90.0);
        let command = state.new_command(Pos2::new(1.0, 2.0), 32.0);
        let stamp = command.as_stamp().unwrap();
        assert!((stamp.rotation() - std::f32::consts::FRAC_PI_2).abs() < 1e-4);
        assert_eq!(stamp.glyph(), "⭐");
    }
}
