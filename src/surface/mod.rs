use egui::Color32;

use tiny_skia::Transform;

use crate::geometry::Point;

mod egui_surface;
mod raster;

pub use egui_surface::EguiSurface;
pub use raster::RasterSurface;

/// Primitive 2D paint operations the drawables render through.
///
/// Modelled on a canvas 2D context: a transform and opacity stack plus
/// path, arc and text primitives. Implementations decide what `clear`
/// means for their target.
pub trait Surface {
    /// Erase everything painted so far
    fn clear(&mut self);

    /// Fill the whole surface with an opaque color, ignoring the transform
    fn fill_background(&mut self, color: Color32);

    /// Push the current transform and opacity
    fn save(&mut self);

    /// Pop the last saved transform and opacity. No-op on an empty stack.
    fn restore(&mut self);

    fn scale(&mut self, factor: f32);

    fn translate(&mut self, dx: f32, dy: f32);

    fn rotate(&mut self, radians: f32);

    /// Multiplier applied to the alpha of everything painted afterwards
    fn set_opacity(&mut self, opacity: f32);

    fn begin_path(&mut self);

    fn move_to(&mut self, p: Point);

    fn line_to(&mut self, p: Point);

    /// Stroke the current path as one connected line with round caps and joins
    fn stroke(&mut self, width: f32, color: Color32);

    fn fill_circle(&mut self, center: Point, radius: f32, color: Color32);

    /// Fill `text` centered on `at` under the current transform
    fn fill_text(&mut self, text: &str, at: Point, size: f32, color: Color32);
}

/// Transform and opacity shared by both surface implementations
#[derive(Debug, Clone, Copy)]
pub(crate) struct PaintState {
    pub transform: Transform,
    pub opacity: f32,
}

impl Default for PaintState {
    fn default() -> Self {
        Self {
            transform: Transform::identity(),
            opacity: 1.0,
        }
    }
}

impl PaintState {
    /// Canvas-style transform calls: each applies to coordinates drawn afterwards
    pub fn scale(&mut self, factor: f32) {
        self.transform = self.transform.pre_scale(factor, factor);
    }

    pub fn translate(&mut self, dx: f32, dy: f32) {
        self.transform = self.transform.pre_translate(dx, dy);
    }

    pub fn rotate(&mut self, radians: f32) {
        self.transform = self.transform.pre_rotate(radians.to_degrees());
    }

    pub fn map_point(&self, p: Point) -> Point {
        crate::geometry::map_point(&self.transform, p)
    }

    pub fn scale_factor(&self) -> f32 {
        crate::geometry::scale_factor(&self.transform)
    }

    pub fn rotation(&self) -> f32 {
        crate::geometry::rotation(&self.transform)
    }

    /// Apply the current opacity to a color
    pub fn tint(&self, color: Color32) -> Color32 {
        if self.opacity >= 1.0 {
            color
        } else {
            color.gamma_multiply(self.opacity.max(0.0))
        }
    }
}
