use egui::Color32;

use super::{Drawable, DrawableId};
use crate::geometry::Point;
use crate::surface::Surface;

/// Draw `glyph` centered at `position`, rotated by `rotation`.
fn render_glyph(
    surface: &mut dyn Surface,
    glyph: &str,
    position: Point,
    rotation: f32,
    size: f32,
    color: Color32,
) {
    surface.translate(position.x, position.y);
    surface.rotate(rotation);
    surface.fill_text(glyph, Point::ZERO, size, color);
}

/// Stamped glyph. Dragging while placing moves it rather than tracing a path.
#[derive(Debug, PartialEq)]
pub struct StampCommand {
    id: DrawableId,
    position: Point,
    glyph: String,
    rotation: f32,
    size: f32,
    color: Color32,
}

impl StampCommand {
    pub fn new(position: Point, glyph: impl Into<String>, rotation: f32, size: f32, color: Color32) -> Self {
        Self {
            id: DrawableId::new(),
            position,
            glyph: glyph.into(),
            rotation,
            size,
            color,
        }
    }

    pub fn id(&self) -> DrawableId {
        self.id
    }

    pub fn reposition(&mut self, point: Point) {
        self.position = point;
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn glyph(&self) -> &str {
        &self.glyph
    }

    /// Rotation in radians
    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    pub fn size(&self) -> f32 {
        self.size
    }
}

impl Drawable for StampCommand {
    fn render(&self, surface: &mut dyn Surface) {
        surface.save();
        render_glyph(surface, &self.glyph, self.position, self.rotation, self.size, self.color);
        surface.restore();
    }
}

/// Ghost of the stamp the next press would place.
#[derive(Debug, Clone, PartialEq)]
pub struct StampPreview {
    position: Point,
    glyph: String,
    rotation: f32,
    size: f32,
    color: Color32,
    opacity: f32,
}

impl StampPreview {
    pub fn new(
        position: Point,
        glyph: impl Into<String>,
        rotation: f32,
        size: f32,
        color: Color32,
        opacity: f32,
    ) -> Self {
        Self {
            position,
            glyph: glyph.into(),
            rotation,
            size,
            color,
            opacity,
        }
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn glyph(&self) -> &str {
        &self.glyph
    }
}

impl Drawable for StampPreview {
    fn render(&self, surface: &mut dyn Surface) {
        surface.save();
        surface.set_opacity(self.opacity);
        render_glyph(surface, &self.glyph, self.position, self.rotation, self.size, self.color);
        surface.restore();
    }
}
