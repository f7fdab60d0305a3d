use egui::epaint::TextShape;
use egui::{Color32, FontId, Painter, Pos2, Rect, Shape};

use super::{PaintState, Surface};
use crate::geometry::Point;

/// Live canvas surface painting into an egui [`Painter`].
///
/// Positions are canvas-local; `rect` places the canvas on screen.
pub struct EguiSurface<'a> {
    painter: &'a Painter,
    rect: Rect,
    background: Color32,
    state: PaintState,
    saved: Vec<PaintState>,
    path: Vec<Pos2>,
}

impl<'a> EguiSurface<'a> {
    pub fn new(painter: &'a Painter, rect: Rect, background: Color32) -> Self {
        Self {
            painter,
            rect,
            background,
            state: PaintState::default(),
            saved: Vec::new(),
            path: Vec::new(),
        }
    }

    fn to_screen(&self, p: Point) -> Pos2 {
        self.rect.min + self.state.map_point(p).to_vec2()
    }
}

/// Polyline plus a dot at every vertex, which gives round caps and joins.
///
/// Semi-transparent strokes darken where the dots overlap the line.
fn stroke_shapes(path: &[Pos2], width: f32, color: Color32) -> Vec<Shape> {
    if path.len() < 2 {
        return Vec::new();
    }
    let radius = width / 2.0;
    let mut shapes = Vec::with_capacity(path.len() + 1);
    shapes.push(Shape::line(path.to_vec(), egui::Stroke::new(width, color)));
    shapes.extend(path.iter().map(|&p| Shape::circle_filled(p, radius, color)));
    shapes
}

impl Surface for EguiSurface<'_> {
    fn clear(&mut self) {
        self.painter.rect_filled(self.rect, 0.0, self.background);
    }

    fn fill_background(&mut self, color: Color32) {
        self.painter.rect_filled(self.rect, 0.0, color);
    }

    fn save(&mut self) {
        self.saved.push(self.state);
    }

    fn restore(&mut self) {
        if let Some(state) = self.saved.pop() {
            self.state = state;
        }
    }

    fn scale(&mut self, factor: f32) {
        self.state.scale(factor);
    }

    fn translate(&mut self, dx: f32, dy: f32) {
        self.state.translate(dx, dy);
    }

    fn rotate(&mut self, radians: f32) {
        self.state.rotate(radians);
    }

    fn set_opacity(&mut self, opacity: f32) {
        self.state.opacity = opacity.clamp(0.0, 1.0);
    }

    fn begin_path(&mut self) {
        self.path.clear();
    }

    fn move_to(&mut self, p: Point) {
        // egui has no subpaths; a new move starts over
        self.path.clear();
        self.path.push(self.to_screen(p));
    }

    fn line_to(&mut self, p: Point) {
        let p = self.to_screen(p);
        self.path.push(p);
    }

    fn stroke(&mut self, width: f32, color: Color32) {
        let width = width * self.state.scale_factor();
        let color = self.state.tint(color);
        self.painter.extend(stroke_shapes(&self.path, width, color));
    }

    fn fill_circle(&mut self, center: Point, radius: f32, color: Color32) {
        let center = self.to_screen(center);
        let radius = radius * self.state.scale_factor();
        self.painter
            .circle_filled(center, radius, self.state.tint(color));
    }

    fn fill_text(&mut self, text: &str, at: Point, size: f32, color: Color32) {
        let px = size * self.state.scale_factor();
        let color = self.state.tint(color);
        let galley = self
            .painter
            .layout_no_wrap(text.to_owned(), FontId::proportional(px), color);

        // TextShape rotates around its top-left corner
        let angle = self.state.rotation();
        let half = galley.size() / 2.0;
        let pos = self.to_screen(at) - egui::emath::Rot2::from_angle(angle) * half;
        self.painter
            .add(TextShape::new(pos, galley, color).with_angle(angle));
    }
}
