use egui::Color32;

use super::{Drawable, DrawableId};
use crate::geometry::Point;
use crate::surface::Surface;

/// Freehand stroke: one connected path drawn with a fixed width and color.
#[derive(Debug, PartialEq)]
pub struct StrokeCommand {
    id: DrawableId,
    points: Vec<Point>,
    width: f32,
    color: Color32,
}

impl StrokeCommand {
    /// Start a stroke seeded with its first point
    pub fn new(start: Point, width: f32, color: Color32) -> Self {
        Self {
            id: DrawableId::new(),
            points: vec![start],
            width,
            color,
        }
    }

    pub fn id(&self) -> DrawableId {
        self.id
    }

    pub fn append(&mut self, point: Point) {
        self.points.push(point);
    }

    /// A single click without a drag leaves no visible mark
    pub fn is_committable(&self) -> bool {
        self.points.len() >= 2
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn color(&self) -> Color32 {
        self.color
    }
}

impl Drawable for StrokeCommand {
    fn render(&self, surface: &mut dyn Surface) {
        let Some((first, rest)) = self.points.split_first() else {
            return;
        };
        surface.begin_path();
        surface.move_to(*first);
        for point in rest {
            surface.line_to(*point);
        }
        surface.stroke(self.width, self.color);
    }
}

/// Ghost of the dot the next pen press would start.
#[derive(Debug, Clone, PartialEq)]
pub struct StrokePreview {
    position: Point,
    width: f32,
    color: Color32,
    opacity: f32,
}

impl StrokePreview {
    pub fn new(position: Point, width: f32, color: Color32, opacity: f32) -> Self {
        Self {
            position,
            width,
            color,
            opacity,
        }
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn color(&self) -> Color32 {
        self.color
    }
}

impl Drawable for StrokePreview {
    fn render(&self, surface: &mut dyn Surface) {
        surface.save();
        surface.set_opacity(self.opacity);
        surface.fill_circle(self.position, self.width / 2.0, self.color);
        surface.restore();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::Pos2;

    #[test]
    fn test_stroke_needs_two_points() {
        let mut stroke = StrokeCommand::new(Pos2::new(1.0, 1.0), 3.0, Color32::RED);
        assert!(!stroke.is_committable());

        stroke.append(Pos2::new(2.0, 2.0));
        assert!(stroke.is_committable());
        assert_eq!(stroke.points(), &[Pos2::new(1.0, 1.0), Pos2::new(2.0, 2.0)]);
    }

    #[test]
    fn test_repeated_point_still_counts() {
        // a held pointer that reports the same spot twice is a real (tiny) stroke
        let mut stroke = StrokeCommand::new(Pos2::new(5.0, 5.0), 3.0, Color32::RED);
        stroke.append(Pos2::new(5.0, 5.0));
        assert!(stroke.is_committable());
    }
}
