#![allow(dead_code)]

use egui::{Color32, Pos2};
use sketchpad::Surface;

/// One recorded surface call
#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    Clear,
    FillBackground(Color32),
    Save,
    Restore,
    Scale(f32),
    Translate(f32, f32),
    Rotate(f32),
    Opacity(f32),
    BeginPath,
    MoveTo(Pos2),
    LineTo(Pos2),
    Stroke(f32, Color32),
    Circle(Pos2, f32, Color32),
    Text(String, Pos2, f32, Color32),
}

/// Surface that records calls instead of painting
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub ops: Vec<Op>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn strokes(&self) -> usize {
        self.ops.iter().filter(|op| matches!(op, Op::Stroke(..))).count()
    }

    pub fn texts(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Text(text, ..) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn circles(&self) -> usize {
        self.ops.iter().filter(|op| matches!(op, Op::Circle(..))).count()
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self) {
        self.ops.push(Op::Clear);
    }

    fn fill_background(&mut self, color: Color32) {
        self.ops.push(Op::FillBackground(color));
    }

    fn save(&mut self) {
        self.ops.push(Op::Save);
    }

    fn restore(&mut self) {
        self.ops.push(Op::Restore);
    }

    fn scale(&mut self, factor: f32) {
        self.ops.push(Op::Scale(factor));
    }

    fn translate(&mut self, dx: f32, dy: f32) {
        self.ops.push(Op::Translate(dx, dy));
    }

    fn rotate(&mut self, radians: f32) {
        self.ops.push(Op::Rotate(radians));
    }

    fn set_opacity(&mut self, opacity: f32) {
        self.ops.push(Op::Opacity(opacity));
    }

    fn begin_path(&mut self) {
        self.ops.push(Op::BeginPath);
    }

    fn move_to(&mut self, p: Pos2) {
        self.ops.push(Op::MoveTo(p));
    }

    fn line_to(&mut self, p: Pos2) {
        self.ops.push(Op::LineTo(p));
    }

    fn stroke(&mut self, width: f32, color: Color32) {
        self.ops.push(Op::Stroke(width, color));
    }

    fn fill_circle(&mut self, center: Pos2, radius: f32, color: Color32) {
        self.ops.push(Op::Circle(center, radius, color));
    }

    fn fill_text(&mut self, text: &str, at: Pos2, size: f32, color: Color32) {
        self.ops.push(Op::Text(text.to_owned(), at, size, color));
    }
}

pub fn p(x: f32, y: f32) -> Pos2 {
    Pos2::new(x, y)
}

/// Press, drag through `path`, release
pub fn draw_stroke(session: &mut sketchpad::Session, path: &[Pos2]) {
    let Some((first, rest)) = path.split_first() else {
        return;
    };
    session.begin_action(*first);
    for point in rest {
        session.extend_action(*point);
    }
    session.end_action();
}
