use uuid::Uuid;

use crate::geometry::Point;
use crate::surface::Surface;

mod stamp;
mod stroke;

pub use stamp::{StampCommand, StampPreview};
pub use stroke::{StrokeCommand, StrokePreview};

/// Anything that can paint itself onto a [`Surface`].
///
/// Rendering reads only the drawable's own fields.
pub trait Drawable {
    fn render(&self, surface: &mut dyn Surface);
}

/// Identity of a command, stable across undo/redo moves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DrawableId(Uuid);

impl DrawableId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for DrawableId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for DrawableId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A drawable that can be committed to history.
///
/// Commands are not `Clone`: each one is owned by exactly one of the
/// in-progress slot, the committed list or the redo stack.
#[derive(Debug, PartialEq)]
pub enum Command {
    Stroke(StrokeCommand),
    Stamp(StampCommand),
}

impl Command {
    pub fn id(&self) -> DrawableId {
        match self {
            Command::Stroke(s) => s.id(),
            Command::Stamp(s) => s.id(),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Command::Stroke(_) => "stroke",
            Command::Stamp(_) => "stamp",
        }
    }

    /// Strokes need two points; stamps commit even without a drag
    pub fn is_committable(&self) -> bool {
        match self {
            Command::Stroke(s) => s.is_committable(),
            Command::Stamp(_) => true,
        }
    }

    /// Follow the pointer: strokes grow, stamps move
    pub fn extend(&mut self, point: Point) {
        match self {
            Command::Stroke(s) => s.append(point),
            Command::Stamp(s) => s.reposition(point),
        }
    }

    pub fn as_stroke(&self) -> Option<&StrokeCommand> {
        match self {
            Command::Stroke(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_stamp(&self) -> Option<&StampCommand> {
        match self {
            Command::Stamp(s) => Some(s),
            _ => None,
        }
    }
}

impl Drawable for Command {
    fn render(&self, surface: &mut dyn Surface) {
        match self {
            Command::Stroke(s) => s.render(surface),
            Command::Stamp(s) => s.render(surface),
        }
    }
}

/// Reduced-opacity ghost of what the next press would produce. Never committed.
#[derive(Debug, Clone, PartialEq)]
pub enum Preview {
    Stroke(StrokePreview),
    Stamp(StampPreview),
}

impl Preview {
    pub fn position(&self) -> Point {
        match self {
            Preview::Stroke(p) => p.position(),
            Preview::Stamp(p) => p.position(),
        }
    }
}

impl Drawable for Preview {
    fn render(&self, surface: &mut dyn Surface) {
        match self {
            Preview::Stroke(p) => p.render(surface),
            Preview::Stamp(p) => p.render(surface),
        }
    }
}
