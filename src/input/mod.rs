use egui::{Context, PointerButton, Pos2, Rect};

mod router;
pub use router::route_event;

/// Pointer events in canvas-local coordinates, in delivery order
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Primary button pressed inside the canvas
    PointerDown { position: Pos2 },
    /// Pointer moved over the canvas (held or not)
    PointerMove { position: Pos2 },
    /// Primary button released
    PointerUp { position: Pos2 },
    /// Pointer left the canvas
    PointerLeave,
}

/// Converts raw egui pointer state into [`InputEvent`]s for one canvas
#[derive(Debug, Default)]
pub struct InputHandler {
    last_pointer_pos: Option<Pos2>,
    pressed: bool,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a press that started on the canvas is still held
    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// Process this frame's pointer input for the canvas at `canvas_rect`
    pub fn process_input(&mut self, ctx: &Context, canvas_rect: Rect) -> Vec<InputEvent> {
        let (hover, pressed, released) = ctx.input(|input| {
            (
                input.pointer.hover_pos(),
                input.pointer.button_pressed(PointerButton::Primary),
                input.pointer.button_released(PointerButton::Primary),
            )
        });
        self.process(hover, pressed, released, canvas_rect)
    }

    /// Core of [`Self::process_input`], separated from egui for testing
    pub fn process(
        &mut self,
        hover: Option<Pos2>,
        pressed: bool,
        released: bool,
        canvas_rect: Rect,
    ) -> Vec<InputEvent> {
        let mut events = Vec::new();
        let local = |pos: Pos2| (pos - canvas_rect.min).to_pos2();
        let inside = hover.filter(|pos| canvas_rect.contains(*pos));

        match inside {
            Some(pos) => {
                if self.last_pointer_pos != Some(pos) {
                    events.push(InputEvent::PointerMove { position: local(pos) });
                }
                if pressed && !self.pressed {
                    events.push(InputEvent::PointerDown { position: local(pos) });
                    self.pressed = true;
                }
                if released && self.pressed {
                    events.push(InputEvent::PointerUp { position: local(pos) });
                    self.pressed = false;
                }
            }
            None => {
                if self.last_pointer_pos.is_some() {
                    events.push(InputEvent::PointerLeave);
                    self.pressed = false;
                }
            }
        }

        self.last_pointer_pos = inside;
        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canvas() -> Rect {
        Rect::from_min_size(Pos2::new(100.0, 50.0), egui::vec2(500.0, 500.0))
    }

    #[test]
    fn test_press_produces_local_move_then_down() {
        let mut handler = InputHandler::new();
        let events = handler.process(Some(Pos2::new(110.0, 60.0)), true, false, canvas());
        assert_eq!(
            events,
            vec![
                InputEvent::PointerMove { position: Pos2::new(10.0, 10.0) },
                InputEvent::PointerDown { position: Pos2::new(10.0, 10.0) },
            ]
        );
        assert!(handler.is_pressed());
    }

    #[test]
    fn test_unchanged_position_emits_nothing() {
        let mut handler = InputHandler::new();
        handler.process(Some(Pos2::new(110.0, 60.0)), false, false, canvas());
        let events = handler.process(Some(Pos2::new(110.0, 60.0)), false, false, canvas());
        assert!(events.is_empty());
    }

    #[test]
    fn test_leaving_canvas_emits_leave_once() {
        let mut handler = InputHandler::new();
        handler.process(Some(Pos2::new(110.0, 60.0)), true, false, canvas());

        let events = handler.process(Some(Pos2::new(10.0, 10.0)), false, false, canvas());
        assert_eq!(events, vec![InputEvent::PointerLeave]);
        assert!(!handler.is_pressed());

        let events = handler.process(None, false, false, canvas());
        assert!(events.is_empty());
    }

    #[test]
    fn test_release_without_press_is_ignored() {
        let mut handler = InputHandler::new();
        let events = handler.process(Some(Pos2::new(110.0, 60.0)), false, true, canvas());
        assert_eq!(events, vec![InputEvent::PointerMove { position: Pos2::new(10.0, 10.0) }]);
    }
}
