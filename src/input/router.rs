use crate::session::Session;

use super::InputEvent;

/// Routes a canvas input event to the matching session transition
pub fn route_event(event: &InputEvent, session: &mut Session) {
    match *event {
        InputEvent::PointerDown { position } => session.begin_action(position),
        InputEvent::PointerMove { position } => session.extend_action(position),
        InputEvent::PointerUp { .. } => session.end_action(),
        InputEvent::PointerLeave => session.pointer_leave(),
    }
}
