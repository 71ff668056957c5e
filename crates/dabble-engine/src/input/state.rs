use super::frame::InputFrame;
use super::types::{InputEvent, PointerButtonEvent, PointerMoveEvent};

/// Input state the platform layer needs between events.
#[derive(Debug, Default)]
pub struct InputState {
    /// Pointer position in logical pixels; `None` while outside the window.
    pub pointer_pos: Option<(f32, f32)>,
}

impl InputState {
    /// Applies `ev` to the tracked state and records it in `frame`.
    pub fn apply_event(&mut self, frame: &mut InputFrame, ev: InputEvent) {
        match &ev {
            InputEvent::PointerMoved(PointerMoveEvent { x, y }) => {
                self.pointer_pos = Some((*x, *y));
            }
            InputEvent::PointerLeft => {
                self.pointer_pos = None;
            }
            InputEvent::PointerButton(PointerButtonEvent { position: Some(p), .. }) => {
                self.pointer_pos = Some(*p);
            }
            _ => {}
        }

        frame.push_event(ev);
    }
}
