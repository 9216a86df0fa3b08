use crate::controllers::interactive::PointerEvent;
use crate::core::data::point::Point;
use winit::event::{ElementState, MouseButton};

/// Tracks the last cursor position so that button presses, which carry no
/// coordinates in winit, can be turned into positioned click events.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PointerInputState {
    position: Option<Point>,
}

impl PointerInputState {
    pub fn handle_cursor_moved(&mut self, x: f64, y: f64) -> PointerEvent {
        let point = Point {
            x: x.floor() as i32,
            y: y.floor() as i32,
        };
        self.position = Some(point);

        PointerEvent::Moved(point)
    }

    /// Only presses zoom; releases and other buttons are ignored, as are
    /// presses before the cursor has entered the window.
    pub fn handle_mouse_input(
        &self,
        button: MouseButton,
        state: ElementState,
    ) -> Option<PointerEvent> {
        if state != ElementState::Pressed {
            return None;
        }

        let point = self.position?;

        match button {
            MouseButton::Left => Some(PointerEvent::LeftClick(point)),
            MouseButton::Right => Some(PointerEvent::RightClick(point)),
            _ => None,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
