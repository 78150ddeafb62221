use std::collections::HashSet;

use crate::coords::Point;

use super::types::InputEvent;

/// Current input state for a single runtime.
///
/// Holds "is down" information for keys and the last known pointer position.
/// The down-set tracks physical presses: auto-repeat presses are ignored and
/// releases of keys that are not down are harmless.
#[derive(Debug, Default)]
pub struct InputState {
    /// Last pointer position in screen pixels. Starts at the origin.
    pub pointer: Point,

    /// Whether the host window is focused, as last reported.
    pub focused: bool,

    /// Set of currently held keys.
    pub keys_down: HashSet<String>,
}

impl InputState {
    pub fn on_key_down(&mut self, code: &str, repeat: bool) {
        if repeat {
            return;
        }
        if !self.keys_down.contains(code) {
            self.keys_down.insert(code.to_string());
        }
    }

    pub fn on_key_up(&mut self, code: &str) {
        self.keys_down.remove(code);
    }

    pub fn on_pointer_move(&mut self, x: f32, y: f32) {
        self.pointer = Point::new(x, y);
    }

    pub fn on_focus(&mut self, focused: bool) {
        self.focused = focused;
        if !focused {
            // Releases that happen while unfocused are never delivered.
            self.keys_down.clear();
        }
    }

    /// Applies a platform-agnostic input event. Resize events carry no input
    /// state and are ignored here.
    pub fn apply_event(&mut self, ev: &InputEvent) {
        match ev {
            InputEvent::KeyDown { code, repeat } => self.on_key_down(code, *repeat),
            InputEvent::KeyUp { code } => self.on_key_up(code),
            InputEvent::PointerMoved { x, y } => self.on_pointer_move(*x, *y),
            InputEvent::Focused(f) => self.on_focus(*f),
            InputEvent::Resized(_) => {}
        }
    }

    /// Helper queries
    pub fn is_key_down(&self, code: &str) -> bool {
        self.keys_down.contains(code)
    }

    pub fn any_key_down(&self) -> bool {
        !self.keys_down.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeat_events_do_not_affect_down_set() {
        let mut input = InputState::default();

        input.apply_event(&InputEvent::key_down("KeyA"));
        assert!(input.is_key_down("KeyA"));

        input.apply_event(&InputEvent::key_repeat("KeyA"));
        input.apply_event(&InputEvent::key_repeat("KeyA"));
        assert!(input.is_key_down("KeyA"));

        input.apply_event(&InputEvent::key_up("KeyA"));
        assert!(!input.is_key_down("KeyA"));
    }

    #[test]
    fn repeat_without_press_is_ignored() {
        let mut input = InputState::default();
        input.on_key_down("Space", true);
        assert!(!input.is_key_down("Space"));
    }

    #[test]
    fn double_press_is_idempotent() {
        let mut input = InputState::default();
        input.on_key_down("KeyW", false);
        input.on_key_down("KeyW", false);
        assert_eq!(input.keys_down.len(), 1);

        input.on_key_up("KeyW");
        assert!(!input.any_key_down());
    }

    #[test]
    fn releasing_absent_key_is_noop() {
        let mut input = InputState::default();
        input.on_key_down("KeyD", false);
        input.on_key_up("KeyQ");
        assert!(input.is_key_down("KeyD"));
        assert!(!input.is_key_down("KeyQ"));
    }

    #[test]
    fn pointer_overwrites_last_position() {
        let mut input = InputState::default();
        assert_eq!(input.pointer, Point::zero());
        input.apply_event(&InputEvent::PointerMoved { x: 3.0, y: 4.0 });
        input.apply_event(&InputEvent::PointerMoved { x: 10.5, y: -2.0 });
        assert_eq!(input.pointer, Point::new(10.5, -2.0));
    }

    #[test]
    fn focus_loss_releases_everything() {
        let mut input = InputState::default();
        input.apply_event(&InputEvent::Focused(true));
        input.on_key_down("ArrowLeft", false);
        input.on_key_down("ArrowUp", false);

        input.apply_event(&InputEvent::Focused(false));
        assert!(!input.any_key_down());
        assert!(!input.focused);
    }
}
