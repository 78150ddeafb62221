use crate::coords::Viewport;

/// Platform-agnostic events delivered by the host.
///
/// Key identifiers are physical key codes spelled like the DOM
/// `KeyboardEvent.code` values (`"KeyA"`, `"ArrowLeft"`, `"Space"`), so the
/// same strings work whether the host is a browser or a native window.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    KeyDown {
        code: String,
        /// True when the platform generated this press by auto-repeat.
        repeat: bool,
    },

    KeyUp {
        code: String,
    },

    /// Pointer moved, in screen pixels.
    PointerMoved {
        x: f32,
        y: f32,
    },

    /// Window focus change.
    Focused(bool),

    /// Drawable area changed size, in screen pixels.
    Resized(Viewport),
}

impl InputEvent {
    pub fn key_down(code: impl Into<String>) -> Self {
        InputEvent::KeyDown {
            code: code.into(),
            repeat: false,
        }
    }

    pub fn key_repeat(code: impl Into<String>) -> Self {
        InputEvent::KeyDown {
            code: code.into(),
            repeat: true,
        }
    }

    pub fn key_up(code: impl Into<String>) -> Self {
        InputEvent::KeyUp { code: code.into() }
    }
}
