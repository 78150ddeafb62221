//! Input subsystem.
//!
//! Public API is platform-agnostic. Hosts either build [`InputEvent`]s
//! themselves (browser bindings, tests) or translate winit window events with
//! [`platform::winit::translate_window_event`].

pub mod platform;

mod state;
mod types;

pub use state::InputState;
pub use types::InputEvent;
