//! Translation from windowing-system events into [`InputEvent`](super::InputEvent)s.

pub mod winit;
