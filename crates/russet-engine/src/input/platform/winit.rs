use winit::dpi::{PhysicalPosition, PhysicalSize};
use winit::event::{ElementState, WindowEvent};
use winit::keyboard::PhysicalKey;

use crate::coords::Viewport;
use crate::input::InputEvent;

/// Translates a winit `WindowEvent` into an engine `InputEvent`.
///
/// `scale_factor` is the window's current DPI scale; positions and sizes are
/// converted to logical pixels with it. Returns `None` for events not
/// represented by the input subsystem.
pub fn translate_window_event(scale_factor: f64, event: &WindowEvent) -> Option<InputEvent> {
    match event {
        WindowEvent::Focused(f) => Some(InputEvent::Focused(*f)),

        WindowEvent::CursorMoved { position, .. } => {
            let (x, y) = to_logical_f32(scale_factor, *position);
            Some(InputEvent::PointerMoved { x, y })
        }

        WindowEvent::Resized(size) => Some(InputEvent::Resized(to_viewport(scale_factor, *size))),

        WindowEvent::KeyboardInput { event, .. } => {
            let code = key_code_name(event.physical_key)?;
            Some(match event.state {
                ElementState::Pressed => InputEvent::KeyDown {
                    code,
                    repeat: event.repeat,
                },
                ElementState::Released => InputEvent::KeyUp { code },
            })
        }

        _ => None,
    }
}

/// Physical key name in DOM `KeyboardEvent.code` spelling.
///
/// winit's `KeyCode` variants are named after the same W3C table, so the
/// variant name is the code. Keys winit cannot identify have no stable name.
pub fn key_code_name(key: PhysicalKey) -> Option<String> {
    match key {
        PhysicalKey::Code(code) => Some(format!("{code:?}")),
        PhysicalKey::Unidentified(native) => {
            log::trace!("ignoring unidentified key {native:?}");
            None
        }
    }
}

fn to_logical_f32(scale_factor: f64, pos: PhysicalPosition<f64>) -> (f32, f32) {
    let logical = pos.to_logical::<f64>(scale_factor);
    (logical.x as f32, logical.y as f32)
}

fn to_viewport(scale_factor: f64, size: PhysicalSize<u32>) -> Viewport {
    let logical = size.to_logical::<f64>(scale_factor);
    Viewport::new(logical.width as f32, logical.height as f32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::keyboard::{KeyCode, NativeKeyCode};

    #[test]
    fn key_names_follow_dom_codes() {
        assert_eq!(key_code_name(PhysicalKey::Code(KeyCode::KeyA)).as_deref(), Some("KeyA"));
        assert_eq!(
            key_code_name(PhysicalKey::Code(KeyCode::ArrowLeft)).as_deref(),
            Some("ArrowLeft")
        );
        assert_eq!(key_code_name(PhysicalKey::Code(KeyCode::Space)).as_deref(), Some("Space"));
        assert_eq!(
            key_code_name(PhysicalKey::Unidentified(NativeKeyCode::Unidentified)),
            None
        );
    }

    #[test]
    fn resize_is_reported_in_logical_pixels() {
        let ev = WindowEvent::Resized(PhysicalSize::new(1600, 1200));
        assert_eq!(
            translate_window_event(2.0, &ev),
            Some(InputEvent::Resized(Viewport::new(800.0, 600.0)))
        );
    }

    #[test]
    fn focus_passes_through() {
        assert_eq!(
            translate_window_event(1.0, &WindowEvent::Focused(false)),
            Some(InputEvent::Focused(false))
        );
    }

    #[test]
    fn unrelated_events_are_dropped() {
        assert_eq!(translate_window_event(1.0, &WindowEvent::CloseRequested), None);
    }
}
