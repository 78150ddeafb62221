use crate::camera::Camera;
use crate::coords::{Point, Viewport};
use crate::input::InputState;
use crate::scene::Scene;
use crate::time::FrameTime;

/// Per-frame context passed to [`App::before_draw`](super::App::before_draw).
///
/// Scene and camera are handed over mutably: whatever the hook changes is what
/// this frame draws. Either may be `None`, and the hook may install or remove
/// them; a frame without both is skipped.
pub struct FrameCtx<'a> {
    pub scene: &'a mut Option<Scene>,
    pub camera: &'a mut Option<Camera>,
    pub input: &'a InputState,
    pub viewport: Viewport,
    pub time: FrameTime,
}

impl FrameCtx<'_> {
    /// Seconds since the previous frame.
    #[inline]
    pub fn dt(&self) -> f32 {
        self.time.dt
    }

    #[inline]
    pub fn is_key_down(&self, code: &str) -> bool {
        self.input.is_key_down(code)
    }

    /// Pointer position mapped into world space through the current camera.
    pub fn pointer_world(&self) -> Option<Point> {
        let camera = (*self.camera)?;
        Some(camera.screen_to_world(self.input.pointer, self.viewport))
    }
}
