//! Camera and cover-fit viewport projection.
//!
//! The camera describes a window onto world space: `position` is the world
//! point shown at the viewport centre, `width`/`height` the world extent the
//! camera wants visible. The projection scales that window uniformly until it
//! covers the whole viewport: one axis may be cropped, but the screen never
//! shows empty margins and drawn content is never stretched.

use crate::coords::{Affine, Point, Viewport};

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Camera {
    pub position: Point,
    /// World-space width of the visible window.
    pub width: f32,
    /// World-space height of the visible window.
    pub height: f32,
}

impl Camera {
    #[inline]
    pub const fn new(position: Point, width: f32, height: f32) -> Self {
        Self { position, width, height }
    }

    /// Pixels per world unit for `viewport`: `max(vw / cw, vh / ch)`.
    ///
    /// No guard against a zero-sized camera; the result is then infinite.
    #[inline]
    pub fn cover_scale(&self, viewport: Viewport) -> f32 {
        (viewport.width / self.width).max(viewport.height / self.height)
    }

    /// World-to-screen transform: translate to the viewport centre, scale,
    /// then translate by `-position`.
    pub fn projection(&self, viewport: Viewport) -> Affine {
        let center = viewport.center();
        Affine::IDENTITY
            .translate(center.x, center.y)
            .scale(self.cover_scale(viewport))
            .translate(-self.position.x, -self.position.y)
    }

    /// Maps a world point to screen pixels.
    pub fn world_to_screen(&self, world: Point, viewport: Viewport) -> Point {
        (world - self.position) * self.cover_scale(viewport) + viewport.center()
    }

    /// Maps a screen pixel (e.g. the tracked pointer) back to world space.
    pub fn screen_to_world(&self, screen: Point, viewport: Viewport) -> Point {
        (screen - viewport.center()) / self.cover_scale(viewport) + self.position
    }

    /// World-space size actually visible in `viewport`.
    ///
    /// Never larger than `width x height`; the axis that decided the scale
    /// matches exactly and the other is cropped.
    pub fn visible_extent(&self, viewport: Viewport) -> Point {
        let s = self.cover_scale(viewport);
        Point::new(viewport.width / s, viewport.height / s)
    }
}
