use anyhow::Result;

use crate::coords::{Bounds, Point, Viewport};
use crate::paint::{Color, Stroke};

/// Drawing capability supplied by the host (canvas context, SVG writer, GPU
/// batcher, recorder).
///
/// The surface owns a transform stack in the style of a 2D canvas context:
/// `save` pushes a copy of the current transform, `restore` pops it, and
/// `translate`/`rotate`/`scale` post-multiply the current one. Geometry passed to
/// the draw methods is in the space of the current transform.
///
/// Stack operations cannot fail. Draw operations can (lost context, closed
/// writer) and report it through `anyhow`.
pub trait Surface {
    fn save(&mut self);
    fn restore(&mut self);

    fn translate(&mut self, x: f32, y: f32);
    /// Radians.
    fn rotate(&mut self, radians: f32);
    /// Uniform scale.
    fn scale(&mut self, factor: f32);

    /// Fills the whole viewport, ignoring the current transform.
    fn clear(&mut self, color: Color, viewport: Viewport) -> Result<()>;

    fn fill_rect(&mut self, rect: Bounds, color: Color) -> Result<()>;
    fn stroke_rect(&mut self, rect: Bounds, stroke: Stroke) -> Result<()>;

    /// Full circle (0 to 2π).
    fn fill_circle(&mut self, center: Point, radius: f32, color: Color) -> Result<()>;
    fn stroke_circle(&mut self, center: Point, radius: f32, stroke: Stroke) -> Result<()>;

    fn stroke_line(&mut self, from: Point, to: Point, stroke: Stroke) -> Result<()>;
}
