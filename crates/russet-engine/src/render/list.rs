use anyhow::Result;

use crate::coords::{Affine, Bounds, Point, Viewport};
use crate::paint::{Color, Stroke};

use super::Surface;

/// A recorded surface call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Clear { color: Color, viewport: Viewport },
    FillRect { rect: Bounds, color: Color },
    StrokeRect { rect: Bounds, stroke: Stroke },
    FillCircle { center: Point, radius: f32, color: Color },
    StrokeCircle { center: Point, radius: f32, stroke: Stroke },
    StrokeLine { from: Point, to: Point, stroke: Stroke },
}

impl DrawCmd {
    /// Short name for logs and assertions.
    pub fn name(&self) -> &'static str {
        match self {
            DrawCmd::Clear { .. } => "clear",
            DrawCmd::FillRect { .. } => "fill_rect",
            DrawCmd::StrokeRect { .. } => "stroke_rect",
            DrawCmd::FillCircle { .. } => "fill_circle",
            DrawCmd::StrokeCircle { .. } => "stroke_circle",
            DrawCmd::StrokeLine { .. } => "stroke_line",
        }
    }
}

/// A draw command together with the transform that was current when it was issued.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawItem {
    pub cmd: DrawCmd,
    pub transform: Affine,
}

impl DrawItem {
    /// Maps a point given in the command's local space through its transform.
    #[inline]
    pub fn to_screen(&self, local: Point) -> Point {
        self.transform.apply(local)
    }
}

/// Recording [`Surface`].
///
/// Keeps every draw call in issue order along with the composed transform, so
/// hosts can replay a frame and tests can check geometry without a display.
///
/// Performance characteristics:
/// - each call is O(1)
/// - `reset()` keeps allocated capacity for reuse across frames
#[derive(Debug, Default)]
pub struct DrawList {
    items: Vec<DrawItem>,
    current: Affine,
    stack: Vec<Affine>,
    transform_ops: usize,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Drops recorded items and resets the transform. Keeps capacity.
    pub fn reset(&mut self) {
        self.items.clear();
        self.stack.clear();
        self.current = Affine::IDENTITY;
        self.transform_ops = 0;
    }

    /// Items in issue order (which is paint order).
    #[inline]
    pub fn items(&self) -> &[DrawItem] {
        &self.items
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of `save`/`restore`/`translate`/`rotate`/`scale` calls received.
    #[inline]
    pub fn transform_ops(&self) -> usize {
        self.transform_ops
    }

    /// Current save depth. Zero between balanced frames.
    #[inline]
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    #[inline]
    pub fn current_transform(&self) -> Affine {
        self.current
    }

    fn record(&mut self, cmd: DrawCmd) -> Result<()> {
        self.items.push(DrawItem {
            cmd,
            transform: self.current,
        });
        Ok(())
    }
}

impl Surface for DrawList {
    fn save(&mut self) {
        self.transform_ops += 1;
        self.stack.push(self.current);
    }

    fn restore(&mut self) {
        self.transform_ops += 1;
        debug_assert!(!self.stack.is_empty(), "restore called without matching save");
        match self.stack.pop() {
            Some(t) => self.current = t,
            None => log::warn!("DrawList: restore without matching save ignored"),
        }
    }

    fn translate(&mut self, x: f32, y: f32) {
        self.transform_ops += 1;
        self.current = self.current.translate(x, y);
    }

    fn rotate(&mut self, radians: f32) {
        self.transform_ops += 1;
        self.current = self.current.rotate(radians);
    }

    fn scale(&mut self, factor: f32) {
        self.transform_ops += 1;
        self.current = self.current.scale(factor);
    }

    fn clear(&mut self, color: Color, viewport: Viewport) -> Result<()> {
        self.items.push(DrawItem {
            cmd: DrawCmd::Clear { color, viewport },
            transform: Affine::IDENTITY,
        });
        Ok(())
    }

    fn fill_rect(&mut self, rect: Bounds, color: Color) -> Result<()> {
        self.record(DrawCmd::FillRect { rect, color })
    }

    fn stroke_rect(&mut self, rect: Bounds, stroke: Stroke) -> Result<()> {
        self.record(DrawCmd::StrokeRect { rect, stroke })
    }

    fn fill_circle(&mut self, center: Point, radius: f32, color: Color) -> Result<()> {
        self.record(DrawCmd::FillCircle { center, radius, color })
    }

    fn stroke_circle(&mut self, center: Point, radius: f32, stroke: Stroke) -> Result<()> {
        self.record(DrawCmd::StrokeCircle { center, radius, stroke })
    }

    fn stroke_line(&mut self, from: Point, to: Point, stroke: Stroke) -> Result<()> {
        self.record(DrawCmd::StrokeLine { from, to, stroke })
    }
}
