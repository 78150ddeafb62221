use anyhow::Result;

use crate::paint::Stroke;
use crate::render::{Surface, TransformScope};
use crate::scene::Line;

/// Line: the first endpoint becomes the local origin, then rotate. Always
/// stroked, zero width included; hosts decide what a hairline looks like.
pub(super) fn draw(line: &Line, surface: &mut dyn Surface) -> Result<()> {
    let mut scope = TransformScope::new(surface);
    let s = scope.surface();

    s.translate(line.x1, line.y1);
    s.rotate(line.rotation);

    let (from, to) = line.local_endpoints();
    s.stroke_line(from, to, Stroke::new(line.line_width, line.stroke))
}
