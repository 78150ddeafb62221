use anyhow::Result;

use crate::coords::Bounds;
use crate::render::{Surface, TransformScope};
use crate::scene::Rect;

use super::outline;

/// Rect: translate `position`, rotate, then a `width x height` box whose
/// corner sits at `-anchor`. Fill first, outline on top.
pub(super) fn draw(rect: &Rect, surface: &mut dyn Surface) -> Result<()> {
    let mut scope = TransformScope::new(surface);
    let s = scope.surface();

    s.translate(rect.position.x, rect.position.y);
    s.rotate(rect.rotation);

    let bounds = Bounds::new(-rect.anchor.x, -rect.anchor.y, rect.width, rect.height);

    if let Some(fill) = rect.fill {
        s.fill_rect(bounds, fill)?;
    }
    if let Some(stroke) = outline(rect.stroke, rect.line_width) {
        s.stroke_rect(bounds, stroke)?;
    }

    Ok(())
}
