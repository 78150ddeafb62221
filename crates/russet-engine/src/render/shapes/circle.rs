use anyhow::Result;

use crate::render::{Surface, TransformScope};
use crate::scene::Circle;

use super::outline;

pub(super) fn draw(circle: &Circle, surface: &mut dyn Surface) -> Result<()> {
    let mut scope = TransformScope::new(surface);
    let s = scope.surface();

    s.translate(circle.position.x, circle.position.y);
    s.rotate(circle.rotation);

    let center = -circle.anchor;

    if let Some(fill) = circle.fill {
        s.fill_circle(center, circle.radius, fill)?;
    }
    if let Some(stroke) = outline(circle.stroke, circle.line_width) {
        s.stroke_circle(center, circle.radius, stroke)?;
    }

    Ok(())
}
