use anyhow::Result;

use crate::render::{Surface, TransformScope};
use crate::scene::Group;

pub(super) fn draw(group: &Group, surface: &mut dyn Surface) -> Result<()> {
    let mut scope = TransformScope::new(surface);
    let s = scope.surface();

    s.translate(group.position.x, group.position.y);
    s.rotate(group.rotation);
    s.scale(group.scale);
    s.translate(-group.anchor.x, -group.anchor.y);

    for child in &group.children {
        child.draw(s)?;
    }

    Ok(())
}
