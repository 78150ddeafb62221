use crate::coords::Point;
use crate::scene::{Container, Node};

/// Non-drawing node that applies one transform to all of its children.
///
/// The transform is applied as: translate `position`, rotate `rotation`,
/// scale uniformly by `scale`, then translate `-anchor`. `anchor` is therefore
/// expressed in the group's own (scaled, rotated) space and is the point that
/// lands on `position`.
#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    pub children: Vec<Node>,
    pub position: Point,
    pub anchor: Point,
    pub scale: f32,
    /// Radians.
    pub rotation: f32,
}

impl Group {
    pub fn new() -> Self {
        Self {
            children: Vec::new(),
            position: Point::zero(),
            anchor: Point::zero(),
            scale: 1.0,
            rotation: 0.0,
        }
    }
}

impl Default for Group {
    fn default() -> Self {
        Self::new()
    }
}

impl Container for Group {
    #[inline]
    fn children(&self) -> &[Node] {
        &self.children
    }

    #[inline]
    fn children_mut(&mut self) -> &mut Vec<Node> {
        &mut self.children
    }
}
