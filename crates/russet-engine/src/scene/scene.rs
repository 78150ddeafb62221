use crate::coords::Point;
use crate::paint::Color;

use super::{Container, Node};

/// Root of a scene graph.
///
/// `width`/`height` describe the world the caller intends to populate; they do
/// not clip anything and are only used by [`Scene::center`]. The background is
/// painted over the whole viewport before each frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub width: f32,
    pub height: f32,
    pub background: Color,
    pub children: Vec<Node>,
}

impl Scene {
    pub fn new(width: f32, height: f32, background: Color) -> Self {
        Self {
            width,
            height,
            background,
            children: Vec::new(),
        }
    }

    /// Scene with a black background.
    pub fn with_size(width: f32, height: f32) -> Self {
        Self::new(width, height, Color::BLACK)
    }

    #[inline]
    pub fn center(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }

    /// Total number of nodes in the tree.
    pub fn node_count(&self) -> usize {
        self.children.iter().map(Node::subtree_len).sum()
    }
}

impl Container for Scene {
    #[inline]
    fn children(&self) -> &[Node] {
        &self.children
    }

    #[inline]
    fn children_mut(&mut self) -> &mut Vec<Node> {
        &mut self.children
    }
}
