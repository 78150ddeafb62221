use crate::coords::Point;

use super::Node;
use super::shapes::{Circle, Group, Line, Rect};

/// Anything that owns an ordered list of child nodes: the [`Scene`](super::Scene)
/// root and every [`Group`].
///
/// Children are kept in insertion order, which is also paint order. The
/// factory methods build a node with its defaults, append it, and hand back a
/// mutable reference so the caller can configure it in place.
pub trait Container {
    fn children(&self) -> &[Node];
    fn children_mut(&mut self) -> &mut Vec<Node>;

    /// Appends an already-built node and returns it.
    fn push(&mut self, node: impl Into<Node>) -> &mut Node
    where
        Self: Sized,
    {
        let children = self.children_mut();
        children.push(node.into());
        let last = children.len() - 1;
        &mut children[last]
    }

    /// Appends an empty group.
    fn make_group(&mut self) -> &mut Group
    where
        Self: Sized,
    {
        match self.push(Group::new()) {
            Node::Group(g) => g,
            other => unreachable!("pushed a group, found {}", other.kind()),
        }
    }

    /// Appends a rectangle with its corner at `position` (default anchor).
    fn make_rect(&mut self, position: Point, width: f32, height: f32) -> &mut Rect
    where
        Self: Sized,
    {
        match self.push(Rect::new(position, width, height)) {
            Node::Rect(r) => r,
            other => unreachable!("pushed a rect, found {}", other.kind()),
        }
    }

    /// Appends a circle centred on `position` (default anchor).
    fn make_circle(&mut self, position: Point, radius: f32) -> &mut Circle
    where
        Self: Sized,
    {
        match self.push(Circle::new(position, radius)) {
            Node::Circle(c) => c,
            other => unreachable!("pushed a circle, found {}", other.kind()),
        }
    }

    /// Appends a line from `(x1, y1)` to `(x2, y2)`.
    fn make_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32) -> &mut Line
    where
        Self: Sized,
    {
        match self.push(Line::new(x1, y1, x2, y2)) {
            Node::Line(l) => l,
            other => unreachable!("pushed a line, found {}", other.kind()),
        }
    }

    /// Removes the child at `index` and returns it. The node and its subtree are
    /// dropped unless the caller keeps the returned value.
    fn detach(&mut self, index: usize) -> Option<Node> {
        let children = self.children_mut();
        (index < children.len()).then(|| children.remove(index))
    }

    /// Removes every child.
    fn clear(&mut self) {
        self.children_mut().clear();
    }

    fn child(&self, index: usize) -> Option<&Node> {
        self.children().get(index)
    }

    fn child_mut(&mut self, index: usize) -> Option<&mut Node> {
        self.children_mut().get_mut(index)
    }

    fn len(&self) -> usize {
        self.children().len()
    }

    fn is_empty(&self) -> bool {
        self.children().is_empty()
    }
}
