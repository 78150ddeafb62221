use super::shapes::{Circle, Group, Line, Rect};

/// A drawable scene-graph node.
///
/// The variant set is closed: adding a shape means adding a variant here and a
/// matching arm in the renderer's dispatch, which the compiler then enforces.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Group(Group),
    Rect(Rect),
    Circle(Circle),
    Line(Line),
}

impl Node {
    /// Short variant name for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Node::Group(_) => "group",
            Node::Rect(_) => "rect",
            Node::Circle(_) => "circle",
            Node::Line(_) => "line",
        }
    }

    pub fn as_group(&self) -> Option<&Group> {
        match self {
            Node::Group(g) => Some(g),
            _ => None,
        }
    }

    pub fn as_group_mut(&mut self) -> Option<&mut Group> {
        match self {
            Node::Group(g) => Some(g),
            _ => None,
        }
    }

    pub fn as_rect_mut(&mut self) -> Option<&mut Rect> {
        match self {
            Node::Rect(r) => Some(r),
            _ => None,
        }
    }

    pub fn as_circle_mut(&mut self) -> Option<&mut Circle> {
        match self {
            Node::Circle(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_line_mut(&mut self) -> Option<&mut Line> {
        match self {
            Node::Line(l) => Some(l),
            _ => None,
        }
    }

    /// Number of nodes in this subtree, including `self`.
    pub fn subtree_len(&self) -> usize {
        match self {
            Node::Group(g) => 1 + g.children.iter().map(Node::subtree_len).sum::<usize>(),
            _ => 1,
        }
    }
}

impl From<Group> for Node {
    fn from(v: Group) -> Self {
        Node::Group(v)
    }
}

impl From<Rect> for Node {
    fn from(v: Rect) -> Self {
        Node::Rect(v)
    }
}

impl From<Circle> for Node {
    fn from(v: Circle) -> Self {
        Node::Circle(v)
    }
}

impl From<Line> for Node {
    fn from(v: Line) -> Self {
        Node::Line(v)
    }
}
