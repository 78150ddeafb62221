//! Scene graph: an ordered tree of drawable nodes.
//!
//! Ownership is strict: every node lives in exactly one `Vec<Node>` (the scene
//! root or a group). Child order is paint order. Nodes are created through the
//! [`Container`] factories and destroyed by detaching them.

mod container;
mod node;
mod scene;

pub mod shapes;

pub use container::Container;
pub use node::Node;
pub use scene::Scene;
pub use shapes::{Circle, Group, Line, Rect};
