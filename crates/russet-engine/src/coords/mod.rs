//! Geometry types shared by the scene graph, camera and surfaces.
//!
//! Canonical 2D space:
//! - origin top-left
//! - +X right, +Y down
//! - rotations in radians, positive turns +X towards +Y (clockwise on screen)

mod bounds;
mod point;
mod transform;
mod viewport;

pub use bounds::Bounds;
pub use point::Point;
pub use transform::Affine;
pub use viewport::Viewport;
