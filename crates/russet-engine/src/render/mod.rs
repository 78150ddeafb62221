//! Rendering: turns a scene graph plus camera into calls on a [`Surface`].
//!
//! The engine never rasterizes. Hosts implement [`Surface`] over whatever
//! they draw with; [`DrawList`] records calls for replay, logging and tests.

mod frame;
mod list;
mod scope;
mod shapes;
mod surface;

pub use frame::render_frame;
pub use list::{DrawCmd, DrawItem, DrawList};
pub use scope::TransformScope;
pub use surface::Surface;
