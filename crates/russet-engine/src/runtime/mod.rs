//! Frame scheduler.
//!
//! A [`Runtime`] owns the scene, camera, input state and frame clock. The host
//! injects a [`RequestRepaint`] primitive and calls [`Runtime::tick`] each time
//! a requested frame comes due, passing the surface to draw on.

mod config;
mod repaint;
mod scheduler;

pub use config::RuntimeConfig;
pub use repaint::{FrameRequests, RequestRepaint};
pub use scheduler::{FrameOutcome, Runtime};
