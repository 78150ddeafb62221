//! Caller-facing contracts for the frame loop.
//!
//! Defines the per-frame hook and the context it receives, independent of how
//! the host delivers frames.

mod app;
mod ctx;

pub use app::{App, AppControl};
pub use ctx::FrameCtx;
