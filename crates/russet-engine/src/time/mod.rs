//! Time subsystem.
//!
//! Provides stable, testable frame timing without coupling to the runtime.
//! Intended usage:
//! - one `FrameClock` per frame loop
//! - call `tick_at(now)` once per frame with the host's timestamp

mod frame_clock;

pub use frame_clock::{FrameClock, FrameTime};
