use std::time::Duration;

use crate::coords::Viewport;
use crate::time::FrameClock;

/// Runtime configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Viewport size used until the host reports a resize.
    pub initial_viewport: Viewport,
    /// Lower bound on the delta handed to the per-frame hook.
    pub min_frame_delta: Duration,
    /// Upper bound on the delta handed to the per-frame hook.
    pub max_frame_delta: Duration,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            initial_viewport: Viewport::new(1280.0, 720.0),
            min_frame_delta: FrameClock::DEFAULT_DT_MIN,
            max_frame_delta: FrameClock::DEFAULT_DT_MAX,
        }
    }
}
