use std::time::{Duration, Instant};

/// Frame timing snapshot.
#[derive(Debug, Copy, Clone)]
pub struct FrameTime {
    /// Time elapsed since the previous frame tick, in seconds (after clamping).
    pub dt: f32,

    /// Timestamp the tick was taken at.
    pub now: Instant,

    /// Monotonic frame counter.
    pub frame_index: u64,
}

/// Frame clock producing `FrameTime` snapshots.
///
/// Timestamps come from the host (`tick_at`) so the frame loop stays
/// deterministic under test; `tick` samples `Instant::now()` for hosts that
/// have no timestamp of their own.
///
/// Delta time is clamped to `[dt_min, dt_max]` so a host that throttles or
/// suspends the loop (background tab, minimized window, debugger) hands the
/// caller one bounded step on resume instead of the whole gap.
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Instant,
    frame_index: u64,
    dt_min: Duration,
    dt_max: Duration,
}

impl FrameClock {
    /// Default clamps.
    pub const DEFAULT_DT_MIN: Duration = Duration::ZERO;
    pub const DEFAULT_DT_MAX: Duration = Duration::from_millis(250);

    /// Creates a new clock with default clamps, baselined at `Instant::now()`.
    pub fn new() -> Self {
        Self::with_clamps(Self::DEFAULT_DT_MIN, Self::DEFAULT_DT_MAX)
    }

    /// Creates a clock with custom delta-time clamps.
    pub fn with_clamps(dt_min: Duration, dt_max: Duration) -> Self {
        debug_assert!(dt_min <= dt_max);
        Self {
            last: Instant::now(),
            frame_index: 0,
            dt_min,
            dt_max,
        }
    }

    /// Resets the baseline so the next delta is measured from `now`.
    pub fn reset_at(&mut self, now: Instant) {
        self.last = now;
    }

    /// Timestamp of the previous tick (or reset).
    #[inline]
    pub fn last(&self) -> Instant {
        self.last
    }

    #[inline]
    pub fn frame_index(&self) -> u64 {
        self.frame_index
    }

    /// Advances the clock to `now` and returns a new `FrameTime`.
    ///
    /// A `now` earlier than the previous tick yields a zero raw delta.
    pub fn tick_at(&mut self, now: Instant) -> FrameTime {
        let dt = now
            .saturating_duration_since(self.last)
            .clamp(self.dt_min, self.dt_max);

        self.last = now;

        let ft = FrameTime {
            dt: dt.as_secs_f32(),
            now,
            frame_index: self.frame_index,
        };

        self.frame_index = self.frame_index.wrapping_add(1);

        ft
    }

    /// Advances the clock to `Instant::now()`.
    pub fn tick(&mut self) -> FrameTime {
        self.tick_at(Instant::now())
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
