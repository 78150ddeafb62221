use std::time::Instant;

use anyhow::{Context, Result};

use crate::camera::Camera;
use crate::coords::{Point, Viewport};
use crate::core::{App, AppControl, FrameCtx};
use crate::input::{InputEvent, InputState};
use crate::render::{Surface, render_frame};
use crate::scene::Scene;
use crate::time::FrameClock;

use super::{RequestRepaint, RuntimeConfig};

/// What a single [`Runtime::tick`] did.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum FrameOutcome {
    /// Hook ran (if any) and the scene was drawn.
    Drawn,
    /// Hook ran (if any) but scene or camera was missing; nothing was drawn.
    Skipped,
    /// The loop is stopped; the tick did nothing and requested nothing.
    Stopped,
}

/// Cooperative single-threaded frame loop.
///
/// Each tick runs the per-frame hook, then draws, then asks the host for the
/// next frame. At most one frame request is outstanding at any time. Nothing
/// inside a tick suspends, so the hook may mutate the scene and camera freely
/// and the same tick draws the result.
///
/// `scene` and `camera` are public: set them directly during setup or from
/// the hook. Either being `None` is an expected state, not an error.
pub struct Runtime {
    pub scene: Option<Scene>,
    pub camera: Option<Camera>,

    input: InputState,
    viewport: Viewport,
    clock: FrameClock,

    app: Option<Box<dyn App>>,
    repaint: Box<dyn RequestRepaint>,

    pending: bool,
    stopped: bool,
}

impl Runtime {
    pub fn new<R>(config: RuntimeConfig, repaint: R) -> Self
    where
        R: RequestRepaint + 'static,
    {
        Self {
            scene: None,
            camera: None,
            input: InputState::default(),
            viewport: config.initial_viewport,
            clock: FrameClock::with_clamps(config.min_frame_delta, config.max_frame_delta),
            app: None,
            repaint: Box::new(repaint),
            pending: false,
            stopped: false,
        }
    }

    /// Starts the loop without a per-frame hook: every frame just redraws.
    pub fn start(&mut self, now: Instant) {
        if self.stopped {
            log::warn!("start called on a stopped runtime; ignoring");
            return;
        }

        self.clock.reset_at(now);
        log::debug!(
            "frame loop started (hook: {}, viewport {}x{})",
            self.app.is_some(),
            self.viewport.width,
            self.viewport.height
        );
        self.request_frame();
    }

    /// Starts the loop with a closure run before every draw.
    pub fn start_with<F>(&mut self, now: Instant, hook: F)
    where
        F: FnMut(&mut FrameCtx<'_>) -> AppControl + 'static,
    {
        self.start_app(now, hook);
    }

    /// Starts the loop with an [`App`] run before every draw.
    pub fn start_app<A>(&mut self, now: Instant, app: A)
    where
        A: App + 'static,
    {
        if !self.stopped {
            self.app = Some(Box::new(app));
        }
        self.start(now);
    }

    /// Stops the loop. Terminal: later ticks do nothing and request nothing.
    pub fn stop(&mut self) {
        if !self.stopped {
            log::debug!("frame loop stopped after {} frames", self.clock.frame_index());
        }
        self.stopped = true;
    }

    #[inline]
    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    /// Whether a frame has been requested from the host and not yet delivered.
    #[inline]
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Runs one frame at host timestamp `now`.
    ///
    /// Order is strict: hook, draw, record `now` as the previous frame time,
    /// request the next frame. A draw error is returned after the next frame
    /// has been requested, so a failing surface does not end the loop.
    pub fn tick(&mut self, now: Instant, surface: &mut dyn Surface) -> Result<FrameOutcome> {
        if self.stopped {
            log::trace!("tick on stopped runtime ignored");
            return Ok(FrameOutcome::Stopped);
        }

        self.pending = false;
        let time = self.clock.tick_at(now);

        if let Some(app) = self.app.as_mut() {
            let mut ctx = FrameCtx {
                scene: &mut self.scene,
                camera: &mut self.camera,
                input: &self.input,
                viewport: self.viewport,
                time,
            };

            if app.before_draw(&mut ctx) == AppControl::Exit {
                self.stop();
                return Ok(FrameOutcome::Stopped);
            }
        }

        let drawn = match (&self.scene, &self.camera) {
            (Some(scene), Some(camera)) => {
                render_frame(scene, camera, self.viewport, surface).map(|()| FrameOutcome::Drawn)
            }
            _ => {
                log::trace!("frame {}: no scene or camera, skipping draw", time.frame_index);
                Ok(FrameOutcome::Skipped)
            }
        };

        self.request_frame();

        drawn.with_context(|| format!("failed to draw frame {}", time.frame_index))
    }

    /// Routes a host event: resizes update the viewport, everything else the
    /// input state.
    pub fn handle_event(&mut self, ev: &InputEvent) {
        match ev {
            InputEvent::Resized(viewport) => self.resize(*viewport),
            other => self.input.apply_event(other),
        }
    }

    /// Sets the viewport used by the next projection.
    pub fn resize(&mut self, viewport: Viewport) {
        log::debug!("viewport resized to {}x{}", viewport.width, viewport.height);
        self.viewport = viewport;
    }

    #[inline]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[inline]
    pub fn input(&self) -> &InputState {
        &self.input
    }

    #[inline]
    pub fn is_key_down(&self, code: &str) -> bool {
        self.input.is_key_down(code)
    }

    /// Last pointer position in screen pixels.
    #[inline]
    pub fn pointer(&self) -> Point {
        self.input.pointer
    }

    /// Number of frames ticked so far.
    #[inline]
    pub fn frame_index(&self) -> u64 {
        self.clock.frame_index()
    }

    fn request_frame(&mut self) {
        if self.pending {
            return;
        }
        self.pending = true;
        self.repaint.request_repaint();
    }
}
