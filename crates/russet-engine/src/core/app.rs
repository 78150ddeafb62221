use super::ctx::FrameCtx;

/// Control directive returned by the per-frame hook.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    /// Stop the frame loop. The current frame is not drawn and no further
    /// frames are requested.
    Exit,
}

/// Per-frame hook run before each draw.
///
/// Implemented for any `FnMut(&mut FrameCtx<'_>) -> AppControl`, so a closure
/// is usually enough; implement it on a struct when the hook carries state
/// that tests want to inspect.
pub trait App {
    fn before_draw(&mut self, ctx: &mut FrameCtx<'_>) -> AppControl;
}

impl<F> App for F
where
    F: FnMut(&mut FrameCtx<'_>) -> AppControl,
{
    #[inline]
    fn before_draw(&mut self, ctx: &mut FrameCtx<'_>) -> AppControl {
        self(ctx)
    }
}
