use std::cell::Cell;
use std::rc::Rc;

/// The host's "call me again before the next repaint" primitive.
///
/// Each call must eventually produce exactly one [`Runtime::tick`](super::Runtime::tick),
/// asynchronously. The runtime never has more than one request outstanding.
pub trait RequestRepaint {
    fn request_repaint(&mut self);
}

impl<F> RequestRepaint for F
where
    F: FnMut(),
{
    #[inline]
    fn request_repaint(&mut self) {
        self()
    }
}

#[derive(Debug, Default)]
struct Requests {
    total: Cell<u64>,
    pending: Cell<bool>,
}

/// Shared pending-frame flag for hosts that poll.
///
/// Clone one handle into the runtime and keep another in the host loop: the
/// host calls [`FrameRequests::take`] and ticks the runtime when it returns
/// `true`.
#[derive(Debug, Clone, Default)]
pub struct FrameRequests {
    inner: Rc<Requests>,
}

impl FrameRequests {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consumes the outstanding request, if any.
    pub fn take(&self) -> bool {
        self.inner.pending.replace(false)
    }

    #[inline]
    pub fn is_pending(&self) -> bool {
        self.inner.pending.get()
    }

    /// Number of requests received since creation.
    #[inline]
    pub fn total(&self) -> u64 {
        self.inner.total.get()
    }
}

impl RequestRepaint for FrameRequests {
    fn request_repaint(&mut self) {
        self.inner.total.set(self.inner.total.get() + 1);
        self.inner.pending.set(true);
    }
}
