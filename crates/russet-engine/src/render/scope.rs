use super::Surface;

/// Saved transform state that is restored when the scope is dropped.
///
/// Every transform a node pushes goes through this guard, so the surface's
/// stack is rebalanced on every exit path, including early returns via `?`
/// when a child draw fails.
pub struct TransformScope<'a> {
    surface: &'a mut dyn Surface,
}

impl<'a> TransformScope<'a> {
    pub fn new(surface: &'a mut dyn Surface) -> Self {
        surface.save();
        Self { surface }
    }

    #[inline]
    pub fn surface(&mut self) -> &mut dyn Surface {
        &mut *self.surface
    }
}

impl Drop for TransformScope<'_> {
    fn drop(&mut self) {
        self.surface.restore();
    }
}
