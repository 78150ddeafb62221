use super::Point;

/// Axis-aligned rectangle given by its corner and size, in the local space of
/// whatever transform is active when it is drawn.
///
/// Width and height are not normalized: a negative size is passed through to
/// the surface untouched.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Bounds {
    pub origin: Point,
    pub size: Point,
}

impl Bounds {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            origin: Point::new(x, y),
            size: Point::new(w, h),
        }
    }

    #[inline]
    pub const fn from_origin_size(origin: Point, size: Point) -> Self {
        Self { origin, size }
    }

    #[inline]
    pub fn min(self) -> Point {
        self.origin
    }

    #[inline]
    pub fn max(self) -> Point {
        Point::new(self.origin.x + self.size.x, self.origin.y + self.size.y)
    }

    #[inline]
    pub fn center(self) -> Point {
        Point::new(
            self.origin.x + self.size.x / 2.0,
            self.origin.y + self.size.y / 2.0,
        )
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.size.x <= 0.0 || self.size.y <= 0.0
    }

    /// Returns `true` if `p` lies inside (inclusive of the min edge, exclusive of max).
    #[inline]
    pub fn contains(self, p: Point) -> bool {
        let max = self.max();
        p.x >= self.origin.x && p.x < max.x && p.y >= self.origin.y && p.y < max.y
    }
}
