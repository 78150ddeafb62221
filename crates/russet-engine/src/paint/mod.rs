//! Paint model: colors and strokes.

pub mod color;

pub use color::{Color, ColorParseError};

/// Outline drawn along a path.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Stroke {
    pub width: f32,
    pub color: Color,
}

impl Stroke {
    #[inline]
    pub fn new(width: f32, color: Color) -> Self {
        Self { width, color }
    }
}
