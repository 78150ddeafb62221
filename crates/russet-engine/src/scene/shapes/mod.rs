mod circle;
mod group;
mod line;
mod rect;

pub use circle::Circle;
pub use group::Group;
pub use line::Line;
pub use rect::Rect;
