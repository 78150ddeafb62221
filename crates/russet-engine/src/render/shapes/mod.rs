//! Per-variant draw routines.
//!
//! Each routine pushes its own transform through a [`TransformScope`](super::TransformScope)
//! and draws in that local space. Traversal is depth-first, pre-order, children
//! in list order, which fixes both transform composition and paint order.

mod circle;
mod group;
mod line;
mod rect;

use anyhow::Result;

use crate::paint::{Color, Stroke};
use crate::scene::Node;

use super::Surface;

impl Node {
    /// Draws this node and its subtree onto `surface` under the surface's
    /// current transform.
    pub fn draw(&self, surface: &mut dyn Surface) -> Result<()> {
        match self {
            Node::Group(g) => group::draw(g, surface),
            Node::Rect(r) => rect::draw(r, surface),
            Node::Circle(c) => circle::draw(c, surface),
            Node::Line(l) => line::draw(l, surface),
        }
    }
}

/// Outline for filled shapes: needs both a color and a positive width.
fn outline(color: Option<Color>, width: f32) -> Option<Stroke> {
    match color {
        Some(color) if width > 0.0 => Some(Stroke::new(width, color)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use anyhow::bail;

    use super::*;
    use crate::coords::{Bounds, Point, Viewport};
    use crate::render::{DrawCmd, DrawList};
    use crate::scene::{Container, Group};

    fn close(a: Point, b: Point) -> bool {
        (a.x - b.x).abs() < 1e-4 && (a.y - b.y).abs() < 1e-4
    }

    fn record(node: &Node) -> DrawList {
        let mut list = DrawList::new();
        node.draw(&mut list).unwrap();
        assert_eq!(list.depth(), 0, "unbalanced transform stack");
        list
    }

    #[test]
    fn rect_fill_only_by_default() {
        let mut g = Group::new();
        g.make_rect(Point::new(5.0, 5.0), 10.0, 20.0);
        let list = record(&g.children[0]);

        assert_eq!(list.len(), 1);
        assert_eq!(
            list.items()[0].cmd,
            DrawCmd::FillRect {
                rect: Bounds::new(0.0, 0.0, 10.0, 20.0),
                color: Color::WHITE
            }
        );
        assert_eq!(list.items()[0].to_screen(Point::zero()), Point::new(5.0, 5.0));
    }

    #[test]
    fn rect_corner_sits_at_negative_anchor() {
        let mut g = Group::new();
        let r = g.make_rect(Point::new(100.0, 100.0), 200.0, 100.0);
        r.center_anchor();
        let list = record(&g.children[0]);

        let DrawCmd::FillRect { rect, .. } = list.items()[0].cmd else {
            panic!("expected fill_rect");
        };
        assert_eq!(rect.origin, Point::new(-100.0, -50.0));
        assert_eq!(list.items()[0].to_screen(rect.center()), Point::new(100.0, 100.0));
    }

    #[test]
    fn rect_stroke_needs_color_and_positive_width() {
        let mut g = Group::new();
        let r = g.make_rect(Point::zero(), 1.0, 1.0);
        r.fill = None;
        r.line_width = 2.0;
        let r = g.make_rect(Point::zero(), 1.0, 1.0);
        r.fill = None;
        r.stroke = None;
        r.line_width = 2.0;
        let r = g.make_rect(Point::zero(), 1.0, 1.0);
        r.fill = None;

        let names: Vec<_> = g
            .children
            .iter()
            .map(|n| record(n).items().iter().map(|i| i.cmd.name()).collect::<Vec<_>>())
            .collect();
        assert_eq!(names, [vec!["stroke_rect"], vec![], vec![]]);
    }

    #[test]
    fn fill_then_stroke_are_independent() {
        let mut g = Group::new();
        let c = g.make_circle(Point::zero(), 4.0);
        c.line_width = 1.5;
        c.stroke = Some(Color::BLACK);
        let list = record(&g.children[0]);

        let names: Vec<_> = list.items().iter().map(|i| i.cmd.name()).collect();
        assert_eq!(names, ["fill_circle", "stroke_circle"]);
        assert_eq!(
            list.items()[1].cmd,
            DrawCmd::StrokeCircle {
                center: Point::zero(),
                radius: 4.0,
                stroke: Stroke::new(1.5, Color::BLACK)
            }
        );
    }

    #[test]
    fn circle_centred_on_negative_anchor_and_rotated_about_position() {
        let mut g = Group::new();
        let c = g.make_circle(Point::new(50.0, 50.0), 3.0);
        c.anchor = Point::new(-10.0, 0.0);
        c.rotation = core::f32::consts::FRAC_PI_2;
        let list = record(&g.children[0]);

        let item = &list.items()[0];
        let DrawCmd::FillCircle { center, .. } = item.cmd else {
            panic!("expected fill_circle");
        };
        assert_eq!(center, Point::new(10.0, 0.0));
        assert!(close(item.to_screen(center), Point::new(50.0, 60.0)));
    }

    #[test]
    fn line_strokes_even_with_zero_width() {
        let mut g = Group::new();
        g.make_line(0.0, 0.0, 10.0, 0.0);
        let list = record(&g.children[0]);

        assert_eq!(
            list.items()[0].cmd,
            DrawCmd::StrokeLine {
                from: Point::new(0.0, 0.0),
                to: Point::new(10.0, 0.0),
                stroke: Stroke::new(0.0, Color::WHITE)
            }
        );
    }

    #[test]
    fn line_anchor_shifts_segment_in_local_frame() {
        let mut g = Group::new();
        g.make_line(0.0, 0.0, 10.0, 0.0).anchor = Point::new(5.0, 0.0);
        let list = record(&g.children[0]);

        let DrawCmd::StrokeLine { from, to, .. } = list.items()[0].cmd else {
            panic!("expected stroke_line");
        };
        assert_eq!((from, to), (Point::new(-5.0, 0.0), Point::new(5.0, 0.0)));
    }

    #[test]
    fn line_rotates_about_first_endpoint() {
        let mut g = Group::new();
        g.make_line(20.0, 20.0, 30.0, 20.0).rotation = core::f32::consts::FRAC_PI_2;
        let list = record(&g.children[0]);

        let item = &list.items()[0];
        let DrawCmd::StrokeLine { from, to, .. } = item.cmd else {
            panic!("expected stroke_line");
        };
        assert!(close(item.to_screen(from), Point::new(20.0, 20.0)));
        assert!(close(item.to_screen(to), Point::new(20.0, 30.0)));
    }

    #[test]
    fn group_transform_composes_into_children() {
        let mut root = Group::new();
        let g = root.make_group();
        g.position = Point::new(100.0, 100.0);
        g.scale = 2.0;
        g.make_circle(Point::new(10.0, 0.0), 5.0);
        let list = record(&root.children[0]);

        let item = &list.items()[0];
        assert_eq!(item.to_screen(Point::zero()), Point::new(120.0, 100.0));
        assert_eq!(item.transform.uniform_scale(), 2.0);
    }

    #[test]
    fn group_anchor_is_pivot() {
        let mut root = Group::new();
        let g = root.make_group();
        g.position = Point::new(100.0, 100.0);
        g.anchor = Point::new(10.0, 0.0);
        g.rotation = core::f32::consts::PI;
        g.make_circle(Point::new(10.0, 0.0), 1.0);
        g.make_circle(Point::new(20.0, 0.0), 1.0);
        let list = record(&root.children[0]);

        assert!(close(list.items()[0].to_screen(Point::zero()), Point::new(100.0, 100.0)));
        assert!(close(list.items()[1].to_screen(Point::zero()), Point::new(90.0, 100.0)));
    }

    #[test]
    fn nested_groups_compose_multiplicatively() {
        let mut root = Group::new();
        let outer = root.make_group();
        outer.position = Point::new(10.0, 0.0);
        outer.scale = 2.0;
        let inner = outer.make_group();
        inner.position = Point::new(5.0, 0.0);
        inner.scale = 3.0;
        inner.make_circle(Point::new(1.0, 0.0), 1.0);
        let list = record(&root.children[0]);

        // 10 + 2 * (5 + 3 * 1)
        let item = &list.items()[0];
        assert_eq!(item.to_screen(Point::zero()), Point::new(26.0, 0.0));
        assert_eq!(item.transform.uniform_scale(), 6.0);
    }

    #[test]
    fn children_draw_in_insertion_order_depth_first() {
        let mut root = Group::new();
        root.make_rect(Point::zero(), 1.0, 1.0);
        let g = root.make_group();
        g.make_circle(Point::zero(), 1.0);
        g.make_line(0.0, 0.0, 1.0, 0.0);
        root.make_circle(Point::zero(), 2.0);
        // added to the group last, still drawn before the root's trailing circle
        root.children[1]
            .as_group_mut()
            .unwrap()
            .make_rect(Point::zero(), 2.0, 2.0);

        let list = record(&Node::Group(root));
        let names: Vec<_> = list.items().iter().map(|i| i.cmd.name()).collect();
        assert_eq!(
            names,
            ["fill_rect", "fill_circle", "stroke_line", "fill_rect", "fill_circle"]
        );
    }

    /// Delegates to a `DrawList` but fails every circle fill.
    struct FailingCircles(DrawList);

    impl Surface for FailingCircles {
        fn save(&mut self) {
            self.0.save()
        }
        fn restore(&mut self) {
            self.0.restore()
        }
        fn translate(&mut self, x: f32, y: f32) {
            self.0.translate(x, y)
        }
        fn rotate(&mut self, radians: f32) {
            self.0.rotate(radians)
        }
        fn scale(&mut self, factor: f32) {
            self.0.scale(factor)
        }
        fn clear(&mut self, color: Color, viewport: Viewport) -> Result<()> {
            self.0.clear(color, viewport)
        }
        fn fill_rect(&mut self, rect: Bounds, color: Color) -> Result<()> {
            self.0.fill_rect(rect, color)
        }
        fn stroke_rect(&mut self, rect: Bounds, stroke: Stroke) -> Result<()> {
            self.0.stroke_rect(rect, stroke)
        }
        fn fill_circle(&mut self, _: Point, _: f32, _: Color) -> Result<()> {
            bail!("circle fill rejected")
        }
        fn stroke_circle(&mut self, center: Point, radius: f32, stroke: Stroke) -> Result<()> {
            self.0.stroke_circle(center, radius, stroke)
        }
        fn stroke_line(&mut self, from: Point, to: Point, stroke: Stroke) -> Result<()> {
            self.0.stroke_line(from, to, stroke)
        }
    }

    #[test]
    fn failing_child_still_restores_every_scope() {
        let mut root = Group::new();
        let g = root.make_group();
        g.position = Point::new(3.0, 3.0);
        let inner = g.make_group();
        inner.scale = 2.0;
        inner.make_rect(Point::zero(), 1.0, 1.0);
        inner.make_circle(Point::zero(), 1.0);
        inner.make_rect(Point::zero(), 1.0, 1.0);

        let mut surface = FailingCircles(DrawList::new());
        let err = Node::Group(root).draw(&mut surface).unwrap_err();

        assert_eq!(err.to_string(), "circle fill rejected");
        assert_eq!(surface.0.depth(), 0);
        assert_eq!(surface.0.current_transform(), crate::coords::Affine::IDENTITY);
        // the rect after the failing circle is never reached
        assert_eq!(surface.0.len(), 1);
    }
}
