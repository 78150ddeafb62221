use anyhow::Result;

use crate::camera::Camera;
use crate::coords::Viewport;
use crate::scene::Scene;

use super::{Surface, TransformScope};

/// Renders one frame: clears the viewport to the scene background, then draws
/// every root node under the camera projection.
///
/// The projection is translate to the viewport centre, scale by the camera's
/// cover-fit factor, translate by `-camera.position`.
pub fn render_frame(
    scene: &Scene,
    camera: &Camera,
    viewport: Viewport,
    surface: &mut dyn Surface,
) -> Result<()> {
    surface.clear(scene.background, viewport)?;

    let scale = camera.cover_scale(viewport);
    let center = viewport.center();

    log::trace!(
        "render_frame: {} root nodes, viewport {}x{}, scale {scale}",
        scene.children.len(),
        viewport.width,
        viewport.height,
    );

    let mut scope = TransformScope::new(surface);
    let s = scope.surface();
    s.translate(center.x, center.y);
    s.scale(scale);
    s.translate(-camera.position.x, -camera.position.y);

    for child in &scene.children {
        child.draw(s)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Point;
    use crate::paint::Color;
    use crate::render::{DrawCmd, DrawList};
    use crate::scene::Container;

    fn close(a: Point, b: Point) -> bool {
        (a.x - b.x).abs() < 1e-3 && (a.y - b.y).abs() < 1e-3
    }

    #[test]
    fn clears_with_background_before_anything_else() {
        let mut scene = Scene::new(100.0, 100.0, Color::from_hex("#219ebc").unwrap());
        scene.make_rect(Point::zero(), 1.0, 1.0);
        let camera = Camera::new(scene.center(), 100.0, 100.0);
        let vp = Viewport::new(300.0, 200.0);

        let mut list = DrawList::new();
        render_frame(&scene, &camera, vp, &mut list).unwrap();

        assert_eq!(
            list.items()[0].cmd,
            DrawCmd::Clear {
                color: scene.background,
                viewport: vp
            }
        );
        assert_eq!(list.len(), 2);
        assert_eq!(list.depth(), 0);
    }

    #[test]
    fn camera_position_renders_at_viewport_center() {
        let mut scene = Scene::with_size(2000.0, 2000.0);
        scene.make_circle(Point::new(1000.0, 1000.0), 10.0);
        let camera = Camera::new(Point::new(1000.0, 1000.0), 800.0, 600.0);

        for vp in [
            Viewport::new(800.0, 600.0),
            Viewport::new(1920.0, 1080.0),
            Viewport::new(375.0, 812.0),
        ] {
            let mut list = DrawList::new();
            render_frame(&scene, &camera, vp, &mut list).unwrap();
            let circle = &list.items()[1];
            assert!(close(circle.to_screen(Point::zero()), vp.center()));
            let scale = camera.cover_scale(vp);
            assert!((circle.transform.uniform_scale() - scale).abs() < 1e-4);
        }
    }

    #[test]
    fn root_nodes_draw_in_insertion_order_regardless_of_type() {
        let mut scene = Scene::with_size(10.0, 10.0);
        scene.make_line(0.0, 0.0, 1.0, 1.0);
        scene.make_circle(Point::zero(), 1.0);
        scene.make_rect(Point::zero(), 1.0, 1.0);
        let camera = Camera::new(Point::zero(), 10.0, 10.0);

        let mut list = DrawList::new();
        render_frame(&scene, &camera, Viewport::new(10.0, 10.0), &mut list).unwrap();

        let names: Vec<_> = list.items().iter().map(|i| i.cmd.name()).collect();
        assert_eq!(names, ["clear", "stroke_line", "fill_circle", "fill_rect"]);
    }

    #[test]
    fn group_and_camera_compose() {
        let mut scene = Scene::with_size(400.0, 300.0);
        let g = scene.make_group();
        g.position = Point::new(100.0, 100.0);
        g.scale = 2.0;
        g.make_circle(Point::new(10.0, 0.0), 5.0);

        let camera = Camera::new(Point::new(120.0, 100.0), 400.0, 300.0);
        let vp = Viewport::new(800.0, 600.0);

        let mut list = DrawList::new();
        render_frame(&scene, &camera, vp, &mut list).unwrap();

        let circle = &list.items()[1];
        // world (120, 100) is the camera position, so it lands at the centre
        assert!(close(circle.to_screen(Point::zero()), Point::new(400.0, 300.0)));
        // 2x group scale on top of 2x cover scale
        assert!((circle.transform.uniform_scale() - 4.0).abs() < 1e-4);
    }

    #[test]
    fn empty_scene_only_clears() {
        let scene = Scene::with_size(10.0, 10.0);
        let camera = Camera::new(Point::zero(), 10.0, 10.0);
        let mut list = DrawList::new();
        render_frame(&scene, &camera, Viewport::new(10.0, 10.0), &mut list).unwrap();
        assert_eq!(list.len(), 1);
    }
}
