//! Headless demo: a pulsing square and two orbiting circles, driven by the
//! frame loop with a recording surface standing in for a canvas.
//!
//! Run with `RUST_LOG=russet_demo=debug` to see per-frame summaries, or
//! `RUST_LOG=trace` for every engine step.

use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use russet_engine::camera::Camera;
use russet_engine::coords::Point;
use russet_engine::core::AppControl;
use russet_engine::input::InputEvent;
use russet_engine::logging::{LoggingConfig, init_logging};
use russet_engine::paint::Color;
use russet_engine::render::{DrawCmd, DrawList};
use russet_engine::runtime::{FrameOutcome, FrameRequests, Runtime, RuntimeConfig};
use russet_engine::scene::{Container, Node, Scene};

const FRAMES: u64 = 120;
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Root child indices, fixed by build order in `build_scene`.
const SQUARE: usize = 0;
const ORBIT: usize = 1;

fn build_scene() -> Result<Scene> {
    let mut scene = Scene::new(2000.0, 2000.0, Color::from_hex("#219ebc")?);
    let center = scene.center();

    let square = scene.make_rect(center, 200.0, 200.0);
    square.center_anchor();
    square.fill = Some(Color::from_hex("#023047")?);

    let orbit = scene.make_group();
    orbit.position = center;

    let left = orbit.make_circle(Point::new(-100.0, 0.0), 32.0);
    left.fill = Some(Color::from_hex("#ffb703")?);

    let right = orbit.make_circle(Point::new(100.0, 0.0), 32.0);
    right.fill = Some(Color::from_hex("#fb8500")?);

    let axis = orbit.make_line(-100.0, 0.0, 100.0, 0.0);
    axis.stroke = Color::from_hex("#8ecae6")?;
    axis.line_width = 2.0;

    Ok(scene)
}

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let requests = FrameRequests::new();
    let mut runtime = Runtime::new(RuntimeConfig::default(), requests.clone());

    let scene = build_scene().context("failed to build demo scene")?;
    runtime.camera = Some(Camera::new(scene.center(), 800.0, 600.0));
    runtime.scene = Some(scene);

    let mut elapsed = 0.0_f32;
    runtime.start_with(Instant::now(), move |ctx| {
        elapsed += ctx.dt();

        let Some(scene) = ctx.scene.as_mut() else {
            return AppControl::Continue;
        };

        if let Some(Node::Rect(square)) = scene.child_mut(SQUARE) {
            let size = 50.0 * elapsed.sin() + 200.0;
            square.width = size;
            square.height = size;
            square.center_anchor();
        }

        if let Some(Node::Group(orbit)) = scene.child_mut(ORBIT) {
            // Space spins the other way while held.
            let dir = if ctx.input.is_key_down("Space") { -1.0 } else { 1.0 };
            orbit.rotation += dir * ctx.time.dt;
        }

        if ctx.input.is_key_down("Escape") {
            return AppControl::Exit;
        }
        AppControl::Continue
    });

    let mut surface = DrawList::new();

    while requests.take() {
        thread::sleep(FRAME_INTERVAL);

        let frame = runtime.frame_index();
        match frame {
            30 => runtime.handle_event(&InputEvent::key_down("Space")),
            31..=33 => runtime.handle_event(&InputEvent::key_repeat("Space")),
            60 => runtime.handle_event(&InputEvent::key_up("Space")),
            f if f == FRAMES => runtime.handle_event(&InputEvent::key_down("Escape")),
            _ => {}
        }

        surface.reset();
        let outcome = runtime.tick(Instant::now(), &mut surface)?;

        if outcome == FrameOutcome::Drawn && frame % 30 == 0 {
            log_frame(frame, &surface);
        }
    }

    log::info!("demo finished after {} frames", runtime.frame_index());
    Ok(())
}

fn log_frame(frame: u64, surface: &DrawList) {
    let circles: Vec<_> = surface
        .items()
        .iter()
        .filter(|item| matches!(item.cmd, DrawCmd::FillCircle { .. }))
        .map(|item| item.to_screen(Point::zero()))
        .collect();

    log::info!(
        "frame {frame}: {} calls, circle centres on screen {:?}",
        surface.len(),
        circles
    );
}
