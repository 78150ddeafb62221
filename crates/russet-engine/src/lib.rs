//! Russet engine crate.
//!
//! A retained-mode 2D scene graph with a camera projection and a cooperative
//! frame loop. The host supplies a drawing [`render::Surface`], a
//! [`runtime::RequestRepaint`] primitive and input events; the engine owns the
//! tree, composes transforms and decides what gets drawn each frame.

pub mod camera;
pub mod coords;
pub mod core;
pub mod input;
pub mod render;
pub mod runtime;
pub mod scene;
pub mod time;

pub mod logging;
pub mod paint;
