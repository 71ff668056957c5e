//! Dabble engine crate.
//!
//! An immediate-mode drawing canvas: shapes placed by pointer input are kept
//! in an append-only display list and the whole list is re-rendered after
//! every change.
//!
//! - `coords`, `paint`, `scene`: geometry, color and the shape model
//! - `render`: the `Canvas` contract, the render loop, the wgpu canvas
//! - `sketch`: pending style and the input-handling `Sketchpad`
//! - `window`, `device`, `input`, `core`: the winit/wgpu runtime

pub mod core;
pub mod device;
pub mod input;
pub mod window;

pub mod coords;
pub mod logging;
pub mod paint;
pub mod render;
pub mod scene;
pub mod sketch;
