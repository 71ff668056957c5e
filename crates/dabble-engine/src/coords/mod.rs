//! Coordinate and geometry types shared by the scene, renderers and input.
//!
//! Two spaces are in play:
//! - client space: logical pixels, origin top-left, +Y down (what input reports)
//! - normalized device coordinates (NDC): origin center, [-1, 1] per axis, +Y up
//!
//! Shapes live in NDC. [`client_to_ndc`] converts pointer positions.

mod ndc;
mod rect;
mod vec2;
mod viewport;

pub use ndc::{SurfaceGeometry, client_to_ndc};
pub use rect::Rect;
pub use vec2::Vec2;
pub use viewport::Viewport;
