use crate::coords::Vec2;
use crate::paint::Color;

/// Drawing surface the scene renders against.
///
/// Coordinates are NDC: `[-1, 1]` on both axes, +Y up. Implementations must
/// blend with straight alpha (`src * a + dst * (1 - a)`) and keep draw order:
/// a later call paints over an earlier one.
pub trait Canvas {
    /// Discards everything drawn so far and fills the surface with `color`.
    fn clear(&mut self, color: Color);

    /// Draws a square point sprite `diameter` device pixels across.
    fn draw_point(&mut self, center: Vec2, diameter: f32, color: Color);

    /// Draws a triangle list with one uniform color.
    ///
    /// `vertices.len()` should be a multiple of 3; a trailing partial triangle
    /// is ignored.
    fn draw_triangles(&mut self, vertices: &[Vec2], color: Color);
}
