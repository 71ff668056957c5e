use crate::coords::Vec2;
use crate::paint::Color;
use crate::render::Canvas;
use crate::scene::{DisplayList, Shape};

use super::SIZE_SCALE;

/// A flat-colored triangle.
///
/// Without `custom` vertices this is an upward-pointing triangle centered on
/// `position`, `size * SIZE_SCALE` NDC units wide and tall. With `custom`
/// vertices the three points are absolute NDC coordinates and `position` /
/// `size` do not affect the geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct TriangleShape {
    pub position: Vec2,
    pub color: Color,
    pub size: f32,
    pub custom: Option<[Vec2; 3]>,
}

impl TriangleShape {
    #[inline]
    pub fn new(position: Vec2, color: Color, size: f32) -> Self {
        Self { position, color, size, custom: None }
    }

    /// Triangle with explicit absolute vertices.
    #[inline]
    pub fn custom(vertices: [Vec2; 3], color: Color) -> Self {
        Self {
            position: Vec2::zero(),
            color,
            size: 0.0,
            custom: Some(vertices),
        }
    }

    /// The three vertices this triangle renders, in NDC.
    pub fn vertices(&self) -> [Vec2; 3] {
        if let Some(custom) = self.custom {
            return custom;
        }

        let half = self.size * SIZE_SCALE / 2.0;
        let Vec2 { x, y } = self.position;
        [
            Vec2::new(x - half, y - half),
            Vec2::new(x + half, y - half),
            Vec2::new(x, y + half),
        ]
    }

    #[inline]
    pub fn render<C: Canvas + ?Sized>(&self, canvas: &mut C) {
        canvas.draw_triangles(&self.vertices(), self.color);
    }
}

impl DisplayList {
    /// Appends a centered triangle.
    #[inline]
    pub fn push_triangle(&mut self, position: Vec2, color: Color, size: f32) {
        self.push(Shape::Triangle(TriangleShape::new(position, color, size)));
    }

    /// Appends a triangle with absolute NDC vertices.
    #[inline]
    pub fn push_custom_triangle(&mut self, vertices: [Vec2; 3], color: Color) {
        self.push(Shape::Triangle(TriangleShape::custom(vertices, color)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Vec2, b: Vec2) -> bool {
        (a.x - b.x).abs() < 1e-6 && (a.y - b.y).abs() < 1e-6
    }

    #[test]
    fn generated_triangle_is_centered_and_points_up() {
        let t = TriangleShape::new(Vec2::new(0.5, -0.5), Color::WHITE, 10.0);
        let [a, b, c] = t.vertices();

        // size 10 -> 0.05 NDC across, 0.025 each side of the center.
        assert!(close(a, Vec2::new(0.475, -0.525)));
        assert!(close(b, Vec2::new(0.525, -0.525)));
        assert!(close(c, Vec2::new(0.5, -0.475)));
        assert!(c.y > a.y && c.y > b.y);
    }

    #[test]
    fn generated_triangle_scales_with_size() {
        let small = TriangleShape::new(Vec2::zero(), Color::WHITE, 5.0).vertices();
        let large = TriangleShape::new(Vec2::zero(), Color::WHITE, 20.0).vertices();
        let width = |v: [Vec2; 3]| v[1].x - v[0].x;
        assert!((width(large) - 4.0 * width(small)).abs() < 1e-6);
    }

    #[test]
    fn custom_vertices_override_position_and_size() {
        let verts = [Vec2::new(-0.5, -0.4), Vec2::new(0.5, -0.4), Vec2::new(-0.5, 0.4)];
        let mut t = TriangleShape::custom(verts, Color::YELLOW);
        t.position = Vec2::new(0.9, 0.9);
        t.size = 40.0;
        assert_eq!(t.vertices(), verts);
    }
}
