use crate::coords::Vec2;
use crate::paint::Color;
use crate::render::Canvas;
use crate::scene::{DisplayList, Shape};

/// A single rasterized point.
#[derive(Debug, Clone, PartialEq)]
pub struct PointShape {
    pub position: Vec2,
    pub color: Color,
    /// Point diameter in device pixels.
    pub size: f32,
}

impl PointShape {
    #[inline]
    pub fn new(position: Vec2, color: Color, size: f32) -> Self {
        Self { position, color, size }
    }

    #[inline]
    pub fn render<C: Canvas + ?Sized>(&self, canvas: &mut C) {
        canvas.draw_point(self.position, self.size, self.color);
    }
}

impl DisplayList {
    /// Appends a point.
    #[inline]
    pub fn push_point(&mut self, position: Vec2, color: Color, size: f32) {
        self.push(Shape::Point(PointShape::new(position, color, size)));
    }
}
