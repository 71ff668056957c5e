use std::f32::consts::TAU;

use crate::coords::Vec2;
use crate::paint::Color;
use crate::render::Canvas;
use crate::scene::{DisplayList, Shape};

use super::{MIN_SEGMENTS, SIZE_SCALE};

/// A disk approximated by a triangle fan.
#[derive(Debug, Clone, PartialEq)]
pub struct CircleShape {
    pub position: Vec2,
    pub color: Color,
    pub size: f32,
    /// Number of fan slices. Never below [`MIN_SEGMENTS`].
    pub segments: u32,
}

impl CircleShape {
    /// Creates a circle, raising `segments` to [`MIN_SEGMENTS`] if needed.
    #[inline]
    pub fn new(position: Vec2, color: Color, size: f32, segments: u32) -> Self {
        Self {
            position,
            color,
            size,
            segments: segments.max(MIN_SEGMENTS),
        }
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.size * SIZE_SCALE
    }

    /// Angle step between neighbouring perimeter points, in radians.
    #[inline]
    pub fn angle_step(&self) -> f32 {
        TAU / self.segments as f32
    }

    /// Perimeter points, counter-clockwise starting at angle 0.
    pub fn perimeter(&self) -> Vec<Vec2> {
        let step = self.angle_step();
        let r = self.radius();
        (0..self.segments)
            .map(|k| self.position + Vec2::from_angle(k as f32 * step) * r)
            .collect()
    }

    /// Fan slices as `[center, start, end]`.
    ///
    /// Slices share perimeter points: slice `i` ends on the exact vertex slice
    /// `i + 1` starts on, and the last slice ends on the first slice's start.
    pub fn fan(&self) -> Vec<[Vec2; 3]> {
        let rim = self.perimeter();
        let n = rim.len();
        (0..n)
            .map(|i| [self.position, rim[i], rim[(i + 1) % n]])
            .collect()
    }

    /// Draws every slice in a single batched triangle call.
    pub fn render<C: Canvas + ?Sized>(&self, canvas: &mut C) {
        let vertices: Vec<Vec2> = self.fan().into_iter().flatten().collect();
        canvas.draw_triangles(&vertices, self.color);
    }
}

impl DisplayList {
    /// Appends a circle.
    #[inline]
    pub fn push_circle(&mut self, position: Vec2, color: Color, size: f32, segments: u32) {
        self.push(Shape::Circle(CircleShape::new(position, color, size, segments)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn circle(segments: u32) -> CircleShape {
        CircleShape::new(Vec2::new(0.2, -0.1), Color::WHITE, 20.0, segments)
    }

    #[test]
    fn fan_has_one_slice_per_segment() {
        for s in [3, 8, 13, 64] {
            assert_eq!(circle(s).fan().len(), s as usize);
        }
    }

    #[test]
    fn slices_are_contiguous_and_close_the_loop() {
        let fan = circle(12).fan();
        for i in 0..fan.len() {
            let next = &fan[(i + 1) % fan.len()];
            assert_eq!(fan[i][2], next[1]);
        }
    }

    #[test]
    fn every_slice_starts_at_the_center() {
        let c = circle(7);
        assert!(c.fan().iter().all(|slice| slice[0] == c.position));
    }

    #[test]
    fn perimeter_points_sit_on_the_radius() {
        let c = circle(16);
        for p in c.perimeter() {
            let d = p - c.position;
            let len = (d.x * d.x + d.y * d.y).sqrt();
            assert!((len - c.radius()).abs() < 1e-6);
        }
    }

    #[test]
    fn slice_angles_sum_to_full_turn() {
        let c = circle(9);
        let total: f32 = (0..c.segments).map(|_| c.angle_step()).sum();
        assert!((total - TAU).abs() < 1e-5);
    }

    #[test]
    fn segments_below_three_are_raised() {
        assert_eq!(circle(0).segments, MIN_SEGMENTS);
        assert_eq!(circle(2).fan().len(), 3);
    }
}
