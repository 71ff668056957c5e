use crate::coords::Vec2;
use crate::paint::Color;
use crate::render::Canvas;

use super::ShapeError;
use super::shapes::circle::CircleShape;
use super::shapes::point::PointShape;
use super::shapes::triangle::TriangleShape;

/// A placed shape.
///
/// Extending the scene:
/// - add a payload module under `scene::shapes::*`
/// - add a variant here and a matching `ShapeKind`
/// - implement `render` on the payload against [`Canvas`]
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Point(PointShape),
    Triangle(TriangleShape),
    Circle(CircleShape),
}

/// Shape selector without payload, as chosen in the style controls.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum ShapeKind {
    #[default]
    Point,
    Triangle,
    Circle,
}

impl Shape {
    #[inline]
    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Point(_) => ShapeKind::Point,
            Shape::Triangle(_) => ShapeKind::Triangle,
            Shape::Circle(_) => ShapeKind::Circle,
        }
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        match self {
            Shape::Point(p) => p.position,
            Shape::Triangle(t) => t.position,
            Shape::Circle(c) => c.position,
        }
    }

    #[inline]
    pub fn color(&self) -> Color {
        match self {
            Shape::Point(p) => p.color,
            Shape::Triangle(t) => t.color,
            Shape::Circle(c) => c.color,
        }
    }

    /// Issues this shape's primitive draws. Reads nothing but `self`.
    #[inline]
    pub fn render<C: Canvas + ?Sized>(&self, canvas: &mut C) {
        match self {
            Shape::Point(p) => p.render(canvas),
            Shape::Triangle(t) => t.render(canvas),
            Shape::Circle(c) => c.render(canvas),
        }
    }

    /// Rejects geometry that would produce NaN/inf vertices.
    pub fn validate(&self) -> Result<(), ShapeError> {
        if let Shape::Triangle(TriangleShape { custom: Some(vertices), .. }) = self {
            return match vertices.iter().find(|v| !v.is_finite()) {
                Some(&v) => Err(ShapeError::NonFiniteVertex(v)),
                None => Ok(()),
            };
        }

        let (position, size) = match self {
            Shape::Point(p) => (p.position, p.size),
            Shape::Triangle(t) => (t.position, t.size),
            Shape::Circle(c) => (c.position, c.size),
        };

        if !position.is_finite() {
            return Err(ShapeError::NonFinitePosition(position));
        }
        if !size.is_finite() || size <= 0.0 {
            return Err(ShapeError::InvalidSize(size));
        }
        Ok(())
    }
}
