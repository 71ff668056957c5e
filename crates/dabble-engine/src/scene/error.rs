use std::fmt;

use crate::coords::Vec2;

/// Why a shape was refused before it reached the display list.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ShapeError {
    NonFinitePosition(Vec2),
    NonFiniteVertex(Vec2),
    /// Size is NaN, infinite, zero or negative.
    InvalidSize(f32),
}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeError::NonFinitePosition(p) => {
                write!(f, "shape position ({}, {}) is not finite", p.x, p.y)
            }
            ShapeError::NonFiniteVertex(v) => {
                write!(f, "triangle vertex ({}, {}) is not finite", v.x, v.y)
            }
            ShapeError::InvalidSize(s) => write!(f, "shape size {s} is not a positive number"),
        }
    }
}

impl std::error::Error for ShapeError {}
