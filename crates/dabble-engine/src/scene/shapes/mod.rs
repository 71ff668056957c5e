//! Per-variant shape payloads, geometry generation and `DisplayList` push helpers.

pub(crate) mod circle;
pub(crate) mod point;
pub(crate) mod triangle;

/// NDC units per unit of `size` for triangles and circles.
///
/// A size-5 circle has a radius of 0.025, i.e. 1.25% of the surface width.
pub const SIZE_SCALE: f32 = 1.0 / 200.0;

/// Smallest segment count that still encloses an area.
pub const MIN_SEGMENTS: u32 = 3;
