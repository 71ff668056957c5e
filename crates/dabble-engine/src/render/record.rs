use crate::coords::Vec2;
use crate::paint::Color;

use super::Canvas;

/// One primitive call as seen by a [`Canvas`].
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Clear(Color),
    Point { center: Vec2, diameter: f32, color: Color },
    Triangles { vertices: Vec<Vec2>, color: Color },
}

/// A canvas that keeps the calls of the current pass instead of drawing.
///
/// Like a real surface, `clear` forgets whatever was drawn before it, so the
/// recording always describes the latest pass.
#[derive(Debug, Default, Clone)]
pub struct RecordingCanvas {
    calls: Vec<DrawCall>,
    clears: u64,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Calls since (and including) the latest clear.
    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    /// Total number of clears ever issued, i.e. passes started.
    pub fn clears(&self) -> u64 {
        self.clears
    }

    pub fn point_calls(&self) -> impl Iterator<Item = &DrawCall> {
        self.calls.iter().filter(|c| matches!(c, DrawCall::Point { .. }))
    }

    pub fn triangle_calls(&self) -> impl Iterator<Item = &DrawCall> {
        self.calls.iter().filter(|c| matches!(c, DrawCall::Triangles { .. }))
    }
}

impl Canvas for RecordingCanvas {
    fn clear(&mut self, color: Color) {
        self.calls.clear();
        self.calls.push(DrawCall::Clear(color));
        self.clears += 1;
    }

    fn draw_point(&mut self, center: Vec2, diameter: f32, color: Color) {
        self.calls.push(DrawCall::Point { center, diameter, color });
    }

    fn draw_triangles(&mut self, vertices: &[Vec2], color: Color) {
        let whole = vertices.len() - vertices.len() % 3;
        self.calls.push(DrawCall::Triangles {
            vertices: vertices[..whole].to_vec(),
            color,
        });
    }
}
