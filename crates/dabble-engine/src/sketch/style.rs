use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::shapes::MIN_SEGMENTS;
use crate::scene::{CircleShape, PointShape, Shape, ShapeKind, TriangleShape};

pub const MIN_SIZE: f32 = 1.0;
pub const MAX_SIZE: f32 = 100.0;
pub const MAX_SEGMENTS: u32 = 100;

/// One color channel of the pending style.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    #[inline]
    fn index(self) -> usize {
        match self {
            Channel::Red => 0,
            Channel::Green => 1,
            Channel::Blue => 2,
        }
    }
}

/// A change to the pending style.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum StyleCommand {
    SelectKind(ShapeKind),
    SetRgb([f32; 3]),
    AdjustChannel(Channel, f32),
    AdjustOpacity(f32),
    AdjustSize(f32),
    AdjustSegments(i32),
}

/// Style applied to the next placed shape.
///
/// Fields stay inside their ranges as long as changes go through
/// [`Style::apply`]: channels and opacity in `[0, 1]`, size in
/// `[MIN_SIZE, MAX_SIZE]`, segments in `[MIN_SEGMENTS, MAX_SEGMENTS]`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Style {
    pub kind: ShapeKind,
    pub rgb: [f32; 3],
    pub opacity: f32,
    pub size: f32,
    pub segments: u32,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            kind: ShapeKind::Point,
            rgb: [1.0, 1.0, 1.0],
            opacity: 1.0,
            size: 5.0,
            segments: 8,
        }
    }
}

impl Style {
    pub const RED: [f32; 3] = [1.0, 0.0, 0.0];
    pub const GREEN: [f32; 3] = [0.0, 1.0, 0.0];

    pub fn apply(&mut self, cmd: StyleCommand) {
        match cmd {
            StyleCommand::SelectKind(kind) => self.kind = kind,
            StyleCommand::SetRgb(rgb) => self.rgb = rgb.map(unit),
            StyleCommand::AdjustChannel(channel, delta) => {
                let c = &mut self.rgb[channel.index()];
                *c = unit(*c + finite_or_zero(delta));
            }
            StyleCommand::AdjustOpacity(delta) => {
                self.opacity = unit(self.opacity + finite_or_zero(delta));
            }
            StyleCommand::AdjustSize(delta) => {
                self.size = (self.size + finite_or_zero(delta)).clamp(MIN_SIZE, MAX_SIZE);
            }
            StyleCommand::AdjustSegments(delta) => {
                let next = i64::from(self.segments) + i64::from(delta);
                self.segments =
                    next.clamp(i64::from(MIN_SEGMENTS), i64::from(MAX_SEGMENTS)) as u32;
            }
        }
    }

    /// Fill color with opacity as alpha.
    #[inline]
    pub fn color(&self) -> Color {
        let [r, g, b] = self.rgb;
        Color::rgba(r, g, b, self.opacity).clamped()
    }

    /// Builds the shape this style places at `position` (NDC).
    pub fn shape_at(&self, position: Vec2) -> Shape {
        let color = self.color();
        match self.kind {
            ShapeKind::Point => Shape::Point(PointShape::new(position, color, self.size)),
            ShapeKind::Triangle => Shape::Triangle(TriangleShape::new(position, color, self.size)),
            ShapeKind::Circle => {
                Shape::Circle(CircleShape::new(position, color, self.size, self.segments))
            }
        }
    }
}

#[inline]
fn unit(v: f32) -> f32 {
    if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) }
}

#[inline]
fn finite_or_zero(v: f32) -> f32 {
    if v.is_finite() { v } else { 0.0 }
}
