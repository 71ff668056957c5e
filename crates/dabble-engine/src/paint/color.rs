/// Straight-alpha RGBA color with components in `[0, 1]`.
///
/// `a` is the shape's opacity. Values outside the range are not rejected at
/// construction; use [`clamped`](Self::clamped) on anything user-provided.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const BLACK: Self = Self::rgba(0.0, 0.0, 0.0, 1.0);
    pub const WHITE: Self = Self::rgba(1.0, 1.0, 1.0, 1.0);
    pub const RED: Self = Self::rgba(1.0, 0.0, 0.0, 1.0);
    pub const GREEN: Self = Self::rgba(0.0, 1.0, 0.0, 1.0);
    pub const YELLOW: Self = Self::rgba(1.0, 1.0, 0.0, 1.0);

    #[inline]
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Clamps all channels to `[0, 1]`. NaN channels become 0.
    #[inline]
    pub fn clamped(self) -> Self {
        fn unit(v: f32) -> f32 {
            if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) }
        }
        Self::rgba(unit(self.r), unit(self.g), unit(self.b), unit(self.a))
    }

    #[inline]
    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamped_pulls_channels_into_unit_range() {
        let c = Color::rgba(1.5, -0.25, 0.5, 2.0).clamped();
        assert_eq!(c, Color::rgba(1.0, 0.0, 0.5, 1.0));
    }

    #[test]
    fn clamped_zeroes_nan() {
        let c = Color::rgba(f32::NAN, 0.2, 0.3, 0.4).clamped();
        assert_eq!(c, Color::rgba(0.0, 0.2, 0.3, 0.4));
    }
}
