use super::{Rect, Vec2, Viewport};

/// Where the drawing surface sits in client space and how big it is.
///
/// `bounds` is the surface's bounding rectangle as reported by the windowing
/// layer; `size` is its pixel size. For a window-filling surface both describe
/// the same area.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct SurfaceGeometry {
    pub bounds: Rect,
    pub size: Viewport,
}

impl SurfaceGeometry {
    #[inline]
    pub const fn new(bounds: Rect, size: Viewport) -> Self {
        Self { bounds, size }
    }

    /// Surface that fills a `width` x `height` window starting at the origin.
    #[inline]
    pub const fn window(width: f32, height: f32) -> Self {
        Self {
            bounds: Rect::new(0.0, 0.0, width, height),
            size: Viewport::new(width, height),
        }
    }

    /// Returns `true` when `client` lies on the surface (half-open bounds).
    #[inline]
    pub fn contains(self, client: Vec2) -> bool {
        self.bounds.contains(client)
    }
}

/// Converts a client-space pointer position to normalized device coordinates.
///
/// The origin moves to the surface center and the y axis flips so that up is
/// positive. The bounds' top-left corner maps to `(-1, 1)`.
#[inline]
pub fn client_to_ndc(client: Vec2, surface: SurfaceGeometry) -> Vec2 {
    let half_w = surface.size.width / 2.0;
    let half_h = surface.size.height / 2.0;

    let local_x = client.x - surface.bounds.left();
    let local_y = client.y - surface.bounds.top();

    Vec2::new((local_x - half_w) / half_w, (half_h - local_y) / half_h)
}
