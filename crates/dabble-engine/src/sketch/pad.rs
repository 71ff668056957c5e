use crate::coords::{client_to_ndc, SurfaceGeometry, Vec2};
use crate::paint::Color;
use crate::render::{render_all, report_status, Canvas, RenderStats, StatusSink};
use crate::scene::{push_bee, DisplayList, ShapeError};

use super::{Style, StyleCommand};

/// Owns everything drawn so far and redraws it after each change.
///
/// Every mutation (placing a shape, clearing, stamping the bee) is followed
/// by exactly one full render pass over the display list. Style changes only
/// affect shapes placed afterwards and do not redraw.
pub struct Sketchpad<C: Canvas, S: StatusSink = String> {
    style: Style,
    shapes: DisplayList,
    canvas: C,
    status: Option<S>,
    background: Color,

    passes: u64,
    last_stats: Option<RenderStats>,
}

impl<C: Canvas, S: StatusSink> Sketchpad<C, S> {
    pub fn new(canvas: C, status: Option<S>) -> Self {
        Self {
            style: Style::default(),
            shapes: DisplayList::new(),
            canvas,
            status,
            background: Color::BLACK,
            passes: 0,
            last_stats: None,
        }
    }

    /// Renders the (usually empty) list once the surface is ready.
    pub fn start(&mut self) -> RenderStats {
        log::info!("sketchpad ready");
        self.redraw()
    }

    /// Places a shape under the pointer; presses off the surface are ignored.
    pub fn pointer_down(&mut self, client: Vec2, surface: SurfaceGeometry) -> Result<(), ShapeError> {
        self.place_on_surface(client, surface)
    }

    /// Places a shape under a dragging pointer; moves off the surface are ignored.
    pub fn pointer_drag(&mut self, client: Vec2, surface: SurfaceGeometry) -> Result<(), ShapeError> {
        self.place_on_surface(client, surface)
    }

    fn place_on_surface(&mut self, client: Vec2, surface: SurfaceGeometry) -> Result<(), ShapeError> {
        if !surface.contains(client) {
            log::trace!("pointer at {client:?} is outside the surface; ignored");
            return Ok(());
        }
        self.place(client_to_ndc(client, surface))
    }

    /// Appends a shape built from the current style at `position` (NDC) and redraws.
    ///
    /// Nothing is appended or rendered when the shape is rejected.
    pub fn place(&mut self, position: Vec2) -> Result<(), ShapeError> {
        let shape = self.style.shape_at(position);
        shape.validate()?;

        log::debug!("placing {:?} at ({:.3}, {:.3})", shape.kind(), position.x, position.y);
        self.shapes.push(shape);
        self.redraw();
        Ok(())
    }

    pub fn apply(&mut self, cmd: StyleCommand) {
        self.style.apply(cmd);
        log::debug!("style: {:?}", self.style);
    }

    /// Removes every shape and redraws the bare background.
    pub fn clear(&mut self) {
        log::debug!("clearing {} shapes", self.shapes.len());
        self.shapes.clear();
        self.redraw();
    }

    /// Appends the bee illustration and redraws once.
    pub fn stamp_bee(&mut self) {
        push_bee(&mut self.shapes);
        self.redraw();
    }

    fn redraw(&mut self) -> RenderStats {
        let stats = render_all(&self.shapes, &mut self.canvas, self.background);
        report_status(self.status.as_mut(), &stats);

        self.passes += 1;
        self.last_stats = Some(stats);
        stats
    }

    // ── accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn style(&self) -> &Style {
        &self.style
    }

    #[inline]
    pub fn shapes(&self) -> &DisplayList {
        &self.shapes
    }

    #[inline]
    pub fn canvas(&self) -> &C {
        &self.canvas
    }

    #[inline]
    pub fn canvas_mut(&mut self) -> &mut C {
        &mut self.canvas
    }

    #[inline]
    pub fn status_mut(&mut self) -> Option<&mut S> {
        self.status.as_mut()
    }

    /// Render passes run so far.
    #[inline]
    pub fn passes(&self) -> u64 {
        self.passes
    }

    #[inline]
    pub fn last_stats(&self) -> Option<&RenderStats> {
        self.last_stats.as_ref()
    }
}
