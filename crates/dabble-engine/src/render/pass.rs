//! Full-redraw render loop and its status reporting.

use std::fmt;
use std::time::{Duration, Instant};

use crate::paint::Color;
use crate::scene::Shape;

use super::Canvas;

/// Receives the one-line status text after each render pass.
pub trait StatusSink {
    fn publish(&mut self, status: &str);
}

impl StatusSink for String {
    fn publish(&mut self, status: &str) {
        self.clear();
        self.push_str(status);
    }
}

/// Keeps every published line; handy for tests and headless runs.
impl StatusSink for Vec<String> {
    fn publish(&mut self, status: &str) {
        self.push(status.to_owned());
    }
}

/// Timing of one render pass.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RenderStats {
    pub shape_count: usize,
    pub duration: Duration,
}

impl RenderStats {
    /// Whole milliseconds, rounded down.
    #[inline]
    pub fn duration_ms(&self) -> u64 {
        self.duration.as_millis() as u64
    }

    /// Frames per second with one decimal, rounded down.
    ///
    /// `None` when the pass finished in under a millisecond.
    pub fn fps(&self) -> Option<f64> {
        let ms = self.duration.as_nanos() as f64 / 1_000_000.0;
        if ms < 1.0 {
            return None;
        }
        Some((10_000.0 / ms).floor() / 10.0)
    }
}

impl fmt::Display for RenderStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "shapes: {} ms: {} fps: ", self.shape_count, self.duration_ms())?;
        match self.fps() {
            Some(fps) => write!(f, "{fps}"),
            None => f.write_str("-"),
        }
    }
}

/// Clears `canvas` to `background` and renders every shape, oldest first.
pub fn render_all<'a, C, I>(shapes: I, canvas: &mut C, background: Color) -> RenderStats
where
    C: Canvas + ?Sized,
    I: IntoIterator<Item = &'a Shape>,
{
    let start = Instant::now();

    canvas.clear(background);
    let mut shape_count = 0;
    for shape in shapes {
        shape.render(canvas);
        shape_count += 1;
    }

    RenderStats {
        shape_count,
        duration: start.elapsed(),
    }
}

/// Publishes `stats` to `sink`, or logs a warning when there is none.
pub fn report_status<S: StatusSink + ?Sized>(sink: Option<&mut S>, stats: &RenderStats) {
    match sink {
        Some(sink) => sink.publish(&stats.to_string()),
        None => log::warn!("no status sink attached; dropping render status ({stats})"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Vec2;
    use crate::render::{DrawCall, RecordingCanvas};
    use crate::scene::DisplayList;

    fn stats(shape_count: usize, micros: u64) -> RenderStats {
        RenderStats {
            shape_count,
            duration: Duration::from_micros(micros),
        }
    }

    // ── render_all ────────────────────────────────────────────────────────

    #[test]
    fn empty_list_only_clears() {
        let mut canvas = RecordingCanvas::new();
        let s = render_all(&DisplayList::new(), &mut canvas, Color::BLACK);
        assert_eq!(s.shape_count, 0);
        assert_eq!(canvas.calls(), [DrawCall::Clear(Color::BLACK)]);
    }

    #[test]
    fn shapes_render_in_insertion_order() {
        let mut list = DisplayList::new();
        list.push_point(Vec2::new(0.1, 0.1), Color::RED, 5.0);
        list.push_triangle(Vec2::zero(), Color::GREEN, 10.0);
        list.push_point(Vec2::new(-0.1, 0.1), Color::WHITE, 8.0);

        let mut canvas = RecordingCanvas::new();
        let s = render_all(&list, &mut canvas, Color::BLACK);
        assert_eq!(s.shape_count, 3);

        let calls = canvas.calls();
        assert_eq!(calls.len(), 4);
        assert!(matches!(calls[1], DrawCall::Point { color, .. } if color == Color::RED));
        assert!(matches!(calls[2], DrawCall::Triangles { color, .. } if color == Color::GREEN));
        assert!(matches!(calls[3], DrawCall::Point { diameter, .. } if diameter == 8.0));
    }

    // ── stats ─────────────────────────────────────────────────────────────

    #[test]
    fn fps_is_none_below_one_millisecond() {
        assert_eq!(stats(1, 0).fps(), None);
        assert_eq!(stats(1, 999).fps(), None);
    }

    #[test]
    fn fps_rounds_down_to_one_decimal() {
        // 1000 / 3 ms = 333.33..
        assert_eq!(stats(1, 3_000).fps(), Some(333.3));
        assert_eq!(stats(1, 16_000).fps(), Some(62.5));
    }

    #[test]
    fn duration_ms_is_floored() {
        assert_eq!(stats(0, 2_999).duration_ms(), 2);
    }

    #[test]
    fn display_format() {
        assert_eq!(stats(4, 16_000).to_string(), "shapes: 4 ms: 16 fps: 62.5");
        assert_eq!(stats(0, 200).to_string(), "shapes: 0 ms: 0 fps: -");
        assert_eq!(stats(2, 1_000).to_string(), "shapes: 2 ms: 1 fps: 1000");
    }

    // ── report_status ─────────────────────────────────────────────────────

    #[test]
    fn report_publishes_to_sink() {
        let mut lines: Vec<String> = Vec::new();
        report_status(Some(&mut lines), &stats(3, 0));
        assert_eq!(lines, ["shapes: 3 ms: 0 fps: -"]);
    }

    #[test]
    fn report_without_sink_is_a_no_op() {
        report_status::<Vec<String>>(None, &stats(3, 0));
    }

    #[test]
    fn string_sink_keeps_latest_line() {
        let mut line = String::new();
        report_status(Some(&mut line), &stats(1, 0));
        report_status(Some(&mut line), &stats(2, 0));
        assert_eq!(line, "shapes: 2 ms: 0 fps: -");
    }
}
