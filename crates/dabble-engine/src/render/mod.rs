//! Rendering: the [`Canvas`] contract and the full-redraw render loop.
//!
//! Shapes draw themselves against a `Canvas` in NDC (`[-1, 1]`, +Y up).
//! [`GpuCanvas`] batches those calls for wgpu; [`RecordingCanvas`] keeps
//! them for inspection.

mod canvas;
mod ctx;
mod gpu_canvas;
pub mod pass;
mod record;

pub use canvas::Canvas;
pub use ctx::{RenderCtx, RenderTarget};
pub use gpu_canvas::GpuCanvas;
pub use pass::{render_all, report_status, RenderStats, StatusSink};
pub use record::{DrawCall, RecordingCanvas};
