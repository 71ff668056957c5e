use dabble_engine::coords::{SurfaceGeometry, Vec2};
use dabble_engine::core::{App, AppControl, FrameCtx};
use dabble_engine::input::{
    InputEvent, KeyState, MouseButton, MouseButtonState, PointerButtonEvent, PointerMoveEvent,
};
use dabble_engine::render::GpuCanvas;
use dabble_engine::sketch::Sketchpad;

use crate::controls::{action_for, Action};
use crate::status::StatusLine;

pub const TITLE: &str = "dabble";

/// Drives a [`Sketchpad`] from window input and presents its canvas.
pub struct StudioApp {
    pad: Sketchpad<GpuCanvas, StatusLine>,
    started: bool,
    /// Left button held; moves while held keep placing shapes.
    drawing: bool,
}

impl StudioApp {
    pub fn new() -> Self {
        Self {
            pad: Sketchpad::new(GpuCanvas::new(), Some(StatusLine::default())),
            started: false,
            drawing: false,
        }
    }

    fn handle_event(&mut self, ev: &InputEvent, surface: SurfaceGeometry) -> AppControl {
        let placed = match ev {
            InputEvent::PointerButton(PointerButtonEvent {
                button: MouseButton::Left,
                state,
                position,
            }) => match state {
                MouseButtonState::Pressed => {
                    self.drawing = true;
                    match position {
                        Some((x, y)) => self.pad.pointer_down(Vec2::new(*x, *y), surface),
                        None => Ok(()),
                    }
                }
                MouseButtonState::Released => {
                    self.drawing = false;
                    Ok(())
                }
            },

            InputEvent::PointerMoved(PointerMoveEvent { x, y }) if self.drawing => {
                self.pad.pointer_drag(Vec2::new(*x, *y), surface)
            }

            InputEvent::Focused(false) => {
                self.drawing = false;
                Ok(())
            }

            InputEvent::Key { key, state: KeyState::Pressed, .. } => {
                match action_for(*key) {
                    Some(Action::Style(cmd)) => self.pad.apply(cmd),
                    Some(Action::Clear) => self.pad.clear(),
                    Some(Action::StampBee) => self.pad.stamp_bee(),
                    Some(Action::Quit) => return AppControl::Exit,
                    None => {}
                }
                Ok(())
            }

            _ => Ok(()),
        };

        if let Err(e) = placed {
            log::warn!("shape not placed: {e}");
        }
        AppControl::Continue
    }
}

impl Default for StudioApp {
    fn default() -> Self {
        Self::new()
    }
}

impl App for StudioApp {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        if !self.started {
            self.pad.start();
            self.started = true;
        }

        let surface = ctx.window.surface_geometry();
        for ev in &ctx.input_frame.events {
            if self.handle_event(ev, surface) == AppControl::Exit {
                ctx.runtime.exit();
                return AppControl::Continue;
            }
        }

        if let Some(status) = self.pad.status_mut().and_then(StatusLine::take) {
            ctx.window.set_title(&format!("{TITLE}  |  {status}"));
        }

        let clear = self.pad.canvas().clear_color();
        let canvas = self.pad.canvas_mut();
        ctx.render(clear, |rctx, target| canvas.present(rctx, target))
    }
}
