// File: crates/bench-plots/src/window.rs
// Summary: Native window presenter that blits rendered frames via winit + softbuffer.

use std::num::NonZeroU32;

use chart_core::{Chart, Frame, PresentError, Presenter};
use winit::event::{ElementState, Event, KeyboardInput, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::platform::run_return::EventLoopExtRunReturn;
use winit::window::WindowBuilder;

/// Shows each chart in its own window and waits until it is closed or a key is pressed.
/// winit allows one event loop per process, so it lives for the whole run.
pub struct WindowPresenter {
    event_loop: EventLoop<()>,
}

fn backend<E: std::fmt::Display>(e: E) -> PresentError {
    PresentError::Backend(e.to_string())
}

impl WindowPresenter {
    pub fn new() -> Result<Self, PresentError> {
        if !crate::presenter::display_available() {
            return Err(PresentError::Unavailable("neither DISPLAY nor WAYLAND_DISPLAY is set".into()));
        }
        // EventLoop::new panics instead of returning an error when no backend connects.
        let event_loop = std::panic::catch_unwind(EventLoop::new)
            .map_err(|_| PresentError::Unavailable("could not connect to the display server".into()))?;
        Ok(Self { event_loop })
    }
}

impl Presenter for WindowPresenter {
    fn present(&mut self, chart: &Chart, frame: &Frame) -> Result<(), PresentError> {
        let (Some(w), Some(h)) = (NonZeroU32::new(frame.width), NonZeroU32::new(frame.height)) else {
            return Err(PresentError::Backend("empty frame".into()));
        };

        let window = WindowBuilder::new()
            .with_title(chart.display_name())
            .with_inner_size(winit::dpi::PhysicalSize::new(frame.width, frame.height))
            .with_resizable(false)
            .build(&self.event_loop)
            .map_err(backend)?;

        let context = unsafe { softbuffer::Context::new(&window) }.map_err(backend)?;
        let mut surface = unsafe { softbuffer::Surface::new(&context, &window) }.map_err(backend)?;

        let pixels = frame.to_xrgb();
        let id = window.id();
        let mut failure = None;

        tracing::info!(chart = %chart.display_name(), "showing chart; close the window or press a key to continue");
        self.event_loop.run_return(|event, _, cf| {
            *cf = ControlFlow::Wait;
            match event {
                Event::WindowEvent { event, window_id } if window_id == id => match event {
                    WindowEvent::CloseRequested
                    | WindowEvent::KeyboardInput {
                        input: KeyboardInput { state: ElementState::Pressed, .. },
                        ..
                    } => *cf = ControlFlow::Exit,
                    _ => {}
                },
                Event::RedrawRequested(window_id) if window_id == id => {
                    if let Err(e) = blit(&mut surface, w, h, &pixels) {
                        failure = Some(e);
                        *cf = ControlFlow::Exit;
                    }
                }
                _ => {}
            }
        });

        match failure {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

fn blit(surface: &mut softbuffer::Surface, w: NonZeroU32, h: NonZeroU32, pixels: &[u32]) -> Result<(), PresentError> {
    surface.resize(w, h).map_err(backend)?;
    let mut buffer = surface.buffer_mut().map_err(backend)?;
    let n = buffer.len().min(pixels.len());
    buffer[..n].copy_from_slice(&pixels[..n]);
    buffer.present().map_err(backend)
}
