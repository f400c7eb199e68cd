//! Windowed host built on winit.
//!
//! [`WindowHost`] implements winit's [`ApplicationHandler`]: window events
//! are translated into [`HostEvent`]s through the `orrery-input` adapters and
//! handed to the [`SimulationContext`]. Every redraw advances the
//! [`FrameTimer`] by wall-clock time and submits one frame. Drawing goes to a
//! [`RecordingBackend`]; a GPU backend plugs in at the same seam.

use std::sync::Arc;
use std::time::Duration;

use glam::Vec2;
use orrery_config::Config;
use orrery_input::winit_adapter::{key_input, scroll_lines};
use orrery_render::RecordingBackend;
use tracing::{debug, error, info};
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::error::EventLoopError;
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::window::{Window, WindowAttributes, WindowId};

use crate::{FrameTimer, HostEvent, SimulationContext};

/// Window title and inner size from the `window` config section.
pub fn window_attributes(config: &Config) -> WindowAttributes {
    WindowAttributes::default()
        .with_title(config.window.title.clone())
        .with_inner_size(LogicalSize::new(
            f64::from(config.window.width),
            f64::from(config.window.height),
        ))
}

/// Translates one window event. `cursor` is the last known pointer position,
/// since winit reports button presses without one.
///
/// Key releases and events the orrery ignores map to `None`.
pub fn translate(event: &WindowEvent, cursor: Vec2) -> Option<HostEvent> {
    match event {
        WindowEvent::CursorMoved { position, .. } => Some(HostEvent::PointerMoved {
            x: position.x as f32,
            y: position.y as f32,
        }),
        WindowEvent::MouseInput { state, button, .. } => Some(HostEvent::PointerButton {
            button: (*button).into(),
            state: (*state).into(),
            x: cursor.x,
            y: cursor.y,
        }),
        WindowEvent::MouseWheel { delta, .. } => Some(HostEvent::Scroll {
            lines: scroll_lines(*delta),
        }),
        WindowEvent::KeyboardInput { event, .. } if event.state == ElementState::Pressed => {
            key_input(&event.logical_key).map(HostEvent::Key)
        }
        WindowEvent::Resized(size) => Some(HostEvent::Resize {
            width: size.width,
            height: size.height,
        }),
        _ => None,
    }
}

/// Owns the window and drives the simulation from its event loop.
pub struct WindowHost {
    attributes: WindowAttributes,
    window: Option<Arc<Window>>,
    context: SimulationContext,
    timer: FrameTimer,
    backend: RecordingBackend,
}

impl WindowHost {
    pub fn new(config: &Config) -> Self {
        Self {
            attributes: window_attributes(config),
            window: None,
            context: SimulationContext::new(config),
            timer: FrameTimer::new(Duration::from_millis(config.clock.tick_interval_ms)),
            backend: RecordingBackend::new(),
        }
    }

    pub fn context(&self) -> &SimulationContext {
        &self.context
    }

    pub fn timer(&self) -> &FrameTimer {
        &self.timer
    }

    /// Draws of the most recent frame.
    pub fn backend(&self) -> &RecordingBackend {
        &self.backend
    }

    fn redraw(&mut self) {
        let context = &mut self.context;
        self.timer
            .advance_now(|| context.handle_event(HostEvent::Timer));
        self.backend.clear();
        self.context.render(&mut self.backend);
    }
}

impl ApplicationHandler for WindowHost {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        match event_loop.create_window(self.attributes.clone()) {
            Ok(window) => {
                let size = window.inner_size();
                info!(
                    "Window created: {}x{} (scale: {:.2})",
                    size.width,
                    size.height,
                    window.scale_factor()
                );
                self.context.resize(size.width, size.height);
                window.request_redraw();
                self.window = Some(Arc::new(window));
            }
            Err(e) => {
                error!("Window creation failed: {e}");
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                info!("Close requested, shutting down");
                event_loop.exit();
            }
            WindowEvent::RedrawRequested => {
                self.redraw();
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
            other => {
                if let Some(host_event) = translate(&other, self.context.pointer().position()) {
                    debug!(?host_event, "Window event");
                    self.context.handle_event(host_event);
                }
            }
        }
        if self.context.quit_requested() {
            event_loop.exit();
        }
    }
}

/// Opens the window and blocks until it closes or a quit command arrives.
/// Returns the host so the caller can report on the run.
pub fn run(config: &Config) -> Result<WindowHost, EventLoopError> {
    let event_loop = EventLoop::new()?;
    let mut host = WindowHost::new(config);
    event_loop.run_app(&mut host)?;
    Ok(host)
}

#[cfg(test)]
mod tests {
    use super::*;
    use orrery_input::{ButtonState, PointerButton};
    use winit::dpi::{PhysicalPosition, PhysicalSize};
    use winit::event::{DeviceId, MouseButton, MouseScrollDelta, TouchPhase};

    fn device() -> DeviceId {
        // SAFETY: the id is only compared, never passed back to the platform.
        unsafe { DeviceId::dummy() }
    }

    #[test]
    fn test_attributes_follow_window_config() {
        let mut config = Config::default();
        config.window.title = "Orrery test".to_string();
        let attributes = window_attributes(&config);
        assert_eq!(attributes.title, "Orrery test");
        assert_eq!(
            attributes.inner_size,
            Some(LogicalSize::new(1200.0, 800.0).into())
        );
    }

    #[test]
    fn test_button_uses_last_cursor_position() {
        let event = WindowEvent::MouseInput {
            device_id: device(),
            state: ElementState::Pressed,
            button: MouseButton::Left,
        };
        assert_eq!(
            translate(&event, Vec2::new(12.0, 34.0)),
            Some(HostEvent::PointerButton {
                button: PointerButton::Primary,
                state: ButtonState::Pressed,
                x: 12.0,
                y: 34.0,
            })
        );
    }

    #[test]
    fn test_cursor_wheel_and_resize() {
        let moved = WindowEvent::CursorMoved {
            device_id: device(),
            position: PhysicalPosition::new(5.5, 7.0),
        };
        assert_eq!(
            translate(&moved, Vec2::ZERO),
            Some(HostEvent::PointerMoved { x: 5.5, y: 7.0 })
        );

        let wheel = WindowEvent::MouseWheel {
            device_id: device(),
            delta: MouseScrollDelta::LineDelta(0.0, 2.0),
            phase: TouchPhase::Moved,
        };
        assert_eq!(
            translate(&wheel, Vec2::ZERO),
            Some(HostEvent::Scroll { lines: 2.0 })
        );

        let resized = WindowEvent::Resized(PhysicalSize::new(600, 400));
        assert_eq!(
            translate(&resized, Vec2::ZERO),
            Some(HostEvent::Resize {
                width: 600,
                height: 400,
            })
        );
    }

    #[test]
    fn test_ignored_events() {
        assert_eq!(translate(&WindowEvent::Focused(true), Vec2::ZERO), None);
        assert_eq!(translate(&WindowEvent::CloseRequested, Vec2::ZERO), None);
    }

    #[test]
    fn test_translated_events_drive_the_context() {
        let mut context = SimulationContext::new(&Config::default());
        let events = [
            WindowEvent::CursorMoved {
                device_id: device(),
                position: PhysicalPosition::new(600.0, 400.0),
            },
            WindowEvent::MouseInput {
                device_id: device(),
                state: ElementState::Pressed,
                button: MouseButton::Left,
            },
            WindowEvent::CursorMoved {
                device_id: device(),
                position: PhysicalPosition::new(620.0, 400.0),
            },
            WindowEvent::MouseInput {
                device_id: device(),
                state: ElementState::Released,
                button: MouseButton::Left,
            },
        ];
        for event in &events {
            if let Some(host_event) = translate(event, context.pointer().position()) {
                context.handle_event(host_event);
            }
        }
        assert_eq!(context.camera().yaw(), 10.0);
        assert!(!context.camera().is_dragging());
    }
}
