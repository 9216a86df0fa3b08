use egui::Context;
use egui_winit::State as EguiWinitState;
use tracing::error;
use winit::{
    event::{ElementState, Event, KeyEvent, WindowEvent},
    event_loop::EventLoop,
    keyboard::{KeyCode, PhysicalKey},
    window::Window,
};

use crate::controllers::interactive::{MandelbrotEngine, RenderState};
use crate::input::gui::app::pointer_input::PointerInputState;
use crate::input::gui::app::ports::presenter::GuiPresenterPort;

pub struct GuiApp<T: GuiPresenterPort> {
    window: &'static Window,
    presenter: T,
    engine: MandelbrotEngine,
    pointer_input: PointerInputState,
    redraw_pending: bool,
    egui_ctx: Context,
    egui_state: EguiWinitState,
}

impl<T: GuiPresenterPort> GuiApp<T> {
    pub fn new(
        window: &'static Window,
        event_loop: &EventLoop<()>,
        presenter: T,
        engine: MandelbrotEngine,
    ) -> Self {
        let egui_ctx = Context::default();

        let egui_state = EguiWinitState::new(
            egui_ctx.clone(),
            egui_ctx.viewport_id(),
            event_loop,
            Some(window.scale_factor() as f32),
            None, // max_texture_side, use default
        );

        Self {
            window,
            presenter,
            engine,
            pointer_input: PointerInputState::default(),
            redraw_pending: true,
            egui_ctx,
            egui_state,
        }
    }

    /// Runs the event loop until the window is closed or Escape is pressed.
    pub fn run(mut self, event_loop: EventLoop<()>) -> Result<(), winit::error::EventLoopError> {
        event_loop.run(move |event, elwt| match event {
            Event::WindowEvent {
                ref event,
                window_id,
            } if window_id == self.window.id() => {
                if self.handle_window_event(event) {
                    elwt.exit();
                }
            }
            Event::AboutToWait => {
                if self.redraw_pending || self.engine.state() == RenderState::Calculating {
                    self.window.request_redraw();
                }
            }
            _ => {}
        })
    }

    /// Returns true when the application should exit.
    fn handle_window_event(&mut self, event: &WindowEvent) -> bool {
        let response = self.egui_state.on_window_event(self.window, event);
        if response.repaint {
            self.redraw_pending = true;
        }

        match event {
            WindowEvent::CloseRequested => return true,
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        state: ElementState::Pressed,
                        ..
                    },
                ..
            } => return true,
            WindowEvent::CursorMoved { position, .. } => {
                let pointer_event = self.pointer_input.handle_cursor_moved(position.x, position.y);
                self.engine.handle_pointer(pointer_event);
                self.redraw_pending = true;
            }
            WindowEvent::CursorLeft { .. } => {
                self.pointer_input.reset();
            }
            WindowEvent::MouseInput { state, button, .. } if !response.consumed => {
                if let Some(pointer_event) = self.pointer_input.handle_mouse_input(*button, *state)
                {
                    self.engine.handle_pointer(pointer_event);
                }
            }
            WindowEvent::RedrawRequested => {
                if let Err(e) = self.redraw() {
                    error!("render error: {e}");
                    return true;
                }
            }
            _ => {}
        }

        false
    }

    fn redraw(&mut self) -> Result<(), pixels::Error> {
        self.redraw_pending = false;

        if self.engine.render() {
            self.presenter.present_frame(self.engine.frame_buffer());
        }

        let mut egui_output = self.update_ui();
        let platform_output = std::mem::take(&mut egui_output.platform_output);
        self.egui_state
            .handle_platform_output(self.window, platform_output);

        if egui_output
            .viewport_output
            .values()
            .any(|v| v.repaint_delay.is_zero())
        {
            self.redraw_pending = true;
        }

        self.presenter.render(egui_output, &self.egui_ctx)
    }

    fn update_ui(&mut self) -> egui::FullOutput {
        let raw_input = self.egui_state.take_egui_input(self.window);
        let status_text = self.engine.status_text();
        let last_render_duration = self.engine.last_render_duration();

        self.egui_ctx.run(raw_input, |ctx| {
            egui::Window::new("Status")
                .default_pos([10.0, 10.0])
                .resizable(false)
                .show(ctx, |ui| {
                    for line in status_text.lines() {
                        ui.label(line);
                    }

                    if let Some(render_duration) = last_render_duration {
                        ui.separator();
                        ui.label(format!("Last render: {} ms", render_duration.as_millis()));
                    }
                });
        })
    }
}
