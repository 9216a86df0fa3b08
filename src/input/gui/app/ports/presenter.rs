use egui::Context as EguiContext;
use winit::window::Window;

use crate::core::data::frame_buffer::FrameBuffer;

pub trait GuiPresenterPort: Sized {
    fn new(window: &'static Window) -> Result<Self, pixels::Error>;
    fn present_frame(&mut self, frame: &FrameBuffer);
    fn render(&mut self, egui_output: egui::FullOutput, egui_ctx: &EguiContext) -> Result<(), pixels::Error>;
}
