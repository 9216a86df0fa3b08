mod adapters;
mod controllers;
mod core;
#[cfg(feature = "gui")]
mod input;
mod presenters;

pub use crate::adapters::pixel_format::copy_frame_to_rgba;
pub use crate::controllers::interactive::{
    EngineError, MandelbrotEngine, ParsePointerEventError, PointerEvent, RenderState,
    RenderStrategy,
};
pub use crate::controllers::ports::file_presenter::FilePresenterPort;
pub use crate::core::data::colour::Colour;
pub use crate::core::data::complex::Complex;
pub use crate::core::data::frame_buffer::{FrameBuffer, FrameSample, ScreenPosition};
pub use crate::core::data::pixel_size::{PixelSize, PixelSizeError};
pub use crate::core::data::point::Point;
pub use crate::core::data::view_state::{PlaneExtent, ViewState};
pub use crate::core::fractals::mandelbrot::errors::MandelbrotError;
pub use crate::core::fractals::mandelbrot::mandelbrot_config::MandelbrotConfig;
pub use crate::presenters::file::ppm::PpmFilePresenter;

#[cfg(feature = "gui")]
pub use crate::input::gui::commands::run_gui::RunGuiCommand;
#[cfg(feature = "gui")]
pub use crate::presenters::pixels::factory::PixelsPresenterFactory;
