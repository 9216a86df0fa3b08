//! Interactive engine for exploring the Mandelbrot set.
//!
//! The engine owns the view and frame buffer and decides when a frame must be
//! recomputed. Input adapters translate device events into [`PointerEvent`]s
//! and presentation adapters read the finished [`FrameBuffer`] back out.
//!
//! [`FrameBuffer`]: crate::core::data::frame_buffer::FrameBuffer

mod engine;
pub mod errors;
pub mod events;
mod types;

pub use engine::MandelbrotEngine;
pub use errors::EngineError;
pub use events::pointer::{ParsePointerEventError, PointerEvent};
pub use types::{RenderState, RenderStrategy};
