//! GUI input adapter for interactive Mandelbrot exploration.
//!
//! Uses winit for the window and input, pixels for the framebuffer and egui
//! for the status overlay.

pub mod app;
pub mod commands;
