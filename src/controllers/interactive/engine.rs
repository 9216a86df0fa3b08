use std::time::{Duration, Instant};

use tracing::{debug, info, trace};

use crate::controllers::interactive::errors::EngineError;
use crate::controllers::interactive::events::pointer::PointerEvent;
use crate::controllers::interactive::types::{RenderState, RenderStrategy};
use crate::core::actions::generate_frame::generate_frame::generate_frame;
use crate::core::actions::generate_frame::generate_frame_parallel_rayon::generate_frame_parallel_rayon;
use crate::core::data::complex::Complex;
use crate::core::data::frame_buffer::FrameBuffer;
use crate::core::data::pixel_size::PixelSize;
use crate::core::data::point::Point;
use crate::core::data::view_state::ViewState;
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
use crate::core::fractals::mandelbrot::colour_map::MandelbrotHsvGradient;
use crate::core::fractals::mandelbrot::mandelbrot_config::MandelbrotConfig;

const STATUS_TITLE: &str = "Mandelbrot Set";
const STATUS_INSTRUCTIONS: [&str; 2] = ["Left-click to Zoom in", "Right-click to Zoom out"];

/// Owns the view, the frame buffer and the two-state render cycle.
///
/// Every view mutation marks the frame stale; [`render`](Self::render)
/// recomputes it in one synchronous pass and is a no-op otherwise. All
/// mutation goes through `&mut self`, so navigation can never interleave
/// with an in-progress render.
#[derive(Debug)]
pub struct MandelbrotEngine {
    config: MandelbrotConfig,
    algorithm: MandelbrotAlgorithm,
    colour_map: MandelbrotHsvGradient,
    view: ViewState,
    frame: FrameBuffer,
    cursor: Complex,
    state: RenderState,
    strategy: RenderStrategy,
    frames_rendered: u64,
    last_render_duration: Option<Duration>,
}

impl MandelbrotEngine {
    pub fn new(width: u32, height: u32) -> Result<Self, EngineError> {
        Self::with_config(width, height, MandelbrotConfig::default())
    }

    pub fn with_config(
        width: u32,
        height: u32,
        config: MandelbrotConfig,
    ) -> Result<Self, EngineError> {
        let pixel_size = PixelSize::new(width, height)?;
        config.validate()?;

        Ok(Self {
            config,
            algorithm: config.build_algorithm()?,
            colour_map: config.build_colour_map(),
            view: ViewState::new(pixel_size, &config),
            frame: FrameBuffer::new(pixel_size),
            cursor: Complex::ZERO,
            state: RenderState::Calculating,
            strategy: RenderStrategy::default(),
            frames_rendered: 0,
            last_render_duration: None,
        })
    }

    pub fn zoom_in(&mut self) {
        self.view.zoom_in();
        self.state = RenderState::Calculating;
        debug!(zoom_level = self.view.zoom_level(), "zoomed in");
    }

    pub fn zoom_out(&mut self) {
        self.view.zoom_out();
        self.state = RenderState::Calculating;
        debug!(zoom_level = self.view.zoom_level(), "zoomed out");
    }

    pub fn recenter(&mut self, pixel: Point) {
        self.view.recenter(pixel);
        self.state = RenderState::Calculating;
        debug!(center = %self.view.center(), "recentered");
    }

    /// Updates the cursor readout. Never invalidates the frame.
    pub fn set_cursor(&mut self, pixel: Point) {
        let cursor = self.view.pixel_to_plane(pixel);

        if cursor.is_finite() {
            self.cursor = cursor;
        }
        trace!(cursor = %self.cursor, "cursor moved");
    }

    pub fn handle_pointer(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::LeftClick(pixel) => {
                self.zoom_in();
                self.recenter(pixel);
            }
            PointerEvent::RightClick(pixel) => {
                self.zoom_out();
                self.recenter(pixel);
            }
            PointerEvent::Moved(pixel) => self.set_cursor(pixel),
        }
    }

    /// Recomputes the whole frame if the view changed since the last pass.
    ///
    /// Returns `true` when a new frame was produced.
    pub fn render(&mut self) -> bool {
        if self.state == RenderState::Displaying {
            return false;
        }

        let start = Instant::now();

        match self.strategy {
            RenderStrategy::Serial => {
                generate_frame(&self.view, &self.algorithm, &self.colour_map, &mut self.frame);
            }
            RenderStrategy::ParallelRayon => {
                generate_frame_parallel_rayon(
                    &self.view,
                    &self.algorithm,
                    &self.colour_map,
                    &mut self.frame,
                );
            }
        }

        let render_duration = start.elapsed();
        self.frames_rendered += 1;
        self.last_render_duration = Some(render_duration);
        self.state = RenderState::Displaying;

        info!(
            frame = self.frames_rendered,
            pixels = self.frame.len(),
            strategy = ?self.strategy,
            elapsed_ms = render_duration.as_secs_f64() * 1000.0,
            "frame rendered"
        );

        true
    }

    #[must_use]
    pub fn frame_buffer(&self) -> &FrameBuffer {
        &self.frame
    }

    /// Title, center, cursor and control hints, one per line.
    #[must_use]
    pub fn status_text(&self) -> String {
        let mut lines = vec![
            STATUS_TITLE.to_string(),
            format!("Center: {}", self.view.center()),
            format!("Cursor: {}", self.cursor),
        ];
        lines.extend(STATUS_INSTRUCTIONS.iter().map(|line| line.to_string()));

        lines.join("\n")
    }

    #[must_use]
    pub fn state(&self) -> RenderState {
        self.state
    }

    #[must_use]
    pub fn view(&self) -> &ViewState {
        &self.view
    }

    #[must_use]
    pub fn cursor(&self) -> Complex {
        self.cursor
    }

    #[must_use]
    pub fn config(&self) -> &MandelbrotConfig {
        &self.config
    }

    #[must_use]
    pub fn render_strategy(&self) -> RenderStrategy {
        self.strategy
    }

    /// Changing strategy does not invalidate the frame; both produce
    /// identical output.
    pub fn set_render_strategy(&mut self, strategy: RenderStrategy) {
        self.strategy = strategy;
    }

    #[must_use]
    pub fn frames_rendered(&self) -> u64 {
        self.frames_rendered
    }

    #[must_use]
    pub fn last_render_duration(&self) -> Option<Duration> {
        self.last_render_duration
    }
}
