use crate::core::fractals::mandelbrot::{
    algorithm::MandelbrotAlgorithm, colour_map::MandelbrotHsvGradient, errors::MandelbrotError,
};

pub const DEFAULT_MAX_ITERATIONS: u32 = 64;
pub const DEFAULT_ESCAPE_RADIUS: f64 = 2.0;
pub const DEFAULT_BASE_WIDTH: f64 = 4.0;
pub const DEFAULT_BASE_HEIGHT: f64 = 4.0;
pub const DEFAULT_BASE_ZOOM: f64 = 0.5;

/// Immutable rendering constants, fixed when an engine is built.
///
/// The plane extent at zoom level `z` is
/// `(base_width · base_zoom^z, base_height · aspect_ratio · base_zoom^z)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MandelbrotConfig {
    pub max_iterations: u32,
    pub escape_radius: f64,
    pub base_width: f64,
    pub base_height: f64,
    pub base_zoom: f64,
}

impl Default for MandelbrotConfig {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
            escape_radius: DEFAULT_ESCAPE_RADIUS,
            base_width: DEFAULT_BASE_WIDTH,
            base_height: DEFAULT_BASE_HEIGHT,
            base_zoom: DEFAULT_BASE_ZOOM,
        }
    }
}

fn is_positive_finite(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

impl MandelbrotConfig {
    pub fn validate(&self) -> Result<(), MandelbrotError> {
        if self.max_iterations == 0 {
            return Err(MandelbrotError::ZeroMaxIterationsError);
        }

        if !is_positive_finite(self.escape_radius) {
            return Err(MandelbrotError::InvalidEscapeRadius {
                escape_radius: self.escape_radius,
            });
        }

        if !is_positive_finite(self.base_width) || !is_positive_finite(self.base_height) {
            return Err(MandelbrotError::InvalidBaseExtent {
                width: self.base_width,
                height: self.base_height,
            });
        }

        if !is_positive_finite(self.base_zoom) {
            return Err(MandelbrotError::InvalidBaseZoom {
                base_zoom: self.base_zoom,
            });
        }

        Ok(())
    }

    pub(crate) fn build_algorithm(&self) -> Result<MandelbrotAlgorithm, MandelbrotError> {
        MandelbrotAlgorithm::new(self.max_iterations, self.escape_radius)
    }

    pub(crate) fn build_colour_map(&self) -> MandelbrotHsvGradient {
        MandelbrotHsvGradient::new(self.max_iterations)
    }
}
