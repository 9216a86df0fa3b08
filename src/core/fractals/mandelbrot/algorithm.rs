use crate::core::actions::generate_frame::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;

/// Escape-time evaluator for `z ← z² + c` starting at `z = 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MandelbrotAlgorithm {
    max_iterations: u32,
    escape_radius_squared: f64,
}

impl FractalAlgorithm for MandelbrotAlgorithm {
    type Success = u32;

    /// Returns the 0-based step at which `|z|` first exceeds the escape
    /// radius, or `max_iterations` if it never does.
    fn compute(&self, c: Complex) -> Self::Success {
        let mut z = Complex::ZERO;

        for iteration in 0..self.max_iterations {
            z = z * z + c;

            // negated so that NaN magnitudes count as escaped
            if !(z.magnitude_squared() <= self.escape_radius_squared) {
                return iteration;
            }
        }

        self.max_iterations
    }
}

impl MandelbrotAlgorithm {
    pub fn new(max_iterations: u32, escape_radius: f64) -> Result<Self, MandelbrotError> {
        if max_iterations == 0 {
            return Err(MandelbrotError::ZeroMaxIterationsError);
        }

        if !escape_radius.is_finite() || escape_radius <= 0.0 {
            return Err(MandelbrotError::InvalidEscapeRadius { escape_radius });
        }

        Ok(Self {
            max_iterations,
            escape_radius_squared: escape_radius * escape_radius,
        })
    }
}
