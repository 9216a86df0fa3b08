use crate::core::data::complex::Complex;

/// Evaluates a fractal at a single point of the complex plane.
pub trait FractalAlgorithm {
    type Success;

    fn compute(&self, c: Complex) -> Self::Success;
}
