use crate::core::data::complex::Complex;

/// Axis-aligned region of the complex plane described by its center and extent.
///
/// Extents are not validated: at extreme zoom levels they may underflow to
/// zero, which collapses the region to its center rather than failing.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ComplexRect {
    center: Complex,
    width: f64,
    height: f64,
}

impl ComplexRect {
    #[must_use]
    pub fn centered_on(center: Complex, width: f64, height: f64) -> Self {
        Self {
            center,
            width,
            height,
        }
    }

    #[must_use]
    pub fn real_min(&self) -> f64 {
        self.center.real - self.width / 2.0
    }

    #[must_use]
    pub fn real_max(&self) -> f64 {
        self.center.real + self.width / 2.0
    }

    #[must_use]
    pub fn imag_min(&self) -> f64 {
        self.center.imag - self.height / 2.0
    }

    #[must_use]
    pub fn imag_max(&self) -> f64 {
        self.center.imag + self.height / 2.0
    }
}
