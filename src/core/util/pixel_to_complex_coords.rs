use crate::core::data::complex::Complex;
use crate::core::data::complex_rect::ComplexRect;
use crate::core::data::pixel_size::PixelSize;
use crate::core::data::point::Point;

/// Maps a pixel onto the complex plane region covered by `pixel_size`.
///
/// Column 0 maps to `real_min` and column `width` to `real_max`. Rows are
/// inverted: row 0 maps to `imag_max` and row `height` to `imag_min`.
/// Total over all integer pixels; points outside the viewport extrapolate
/// linearly.
#[must_use]
pub fn pixel_to_complex_coords(
    pixel_position: Point,
    pixel_size: PixelSize,
    complex_rect: ComplexRect,
) -> Complex {
    let width = pixel_size.width() as f64;
    let height = pixel_size.height() as f64;
    let x = pixel_position.x as f64;
    let y = pixel_position.y as f64;

    let real_min = complex_rect.real_min();
    let imag_min = complex_rect.imag_min();

    let real = (x / width) * (complex_rect.real_max() - real_min) + real_min;
    let imag = ((y - height) / (0.0 - height)) * (complex_rect.imag_max() - imag_min) + imag_min;

    Complex { real, imag }
}
