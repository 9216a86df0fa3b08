use rayon::prelude::*;

use crate::core::actions::generate_frame::ports::colour_map::ColourMap;
use crate::core::actions::generate_frame::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::frame_buffer::FrameBuffer;
use crate::core::data::point::Point;
use crate::core::data::view_state::ViewState;

/// Recolours `frame` using rayon's work-stealing pool.
///
/// Each row is handed to a worker as a disjoint mutable slice, so no
/// synchronisation is needed and the result is identical to
/// [`generate_frame`](super::generate_frame::generate_frame).
pub fn generate_frame_parallel_rayon<Alg, CMap>(
    view: &ViewState,
    algorithm: &Alg,
    colour_map: &CMap,
    frame: &mut FrameBuffer,
) where
    Alg: FractalAlgorithm + Sync,
    CMap: ColourMap<Alg::Success> + Sync,
{
    let width = frame.pixel_size().width() as usize;

    frame
        .samples_mut()
        .par_chunks_mut(width)
        .enumerate()
        .for_each(|(y, row)| {
            for (x, sample) in row.iter_mut().enumerate() {
                let c = view.pixel_to_plane(Point {
                    x: x as i32,
                    y: y as i32,
                });
                sample.colour = colour_map.map(algorithm.compute(c));
            }
        });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::generate_frame::generate_frame::generate_frame;
    use crate::core::data::colour::Colour;
    use crate::core::data::complex::Complex;
    use crate::core::data::pixel_size::PixelSize;
    use crate::core::fractals::mandelbrot::mandelbrot_config::MandelbrotConfig;

    #[derive(Debug)]
    struct StubAlgorithm {}

    impl FractalAlgorithm for StubAlgorithm {
        type Success = u8;

        fn compute(&self, c: Complex) -> Self::Success {
            ((c.real + 2.0) * 40.0 + (c.imag + 2.0) * 20.0) as u8
        }
    }

    #[derive(Debug)]
    struct StubGreyColourMap {}

    impl ColourMap<u8> for StubGreyColourMap {
        fn map(&self, value: u8) -> Colour {
            Colour {
                r: value,
                g: value,
                b: value,
            }
        }
    }

    fn render_both(width: u32, height: u32) -> (FrameBuffer, FrameBuffer) {
        let pixel_size = PixelSize::new(width, height).unwrap();
        let view = ViewState::new(pixel_size, &MandelbrotConfig::default());
        let mut serial = FrameBuffer::new(pixel_size);
        let mut parallel = FrameBuffer::new(pixel_size);

        generate_frame(&view, &StubAlgorithm {}, &StubGreyColourMap {}, &mut serial);
        generate_frame_parallel_rayon(&view, &StubAlgorithm {}, &StubGreyColourMap {}, &mut parallel);

        (serial, parallel)
    }

    #[test]
    fn test_rayon_generates_same_results_as_serial() {
        let (serial, parallel) = render_both(11, 9);

        assert_eq!(parallel, serial);
    }

    #[test]
    fn test_rayon_with_single_pixel() {
        let (serial, parallel) = render_both(1, 1);

        assert_eq!(parallel, serial);
    }

    #[test]
    fn test_rayon_with_single_row_and_single_column() {
        let (serial_row, parallel_row) = render_both(64, 1);
        let (serial_column, parallel_column) = render_both(1, 64);

        assert_eq!(parallel_row, serial_row);
        assert_eq!(parallel_column, serial_column);
    }

    #[test]
    fn test_rayon_with_large_frame() {
        let (serial, parallel) = render_both(200, 150);

        assert_eq!(parallel, serial);
    }

    #[test]
    fn test_rayon_with_mandelbrot_algorithm() {
        let config = MandelbrotConfig::default();
        let pixel_size = PixelSize::new(64, 48).unwrap();
        let view = ViewState::new(pixel_size, &config);
        let algorithm = config.build_algorithm().unwrap();
        let colour_map = config.build_colour_map();
        let mut serial = FrameBuffer::new(pixel_size);
        let mut parallel = FrameBuffer::new(pixel_size);

        generate_frame(&view, &algorithm, &colour_map, &mut serial);
        generate_frame_parallel_rayon(&view, &algorithm, &colour_map, &mut parallel);

        assert_eq!(parallel, serial);
    }
}
