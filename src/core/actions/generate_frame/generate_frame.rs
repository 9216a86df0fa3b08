use crate::core::actions::generate_frame::ports::colour_map::ColourMap;
use crate::core::actions::generate_frame::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::frame_buffer::FrameBuffer;
use crate::core::data::point::Point;
use crate::core::data::view_state::ViewState;

/// Recolours every sample of `frame` in row-major order on the calling thread.
pub fn generate_frame<Alg, CMap>(
    view: &ViewState,
    algorithm: &Alg,
    colour_map: &CMap,
    frame: &mut FrameBuffer,
) where
    Alg: FractalAlgorithm,
    CMap: ColourMap<Alg::Success>,
{
    let width = frame.pixel_size().width() as usize;

    for (index, sample) in frame.samples_mut().iter_mut().enumerate() {
        let pixel = Point {
            x: (index % width) as i32,
            y: (index / width) as i32,
        };

        let c = view.pixel_to_plane(pixel);
        sample.colour = colour_map.map(algorithm.compute(c));
    }
}
