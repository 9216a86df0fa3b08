use crate::core::actions::generate_frame::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::util::hsv_to_rgb::hsv_to_rgb;

const SATURATION: f64 = 0.6;

/// Sweeps hue once around the wheel while value fades towards black.
/// Counts at or beyond `max_iterations` are treated as in-set and drawn black.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MandelbrotHsvGradient {
    max_iterations: u32,
}

impl ColourMap<u32> for MandelbrotHsvGradient {
    fn map(&self, iterations: u32) -> Colour {
        if iterations >= self.max_iterations {
            return Colour::BLACK;
        }

        let t = iterations as f64 / self.max_iterations as f64;

        hsv_to_rgb(360.0 * t, SATURATION, 1.0 - t)
    }
}

impl MandelbrotHsvGradient {
    #[must_use]
    pub fn new(max_iterations: u32) -> Self {
        Self { max_iterations }
    }
}
