use crate::core::data::colour::Colour;
use crate::core::data::pixel_size::PixelSize;
use crate::core::data::point::Point;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ScreenPosition {
    pub x: f32,
    pub y: f32,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FrameSample {
    pub position: ScreenPosition,
    pub colour: Colour,
}

/// One coloured sample per pixel, stored row-major at `x + y * width`.
///
/// Positions are fixed at construction; only colours change between frames.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameBuffer {
    pixel_size: PixelSize,
    samples: Vec<FrameSample>,
}

impl FrameBuffer {
    #[must_use]
    pub fn new(pixel_size: PixelSize) -> Self {
        let width = pixel_size.width();
        let height = pixel_size.height();
        let mut samples = Vec::with_capacity(pixel_size.pixel_count());

        for y in 0..height {
            for x in 0..width {
                samples.push(FrameSample {
                    position: ScreenPosition {
                        x: x as f32,
                        y: y as f32,
                    },
                    colour: Colour::BLACK,
                });
            }
        }

        Self {
            pixel_size,
            samples,
        }
    }

    #[must_use]
    pub fn pixel_size(&self) -> PixelSize {
        self.pixel_size
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    #[must_use]
    pub fn samples(&self) -> &[FrameSample] {
        &self.samples
    }

    pub(crate) fn samples_mut(&mut self) -> &mut [FrameSample] {
        &mut self.samples
    }

    #[must_use]
    pub fn sample_at(&self, pixel: Point) -> Option<&FrameSample> {
        if !self.pixel_size.contains_point(pixel) {
            return None;
        }

        let index = pixel.x as usize + pixel.y as usize * self.pixel_size.width() as usize;
        self.samples.get(index)
    }

    /// Packs the colours as tightly packed RGB bytes, row-major.
    #[must_use]
    pub fn to_rgb_bytes(&self) -> Vec<u8> {
        let mut buffer = Vec::with_capacity(self.samples.len() * 3);

        for sample in &self.samples {
            buffer.push(sample.colour.r);
            buffer.push(sample.colour.g);
            buffer.push(sample.colour.b);
        }

        buffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_frame(width: u32, height: u32) -> FrameBuffer {
        FrameBuffer::new(PixelSize::new(width, height).unwrap())
    }

    #[test]
    fn test_new_creates_black_frame_with_one_sample_per_pixel() {
        let frame = create_frame(10, 5);

        assert_eq!(frame.len(), 50);
        assert!(!frame.is_empty());
        assert!(frame.samples().iter().all(|s| s.colour == Colour::BLACK));
    }

    #[test]
    fn test_positions_are_row_major() {
        let frame = create_frame(3, 2);
        let positions: Vec<(f32, f32)> = frame
            .samples()
            .iter()
            .map(|s| (s.position.x, s.position.y))
            .collect();

        assert_eq!(
            positions,
            vec![
                (0.0, 0.0),
                (1.0, 0.0),
                (2.0, 0.0),
                (0.0, 1.0),
                (1.0, 1.0),
                (2.0, 1.0)
            ]
        );
    }

    #[test]
    fn test_sample_at_uses_column_plus_row_times_width() {
        let mut frame = create_frame(4, 3);
        let red = Colour { r: 255, g: 0, b: 0 };
        frame.samples_mut()[1 + 2 * 4].colour = red;

        let sample = frame.sample_at(Point { x: 1, y: 2 }).unwrap();

        assert_eq!(sample.colour, red);
        assert_eq!(sample.position, ScreenPosition { x: 1.0, y: 2.0 });
    }

    #[test]
    fn test_sample_at_outside_bounds_is_none() {
        let frame = create_frame(4, 3);

        assert!(frame.sample_at(Point { x: 4, y: 0 }).is_none());
        assert!(frame.sample_at(Point { x: 0, y: 3 }).is_none());
        assert!(frame.sample_at(Point { x: -1, y: 0 }).is_none());
    }

    #[test]
    fn test_to_rgb_bytes() {
        let mut frame = create_frame(2, 1);
        frame.samples_mut()[0].colour = Colour { r: 1, g: 2, b: 3 };
        frame.samples_mut()[1].colour = Colour { r: 4, g: 5, b: 6 };

        assert_eq!(frame.to_rgb_bytes(), vec![1, 2, 3, 4, 5, 6]);
    }
}
