//! Pixel format conversion helpers for presentation adapters.

use crate::core::data::frame_buffer::FrameBuffer;

/// Copies frame colours into an RGBA surface, setting alpha to 255.
///
/// # Panics
/// Panics if `dst.len()` is not exactly four bytes per frame sample.
pub fn copy_frame_to_rgba(frame: &FrameBuffer, dst: &mut [u8]) {
    let expected_dst_len = frame.len() * 4;
    assert_eq!(
        dst.len(),
        expected_dst_len,
        "dst length {} does not match expected {}",
        dst.len(),
        expected_dst_len
    );

    for (sample, dst_pixel) in frame.samples().iter().zip(dst.chunks_exact_mut(4)) {
        dst_pixel[0] = sample.colour.r;
        dst_pixel[1] = sample.colour.g;
        dst_pixel[2] = sample.colour.b;
        dst_pixel[3] = 255;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::colour::Colour;
    use crate::core::data::pixel_size::PixelSize;

    #[test]
    fn test_copy_frame_to_rgba_known_values() {
        let mut frame = FrameBuffer::new(PixelSize::new(2, 2).unwrap());
        let colours = [
            Colour { r: 255, g: 0, b: 0 },
            Colour { r: 0, g: 255, b: 0 },
            Colour { r: 0, g: 0, b: 255 },
            Colour {
                r: 255,
                g: 255,
                b: 255,
            },
        ];
        for (sample, colour) in frame.samples_mut().iter_mut().zip(colours) {
            sample.colour = colour;
        }
        let mut dst = vec![0; 16];

        copy_frame_to_rgba(&frame, &mut dst);

        assert_eq!(
            dst,
            vec![
                255, 0, 0, 255, 0, 255, 0, 255, 0, 0, 255, 255, 255, 255, 255, 255
            ]
        );
    }

    #[test]
    fn test_copy_frame_to_rgba_overwrites_alpha() {
        let frame = FrameBuffer::new(PixelSize::new(1, 1).unwrap());
        let mut dst = vec![9, 9, 9, 9];

        copy_frame_to_rgba(&frame, &mut dst);

        assert_eq!(dst, vec![0, 0, 0, 255]);
    }

    #[test]
    #[should_panic(expected = "does not match expected")]
    fn test_copy_frame_to_rgba_rejects_wrong_size() {
        let frame = FrameBuffer::new(PixelSize::new(2, 1).unwrap());
        let mut dst = vec![0; 4];

        copy_frame_to_rgba(&frame, &mut dst);
    }
}
