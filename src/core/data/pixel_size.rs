use crate::core::data::point::Point;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PixelSizeError {
    InvalidSize { width: u32, height: u32 },
}

impl fmt::Display for PixelSizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { width, height } => {
                write!(f, "pixel size must be positive: {}x{}", width, height)
            }
        }
    }
}

impl Error for PixelSizeError {}

/// Dimensions of the viewport in pixels. Fixed for the lifetime of a view.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PixelSize {
    width: u32,
    height: u32,
}

impl PixelSize {
    pub fn new(width: u32, height: u32) -> Result<Self, PixelSizeError> {
        if width == 0 || height == 0 {
            return Err(PixelSizeError::InvalidSize { width, height });
        }

        Ok(Self { width, height })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Height over width.
    #[must_use]
    pub fn aspect_ratio(&self) -> f64 {
        self.height as f64 / self.width as f64
    }

    #[must_use]
    pub fn contains_point(&self, point: Point) -> bool {
        point.x >= 0
            && point.y >= 0
            && (point.x as i64) < self.width as i64
            && (point.y as i64) < self.height as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixel_size_new_valid() {
        let size = PixelSize::new(800, 600).unwrap();

        assert_eq!(size.width(), 800);
        assert_eq!(size.height(), 600);
        assert_eq!(size.pixel_count(), 480_000);
    }

    #[test]
    fn test_pixel_size_rejects_zero_dimensions() {
        assert_eq!(
            PixelSize::new(0, 10),
            Err(PixelSizeError::InvalidSize {
                width: 0,
                height: 10
            })
        );
        assert_eq!(
            PixelSize::new(10, 0),
            Err(PixelSizeError::InvalidSize {
                width: 10,
                height: 0
            })
        );
        assert!(PixelSize::new(1, 1).is_ok());
    }

    #[test]
    fn test_aspect_ratio_is_height_over_width() {
        assert_eq!(PixelSize::new(800, 600).unwrap().aspect_ratio(), 0.75);
        assert_eq!(PixelSize::new(100, 200).unwrap().aspect_ratio(), 2.0);
    }

    #[test]
    fn test_contains_point() {
        let size = PixelSize::new(10, 5).unwrap();

        assert!(size.contains_point(Point { x: 0, y: 0 }));
        assert!(size.contains_point(Point { x: 9, y: 4 }));
        assert!(!size.contains_point(Point { x: 10, y: 4 }));
        assert!(!size.contains_point(Point { x: 9, y: 5 }));
        assert!(!size.contains_point(Point { x: -1, y: 0 }));
    }

    #[test]
    fn test_error_display() {
        let err = PixelSize::new(0, 0).unwrap_err();

        assert_eq!(err.to_string(), "pixel size must be positive: 0x0");
    }
}
