use crate::core::data::complex::Complex;
use crate::core::data::complex_rect::ComplexRect;
use crate::core::data::pixel_size::PixelSize;
use crate::core::data::point::Point;
use crate::core::fractals::mandelbrot::mandelbrot_config::MandelbrotConfig;
use crate::core::util::pixel_to_complex_coords::pixel_to_complex_coords;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PlaneExtent {
    pub width: f64,
    pub height: f64,
}

/// The region of the complex plane currently mapped onto the viewport.
///
/// The extent is always derived from the zoom level, never accumulated,
/// so zooming in and back out restores it exactly.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    pixel_size: PixelSize,
    center: Complex,
    extent: PlaneExtent,
    zoom_level: i32,
    base_width: f64,
    base_height: f64,
    base_zoom: f64,
}

impl ViewState {
    #[must_use]
    pub fn new(pixel_size: PixelSize, config: &MandelbrotConfig) -> Self {
        let mut view = Self {
            pixel_size,
            center: Complex::ZERO,
            extent: PlaneExtent {
                width: config.base_width,
                height: config.base_height,
            },
            zoom_level: 0,
            base_width: config.base_width,
            base_height: config.base_height,
            base_zoom: config.base_zoom,
        };
        view.update_extent();
        view
    }

    #[must_use]
    pub fn pixel_size(&self) -> PixelSize {
        self.pixel_size
    }

    #[must_use]
    pub fn aspect_ratio(&self) -> f64 {
        self.pixel_size.aspect_ratio()
    }

    #[must_use]
    pub fn center(&self) -> Complex {
        self.center
    }

    #[must_use]
    pub fn extent(&self) -> PlaneExtent {
        self.extent
    }

    #[must_use]
    pub fn zoom_level(&self) -> i32 {
        self.zoom_level
    }

    #[must_use]
    pub fn plane_rect(&self) -> ComplexRect {
        ComplexRect::centered_on(self.center, self.extent.width, self.extent.height)
    }

    #[must_use]
    pub fn pixel_to_plane(&self, pixel: Point) -> Complex {
        pixel_to_complex_coords(pixel, self.pixel_size, self.plane_rect())
    }

    pub fn zoom_in(&mut self) {
        self.zoom_level = self.zoom_level.saturating_add(1);
        self.update_extent();
    }

    pub fn zoom_out(&mut self) {
        self.zoom_level = self.zoom_level.saturating_sub(1);
        self.update_extent();
    }

    /// Moves the center to the plane point under `pixel`. A non-finite
    /// target leaves the center unchanged.
    pub fn recenter(&mut self, pixel: Point) {
        let center = self.pixel_to_plane(pixel);

        if center.is_finite() {
            self.center = center;
        }
    }

    // far zoom-out overflows the scale, so the extent saturates at f64::MAX
    fn update_extent(&mut self) {
        let scale = self.base_zoom.powi(self.zoom_level);

        self.extent = PlaneExtent {
            width: (self.base_width * scale).min(f64::MAX),
            height: (self.base_height * self.aspect_ratio() * scale).min(f64::MAX),
        };
    }
}
