//! Mapping between data, normalized, pixel and display space.
//!
//! Pixel space here has its origin at the lower-left corner of the image; the
//! row flip to the top-left origin of the [`Canvas`](crate::Canvas) happens
//! exactly once, when a pixel is written. Device coordinates (origin top-left,
//! as reported by windowing systems) go through [`Camera::device_to_data`].

use glam::{DVec2, IVec2};

use crate::bounds::ClipRect;

/// Data space to normalized plot space: `(p - min) / (max - min)`.
///
/// Callers must pass a non-degenerate range.
pub fn to_normalized(p: DVec2, min: DVec2, max: DVec2) -> DVec2 {
    (p - min) / (max - min)
}

/// Normalized plot space to pixel space: `n * (viewport - 2 * padding) + padding`.
pub fn normalized_to_pixel(n: DVec2, viewport: DVec2, padding: DVec2) -> DVec2 {
    n * (viewport - 2.0 * padding) + padding
}

/// Pixel space back to data space; the algebraic inverse of
/// [`normalized_to_pixel`] composed with [`to_normalized`].
pub fn pixel_to_data(pix: DVec2, min: DVec2, max: DVec2, viewport: DVec2, padding: DVec2) -> DVec2 {
    min + (pix - padding) / (viewport - 2.0 * padding) * (max - min)
}

/// Pixel space to display space (normalized device coordinates, `[-1, 1]`, y up).
pub fn pixel_to_display(pix: DVec2, viewport: DVec2) -> DVec2 {
    pix / viewport * 2.0 - 1.0
}

/// Display space back to pixel space.
pub fn display_to_pixel(ndc: DVec2, viewport: DVec2) -> DVec2 {
    (ndc + 1.0) * 0.5 * viewport
}

#[derive(Debug, Clone, Copy, PartialEq)]
/// Camera for one render pass.
///
/// Binds the displayed data rectangle to the output image size and padding so
/// every stage of the pipeline uses the same mapping.
pub struct Camera {
    /// Displayed data rectangle.
    pub rect: ClipRect,
    /// Output image size in pixels.
    pub viewport: DVec2,
    /// Horizontal and vertical padding in pixels.
    pub padding: DVec2,
}

impl Camera {
    pub fn new(rect: ClipRect, width: u32, height: u32, padding_x: u32, padding_y: u32) -> Self {
        Self {
            rect,
            viewport: DVec2::new(width as f64, height as f64),
            padding: DVec2::new(padding_x as f64, padding_y as f64),
        }
    }

    /// Size of the padded plot area in pixels.
    pub fn plot_area(&self) -> DVec2 {
        self.viewport - 2.0 * self.padding
    }

    pub fn data_to_normalized(&self, p: DVec2) -> DVec2 {
        to_normalized(p, self.rect.min(), self.rect.max())
    }

    pub fn normalized_to_pixel(&self, n: DVec2) -> DVec2 {
        normalized_to_pixel(n, self.viewport, self.padding)
    }

    /// Data space to continuous pixel space.
    pub fn data_to_pixel(&self, p: DVec2) -> DVec2 {
        self.normalized_to_pixel(self.data_to_normalized(p))
    }

    /// Data space to the integer pixel that contains it (floored).
    pub fn data_to_pixel_floor(&self, p: DVec2) -> IVec2 {
        self.data_to_pixel(p).floor().as_ivec2()
    }

    pub fn pixel_to_data(&self, pix: DVec2) -> DVec2 {
        pixel_to_data(
            pix,
            self.rect.min(),
            self.rect.max(),
            self.viewport,
            self.padding,
        )
    }

    pub fn pixel_to_display(&self, pix: DVec2) -> DVec2 {
        pixel_to_display(pix, self.viewport)
    }

    pub fn display_to_pixel(&self, ndc: DVec2) -> DVec2 {
        display_to_pixel(ndc, self.viewport)
    }

    /// Data space straight to display space.
    pub fn data_to_display(&self, p: DVec2) -> DVec2 {
        self.pixel_to_display(self.data_to_pixel(p))
    }

    /// Convert a device position (origin top-left, y down) into pixel space.
    ///
    /// Inverse of the row flip applied by the canvas: `row = height - 1 - y`.
    pub fn device_to_pixel(&self, device: DVec2) -> DVec2 {
        DVec2::new(device.x, self.viewport.y - 1.0 - device.y)
    }

    /// Convert a device position (origin top-left) into data space.
    pub fn device_to_data(&self, device: DVec2) -> DVec2 {
        self.pixel_to_data(self.device_to_pixel(device))
    }
}
