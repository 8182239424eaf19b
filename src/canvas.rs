//! The RGBA pixel buffer plots are rasterized into.

use bytemuck::{Pod, Zeroable};
use glam::IVec2;

use crate::{Color, PlotError};

/// One 8-bit RGBA pixel.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Pod, Zeroable)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

impl From<Color> for Rgba {
    fn from(color: Color) -> Self {
        color.to_rgba8()
    }
}

/// A row-major RGBA image with its origin at the top-left corner.
///
/// Drawing code works in pixel space (origin bottom-left); [`Canvas::put`]
/// flips the row on write. [`Canvas::pixel`] reads in image coordinates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<Rgba>,
}

impl Canvas {
    /// Allocate a canvas filled with `background`.
    pub fn new(width: u32, height: u32, background: impl Into<Rgba>) -> Self {
        let len = width as usize * height as usize;
        Self {
            width,
            height,
            pixels: vec![background.into(); len],
        }
    }

    /// Wrap raw RGBA8 bytes, as produced by a decoder.
    pub fn from_rgba8(width: u32, height: u32, bytes: &[u8]) -> Result<Self, PlotError> {
        let pixels: &[Rgba] = bytemuck::try_cast_slice(bytes).map_err(|_| PlotError::BufferSize)?;
        if pixels.len() != width as usize * height as usize {
            return Err(PlotError::BufferSize);
        }
        Ok(Self {
            width,
            height,
            pixels: pixels.to_vec(),
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Overwrite every pixel with `color`.
    pub fn fill(&mut self, color: impl Into<Rgba>) {
        self.pixels.fill(color.into());
    }

    /// Read the pixel at column `x`, row `y` (row 0 is the top of the image).
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels.get(self.index(x, y)).copied()
    }

    /// Write one pixel given in pixel space (y up). Out of range writes are ignored.
    ///
    /// Translucent colors are composited over what is already there.
    pub fn put(&mut self, p: IVec2, color: Rgba) {
        let y = self.height as i64 - 1 - p.y as i64;
        self.put_image(p.x as i64, y, color);
    }

    /// Write one pixel given in image coordinates (row 0 at the top).
    pub fn put_image(&mut self, x: i64, y: i64, color: Rgba) {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return;
        }
        let idx = self.index(x as u32, y as u32);
        let dst = &mut self.pixels[idx];
        *dst = over(color, *dst);
    }

    /// Read one pixel given in pixel space (y up).
    pub fn get(&self, p: IVec2) -> Option<Rgba> {
        if p.x < 0 || p.y < 0 || p.y as u32 >= self.height {
            return None;
        }
        self.pixel(p.x as u32, self.height - 1 - p.y as u32)
    }

    pub fn pixels(&self) -> &[Rgba] {
        &self.pixels
    }

    /// The whole buffer as tightly packed RGBA8 bytes, top row first.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Number of pixels exactly equal to `color`.
    pub fn count_color(&self, color: impl Into<Rgba>) -> usize {
        let color = color.into();
        self.pixels.iter().filter(|&&p| p == color).count()
    }

    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }
}

/// Source-over compositing in 8-bit integer math.
fn over(src: Rgba, dst: Rgba) -> Rgba {
    match src.a {
        255 => src,
        0 => dst,
        a => {
            let (sa, da) = (a as u32, 255 - a as u32);
            let mix = |s: u8, d: u8| ((s as u32 * sa + d as u32 * da + 127) / 255) as u8;
            Rgba {
                r: mix(src.r, dst.r),
                g: mix(src.g, dst.g),
                b: mix(src.b, dst.b),
                a: (sa + (dst.a as u32 * da + 127) / 255) as u8,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn put_flips_rows() {
        let mut c = Canvas::new(4, 3, Color::WHITE);
        let red = Color::RED.to_rgba8();
        c.put(IVec2::new(1, 0), red);
        assert_eq!(c.pixel(1, 2), Some(red));
        assert_eq!(c.get(IVec2::new(1, 0)), Some(red));
        assert_eq!(c.count_color(red), 1);
    }

    #[test]
    fn out_of_range_writes_are_ignored() {
        let mut c = Canvas::new(2, 2, Color::WHITE);
        let before = c.clone();
        for p in [IVec2::new(-1, 0), IVec2::new(0, -1), IVec2::new(2, 0), IVec2::new(0, 2)] {
            c.put(p, Rgba::new(0, 0, 0, 255));
        }
        assert_eq!(c, before);
    }

    #[test]
    fn bytes_roundtrip() {
        let mut c = Canvas::new(3, 2, Color::BLUE);
        c.put(IVec2::new(2, 1), Rgba::new(1, 2, 3, 255));
        assert_eq!(c.as_bytes().len(), 3 * 2 * 4);
        assert_eq!(&c.as_bytes()[8..12], &[1, 2, 3, 255]);
        let back = Canvas::from_rgba8(3, 2, c.as_bytes()).unwrap();
        assert_eq!(back, c);
    }

    #[test]
    fn wrong_buffer_size_is_rejected() {
        assert!(matches!(
            Canvas::from_rgba8(2, 2, &[0; 15]),
            Err(PlotError::BufferSize)
        ));
        assert!(matches!(
            Canvas::from_rgba8(2, 2, &[0; 12]),
            Err(PlotError::BufferSize)
        ));
    }

    #[test]
    fn translucent_writes_blend_over_background() {
        let mut c = Canvas::new(2, 1, Color::WHITE);
        c.put(IVec2::new(0, 0), Color::from_rgba(1.0, 0.0, 0.0, 0.5).to_rgba8());
        c.put(IVec2::new(1, 0), Rgba::new(0, 0, 0, 0));
        assert_eq!(c.pixel(0, 0), Some(Rgba::new(255, 127, 127, 255)));
        assert_eq!(c.pixel(1, 0), Some(Rgba::new(255, 255, 255, 255)));
    }

    #[test]
    fn translucent_writes_accumulate_coverage() {
        let mut c = Canvas::new(1, 1, Rgba::new(0, 0, 0, 0));
        let half = Rgba::new(0, 0, 255, 128);
        c.put(IVec2::ZERO, half);
        assert_eq!(c.pixel(0, 0), Some(Rgba::new(0, 0, 128, 128)));
        c.put(IVec2::ZERO, half);
        assert_eq!(c.pixel(0, 0).map(|p| p.a), Some(192));
    }
}
